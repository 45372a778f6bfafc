//! WriteCatalog action.
//!
//! Appends each task's entries to its `strings.xml`. The existing file is
//! spliced as text, never parsed and re-serialized, so entries, comments and
//! formatting already present stay byte-for-byte.

use std::sync::LazyLock;

use regex::Regex;

use super::operation::{CatalogEntry, Operation};
use super::traits::Action;
use crate::core::ReplacementTask;
use crate::utils::strip_outer_quotes;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";
const RESOURCES_OPEN: &str = "<resources>";
const RESOURCES_CLOSE: &str = "</resources>";

static RESOURCES_OPEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<resources(\s[^>]*)?>").unwrap());

pub struct WriteCatalog;

impl Action<ReplacementTask> for WriteCatalog {
    fn to_operations(tasks: &[ReplacementTask]) -> Vec<Operation> {
        tasks
            .iter()
            .map(|task| Operation::AppendCatalogEntries {
                catalog_path: task.catalog_path.clone(),
                unique: task
                    .unique()
                    .filter_map(|o| entry(o.resource_id.as_deref(), &o.value))
                    .collect(),
                common: task
                    .common_entries
                    .iter()
                    .filter_map(|e| entry(e.resource_id.as_deref(), &e.value))
                    .collect(),
            })
            .collect()
    }
}

fn entry(resource_id: Option<&str>, value: &str) -> Option<CatalogEntry> {
    Some(CatalogEntry {
        name: resource_id?.to_string(),
        text: strip_outer_quotes(value).to_string(),
    })
}

/// Splice new entries into catalog text.
///
/// Every closing `</resources>` is removed, an opening tag is added if none is
/// present, unique then common entries are appended as separate blocks and a
/// single closing tag ends the file. Empty input gets an XML declaration.
pub fn merge_catalog(existing: &str, unique: &[CatalogEntry], common: &[CatalogEntry]) -> String {
    let mut content = if existing.trim().is_empty() {
        XML_DECLARATION.to_string()
    } else {
        existing.replace(RESOURCES_CLOSE, "")
    };

    if !RESOURCES_OPEN_REGEX.is_match(&content) {
        content.push_str(RESOURCES_OPEN);
        content.push('\n');
    }

    for block in [unique, common] {
        if block.is_empty() {
            continue;
        }
        content.push('\n');
        for entry in block {
            content.push_str(&entry.to_xml());
        }
    }

    content.push_str(RESOURCES_CLOSE);
    content.push('\n');
    content
}
