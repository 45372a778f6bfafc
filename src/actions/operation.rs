//! Low-level file operations produced by actions.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::{replace_literals::replace_on_lines, write_catalog::merge_catalog};
use crate::core::Occurrence;

/// One `<string>` element to append to a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub text: String,
}

impl CatalogEntry {
    pub fn to_xml(&self) -> String {
        format!("\t<string name=\"{}\">{}</string>\n", self.name, self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Append unique entries, then common entries, to a catalog file.
    AppendCatalogEntries {
        catalog_path: PathBuf,
        unique: Vec<CatalogEntry>,
        common: Vec<CatalogEntry>,
    },
    /// Replace one literal on its recorded line.
    ReplaceLiteral {
        occurrence: Occurrence,
        reference: String,
    },
}

/// Outcome of applying replacements to one file.
#[derive(Debug, Default)]
pub struct ReplaceOutcome {
    pub applied: usize,
    /// Occurrences whose literal was not found on the recorded line.
    pub unmatched: Vec<Occurrence>,
}

impl Operation {
    pub fn file_path(&self) -> &Path {
        match self {
            Operation::AppendCatalogEntries { catalog_path, .. } => catalog_path,
            Operation::ReplaceLiteral { occurrence, .. } => occurrence.file_path(),
        }
    }

    /// Write catalog entries, creating the catalog when missing.
    ///
    /// Returns the number of entries written. Replacements are applied in
    /// per-file batches by [`Operation::apply_replace_ops`] instead.
    pub fn execute_append(&self) -> Result<usize> {
        let Operation::AppendCatalogEntries {
            catalog_path,
            unique,
            common,
        } = self
        else {
            return Ok(0);
        };

        let existing = if catalog_path.exists() {
            fs::read_to_string(catalog_path).with_context(|| {
                format!("Failed to read catalog: {}", catalog_path.display())
            })?
        } else {
            if let Some(parent) = catalog_path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
            String::new()
        };

        let content = merge_catalog(&existing, unique, common);
        fs::write(catalog_path, content)
            .with_context(|| format!("Failed to write catalog: {}", catalog_path.display()))?;

        Ok(unique.len() + common.len())
    }

    /// Apply every replacement for a single file: read it once, edit the
    /// recorded lines, write it once.
    ///
    /// All ops must target the same file; other operation kinds are ignored.
    pub fn apply_replace_ops(file_path: &Path, ops: &[Operation]) -> Result<ReplaceOutcome> {
        let edits: Vec<(&Occurrence, &str)> = ops
            .iter()
            .filter_map(|op| match op {
                Operation::ReplaceLiteral {
                    occurrence,
                    reference,
                } => Some((occurrence, reference.as_str())),
                Operation::AppendCatalogEntries { .. } => None,
            })
            .collect();
        if edits.is_empty() {
            return Ok(ReplaceOutcome::default());
        }

        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        let (updated, unmatched) = replace_on_lines(&content, &edits);
        let applied = edits.len() - unmatched.len();

        if applied > 0 {
            fs::write(file_path, updated)
                .with_context(|| format!("Failed to write file: {}", file_path.display()))?;
        }

        Ok(ReplaceOutcome {
            applied,
            unmatched: unmatched.into_iter().map(|i| edits[i].0.clone()).collect(),
        })
    }

    /// Print what this operation would change.
    pub fn preview(&self) {
        self.preview_to(&mut std::io::stdout().lock());
    }

    pub fn preview_to<W: Write>(&self, writer: &mut W) {
        match self {
            Operation::AppendCatalogEntries {
                catalog_path,
                unique,
                common,
            } => {
                let _ = writeln!(
                    writer,
                    "{} {}",
                    "catalog:".bold().green(),
                    catalog_path.display()
                );
                for entry in unique.iter().chain(common) {
                    let _ = write!(writer, "  {} {}", "+".green(), entry.to_xml().trim_start());
                }
                let _ = writeln!(writer);
            }
            Operation::ReplaceLiteral {
                occurrence,
                reference,
            } => {
                let line = occurrence.line();
                let col = occurrence.col();
                let width = line.to_string().len();
                let source_line = &occurrence.source_line;

                let _ = writeln!(
                    writer,
                    "  {} {}:{}:{}",
                    "-->".blue(),
                    occurrence.file_path().display(),
                    line,
                    col
                );
                let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = width);
                let _ = writeln!(
                    writer,
                    "{} {} {}",
                    line.to_string().blue(),
                    "|".blue(),
                    source_line
                );

                let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
                let padding = UnicodeWidthStr::width(prefix.as_str());
                let carets = "^".repeat(UnicodeWidthStr::width(occurrence.value.as_str()).max(1));
                let _ = writeln!(
                    writer,
                    "{:>width$} {} {:>padding$}{}",
                    "",
                    "|".blue(),
                    "",
                    carets.green(),
                    width = width,
                    padding = padding
                );
                let _ = writeln!(
                    writer,
                    "{:>width$} {} {} {}",
                    "",
                    "=".blue(),
                    "replace:".bold().cyan(),
                    reference,
                    width = width
                );
                let _ = writeln!(writer);
            }
        }
    }
}
