//! ReplaceLiterals action.
//!
//! Rewrites every extracted literal to a reference to its catalog entry:
//! `getString(R.string.<id>)` in Java, `"@string/<id>"` in XML.

use super::operation::Operation;
use super::traits::Action;
use crate::core::{Occurrence, ReplacementTask};

pub struct ReplaceLiterals;

impl Action<ReplacementTask> for ReplaceLiterals {
    fn to_operations(tasks: &[ReplacementTask]) -> Vec<Operation> {
        tasks
            .iter()
            .flat_map(|task| &task.source_entries)
            .filter_map(|occurrence| {
                let id = occurrence.resource_id.as_deref()?;
                Some(Operation::ReplaceLiteral {
                    occurrence: occurrence.clone(),
                    reference: occurrence.syntax().reference(id),
                })
            })
            .collect()
    }
}

/// Replace the first occurrence of each literal on its recorded line.
///
/// `edits` are applied in order; line numbers are 1-based. Lines keep their
/// terminators and lines without edits are untouched. Returns the updated
/// content and the indices of edits whose literal was not found.
pub fn replace_on_lines(content: &str, edits: &[(&Occurrence, &str)]) -> (String, Vec<usize>) {
    let mut lines: Vec<String> = content.split_inclusive('\n').map(String::from).collect();
    let mut unmatched = Vec::new();

    for (i, (occurrence, reference)) in edits.iter().enumerate() {
        let value = occurrence.value.as_str();
        match occurrence
            .line()
            .checked_sub(1)
            .and_then(|idx| lines.get_mut(idx))
        {
            Some(line) if line.contains(value) => {
                *line = line.replacen(value, reference, 1);
            }
            _ => unmatched.push(i),
        }
    }

    (lines.concat(), unmatched)
}
