//! Action trait definition.
//!
//! Actions convert replacement tasks into Operations. Each Action decides which
//! part of a task it is responsible for.

use anyhow::Result;
use std::{
    collections::{BTreeMap, HashSet},
    path::PathBuf,
};

use super::operation::Operation;
use crate::issues::UnmatchedLiteralIssue;

/// Statistics from running an action.
#[derive(Debug, Clone, Default)]
pub struct ActionStats {
    /// Number of operations processed.
    pub processed: usize,
    /// Number of operations that could not be applied.
    pub skipped: usize,
    /// Number of changes actually applied to files (entries or replacements).
    pub changes_applied: usize,
    /// Number of files modified.
    pub files_modified: usize,
    /// Replacements whose literal was not found on the recorded line.
    pub unmatched: Vec<UnmatchedLiteralIssue>,
}

impl std::ops::AddAssign for ActionStats {
    fn add_assign(&mut self, other: Self) {
        self.processed += other.processed;
        self.skipped += other.skipped;
        self.changes_applied += other.changes_applied;
        self.files_modified += other.files_modified;
        self.unmatched.extend(other.unmatched);
    }
}

/// Action trait - converts inputs into Operations and executes them.
///
/// # Example
///
/// ```ignore
/// if dry_run {
///     WriteCatalog::preview(&tasks);
/// } else {
///     let stats = WriteCatalog::run(&tasks)?;
/// }
/// ```
pub trait Action<I> {
    /// Convert inputs to low-level operations.
    ///
    /// This is the only method that must be implemented.
    fn to_operations(items: &[I]) -> Vec<Operation>;

    /// Execute the action (modify files).
    fn run(items: &[I]) -> Result<ActionStats> {
        let ops = Self::to_operations(items);
        execute_operations(&ops)
    }

    /// Preview the action (dry-run mode).
    fn preview(items: &[I]) {
        let ops = Self::to_operations(items);
        for op in &ops {
            op.preview();
        }
    }
}

/// Execute operations: catalog appends first, in order, then replacements
/// grouped by file so each source file is read and written once.
pub(crate) fn execute_operations(ops: &[Operation]) -> Result<ActionStats> {
    let mut stats = ActionStats {
        processed: ops.len(),
        ..ActionStats::default()
    };
    let mut files_modified: HashSet<PathBuf> = HashSet::new();

    let mut replace_ops_by_file: BTreeMap<PathBuf, Vec<Operation>> = BTreeMap::new();

    for op in ops {
        match op {
            Operation::AppendCatalogEntries { catalog_path, .. } => {
                let written = op.execute_append()?;
                stats.changes_applied += written;
                files_modified.insert(catalog_path.clone());
            }
            Operation::ReplaceLiteral { .. } => {
                replace_ops_by_file
                    .entry(op.file_path().to_path_buf())
                    .or_default()
                    .push(op.clone());
            }
        }
    }

    for (file_path, file_ops) in replace_ops_by_file {
        let outcome = Operation::apply_replace_ops(&file_path, &file_ops)?;
        stats.changes_applied += outcome.applied;
        stats.skipped += outcome.unmatched.len();
        stats.unmatched.extend(
            outcome
                .unmatched
                .into_iter()
                .map(|occurrence| UnmatchedLiteralIssue { occurrence }),
        );
        if outcome.applied > 0 {
            files_modified.insert(file_path);
        }
    }

    stats.files_modified = files_modified.len();
    Ok(stats)
}
