use crate::actions::ActionStats;
use crate::core::ReplacementTask;
use crate::issues::{Issue, Report, Severity};

/// Counts and outcomes of one extraction run.
#[derive(Debug)]
pub struct ExtractSummary {
    pub dry_run: bool,
    /// Candidate files read.
    pub files_scanned: usize,
    /// Files containing at least one literal.
    pub files_with_literals: usize,
    /// Scoped occurrences queued for rewriting.
    pub occurrence_count: usize,
    pub unique_count: usize,
    pub common_count: usize,
    /// Catalog writes (empty in dry-run mode).
    pub catalogs: ActionStats,
    /// Source rewrites (empty in dry-run mode).
    pub replacements: ActionStats,
    /// Tasks with ids assigned, in scope order.
    pub tasks: Vec<ReplacementTask>,
}

impl ExtractSummary {
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Distinct source files that have at least one scoped occurrence.
    pub fn source_file_count(&self) -> usize {
        let mut files: Vec<_> = self
            .tasks
            .iter()
            .flat_map(|t| t.source_entries.iter().map(|o| o.file_path()))
            .collect();
        files.sort();
        files.dedup();
        files.len()
    }
}

/// Result of running the extract command.
pub struct CommandResult {
    pub summary: ExtractSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// All findings, in the order they were made.
    pub issues: Vec<Issue>,
    /// Paths the walker could not access.
    pub skipped_paths: usize,
}

pub fn finish(summary: ExtractSummary, issues: Vec<Issue>, skipped_paths: usize) -> CommandResult {
    let error_count = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    CommandResult {
        summary,
        error_count,
        warning_count,
        issues,
        skipped_paths,
    }
}
