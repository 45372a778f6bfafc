//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format, followed by a run summary.
//! Kept out of the core so the pipeline can be used as a library.

use std::{
    env,
    io::{self, Write},
    path::Path,
    time::Duration,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, ExtractSummary};
use crate::actions::{Action, ReplaceLiterals, WriteCatalog};
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Set to any value to suppress the elapsed-time line.
pub const DISABLE_TIMING_ENV: &str = "EXTRES_DISABLE_TIMING";

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted: Vec<&Issue> = issues.iter().collect();
    sorted.sort_by(|a, b| compare_issues(a, b));

    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_problem_count(&sorted, writer);
}

/// Print the run summary.
pub fn print_summary_to<W: Write>(summary: &ExtractSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Scanned {} file(s), found {} literal(s) in {} file(s)",
        summary.files_scanned, summary.occurrence_count, summary.files_with_literals
    );

    if summary.tasks.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No literals to extract".green()
        );
        return;
    }

    if summary.dry_run {
        let _ = writeln!(
            writer,
            "{} {} entr(ies) to {} catalog(s) ({} unique, {} common)",
            "Would write".yellow().bold(),
            summary.unique_count + summary.common_count,
            summary.task_count(),
            summary.unique_count,
            summary.common_count
        );
        let _ = writeln!(
            writer,
            "{} {} literal(s) in {} file(s)",
            "Would replace".yellow().bold(),
            summary.occurrence_count,
            summary.source_file_count()
        );
        let _ = writeln!(
            writer,
            "Run without {} to apply these changes.",
            "--dry-run".cyan()
        );
        return;
    }

    for task in &summary.tasks {
        let _ = writeln!(
            writer,
            "  {} {} (+{} unique, +{} common)",
            "catalog:".bold(),
            task.catalog_path.display(),
            task.unique_entries.len(),
            task.common_entries.len()
        );
    }
    let _ = writeln!(
        writer,
        "{} {} entr(ies) to {} catalog(s) ({} unique, {} common)",
        "Wrote".green().bold(),
        summary.catalogs.changes_applied,
        summary.catalogs.files_modified,
        summary.unique_count,
        summary.common_count
    );
    let _ = writeln!(
        writer,
        "{} {} literal(s) in {} file(s)",
        "Replaced".green().bold(),
        summary.replacements.changes_applied,
        summary.replacements.files_modified
    );
    if summary.replacements.skipped > 0 {
        let _ = writeln!(
            writer,
            "  - skipped: {} literal(s) not found on their line",
            summary.replacements.skipped
        );
    }
}

/// Print a warning about paths the walker could not access.
pub fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

/// Print the elapsed time unless disabled through the environment.
pub fn print_elapsed(elapsed: Duration) {
    if env::var_os(DISABLE_TIMING_ENV).is_some() {
        return;
    }
    println!("Costs: {:.3}s", elapsed.as_secs_f64());
}

pub fn print(result: &CommandResult, verbose: bool) {
    let summary = &result.summary;

    if summary.dry_run && !summary.tasks.is_empty() {
        WriteCatalog::preview(&summary.tasks);
        ReplaceLiterals::preview(&summary.tasks);
    }

    report(&result.issues);
    print_summary_to(summary, &mut io::stdout().lock());
    print_skipped_warning_to(result.skipped_paths, verbose, &mut io::stderr().lock());
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line, col, source_line) = extract_location_info(&loc);

    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    if line > 0 {
        let _ = writeln!(
            writer,
            "  {} {}:{}:{}",
            "-->".blue(),
            file_path.display(),
            line,
            col
        );
    } else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path.display());
    }

    if let Some(source_line) = source_line {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // col is 1-based
        let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_problem_count<W: Write>(issues: &[&Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} problem(s) ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn extract_location_info<'a>(
    loc: &'a ReportLocation<'a>,
) -> (&'a Path, usize, usize, Option<&'a str>) {
    match loc {
        ReportLocation::Source(occ) => (
            occ.file_path(),
            occ.line(),
            occ.col(),
            Some(occ.source_line.as_str()),
        ),
        ReportLocation::File { path } => (*path, 0, 0, None),
    }
}

fn calculate_max_line_width(issues: &[&Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source(occ) => Some(occ.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    let a_loc = a.location();
    let b_loc = b.location();
    let (a_path, a_line, a_col, _) = extract_location_info(&a_loc);
    let (b_path, b_line, b_col, _) = extract_location_info(&b_loc);

    a_path
        .cmp(b_path)
        .then_with(|| a_line.cmp(&b_line))
        .then_with(|| a_col.cmp(&b_col))
}
