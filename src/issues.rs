//! Issue types for extraction findings.
//!
//! None of these stop a run. Each issue carries everything the reporter needs
//! to print it in cargo style.

use std::path::{Path, PathBuf};

use enum_dispatch::enum_dispatch;

use crate::core::Occurrence;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UnscopedLiteral,
    UnescapedMarkup,
    UnmatchedLiteral,
    UnreadableFile,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UnscopedLiteral => write!(f, "unscoped-literal"),
            Rule::UnescapedMarkup => write!(f, "unescaped-markup"),
            Rule::UnmatchedLiteral => write!(f, "unmatched-literal"),
            Rule::UnreadableFile => write!(f, "unreadable-file"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Literal in a file that has no enclosing `src/main` module root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnscopedLiteralIssue {
    pub occurrence: Occurrence,
}

impl UnscopedLiteralIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnscopedLiteral
    }
}

/// Catalog text containing `<` or `&`, written without escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnescapedMarkupIssue {
    /// First occurrence of the value.
    pub occurrence: Occurrence,
    pub resource_id: String,
    pub catalog_path: PathBuf,
}

impl UnescapedMarkupIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnescapedMarkup
    }
}

/// Literal no longer present on its recorded line at rewrite time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedLiteralIssue {
    pub occurrence: Occurrence,
}

impl UnmatchedLiteralIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnmatchedLiteral
    }
}

/// Candidate file that is not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableFileIssue {
    pub file_path: PathBuf,
    pub error: String,
}

impl UnreadableFileIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnreadableFile
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A finding reported at the end of a run.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UnscopedLiteral(UnscopedLiteralIssue),
    UnescapedMarkup(UnescapedMarkupIssue),
    UnmatchedLiteral(UnmatchedLiteralIssue),
    UnreadableFile(UnreadableFileIssue),
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Literal site (has source_line for context display).
    Source(&'a Occurrence),
    /// File-level only.
    File { path: &'a Path },
}

/// Trait for types that can be reported to CLI.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for UnscopedLiteralIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.occurrence)
    }

    fn message(&self) -> String {
        self.occurrence.value.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("no enclosing src/main directory, literal left unchanged".to_string())
    }
}

impl Report for UnescapedMarkupIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.occurrence)
    }

    fn message(&self) -> String {
        self.occurrence.value.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("escape `<` as `&lt;` and `&` as `&amp;` in the catalog entry")
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "written as-is to {} ({})",
            self.catalog_path.display(),
            self.resource_id
        ))
    }
}

impl Report for UnmatchedLiteralIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.occurrence)
    }

    fn message(&self) -> String {
        self.occurrence.value.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        self.occurrence
            .resource_id
            .as_ref()
            .map(|id| format!("not found on its line, {} left unreferenced here", id))
    }
}

impl Report for UnreadableFileIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
