use std::path::{Path, PathBuf};

use crate::core::data::syntax::SourceSyntax;

/// Pure position information in a scanned file (Java/XML).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
    pub file_path: PathBuf,
    /// 1-based line number at scan time.
    pub line: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }
}

/// One detected literal site.
///
/// `value` keeps the enclosing quote characters exactly as they appeared, so
/// `"提交"` and `'提交'` are distinct values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub location: SourceLocation,
    /// The literal text including its quotes.
    pub value: String,
    /// The scanned line content (trimmed) for display.
    pub source_line: String,
    /// Assigned by the identifier generator; `None` until then.
    pub resource_id: Option<String>,
}

impl Occurrence {
    pub fn new(
        location: SourceLocation,
        value: impl Into<String>,
        source_line: impl Into<String>,
    ) -> Self {
        Self {
            location,
            value: value.into(),
            source_line: source_line.into(),
            resource_id: None,
        }
    }

    // Convenience accessors
    pub fn file_path(&self) -> &Path {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    /// 1-based column of the literal on the displayed line, counted in chars.
    pub fn col(&self) -> usize {
        self.source_line
            .find(&self.value)
            .map(|byte_idx| self.source_line[..byte_idx].chars().count() + 1)
            .unwrap_or(1)
    }

    pub fn syntax(&self) -> SourceSyntax {
        SourceSyntax::from_path(self.file_path())
    }
}
