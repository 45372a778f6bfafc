//! Per-line literal scanning.

use std::path::Path;

use super::literal_matcher::LiteralMatcher;
use crate::core::data::{Occurrence, SourceLocation};
use crate::utils::contains_han;

/// Marker starting a trailing line comment.
const LINE_COMMENT: &str = "//";

/// Reduce a raw line to the text that may hold literals.
///
/// Returns `None` for lines that are skipped entirely: empty after comment
/// stripping, comment lines, lines touching a block comment (`*`), and markup
/// comment or declaration openers (`<!`).
pub fn candidate_text(raw: &str) -> Option<&str> {
    let mut line = raw.trim();
    if let Some(idx) = line.find(LINE_COMMENT) {
        line = line[..idx].trim();
    }

    if line.is_empty()
        || line.starts_with(LINE_COMMENT)
        || line.contains('*')
        || line.starts_with("<!")
    {
        return None;
    }

    Some(line)
}

/// Literal spans on a single raw line, in order of appearance.
pub fn scan_line<'t>(raw: &'t str, matcher: &LiteralMatcher) -> Vec<&'t str> {
    match candidate_text(raw) {
        Some(text) if contains_han(text) => matcher.find_all(text),
        _ => Vec::new(),
    }
}

/// Lazily scan file content, yielding one `Occurrence` per detected span.
///
/// Line numbers are 1-based. The iterator borrows the content and is consumed
/// once.
pub fn scan_source<'a>(
    file_path: &'a Path,
    content: &'a str,
) -> impl Iterator<Item = Occurrence> + 'a {
    let matcher = LiteralMatcher::han_literals();
    content.lines().enumerate().flat_map(move |(idx, raw)| {
        scan_line(raw, matcher).into_iter().map(move |value| {
            Occurrence::new(
                SourceLocation::new(file_path, idx + 1),
                value,
                raw.trim(),
            )
        })
    })
}
