//! Stage 2: Extraction - line-based literal detection.
//!
//! No parsing is involved: each line is reduced to candidate text by comment
//! heuristics and matched against a priority-ordered list of literal patterns.
//! The resulting `Occurrence`s are grouped per catalog in stage 3.

pub mod line_scanner;
pub mod literal_matcher;

pub use line_scanner::{candidate_text, scan_line, scan_source};
pub use literal_matcher::{LiteralMatcher, LiteralPattern};
