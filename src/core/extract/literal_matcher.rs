//! Priority-ordered literal span detection.
//!
//! A line is tested against each pattern in order and only the first pattern
//! with at least one hit contributes spans. Patterns work on a single line, so
//! known limitations follow directly:
//!
//! - a literal spanning several lines is never detected;
//! - quotes of the same style are not paired, so text between two adjacent
//!   literals can be captured as one span (`"a">中文<b c="`).

use std::sync::LazyLock;

use regex::Regex;

/// A named literal pattern.
#[derive(Debug)]
pub struct LiteralPattern {
    pub name: &'static str,
    regex: Regex,
}

impl LiteralPattern {
    pub fn new(name: &'static str, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            regex: Regex::new(pattern)?,
        })
    }

    /// All non-overlapping spans in `line`, left to right.
    pub fn find_all<'t>(&self, line: &'t str) -> Vec<&'t str> {
        self.regex.find_iter(line).map(|m| m.as_str()).collect()
    }
}

/// Double-quoted span containing at least one CJK ideograph.
const DOUBLE_QUOTED: &str = r#""[^"']*?[\x{4e00}-\x{9fff}]+[^']*?""#;

/// Single-quoted span containing at least one CJK ideograph.
const SINGLE_QUOTED: &str = r#"'[^"']*?[\x{4e00}-\x{9fff}]+[^"]*?'"#;

static HAN_LITERALS: LazyLock<LiteralMatcher> = LazyLock::new(|| {
    LiteralMatcher::new(vec![
        LiteralPattern::new("double-quoted", DOUBLE_QUOTED).unwrap(),
        LiteralPattern::new("single-quoted", SINGLE_QUOTED).unwrap(),
    ])
});

/// Ordered list of literal patterns; the first one that matches wins.
#[derive(Debug)]
pub struct LiteralMatcher {
    patterns: Vec<LiteralPattern>,
}

impl LiteralMatcher {
    pub fn new(patterns: Vec<LiteralPattern>) -> Self {
        Self { patterns }
    }

    /// Matcher for quoted literals containing Chinese text, double quotes
    /// before single quotes.
    pub fn han_literals() -> &'static Self {
        &HAN_LITERALS
    }

    pub fn patterns(&self) -> &[LiteralPattern] {
        &self.patterns
    }

    /// Spans found by the highest-priority pattern that matches the line.
    pub fn find_all<'t>(&self, line: &'t str) -> Vec<&'t str> {
        self.patterns
            .iter()
            .map(|pattern| pattern.find_all(line))
            .find(|spans| !spans.is_empty())
            .unwrap_or_default()
    }
}
