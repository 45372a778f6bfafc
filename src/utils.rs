//! Common utility functions shared across the codebase.

/// First code point of the CJK Unified Ideographs block.
pub const HAN_START: char = '\u{4e00}';

/// Last code point of the CJK Unified Ideographs block.
pub const HAN_END: char = '\u{9fff}';

/// Checks if a character lies in the CJK Unified Ideographs block.
pub fn is_han(c: char) -> bool {
    (HAN_START..=HAN_END).contains(&c)
}

/// Checks if the text contains at least one CJK Unified Ideograph.
///
/// Returns false for empty strings, Latin text, digits, symbols, and CJK
/// punctuation outside the ideograph block.
///
/// # Examples
///
/// ```
/// use extres::utils::contains_han;
///
/// assert!(contains_han("你好"));
/// assert!(contains_han("Hello 世界"));
/// assert!(!contains_han("Hello"));
/// assert!(!contains_han("，。"));
/// assert!(!contains_han(""));
/// ```
pub fn contains_han(text: &str) -> bool {
    text.chars().any(is_han)
}

/// Removes the first and last character of a quoted literal.
///
/// `"你好"` becomes `你好`. Inputs shorter than two characters yield an
/// empty string.
pub fn strip_outer_quotes(value: &str) -> &str {
    let mut chars = value.char_indices();
    let start = match chars.next() {
        Some((_, c)) => c.len_utf8(),
        None => return "",
    };
    match chars.next_back() {
        Some((end, _)) if end >= start => &value[start..end],
        _ => "",
    }
}
