//! Character-level classification for typed-text gating.

/// Check whether a typed-text string consists entirely of whitespace
/// (space, tab, newline, and Unicode equivalents).
///
/// The empty string is not whitespace: while the input mode is active an
/// empty type event is dropped, never forwarded.
pub fn is_whitespace_only(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_whitespace)
}
