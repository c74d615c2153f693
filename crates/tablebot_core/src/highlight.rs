//! Syntax-error position highlighting.
//!
//! The statement validator reports failures as free-form text that may embed
//! a 1-based character offset, e.g. `syntax error at position 5 near "*"`.
//! This module extracts that offset and produces a copy of the offending
//! statement with the character at the offset visually marked, so the user
//! can see where the parser gave up.

use regex::Regex;
use std::sync::OnceLock;

/// Marker glyph appended directly after the offending character.
pub const ERROR_MARKER: &str = "⚠️";

/// Pattern the validator uses to report an error offset. Case-sensitive,
/// digits must immediately follow the phrase.
fn position_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"syntax error at position ([0-9]+)").expect("valid regex"))
}

/// Extract the 1-based error offset from a diagnostic message.
///
/// Returns `None` when the message carries no offset, or when the digit run
/// does not fit in a `usize`. Only the contiguous digit run immediately
/// following the phrase is captured; trailing noise is ignored.
///
/// # Examples
///
/// ```
/// use tablebot_core::error_position;
///
/// assert_eq!(error_position("syntax error at position 5 near token"), Some(5));
/// assert_eq!(error_position("table not found"), None);
/// ```
pub fn error_position(message: &str) -> Option<usize> {
    position_pattern()
        .captures(message)?
        .get(1)
        .and_then(|digits| digits.as_str().parse().ok())
}

/// Mark the reported error offset inside `statement`.
///
/// If `message` contains `syntax error at position N` with `N` inside
/// `1..=statement.chars().count()`, returns `statement` with [`ERROR_MARKER`]
/// inserted immediately after the character at offset `N` (1-based, counted
/// in characters). Otherwise returns `statement` unchanged. Never panics.
///
/// # Examples
///
/// ```
/// use tablebot_core::highlight_error_position;
///
/// let marked = highlight_error_position(
///     "syntax error at position 5 near \"*\"",
///     "SELE* FROM t",
/// );
/// assert_eq!(marked, "SELE*⚠️ FROM t");
/// ```
pub fn highlight_error_position(message: &str, statement: &str) -> String {
    let position = match error_position(message) {
        Some(position) if position >= 1 && position <= statement.chars().count() => position,
        _ => return statement.to_owned(),
    };

    let mut marked = String::with_capacity(statement.len() + ERROR_MARKER.len());
    for (index, character) in statement.chars().enumerate() {
        marked.push(character);
        if index + 1 == position {
            marked.push_str(ERROR_MARKER);
        }
    }
    marked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_contiguous_digit_run() {
        assert_eq!(error_position("syntax error at position 12 near x"), Some(12));
        assert_eq!(error_position("syntax error at position 3"), Some(3));
    }

    #[test]
    fn phrase_is_case_sensitive() {
        assert_eq!(error_position("Syntax Error At Position 3"), None);
    }

    #[test]
    fn digits_must_follow_immediately() {
        assert_eq!(error_position("syntax error at position  3"), None);
        assert_eq!(error_position("syntax error at position x3"), None);
    }

    #[test]
    fn overflowing_offset_is_no_match() {
        let message = "syntax error at position 99999999999999999999999999";
        assert_eq!(error_position(message), None);
        assert_eq!(highlight_error_position(message, "SELECT 1"), "SELECT 1");
    }

    #[test]
    fn marks_first_character() {
        let marked = highlight_error_position("syntax error at position 1", "xELECT");
        assert_eq!(marked, format!("x{}ELECT", ERROR_MARKER));
    }

    #[test]
    fn marks_last_character() {
        let marked = highlight_error_position("syntax error at position 6", "SELECT");
        assert_eq!(marked, format!("SELECT{}", ERROR_MARKER));
    }

    #[test]
    fn offset_counts_characters_not_bytes() {
        // Two-byte "é" precedes the offending char; char offset 3 is "x".
        let marked = highlight_error_position("syntax error at position 3", "séx rest");
        assert_eq!(marked, format!("séx{} rest", ERROR_MARKER));
    }

    #[test]
    fn out_of_range_offset_is_identity() {
        assert_eq!(highlight_error_position("syntax error at position 0", "ab"), "ab");
        assert_eq!(highlight_error_position("syntax error at position 3", "ab"), "ab");
    }

    #[test]
    fn empty_statement_is_identity() {
        assert_eq!(highlight_error_position("syntax error at position 1", ""), "");
    }

    #[test]
    fn message_without_offset_is_identity() {
        assert_eq!(
            highlight_error_position("statement provided is not a read query", "SELECT 1"),
            "SELECT 1"
        );
    }
}
