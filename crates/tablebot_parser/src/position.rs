//! Mapping of parser line/column locations to character offsets.
//!
//! `sqlparser` reports failure locations as `Line: L, Column: C` text inside
//! its error messages. The highlighter wants a single 1-based character
//! offset into the original input, so this module recovers the location from
//! the message and flattens it against the input text.

use regex::Regex;
use std::sync::OnceLock;

fn location_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r" at Line: ([0-9]+), Column: ([0-9]+)").expect("valid regex")
    })
}

/// Extract the `(line, column)` pair embedded in a parser error message.
pub(crate) fn location_in(message: &str) -> Option<(u64, u64)> {
    let captures = location_pattern().captures(message)?;
    let line = captures.get(1)?.as_str().parse().ok()?;
    let column = captures.get(2)?.as_str().parse().ok()?;
    Some((line, column))
}

/// Drop the location clause from a parser error message.
pub(crate) fn strip_location(message: &str) -> String {
    location_pattern().replace(message, "").into_owned()
}

/// Flatten a 1-based line/column location into a 1-based character offset.
///
/// Columns count characters, not bytes. A column pointing past the end of
/// its line (the tokenizer does this at end of input) is clamped to the last
/// character of that line. Returns `None` for locations outside the input.
pub(crate) fn char_offset(input: &str, line: u64, column: u64) -> Option<usize> {
    if line == 0 || column == 0 {
        return None;
    }

    let mut offset = 0usize;
    for (index, text) in input.split('\n').enumerate() {
        let chars = text.chars().count() as u64;
        if index as u64 + 1 == line {
            if chars == 0 {
                return None;
            }
            return Some(offset + column.min(chars) as usize);
        }
        offset += chars as usize + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_location_pair() {
        let message = "Expected: an expression, found: EOF at Line: 2, Column: 7";
        assert_eq!(location_in(message), Some((2, 7)));
        assert_eq!(
            strip_location(message),
            "Expected: an expression, found: EOF"
        );
    }

    #[test]
    fn message_without_location() {
        assert_eq!(location_in("recursion limit exceeded"), None);
        assert_eq!(strip_location("recursion limit exceeded"), "recursion limit exceeded");
    }

    #[test]
    fn single_line_offsets() {
        assert_eq!(char_offset("SELECT 1", 1, 1), Some(1));
        assert_eq!(char_offset("SELECT 1", 1, 8), Some(8));
    }

    #[test]
    fn multi_line_offsets_span_newlines() {
        let input = "SELECT *\nFROM t";
        // Second line, first char is offset 10 (8 chars + newline + 1).
        assert_eq!(char_offset(input, 2, 1), Some(10));
        assert_eq!(char_offset(input, 2, 6), Some(15));
    }

    #[test]
    fn columns_count_characters() {
        // "é" is one character but two bytes.
        assert_eq!(char_offset("éx", 1, 2), Some(2));
    }

    #[test]
    fn past_end_of_line_clamps_to_last_character() {
        assert_eq!(char_offset("SELECT", 1, 40), Some(6));
    }

    #[test]
    fn out_of_range_lines_are_none() {
        assert_eq!(char_offset("SELECT", 3, 1), None);
        assert_eq!(char_offset("SELECT", 0, 1), None);
        assert_eq!(char_offset("", 1, 1), None);
    }
}
