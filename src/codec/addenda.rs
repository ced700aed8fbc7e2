//! Plain-text addenda parsing.
//!
//! Addenda files hold user overrides for the bundled dictionary, one entry
//! per line. They are meant to be edited by hand.
//!
//! # Format
//!
//! ```text
//! # comment lines and blank lines are ignored
//! cat:k-ae1-t|vb
//! phonolex:f-ow1 n-ow l-eh-k-s|nnp
//! ```

use super::dictionary::parse_keyed_line;
use super::{RawEntry, COMMENT_PREFIX, KEY_DELIM};
use crate::error::Result;

/// Parses one addenda line.
///
/// Returns `Ok(None)` for blank lines and comment lines.
///
/// # Errors
///
/// Returns [`LexiconError::MalformedEntry`](crate::LexiconError::MalformedEntry)
/// if the line is not a `word:entry` pair with a valid raw entry.
pub fn parse_addenda_line(line: &str) -> Result<Option<(String, RawEntry)>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return Ok(None);
    }

    parse_keyed_line(line).map(Some)
}

/// Parses a whole addenda file, in file order.
///
/// Malformed lines are reported with their 1-based line number.
pub fn parse_addenda_text(text: &str) -> Result<Vec<(String, RawEntry)>> {
    let mut entries = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if let Some(entry) = parse_addenda_line(line).map_err(|e| e.at_line(index + 1))? {
            entries.push(entry);
        }
    }

    Ok(entries)
}

/// Formats one addenda line (without a line terminator).
pub fn format_addenda_line(word: &str, entry: &RawEntry) -> String {
    format!("{word}{KEY_DELIM}{entry}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexiconError;

    #[test]
    fn test_parse_line() {
        let (word, entry) = parse_addenda_line("cat:k-ae1-t|vb").unwrap().unwrap();
        assert_eq!(word, "cat");
        assert_eq!(entry.as_str(), "k-ae1-t|vb");
    }

    #[test]
    fn test_blank_and_comment_lines_skipped() {
        assert!(parse_addenda_line("").unwrap().is_none());
        assert!(parse_addenda_line("   ").unwrap().is_none());
        assert!(parse_addenda_line("# cat:k-ae1-t|vb").unwrap().is_none());
    }

    #[test]
    fn test_value_is_trimmed() {
        let (_, entry) = parse_addenda_line("dog:  d-ao1-g|nn  ").unwrap().unwrap();
        assert_eq!(entry.as_str(), "d-ao1-g|nn");
    }

    #[test]
    fn test_malformed_line() {
        assert!(parse_addenda_line("cat k-ae1-t|vb").is_err());
        assert!(parse_addenda_line("cat:k-ae1-t").is_err());
        assert!(parse_addenda_line(":k-ae1-t|nn").is_err());
        assert!(parse_addenda_line("o'clock:ah k-l-aa1-k|rb").is_err());
        assert!(parse_addenda_line("cat:k-ae1-t|nn,vb").is_err());
    }

    #[test]
    fn test_parse_text_reports_line() {
        let text = "# overrides\ncat:k-ae1-t|vb\n\ndog d-ao1-g|nn\n";
        match parse_addenda_text(text).unwrap_err() {
            LexiconError::MalformedEntry { line, .. } => assert_eq!(line, Some(4)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_text_keeps_order() {
        let text = "cat:k-ae1-t|nn\ncat:k-ae1-t|vb\n";
        let entries = parse_addenda_text(text).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].1.pos_field(), "vb");
    }

    #[test]
    fn test_format_line_parses_back() {
        let entry = RawEntry::new("k-ae1-t", "vb").unwrap();
        let line = format_addenda_line("cat", &entry);
        assert_eq!(line, "cat:k-ae1-t|vb");
        assert_eq!(
            parse_addenda_line(&line).unwrap(),
            Some(("cat".to_string(), entry))
        );
    }
}
