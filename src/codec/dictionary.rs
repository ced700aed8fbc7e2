//! Bulk parser for the bundled dictionary layout.
//!
//! The bundled dictionary is a JSON-array-like text blob with one entry per
//! line. The first and last lines are the structural wrapper and carry no
//! data.
//!
//! # Format
//!
//! ```text
//! [
//! 'abandon':['ah b-ae1-n d-ah-n','vb'],
//! 'apple':['ae1 p-ah-l','nn'],
//! 'runs':['r-ah1-n-z','vbz nns']
//! ]
//! ```
//!
//! Trailing blank lines are ignored before the wrapper lines are located.
//! Each data line then has its brackets and quotes stripped, its commas
//! turned into the record separator, the separator at the line end dropped,
//! and is split on the key delimiter:
//!
//! ```text
//! apple:ae1 p-ah-l|nn
//! ```

use super::{EntryMap, RawEntry, KEY_DELIM, RECORD_SEPARATOR, RESERVED_CHARS};
use crate::error::{LexiconError, Result};
use std::fmt::Write;

/// Parses the full text of a bundled dictionary into a word mapping.
///
/// Words are lowercased. Later duplicates overwrite earlier ones.
///
/// # Errors
///
/// Returns [`LexiconError::MalformedEntry`] (with a 1-based line number) for
/// any data line that does not split into a word and a valid raw entry.
///
/// # Example
///
/// ```rust
/// use phonolex::codec::parse_dictionary_text;
///
/// let text = "[\n'cat':['k-ae1-t','nn'],\n'runs':['r-ah1-n-z','vbz nns']\n]\n";
/// let entries = parse_dictionary_text(text).unwrap();
///
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries["runs"].as_str(), "r-ah1-n-z|vbz nns");
/// ```
pub fn parse_dictionary_text(text: &str) -> Result<EntryMap> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let mut entries = EntryMap::default();
    if lines.len() < 2 {
        return Ok(entries);
    }
    entries.reserve(lines.len() - 2);

    // First and last lines are the array wrapper.
    for (index, raw_line) in lines.iter().enumerate().take(lines.len() - 1).skip(1) {
        let line = normalize_line(raw_line);
        let (word, entry) = parse_keyed_line(&line).map_err(|e| e.at_line(index + 1))?;
        entries.insert(word, entry);
    }

    Ok(entries)
}

/// Formats entries in the bundled dictionary layout.
///
/// The output parses back with [`parse_dictionary_text`] to the same mapping
/// as long as every word is lowercase and passes
/// [`is_valid_word`](super::is_valid_word), which holds for every key a
/// [`Lexicon`](crate::Lexicon) stores. Entries are written in the order given.
pub fn format_dictionary_text<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a RawEntry)>,
{
    let mut out = String::from("[\n");
    let mut first = true;

    for (word, entry) in entries {
        if !first {
            out.push_str(",\n");
        }
        first = false;

        let (phones, pos) = entry.fields();
        // Writing to a String cannot fail.
        let _ = write!(out, "'{word}':['{phones}','{pos}']");
    }

    if !first {
        out.push('\n');
    }
    out.push_str("]\n");
    out
}

/// Splits one `word:entry` line. Shared with the addenda parser.
pub(crate) fn parse_keyed_line(line: &str) -> Result<(String, RawEntry)> {
    let mut parts = line.split(KEY_DELIM);
    let (word, value) = match (parts.next(), parts.next(), parts.next()) {
        (Some(word), Some(value), None) => (word.trim(), value),
        (_, None, _) => return Err(LexiconError::malformed(None, line, "missing key delimiter")),
        _ => return Err(LexiconError::malformed(None, line, "too many key delimiters")),
    };

    if word.is_empty() {
        return Err(LexiconError::malformed(None, line, "empty word"));
    }
    if word.contains(RESERVED_CHARS) {
        return Err(LexiconError::malformed(None, line, "reserved character in word"));
    }

    let entry = RawEntry::parse(value)?;
    Ok((word.to_lowercase(), entry))
}

/// Strips brackets and quotes, turns commas into the record separator, and
/// drops the separator left at the end of the line.
fn normalize_line(line: &str) -> String {
    let clean: String = line
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '\'' | '"'))
        .map(|c| if c == ',' { RECORD_SEPARATOR } else { c })
        .collect();

    let clean = clean.trim_end();
    clean
        .strip_suffix(RECORD_SEPARATOR)
        .unwrap_or(clean)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "[\n\
'abandon':['ah b-ae1-n d-ah-n','vb'],\n\
'apple':['ae1 p-ah-l','nn'],\n\
'runs':['r-ah1-n-z','vbz nns']\n\
]\n";

    #[test]
    fn test_parse_sample() {
        let entries = parse_dictionary_text(SAMPLE).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries["abandon"].as_str(), "ah b-ae1-n d-ah-n|vb");
        assert_eq!(entries["apple"].pos_field(), "nn");
        assert_eq!(entries["runs"].pos_field(), "vbz nns");
    }

    #[test]
    fn test_wrapper_lines_skipped_even_with_data() {
        // Whatever sits on the first and last line is not data.
        let text = "'first':['f-er1-s-t','jj'],\n'cat':['k-ae1-t','nn'],\n'last':['l-ae1-s-t','jj']";
        let entries = parse_dictionary_text(text).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries.contains_key("cat"));
    }

    #[test]
    fn test_double_quotes_and_crlf() {
        let text = "[\r\n\"cat\":[\"k-ae1-t\",\"nn\"],\r\n\"dog\":[\"d-ao1-g\",\"nn vb\"]\r\n]\r\n";
        let entries = parse_dictionary_text(text).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries["dog"].as_str(), "d-ao1-g|nn vb");
    }

    #[test]
    fn test_trailing_blank_lines_ignored() {
        let text = format!("{SAMPLE}\n\n\n");
        assert_eq!(parse_dictionary_text(&text).unwrap().len(), 3);
    }

    #[test]
    fn test_empty_and_wrapper_only() {
        assert!(parse_dictionary_text("").unwrap().is_empty());
        assert!(parse_dictionary_text("[\n]\n").unwrap().is_empty());
    }

    #[test]
    fn test_keys_lowercased_and_duplicates_overwrite() {
        let text = "[\n'Cat':['k-ae1-t','nn'],\n'cat':['k-ae1-t','vb']\n]";
        let entries = parse_dictionary_text(text).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries["cat"].pos_field(), "vb");
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let text = "[\n'cat':['k-ae1-t','nn'],\n'dog' ['d-ao1-g','nn'],\n]";
        let err = parse_dictionary_text(text).unwrap_err();
        match err {
            LexiconError::MalformedEntry { line, reason, .. } => {
                assert_eq!(line, Some(3));
                assert_eq!(reason, "missing key delimiter");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_entry_without_pos_is_malformed() {
        let text = "[\n'cat':['k-ae1-t'],\n]";
        assert!(matches!(
            parse_dictionary_text(text),
            Err(LexiconError::MalformedEntry { line: Some(2), .. })
        ));
    }

    #[test]
    fn test_format_parses_back() {
        let original = parse_dictionary_text(SAMPLE).unwrap();
        let mut words: Vec<&String> = original.keys().collect();
        words.sort();

        let text = format_dictionary_text(words.iter().map(|w| (w.as_str(), &original[*w])));
        assert!(text.starts_with("[\n'abandon':['ah b-ae1-n d-ah-n','vb'],\n"));

        let reparsed = parse_dictionary_text(&text).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn test_format_empty() {
        let text = format_dictionary_text(std::iter::empty());
        assert_eq!(text, "[\n]\n");
        assert!(parse_dictionary_text(&text).unwrap().is_empty());
    }
}
