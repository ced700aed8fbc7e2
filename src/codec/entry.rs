use super::{FIELD_DELIM, RESERVED_CHARS};
use crate::error::{LexiconError, Result};
use std::fmt;

/// Splits a raw entry into its phone field and part-of-speech field.
///
/// Both fields are trimmed. Fails with [`LexiconError::MalformedEntry`]
/// unless the entry splits into exactly two non-empty parts free of
/// [`RESERVED_CHARS`](super::RESERVED_CHARS).
///
/// # Example
///
/// ```rust
/// use phonolex::codec::split_raw_entry;
///
/// let (phones, pos) = split_raw_entry("ae1 p-ah-l|nn").unwrap();
/// assert_eq!(phones, "ae1 p-ah-l");
/// assert_eq!(pos, "nn");
/// assert!(split_raw_entry("ae1 p-ah-l").is_err());
/// ```
pub fn split_raw_entry(raw: &str) -> Result<(&str, &str)> {
    let mut parts = raw.split(FIELD_DELIM);
    let (phones, pos) = match (parts.next(), parts.next(), parts.next()) {
        (Some(phones), Some(pos), None) => (phones.trim(), pos.trim()),
        (_, None, _) => {
            return Err(LexiconError::malformed(None, raw, "missing field delimiter"))
        }
        _ => return Err(LexiconError::malformed(None, raw, "too many fields")),
    };

    if phones.is_empty() {
        return Err(LexiconError::malformed(None, raw, "empty phone field"));
    }
    if pos.is_empty() {
        return Err(LexiconError::malformed(None, raw, "empty part-of-speech field"));
    }
    if phones.contains(RESERVED_CHARS) {
        return Err(LexiconError::malformed(None, raw, "reserved character in phone field"));
    }
    if pos.contains(RESERVED_CHARS) {
        return Err(LexiconError::malformed(
            None,
            raw,
            "reserved character in part-of-speech field",
        ));
    }

    Ok((phones, pos))
}

/// Whether `word` can be stored as a lexicon key: not blank, and free of
/// [`RESERVED_CHARS`](super::RESERVED_CHARS).
///
/// ```rust
/// use phonolex::codec::is_valid_word;
///
/// assert!(is_valid_word("clock"));
/// assert!(!is_valid_word("o'clock"));
/// assert!(!is_valid_word(" "));
/// ```
pub fn is_valid_word(word: &str) -> bool {
    !word.trim().is_empty() && !word.contains(RESERVED_CHARS)
}

/// A validated lexicon value: `phoneField|posField`.
///
/// Every `RawEntry` is known to split into two non-empty fields, so the
/// field accessors never fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawEntry(String);

impl RawEntry {
    /// Builds an entry from its two fields.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::MalformedEntry`] if either field is empty or
    /// contains a reserved character.
    pub fn new(phone_field: &str, pos_field: &str) -> Result<Self> {
        Self::parse(&format!(
            "{}{}{}",
            phone_field.trim(),
            FIELD_DELIM,
            pos_field.trim()
        ))
    }

    /// Validates a packed entry string. Surrounding whitespace is trimmed.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        split_raw_entry(raw)?;
        Ok(Self(raw.to_string()))
    }

    /// The packed entry string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Both fields, trimmed.
    pub fn fields(&self) -> (&str, &str) {
        match self.0.split_once(FIELD_DELIM) {
            Some((phones, pos)) => (phones.trim(), pos.trim()),
            None => (self.0.as_str(), ""),
        }
    }

    /// Syllable tokens with stress digits, e.g. `ae1 p-ah-l`.
    #[inline]
    pub fn phone_field(&self) -> &str {
        self.fields().0
    }

    /// Space-separated tags, best first.
    #[inline]
    pub fn pos_field(&self) -> &str {
        self.fields().1
    }

    /// Number of syllable tokens in the phone field.
    pub fn syllable_count(&self) -> usize {
        self.phone_field().split_whitespace().count()
    }

    /// Consumes the entry, returning the packed string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RawEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RawEntry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for RawEntry {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
