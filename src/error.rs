//! Error types for lexicon loading and queries.
//!
//! A word that is not in the lexicon is never an error: lookups return
//! `None` or an empty result instead.

use thiserror::Error;

/// Errors that can occur while loading or querying a [`Lexicon`](crate::Lexicon).
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The primary dictionary could not be read, or contained no data.
    ///
    /// This is fatal: a lexicon is never published half-loaded.
    #[error("Unable to load lexicon from {source_name}: {reason}")]
    LoadFailure {
        /// File path or other label identifying the data source
        source_name: String,
        /// What went wrong
        reason: String,
    },

    /// A dictionary line, addenda line, or raw entry failed the two-part split.
    ///
    /// `line` is the 1-based line number in the source text, or `None` when
    /// the entry did not come from a file (e.g. `add_word`).
    #[error(
        "Illegal entry{}: '{}' ({})",
        .line.map(|l| format!(" at line {l}")).unwrap_or_default(),
        .entry,
        .reason
    )]
    MalformedEntry {
        /// 1-based line number, if known
        line: Option<usize>,
        /// The offending text
        entry: String,
        /// Which part of the contract was violated
        reason: &'static str,
    },

    /// A part-of-speech filter was given a tag outside the tag vocabulary.
    #[error("Pos '{0}' is not a known part-of-speech tag")]
    UnknownTag(String),

    /// A word pattern failed to compile.
    #[error("Invalid word pattern")]
    InvalidPattern(#[from] regex::Error),

    /// An argument was rejected before reaching the lexicon.
    #[error("Invalid argument '{arg}': {msg}")]
    InvalidArgument {
        /// Name of the argument
        arg: &'static str,
        /// Error message
        msg: String,
    },

    /// Configuration could not be parsed or written.
    #[error("Configuration error")]
    Config(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

impl LexiconError {
    pub(crate) fn malformed<S: Into<String>>(
        line: Option<usize>,
        entry: S,
        reason: &'static str,
    ) -> Self {
        Self::MalformedEntry {
            line,
            entry: entry.into(),
            reason,
        }
    }

    pub(crate) fn load_failure<N, R>(source_name: N, reason: R) -> Self
    where
        N: Into<String>,
        R: Into<String>,
    {
        Self::LoadFailure {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_argument<S: Into<String>>(arg: &'static str, msg: S) -> Self {
        Self::InvalidArgument {
            arg,
            msg: msg.into(),
        }
    }

    /// Attaches a line number to a `MalformedEntry` that does not have one yet.
    pub(crate) fn at_line(self, line_no: usize) -> Self {
        match self {
            Self::MalformedEntry {
                line: None,
                entry,
                reason,
            } => Self::MalformedEntry {
                line: Some(line_no),
                entry,
                reason,
            },
            other => other,
        }
    }
}

/// A specialized `Result` type for lexicon operations.
pub type Result<T, E = LexiconError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_with_line() {
        let err = LexiconError::malformed(Some(7), "cat", "missing key delimiter");
        assert_eq!(
            err.to_string(),
            "Illegal entry at line 7: 'cat' (missing key delimiter)"
        );
    }

    #[test]
    fn test_malformed_message_without_line() {
        let err = LexiconError::malformed(None, "k-ae1-t", "missing field delimiter");
        assert_eq!(
            err.to_string(),
            "Illegal entry: 'k-ae1-t' (missing field delimiter)"
        );
    }

    #[test]
    fn test_at_line_keeps_existing_line() {
        let err = LexiconError::malformed(Some(2), "x", "empty word").at_line(9);
        assert!(matches!(err, LexiconError::MalformedEntry { line: Some(2), .. }));

        let err = LexiconError::malformed(None, "x", "empty word").at_line(9);
        assert!(matches!(err, LexiconError::MalformedEntry { line: Some(9), .. }));
    }

    #[test]
    fn test_unknown_tag_message() {
        let err = LexiconError::UnknownTag("xyz".to_string());
        assert_eq!(err.to_string(), "Pos 'xyz' is not a known part-of-speech tag");
    }
}
