//! Letter-to-sound fallback contract.
//!
//! The lexicon does not predict pronunciations itself. When asked to, it
//! hands out-of-lexicon words to a [`LetterToSound`] engine and uses whatever
//! flat phone sequence comes back.

/// Predicts a phone sequence for a word that is not in the lexicon.
pub trait LetterToSound: Send + Sync {
    /// Returns the predicted phones (possibly with stress digits), or `None`
    /// if the engine has no prediction.
    fn predict(&self, word: &str) -> Option<Vec<String>>;
}

impl<F> LetterToSound for F
where
    F: Fn(&str) -> Option<Vec<String>> + Send + Sync,
{
    fn predict(&self, word: &str) -> Option<Vec<String>> {
        self(word)
    }
}

/// An engine that never predicts anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoLetterToSound;

impl LetterToSound for NoLetterToSound {
    fn predict(&self, _word: &str) -> Option<Vec<String>> {
        None
    }
}
