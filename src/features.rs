//! Feature extraction from raw lexicon entries.
//!
//! A [`FeatureSet`] is the derived view of one raw entry: the phones, the
//! syllable segmentation, the per-syllable stresses and the POS tags.
//!
//! For `ae1 p-ah-l|nn` ("apple"):
//!
//! ```text
//! phonemes  = ae-p-ah-l
//! syllables = ae/p-ah-l
//! stresses  = 1/0
//! pos_list  = nn
//! ```

use crate::codec::{
    split_raw_entry, PHONEME_BOUNDARY, STRESSED, SYLLABLE_BOUNDARY, UNSTRESSED,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Stress of one syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stress {
    /// The syllable carried the stress digit
    Stressed,
    /// No stress digit in the syllable
    Unstressed,
}

impl Stress {
    /// The indicator character used in the `stresses` feature.
    #[inline]
    pub fn marker(self) -> char {
        match self {
            Stress::Stressed => STRESSED,
            Stress::Unstressed => UNSTRESSED,
        }
    }

    fn from_marker(c: char) -> Option<Self> {
        match c {
            STRESSED => Some(Stress::Stressed),
            UNSTRESSED => Some(Stress::Unstressed),
            _ => None,
        }
    }
}

/// Derived features for one lexicon entry.
///
/// All four fields are empty for a word that is not in the lexicon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Phones without stress digits, all joined by the phoneme boundary.
    pub phonemes: String,
    /// Phones without stress digits, syllables joined by the syllable boundary.
    pub syllables: String,
    /// One stress indicator per syllable, joined by the syllable boundary.
    pub stresses: String,
    /// Space-separated POS tags, best first.
    pub pos_list: String,
}

impl FeatureSet {
    /// True for the empty feature set returned for absent words.
    pub fn is_empty(&self) -> bool {
        self.phonemes.is_empty()
            && self.syllables.is_empty()
            && self.stresses.is_empty()
            && self.pos_list.is_empty()
    }

    /// Number of syllables.
    pub fn syllable_count(&self) -> usize {
        if self.syllables.is_empty() {
            0
        } else {
            self.syllables.split(SYLLABLE_BOUNDARY).count()
        }
    }

    /// Individual phones.
    pub fn phones(&self) -> impl Iterator<Item = &str> + '_ {
        self.phonemes
            .split(PHONEME_BOUNDARY)
            .filter(|phone| !phone.is_empty())
    }

    /// Stress of each syllable, in order.
    pub fn stress_pattern(&self) -> Vec<Stress> {
        self.stresses
            .split(SYLLABLE_BOUNDARY)
            .filter_map(|token| token.chars().next().and_then(Stress::from_marker))
            .collect()
    }

    /// POS tags, best first.
    pub fn pos_tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.pos_list.split_whitespace()
    }

    /// The first POS tag, or `""`.
    pub fn best_pos(&self) -> &str {
        self.pos_tags().next().unwrap_or("")
    }
}

/// Computes the feature set for a raw entry string.
///
/// # Errors
///
/// Returns [`LexiconError::MalformedEntry`](crate::LexiconError::MalformedEntry)
/// if the entry does not split into a phone field and a POS field. Entries
/// stored in a [`Lexicon`](crate::Lexicon) are validated on insertion, so this
/// only fails for unvalidated input.
///
/// # Example
///
/// ```rust
/// use phonolex::features::extract;
///
/// let features = extract("ae1 p-ah-l|nn").unwrap();
/// assert_eq!(features.phonemes, "ae-p-ah-l");
/// assert_eq!(features.syllables, "ae/p-ah-l");
/// assert_eq!(features.stresses, "1/0");
/// assert_eq!(features.pos_list, "nn");
/// ```
pub fn extract(raw: &str) -> Result<FeatureSet> {
    let (phone_field, pos_field) = split_raw_entry(raw)?;

    let mut phonemes = String::with_capacity(phone_field.len());
    let mut syllables = String::with_capacity(phone_field.len());
    let mut stresses = String::new();

    for (i, token) in phone_field.split_whitespace().enumerate() {
        if i > 0 {
            phonemes.push(PHONEME_BOUNDARY);
            syllables.push(SYLLABLE_BOUNDARY);
            stresses.push(SYLLABLE_BOUNDARY);
        }

        let mut stressed = false;
        for c in token.chars() {
            if c == STRESSED {
                stressed = true;
            } else {
                phonemes.push(c);
                syllables.push(c);
            }
        }

        stresses.push(if stressed { STRESSED } else { UNSTRESSED });
    }

    Ok(FeatureSet {
        phonemes,
        syllables,
        stresses,
        pos_list: pos_field.to_string(),
    })
}
