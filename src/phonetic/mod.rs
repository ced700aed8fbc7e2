//! Phone classification and syllabification.
//!
//! The syllable-boundary classifier in [`syllable`] needs three facts about
//! every phone: whether it is a vowel, whether it is a silence, and its
//! sonority rank. Those facts come from a [`PhoneInventory`]. The default
//! [`ArpabetInventory`] covers the CMU/ARPAbet phone set used by the bundled
//! dictionary.
//!
//! # Sonority scale
//!
//! ```text
//! 5  vowels        aa ae ah ao aw ax ay eh er ey ih iy ow oy uh uw
//! 4  glides        w y
//! 3  liquids       l r
//! 2  nasals        m n ng
//! 1  obstruents    b ch d dh f g hh jh k p s sh t th v z zh
//! 0  silence       pau sil h#
//! ```
//!
//! Phones may carry a trailing stress digit (`ae1`); it is ignored when
//! classifying.

pub mod syllable;

pub use syllable::{format_phone_field, is_syllable_boundary, syllabify};

/// Classification table for a phone set.
///
/// Implementations receive phone symbols as they appear in the data,
/// possibly with a trailing stress digit. [`base_phone`] strips it.
pub trait PhoneInventory: Send + Sync {
    /// True if the phone is a vowel (a syllable nucleus).
    fn is_vowel(&self, phone: &str) -> bool;

    /// True if the phone is a pause or silence.
    fn is_silence(&self, phone: &str) -> bool;

    /// Sonority rank; higher is more sonorous.
    fn sonority(&self, phone: &str) -> u8;
}

/// True if any phone in the slice is a vowel.
pub fn has_vowel<I, S>(inventory: &I, phones: &[S]) -> bool
where
    I: PhoneInventory + ?Sized,
    S: AsRef<str>,
{
    phones.iter().any(|p| inventory.is_vowel(p.as_ref()))
}

/// Strips trailing stress digits from a phone symbol (`ae1` → `ae`).
#[inline]
pub fn base_phone(phone: &str) -> &str {
    phone.trim_end_matches(|c: char| c.is_ascii_digit())
}

/// Sonority rank of vowels.
pub const SONORITY_VOWEL: u8 = 5;
/// Sonority rank of glides.
pub const SONORITY_GLIDE: u8 = 4;
/// Sonority rank of liquids.
pub const SONORITY_LIQUID: u8 = 3;
/// Sonority rank of nasals.
pub const SONORITY_NASAL: u8 = 2;
/// Sonority rank of stops, fricatives and affricates.
pub const SONORITY_OBSTRUENT: u8 = 1;
/// Sonority rank of silences.
pub const SONORITY_SILENCE: u8 = 0;

const VOWELS: &[&str] = &[
    "aa", "ae", "ah", "ao", "aw", "ax", "ay", "eh", "er", "ey", "ih", "iy", "ow", "oy", "uh",
    "uw",
];
const GLIDES: &[&str] = &["w", "y"];
const LIQUIDS: &[&str] = &["l", "r"];
const NASALS: &[&str] = &["m", "n", "ng"];
const SILENCES: &[&str] = &["pau", "sil", "h#"];

/// CMU/ARPAbet phone inventory. Symbols are matched case-insensitively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArpabetInventory;

impl ArpabetInventory {
    fn member(set: &[&str], phone: &str) -> bool {
        let phone = base_phone(phone);
        set.iter().any(|p| p.eq_ignore_ascii_case(phone))
    }
}

impl PhoneInventory for ArpabetInventory {
    fn is_vowel(&self, phone: &str) -> bool {
        Self::member(VOWELS, phone)
    }

    fn is_silence(&self, phone: &str) -> bool {
        Self::member(SILENCES, phone)
    }

    fn sonority(&self, phone: &str) -> u8 {
        if self.is_vowel(phone) {
            SONORITY_VOWEL
        } else if Self::member(GLIDES, phone) {
            SONORITY_GLIDE
        } else if Self::member(LIQUIDS, phone) {
            SONORITY_LIQUID
        } else if Self::member(NASALS, phone) {
            SONORITY_NASAL
        } else if self.is_silence(phone) {
            SONORITY_SILENCE
        } else {
            SONORITY_OBSTRUENT
        }
    }
}
