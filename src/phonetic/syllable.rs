//! Syllable boundary detection over flat phone sequences.
//!
//! Letter-to-sound predictions come back as a flat list of phones. To present
//! them in the phone-field grammar the phones have to be regrouped into
//! syllables, one boundary decision at a time.

use super::{has_vowel, PhoneInventory};
use crate::codec::{PHONEME_BOUNDARY, WORD_BOUNDARY};

/// Decides whether a syllable boundary falls before `word_phones[index]`.
///
/// `syllable_phones` holds the phones already placed in the syllable being
/// built. Rules are tried in order and the first match wins:
///
/// 1. past the end of the word: boundary
/// 2. silence at `index`: boundary
/// 3. no vowel left in `word_phones[index..]`: no boundary
/// 4. no vowel yet in `syllable_phones`: no boundary
/// 5. vowel at `index`: boundary
/// 6. `index` is the last phone: no boundary
/// 7. boundary iff `p <= n <= nn`, the sonority of the last phone of the
///    current syllable, the phone at `index`, and the phone after it
///
/// Rule 7 admits sonority plateaus (`s t` in "astray" splits as `ae-s t-r-ey`).
///
/// # Example
///
/// ```rust
/// use phonolex::phonetic::{is_syllable_boundary, ArpabetInventory};
///
/// let word = ["ae1", "s", "t", "r", "ey1"];
/// assert!(!is_syllable_boundary(&ArpabetInventory, &["ae1"], &word, 1));
/// assert!(is_syllable_boundary(&ArpabetInventory, &["ae1", "s"], &word, 2));
/// assert!(is_syllable_boundary(&ArpabetInventory, &["t", "r", "ey1"], &word, 5));
/// ```
pub fn is_syllable_boundary<I, S, T>(
    inventory: &I,
    syllable_phones: &[S],
    word_phones: &[T],
    index: usize,
) -> bool
where
    I: PhoneInventory + ?Sized,
    S: AsRef<str>,
    T: AsRef<str>,
{
    if index >= word_phones.len() {
        return true;
    }

    let phone = word_phones[index].as_ref();
    if inventory.is_silence(phone) {
        true
    } else if !has_vowel(inventory, &word_phones[index..]) {
        false
    } else if !has_vowel(inventory, syllable_phones) {
        false
    } else if inventory.is_vowel(phone) {
        true
    } else if index == word_phones.len() - 1 {
        false
    } else {
        let Some(last) = syllable_phones.last() else {
            return false;
        };
        let p = inventory.sonority(last.as_ref());
        let n = inventory.sonority(phone);
        let nn = inventory.sonority(word_phones[index + 1].as_ref());
        p <= n && n <= nn
    }
}

/// Groups a flat phone sequence into syllables.
///
/// A new syllable starts whenever the current one is non-empty and
/// [`is_syllable_boundary`] reports a boundary. Phones keep their stress
/// digits.
pub fn syllabify<'a, I, S>(inventory: &I, phones: &'a [S]) -> Vec<Vec<&'a str>>
where
    I: PhoneInventory + ?Sized,
    S: AsRef<str>,
{
    let mut syllables = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for index in 0..phones.len() {
        if !current.is_empty() && is_syllable_boundary(inventory, &current, phones, index) {
            syllables.push(std::mem::take(&mut current));
        }
        current.push(phones[index].as_ref());
    }

    if !current.is_empty() {
        syllables.push(current);
    }

    syllables
}

/// Renders syllables in the phone-field grammar: phones joined by `-`,
/// syllables by a space.
pub fn format_phone_field<S: AsRef<str>>(syllables: &[Vec<S>]) -> String {
    let mut out = String::new();

    for (i, syllable) in syllables.iter().enumerate() {
        if i > 0 {
            out.push(WORD_BOUNDARY);
        }
        for (j, phone) in syllable.iter().enumerate() {
            if j > 0 {
                out.push(PHONEME_BOUNDARY);
            }
            out.push_str(phone.as_ref());
        }
    }

    out
}
