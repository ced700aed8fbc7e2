//! Entry codec for lexicon data.
//!
//! This module parses (and formats) the two text layouts lexicon data comes
//! in, and the packed value string stored for every word.
//!
//! # Raw entry grammar
//!
//! ```text
//! entry      := phoneField '|' posField
//! phoneField := syllable (' ' syllable)*
//! syllable   := phone ('-' phone)*      ; a phone may carry the stress digit '1'
//! posField   := tag (' ' tag)*          ; best tag first
//! ```
//!
//! For example `ae1 p-ah-l|nn` is the two-syllable word "apple", stressed on
//! the first syllable, tagged as a singular noun.
//!
//! # Layouts
//!
//! - [`dictionary`]: the bundled JSON-array-like dictionary, one entry per line
//! - [`addenda`]: plain-text user overrides, `word:entry` per line

pub mod addenda;
pub mod dictionary;
mod entry;

pub use addenda::{format_addenda_line, parse_addenda_line, parse_addenda_text};
pub use dictionary::{format_dictionary_text, parse_dictionary_text};
pub use entry::{is_valid_word, split_raw_entry, RawEntry};

use rustc_hash::FxHashMap;

/// Separates a word from its raw entry on a dictionary or addenda line.
pub const KEY_DELIM: char = ':';

/// Separates the phone field from the part-of-speech field of a raw entry.
pub const FIELD_DELIM: char = '|';

/// Separator that replaces the trailing comma of each dictionary line.
pub const RECORD_SEPARATOR: char = '|';

/// Joins phones (within a syllable, and across syllables in `phonemes`).
pub const PHONEME_BOUNDARY: char = '-';

/// Joins syllables in the `syllables` and `stresses` features.
pub const SYLLABLE_BOUNDARY: char = '/';

/// Separates syllable tokens in a phone field and tags in a POS field.
pub const WORD_BOUNDARY: char = ' ';

/// Marks the stressed phone of a syllable in a phone field.
pub const STRESSED: char = '1';

/// Stress indicator emitted for syllables without a stress digit.
pub const UNSTRESSED: char = '0';

/// Characters the dictionary layout uses for structure. Words and entry
/// fields may not contain them.
pub const RESERVED_CHARS: &[char] = &['\'', '"', '[', ']', ',', KEY_DELIM, FIELD_DELIM];

/// Lines of an addenda file starting with this prefix are ignored.
pub const COMMENT_PREFIX: &str = "#";

/// Word to raw entry mapping produced by the bulk parsers.
pub type EntryMap = FxHashMap<String, RawEntry>;
