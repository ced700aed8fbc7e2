//! # phonolex
//!
//! A pronunciation and part-of-speech lexicon.
//!
//! Given a word, `phonolex` returns its phonetic transcription (phones
//! grouped into syllables, with stress markers) and its part-of-speech tags.
//! Entries come from a bundled dictionary file, optionally overridden by a
//! user-supplied addenda file.
//!
//! ## Example
//!
//! ```rust
//! use phonolex::prelude::*;
//!
//! let primary = "[\n'apple':['ae1 p-ah-l','nn'],\n'cat':['k-ae1-t','nn']\n]";
//! let lexicon = Lexicon::builder()
//!     .feature_caching(true)
//!     .load(primary, Some("cat:k-ae1-t|vb"))?;
//!
//! let features = lexicon.features("apple")?;
//! assert_eq!(features.phonemes, "ae-p-ah-l");
//! assert_eq!(features.stresses, "1/0");
//! assert_eq!(lexicon.best_pos("cat"), "vb");
//! # Ok::<(), LexiconError>(())
//! ```
//!
//! ## Letter-to-sound
//!
//! Words missing from the lexicon can be sent to any [`LetterToSound`]
//! engine; closures work directly. Predicted phones are regrouped into
//! syllables with the sonority-based classifier in [`phonetic::syllable`].
//!
//! ```rust
//! use phonolex::prelude::*;
//!
//! let lexicon = Lexicon::builder()
//!     .letter_to_sound(|word: &str| {
//!         (word == "astray").then(|| {
//!             ["ah0", "s", "t", "r", "ey1"].map(String::from).to_vec()
//!         })
//!     })
//!     .build();
//!
//! assert_eq!(lexicon.raw_phones("astray", true), "ah0-s t-r-ey1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod config;
pub mod error;
pub mod features;
pub mod lexicon;
pub mod lts;
pub mod phonetic;
pub mod pos;

/// Concurrent feature-set cache
pub mod cache;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

pub use config::LexiconConfig;
pub use error::{LexiconError, Result};
pub use features::FeatureSet;
pub use lexicon::{Lexicon, LexiconBuilder, RandomIterator};
pub use lts::LetterToSound;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::codec::{EntryMap, RawEntry};
    pub use crate::config::LexiconConfig;
    pub use crate::error::{LexiconError, Result};
    pub use crate::features::{FeatureSet, Stress};
    pub use crate::lexicon::{Lexicon, LexiconBuilder, RandomIterator};
    pub use crate::lts::{LetterToSound, NoLetterToSound};
    pub use crate::phonetic::{ArpabetInventory, PhoneInventory};
    pub use crate::pos::{PennTagSet, TagSet};
}
