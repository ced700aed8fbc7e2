//! Builder for configuring a [`Lexicon`] before loading data into it.

use super::Lexicon;
use crate::cache::FeatureCache;
use crate::codec::EntryMap;
use crate::error::Result;
use crate::lts::{LetterToSound, NoLetterToSound};
use crate::phonetic::{ArpabetInventory, PhoneInventory};
use crate::pos::{PennTagSet, TagSet};
use std::sync::Arc;

/// Fluent configuration for a [`Lexicon`].
///
/// Every setting has a default: no letter-to-sound engine (and no fallback to
/// it), the Penn Treebank
/// tag set, the ARPAbet phone inventory, caching off, and an unseeded random
/// iterator.
///
/// # Example
///
/// ```rust
/// use phonolex::prelude::*;
///
/// let text = "[\n'cat':['k-ae1-t','nn'],\n'runs':['r-ah1-n-z','vbz nns']\n]";
/// let lexicon = LexiconBuilder::new()
///     .feature_caching(true)
///     .seed(42)
///     .load(text, None)?;
///
/// assert_eq!(lexicon.len(), 2);
/// assert!(lexicon.is_caching());
/// # Ok::<(), phonolex::LexiconError>(())
/// ```
pub struct LexiconBuilder {
    lts: Arc<dyn LetterToSound>,
    tags: Arc<dyn TagSet>,
    inventory: Arc<dyn PhoneInventory>,
    lts_fallback: bool,
    caching: bool,
    seed: Option<u64>,
}

impl LexiconBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        LexiconBuilder {
            lts: Arc::new(NoLetterToSound),
            tags: Arc::new(PennTagSet),
            inventory: Arc::new(ArpabetInventory),
            lts_fallback: false,
            caching: false,
            seed: None,
        }
    }

    /// Sets the engine consulted for words missing from the lexicon.
    ///
    /// Any `Fn(&str) -> Option<Vec<String>> + Send + Sync` closure works.
    pub fn letter_to_sound<L>(mut self, lts: L) -> Self
    where
        L: LetterToSound + 'static,
    {
        self.lts = Arc::new(lts);
        self
    }

    /// Makes letter-to-sound the default for callers that consult
    /// [`Lexicon::lts_fallback`], such as the command-line lookups.
    pub fn lts_fallback(mut self, enabled: bool) -> Self {
        self.lts_fallback = enabled;
        self
    }

    /// Sets the vocabulary that POS filters validate tags against.
    pub fn tag_set<T>(mut self, tags: T) -> Self
    where
        T: TagSet + 'static,
    {
        self.tags = Arc::new(tags);
        self
    }

    /// Sets the phone classification used to syllabify predicted phones.
    pub fn phone_inventory<I>(mut self, inventory: I) -> Self
    where
        I: PhoneInventory + 'static,
    {
        self.inventory = Arc::new(inventory);
        self
    }

    /// Enables or disables the feature cache.
    pub fn feature_caching(mut self, enabled: bool) -> Self {
        self.caching = enabled;
        self
    }

    /// Seeds the random word iterators for reproducible output.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds an empty lexicon.
    pub fn build(self) -> Lexicon {
        Lexicon {
            entries: EntryMap::default(),
            addenda_count: 0,
            lts: self.lts,
            tags: self.tags,
            inventory: self.inventory,
            lts_fallback: self.lts_fallback,
            cache: FeatureCache::new(),
            caching: self.caching,
            seed: self.seed,
            random: None,
            random_stale: false,
        }
    }

    /// Builds a lexicon and loads primary and addenda text into it.
    ///
    /// # Errors
    ///
    /// Fails as [`Lexicon::load`] does.
    pub fn load(self, primary: &str, addenda: Option<&str>) -> Result<Lexicon> {
        let mut lexicon = self.build();
        lexicon.load(primary, addenda)?;
        Ok(lexicon)
    }
}

impl Default for LexiconBuilder {
    fn default() -> Self {
        Self::new()
    }
}
