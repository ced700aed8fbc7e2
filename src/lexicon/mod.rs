//! The word → raw entry lexicon and its query surface.
//!
//! A [`Lexicon`] owns the mapping from lowercase words to [`RawEntry`]
//! values. It is populated in bulk from the bundled dictionary text, merged
//! with optional addenda overrides, and then queried for pronunciations,
//! features and part-of-speech tags.
//!
//! # Example
//!
//! ```rust
//! use phonolex::prelude::*;
//!
//! let primary = "[\n'apple':['ae1 p-ah-l','nn'],\n'runs':['r-ah1-n-z','vbz nns']\n]";
//! let mut lexicon = Lexicon::new();
//! lexicon.load(primary, Some("apple:ae1 p-ah-l|nns"))?;
//!
//! let features = lexicon.features("Apple")?;
//! assert_eq!(features.syllables, "ae/p-ah-l");
//! assert_eq!(features.stresses, "1/0");
//! assert_eq!(lexicon.best_pos("apple"), "nns");
//! assert!(lexicon.words_with_pos("vbz")?.contains("runs"));
//! # Ok::<(), phonolex::LexiconError>(())
//! ```
//!
//! # Concurrency
//!
//! Queries take `&self` and may run from many threads at once; the feature
//! cache handles concurrent inserts. Loading and mutation take `&mut self`.

mod builder;
mod random;

pub use builder::LexiconBuilder;
pub use random::RandomIterator;

use crate::cache::FeatureCache;
use crate::codec::{
    is_valid_word, parse_addenda_text, parse_dictionary_text, EntryMap, RawEntry, PHONEME_BOUNDARY,
    STRESSED,
};
use crate::error::{LexiconError, Result};
use crate::features::{extract, FeatureSet};
use crate::lts::LetterToSound;
use crate::phonetic::{base_phone, format_phone_field, syllabify, PhoneInventory};
use crate::pos::TagSet;
use regex::Regex;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// A pronunciation and part-of-speech lexicon.
pub struct Lexicon {
    entries: EntryMap,
    addenda_count: usize,
    lts: Arc<dyn LetterToSound>,
    tags: Arc<dyn TagSet>,
    inventory: Arc<dyn PhoneInventory>,
    // Default for the `use_lts` argument of the CLI and config driven lookups.
    lts_fallback: bool,
    cache: FeatureCache,
    caching: bool,
    seed: Option<u64>,
    random: Option<RandomIterator<String>>,
    // Word set changed since `random` was built.
    random_stale: bool,
}

impl Lexicon {
    /// Creates an empty lexicon with default collaborators.
    pub fn new() -> Self {
        LexiconBuilder::new().build()
    }

    /// Starts configuring a lexicon.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::new()
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Replaces the lexicon contents with `primary`, then applies `addenda`.
    ///
    /// Addenda entries overwrite primary entries for the same word. The new
    /// mapping is built completely before it replaces the old one, so on
    /// error the lexicon is left as it was. A successful load clears the
    /// feature cache.
    ///
    /// # Errors
    ///
    /// - [`LexiconError::LoadFailure`] if `primary` is blank
    /// - [`LexiconError::MalformedEntry`] for a bad line in either text
    pub fn load(&mut self, primary: &str, addenda: Option<&str>) -> Result<()> {
        self.load_named("primary data", primary, addenda)
    }

    /// Reads the primary dictionary and optional addenda file, then loads them.
    ///
    /// A missing addenda file is skipped.
    ///
    /// # Errors
    ///
    /// - [`LexiconError::LoadFailure`] if the primary file cannot be read
    /// - [`LexiconError::Io`] if the addenda file exists but cannot be read
    /// - anything [`load`](Self::load) returns
    pub fn load_files<P: AsRef<Path>>(&mut self, primary: P, addenda: Option<&Path>) -> Result<()> {
        let primary = primary.as_ref();
        let source_name = primary.display().to_string();
        let primary_text = std::fs::read_to_string(primary)
            .map_err(|e| LexiconError::load_failure(source_name.as_str(), e.to_string()))?;

        let addenda_text = match addenda {
            Some(path) => match std::fs::read_to_string(path) {
                Ok(text) => Some(text),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    log::debug!("No addenda file at {}, skipping", path.display());
                    None
                }
                Err(e) => return Err(e.into()),
            },
            None => None,
        };

        self.load_named(&source_name, &primary_text, addenda_text.as_deref())
    }

    fn load_named(&mut self, source_name: &str, primary: &str, addenda: Option<&str>) -> Result<()> {
        let start = Instant::now();

        if primary.trim().is_empty() {
            return Err(LexiconError::load_failure(source_name, "no dictionary data"));
        }

        let mut entries = parse_dictionary_text(primary)?;
        if entries.is_empty() {
            return Err(LexiconError::load_failure(source_name, "no dictionary entries"));
        }
        let primary_count = entries.len();

        let mut addenda_count = 0;
        if let Some(text) = addenda {
            for (word, entry) in parse_addenda_text(text)? {
                entries.insert(word, entry);
                addenda_count += 1;
            }
        }

        self.entries = entries;
        self.addenda_count = addenda_count;
        self.cache.clear();
        self.random_stale = true;

        log::info!(
            "Loaded {} entries ({} primary, {} addenda) from {} in {} ms",
            self.entries.len(),
            primary_count,
            addenda_count,
            source_name,
            start.elapsed().as_millis()
        );

        Ok(())
    }

    // ------------------------------------------------------------------
    // Raw lookups
    // ------------------------------------------------------------------

    /// The raw entry for `word`, if present.
    pub fn lookup_raw(&self, word: &str) -> Option<&RawEntry> {
        self.entries.get(normalize_word(word).as_ref())
    }

    /// True if `word` is in the lexicon.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup_raw(word).is_some()
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no words are loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of addenda entries applied by the last load.
    pub fn addenda_count(&self) -> usize {
        self.addenda_count
    }

    /// All words, sorted.
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    // ------------------------------------------------------------------
    // Features
    // ------------------------------------------------------------------

    /// The derived features for `word`.
    ///
    /// Absent words yield an empty [`FeatureSet`]. With caching enabled the
    /// result is memoized; the cache is not invalidated by
    /// [`add_word`](Self::add_word) or [`remove_word`](Self::remove_word).
    pub fn features(&self, word: &str) -> Result<FeatureSet> {
        let key = normalize_word(word);
        let Some(entry) = self.entries.get(key.as_ref()) else {
            return Ok(FeatureSet::default());
        };

        if !self.caching {
            return extract(entry.as_str());
        }

        self.cache
            .get_or_try_insert_with(&key, || extract(entry.as_str()))
            .map(|features| FeatureSet::clone(&features))
    }

    /// Computes and caches features for every word, turning caching on.
    pub fn preload_features(&mut self) -> Result<()> {
        let start = Instant::now();
        self.caching = true;

        for (word, entry) in &self.entries {
            self.cache.insert(word, Arc::new(extract(entry.as_str())?));
        }

        log::info!(
            "Preloaded features for {} words in {} ms",
            self.cache.len(),
            start.elapsed().as_millis()
        );

        Ok(())
    }

    /// True if feature lookups are memoized.
    pub fn is_caching(&self) -> bool {
        self.caching
    }

    /// Enables or disables the feature cache. Disabling also empties it.
    pub fn set_feature_caching(&mut self, enabled: bool) {
        self.caching = enabled;
        if !enabled {
            self.cache.clear();
        }
    }

    /// Drops all memoized features.
    pub fn clear_feature_cache(&self) {
        self.cache.clear();
    }

    /// Number of words with memoized features.
    pub fn cached_feature_count(&self) -> usize {
        self.cache.len()
    }

    // ------------------------------------------------------------------
    // Phones
    // ------------------------------------------------------------------

    /// The phones of `word`, without stress digits.
    ///
    /// Words missing from the lexicon are sent to the letter-to-sound engine
    /// when `use_lts` is set.
    pub fn phonemes(&self, word: &str, use_lts: bool) -> Option<Vec<String>> {
        if let Some(entry) = self.lookup_raw(word) {
            return Some(entry_phones(entry));
        }

        if !use_lts {
            return None;
        }

        let predicted = self.predict(word)?;
        Some(predicted.iter().map(|p| base_phone(p).to_string()).collect())
    }

    /// The phones of `word` joined by the phoneme boundary, or `""`.
    pub fn phoneme_string(&self, word: &str, use_lts: bool) -> String {
        self.phonemes(word, use_lts)
            .map(|phones| phones.join(&PHONEME_BOUNDARY.to_string()))
            .unwrap_or_default()
    }

    /// The phone field of `word`, with stress digits and syllable breaks.
    ///
    /// For a word missing from the lexicon and `use_lts` set, the predicted
    /// phones are syllabified into the same layout. Otherwise `""`.
    pub fn raw_phones(&self, word: &str, use_lts: bool) -> String {
        if let Some(entry) = self.lookup_raw(word) {
            return entry.phone_field().to_string();
        }

        if !use_lts {
            return String::new();
        }

        self.predict(word)
            .map(|phones| self.syllabify_phones(&phones))
            .unwrap_or_default()
    }

    /// Groups a flat phone sequence into a phone field using this lexicon's
    /// phone inventory.
    pub fn syllabify_phones<S: AsRef<str>>(&self, phones: &[S]) -> String {
        format_phone_field(&syllabify(self.inventory.as_ref(), phones))
    }

    /// Whether lookups should fall back to letter-to-sound by default.
    ///
    /// Set with [`LexiconBuilder::lts_fallback`] or the `use_lts` config
    /// field. The query methods still take `use_lts` explicitly.
    pub fn lts_fallback(&self) -> bool {
        self.lts_fallback
    }

    fn predict(&self, word: &str) -> Option<Vec<String>> {
        let word = normalize_word(word);
        if word.is_empty() {
            return None;
        }
        self.lts.predict(&word).filter(|phones| !phones.is_empty())
    }

    // ------------------------------------------------------------------
    // Part of speech
    // ------------------------------------------------------------------

    /// The POS field of `word`, or `""`.
    pub fn pos_str(&self, word: &str) -> String {
        self.lookup_raw(word)
            .map(|entry| entry.pos_field().to_string())
            .unwrap_or_default()
    }

    /// The POS tags of `word`, best first. Empty for absent words.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::InvalidArgument`] if `word` contains whitespace.
    pub fn pos_tags(&self, word: &str) -> Result<Vec<String>> {
        if word.trim().contains(char::is_whitespace) {
            return Err(LexiconError::invalid_argument(
                "word",
                format!("expected a single word, got '{word}'"),
            ));
        }

        Ok(self
            .lookup_raw(word)
            .map(|entry| entry.pos_field().split_whitespace().map(str::to_string).collect())
            .unwrap_or_default())
    }

    /// The first POS tag of `word`, or `""`.
    pub fn best_pos(&self, word: &str) -> String {
        self.lookup_raw(word)
            .and_then(|entry| entry.pos_field().split_whitespace().next())
            .unwrap_or("")
            .to_string()
    }

    /// Words whose best POS tag is `tag`.
    ///
    /// A word qualifies if its POS field starts with `tag` followed by a
    /// space, or is exactly `tag`. Tags compare case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::UnknownTag`] if the tag set does not know `tag`.
    pub fn words_with_pos(&self, tag: &str) -> Result<BTreeSet<String>> {
        Ok(self.word_iterator_with_pos(tag)?.map(str::to_string).collect())
    }

    fn check_tag(&self, tag: &str) -> Result<()> {
        if self.tags.is_known(tag) {
            Ok(())
        } else {
            Err(LexiconError::UnknownTag(tag.to_string()))
        }
    }

    // ------------------------------------------------------------------
    // Search and iteration
    // ------------------------------------------------------------------

    /// Words that match `pattern` in full.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::InvalidPattern`] if `pattern` does not compile.
    pub fn words_matching(&self, pattern: &str) -> Result<BTreeSet<String>> {
        let regex = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(self
            .entries
            .keys()
            .filter(|word| regex.is_match(word))
            .cloned()
            .collect())
    }

    /// Words in mapping order.
    pub fn word_iterator(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Words whose best POS tag is `tag`, in mapping order.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::UnknownTag`] if the tag set does not know `tag`.
    pub fn word_iterator_with_pos(&self, tag: &str) -> Result<impl Iterator<Item = &str> + '_> {
        self.check_tag(tag)?;
        let tag = tag.trim().to_string();

        Ok(self
            .entries
            .iter()
            .filter(move |(_, entry)| has_best_pos(entry, &tag))
            .map(|(word, _)| word.as_str()))
    }

    /// The shared random iterator over every word.
    ///
    /// The iterator is kept between calls and reset each time, which
    /// reshuffles it. It is rebuilt if words were loaded, added or removed
    /// since the previous call.
    pub fn random_word_iterator(&mut self) -> &mut RandomIterator<String> {
        let iterator = match self.random.take() {
            Some(mut iterator) if !self.random_stale => {
                iterator.reset();
                iterator
            }
            _ => self.new_random_iterator(self.words().into_iter().map(str::to_string).collect()),
        };
        self.random_stale = false;
        self.random.insert(iterator)
    }

    /// A fresh random iterator over words whose best POS tag is `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::UnknownTag`] if the tag set does not know `tag`.
    pub fn random_word_iterator_with_pos(&self, tag: &str) -> Result<RandomIterator<String>> {
        let words = self.words_with_pos(tag)?;
        Ok(self.new_random_iterator(words.into_iter().collect()))
    }

    fn new_random_iterator(&self, words: Vec<String>) -> RandomIterator<String> {
        match self.seed {
            Some(seed) => RandomIterator::with_seed(words, seed),
            None => RandomIterator::new(words),
        }
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Adds or replaces `word`, returning the new number of words.
    ///
    /// # Errors
    ///
    /// - [`LexiconError::InvalidArgument`] if `word` is blank or contains a
    ///   reserved character
    /// - [`LexiconError::MalformedEntry`] if either field is empty or
    ///   contains a reserved character
    pub fn add_word(&mut self, word: &str, phone_field: &str, pos_field: &str) -> Result<usize> {
        let key = normalize_word(word);
        check_word(&key)?;

        let entry = RawEntry::new(phone_field, pos_field)?;
        if self.entries.insert(key.into_owned(), entry).is_none() {
            self.random_stale = true;
        }

        Ok(self.entries.len())
    }

    /// Removes `word`, returning its entry if it was present.
    pub fn remove_word(&mut self, word: &str) -> Option<RawEntry> {
        let removed = self.entries.remove(normalize_word(word).as_ref());
        if removed.is_some() {
            self.random_stale = true;
        }
        removed
    }

    /// The underlying word mapping.
    pub fn entries(&self) -> &EntryMap {
        &self.entries
    }

    /// Replaces the word mapping wholesale.
    ///
    /// Keys are trimmed and lowercased; keys that collide after that keep
    /// an arbitrary one of their entries. The addenda count resets to zero
    /// and the feature cache is cleared.
    ///
    /// # Errors
    ///
    /// [`LexiconError::InvalidArgument`] if a key is blank or contains a
    /// reserved character. The lexicon is left unchanged.
    pub fn set_entries(&mut self, entries: EntryMap) -> Result<()> {
        let mut normalized = EntryMap::default();
        normalized.reserve(entries.len());
        for (word, entry) in entries {
            let key = normalize_word(&word).into_owned();
            check_word(&key)?;
            normalized.insert(key, entry);
        }

        self.entries = normalized;
        self.addenda_count = 0;
        self.cache.clear();
        self.random_stale = true;
        Ok(())
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexicon")
            .field("len", &self.entries.len())
            .field("addenda_count", &self.addenda_count)
            .field("caching", &self.caching)
            .field("cached", &self.cache.len())
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

/// Lookup key for a word: trimmed and lowercased.
fn normalize_word(word: &str) -> Cow<'_, str> {
    let word = word.trim();
    if word.chars().any(char::is_uppercase) {
        Cow::Owned(word.to_lowercase())
    } else {
        Cow::Borrowed(word)
    }
}

fn check_word(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(LexiconError::invalid_argument("word", "word must not be empty"));
    }
    if !is_valid_word(key) {
        return Err(LexiconError::invalid_argument(
            "word",
            format!("{key:?} contains a character reserved by the dictionary format"),
        ));
    }
    Ok(())
}

// Phones of a validated entry, stress digits removed.
fn entry_phones(entry: &RawEntry) -> Vec<String> {
    entry
        .phone_field()
        .split_whitespace()
        .flat_map(|token| token.split(PHONEME_BOUNDARY))
        .map(|phone| phone.replace(STRESSED, ""))
        .filter(|phone| !phone.is_empty())
        .collect()
}

fn has_best_pos(entry: &RawEntry, tag: &str) -> bool {
    entry
        .pos_field()
        .split_whitespace()
        .next()
        .is_some_and(|best| best.eq_ignore_ascii_case(tag))
}
