//! Concurrent memoization of feature sets.
//!
//! [`FeatureCache`] maps words to the [`FeatureSet`] computed for them. It is
//! owned by a [`Lexicon`](crate::Lexicon) and shared between readers, so all
//! operations take `&self`.
//!
//! # Storage
//!
//! ```text
//! default           Arc<RwLock<FxHashMap<String, Arc<FeatureSet>>>>   (parking_lot)
//! cache-dashmap     Arc<DashMap<String, Arc<FeatureSet>>>
//! ```
//!
//! Two threads computing the same word concurrently both insert; the last
//! write wins and both values are equal. The cache has no size bound and
//! never expires entries. Callers clear it explicitly after mutating the
//! lexicon.

use crate::features::FeatureSet;
use std::sync::Arc;

#[cfg(feature = "cache-dashmap")]
use dashmap::DashMap;
#[cfg(not(feature = "cache-dashmap"))]
use parking_lot::RwLock;
#[cfg(not(feature = "cache-dashmap"))]
use rustc_hash::FxHashMap;

#[cfg(feature = "cache-dashmap")]
type Storage = Arc<DashMap<String, Arc<FeatureSet>, rustc_hash::FxBuildHasher>>;
#[cfg(not(feature = "cache-dashmap"))]
type Storage = Arc<RwLock<FxHashMap<String, Arc<FeatureSet>>>>;

/// Thread-safe word → feature set cache.
///
/// Cloning is cheap and yields a handle to the same storage.
#[derive(Clone, Default)]
pub struct FeatureCache {
    entries: Storage,
}

impl FeatureCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached features for `word`, if present.
    pub fn get(&self, word: &str) -> Option<Arc<FeatureSet>> {
        #[cfg(feature = "cache-dashmap")]
        {
            self.entries.get(word).map(|entry| Arc::clone(entry.value()))
        }

        #[cfg(not(feature = "cache-dashmap"))]
        {
            self.entries.read().get(word).cloned()
        }
    }

    /// Stores features for `word`, replacing any previous value.
    pub fn insert(&self, word: &str, features: Arc<FeatureSet>) {
        #[cfg(feature = "cache-dashmap")]
        {
            self.entries.insert(word.to_string(), features);
        }

        #[cfg(not(feature = "cache-dashmap"))]
        {
            self.entries.write().insert(word.to_string(), features);
        }
    }

    /// Returns the cached value, computing and storing it on a miss.
    ///
    /// The computation runs without holding any lock.
    pub fn get_or_try_insert_with<F, E>(&self, word: &str, compute: F) -> Result<Arc<FeatureSet>, E>
    where
        F: FnOnce() -> Result<FeatureSet, E>,
    {
        if let Some(features) = self.get(word) {
            return Ok(features);
        }

        let features = Arc::new(compute()?);
        self.insert(word, Arc::clone(&features));
        Ok(features)
    }

    /// Drops the cached value for `word`.
    pub fn remove(&self, word: &str) -> Option<Arc<FeatureSet>> {
        #[cfg(feature = "cache-dashmap")]
        {
            self.entries.remove(word).map(|(_, features)| features)
        }

        #[cfg(not(feature = "cache-dashmap"))]
        {
            self.entries.write().remove(word)
        }
    }

    /// Drops every cached value.
    pub fn clear(&self) {
        #[cfg(feature = "cache-dashmap")]
        {
            self.entries.clear();
        }

        #[cfg(not(feature = "cache-dashmap"))]
        {
            self.entries.write().clear();
        }
    }

    /// Number of cached words.
    pub fn len(&self) -> usize {
        #[cfg(feature = "cache-dashmap")]
        {
            self.entries.len()
        }

        #[cfg(not(feature = "cache-dashmap"))]
        {
            self.entries.read().len()
        }
    }

    /// True if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for FeatureCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureCache")
            .field("len", &self.len())
            .finish()
    }
}
