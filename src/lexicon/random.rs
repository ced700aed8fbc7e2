//! Randomized, restartable traversal over a snapshot of items.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Yields every item of a snapshot exactly once, in a random order.
///
/// The permutation is drawn when the iterator is built and again on every
/// [`reset`](Self::reset). A seeded iterator produces the same sequence of
/// permutations on every run.
///
/// # Example
///
/// ```rust
/// use phonolex::lexicon::RandomIterator;
///
/// let mut it = RandomIterator::with_seed(vec!["a", "b", "c"], 7);
/// let mut first: Vec<_> = it.by_ref().collect();
/// first.sort();
/// assert_eq!(first, ["a", "b", "c"]);
///
/// it.reset();
/// assert_eq!(it.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct RandomIterator<T> {
    items: Vec<T>,
    cursor: usize,
    rng: StdRng,
}

impl<T: Clone> RandomIterator<T> {
    /// Builds an iterator seeded from system entropy.
    pub fn new(items: Vec<T>) -> Self {
        Self::with_rng(items, StdRng::from_entropy())
    }

    /// Builds a deterministic iterator.
    pub fn with_seed(items: Vec<T>, seed: u64) -> Self {
        Self::with_rng(items, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut items: Vec<T>, mut rng: StdRng) -> Self {
        items.shuffle(&mut rng);
        Self {
            items,
            cursor: 0,
            rng,
        }
    }

    /// Reshuffles the snapshot and rewinds to the start.
    pub fn reset(&mut self) {
        self.items.shuffle(&mut self.rng);
        self.cursor = 0;
    }

    /// Number of items in the snapshot, consumed or not.
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// True once every item has been yielded.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.items.len()
    }
}

impl<T: Clone> Iterator for RandomIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.items.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len().saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for RandomIterator<T> {}

impl<T: Clone> std::iter::FusedIterator for RandomIterator<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_yields_each_item_once() {
        let items: Vec<u32> = (0..100).collect();
        let it = RandomIterator::with_seed(items.clone(), 1);
        assert_eq!(it.len(), 100);

        let seen: Vec<u32> = it.collect();
        assert_eq!(seen.len(), 100);
        let distinct: BTreeSet<u32> = seen.into_iter().collect();
        assert_eq!(distinct, items.into_iter().collect());
    }

    #[test]
    fn test_reset_restarts_traversal() {
        let mut it = RandomIterator::with_seed((0..20).collect::<Vec<u32>>(), 3);
        assert_eq!(it.by_ref().count(), 20);
        assert!(it.is_exhausted());
        assert_eq!(it.next(), None);

        it.reset();
        assert!(!it.is_exhausted());
        let again: BTreeSet<u32> = it.by_ref().collect();
        assert_eq!(again.len(), 20);
    }

    #[test]
    fn test_reset_mid_traversal() {
        let mut it = RandomIterator::with_seed(vec!['a', 'b', 'c', 'd'], 9);
        it.next();
        it.next();
        assert_eq!(it.len(), 2);

        it.reset();
        assert_eq!(it.len(), 4);
        assert_eq!(it.total(), 4);
    }

    #[test]
    fn test_seed_is_deterministic() {
        let a: Vec<u32> = RandomIterator::with_seed((0..50).collect(), 42).collect();
        let b: Vec<u32> = RandomIterator::with_seed((0..50).collect(), 42).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_snapshot() {
        let mut it = RandomIterator::<String>::new(Vec::new());
        assert_eq!(it.len(), 0);
        assert!(it.is_exhausted());
        assert_eq!(it.next(), None);
        it.reset();
        assert_eq!(it.next(), None);
    }
}
