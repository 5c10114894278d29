//! Insert-or-increment counting table.
//!
//! [`Counter`] is the one counting structure behind both levels of the
//! index: the document length table and every per-term document table.

use std::borrow::Borrow;
use std::hash::Hash;

use ahash::RandomState;
use indexmap::IndexMap;
use indexmap::map;
use serde::{Deserialize, Serialize};

/// A table of non-negative occurrence counts keyed by `K`.
///
/// Counts only ever grow: there is no decrement, only whole-key removal
/// through [`Counter::remove`] and [`Counter::retain`]. Keys iterate in the
/// order they were first inserted; removal keeps the order of the rest.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "K: Serialize + Eq + Hash",
    deserialize = "K: Deserialize<'de> + Eq + Hash"
))]
pub struct Counter<K> {
    counts: IndexMap<K, u64, RandomState>,
}

impl<K> Counter<K>
where
    K: Eq + Hash,
{
    /// Create an empty counter.
    pub fn new() -> Self {
        Counter {
            counts: IndexMap::default(),
        }
    }

    /// Increment the count for `key` by one, inserting it at zero first.
    pub fn increment(&mut self, key: K) -> u64 {
        self.add(key, 1)
    }

    /// Add `amount` to the count for `key`, inserting it at zero first.
    pub fn add(&mut self, key: K, amount: u64) -> u64 {
        let count = self.counts.entry(key).or_insert(0);
        *count += amount;
        *count
    }

    /// Ensure `key` is present, leaving an existing count untouched.
    pub fn touch(&mut self, key: K) {
        self.counts.entry(key).or_insert(0);
    }

    /// The count for `key`, or zero when the key is absent.
    pub fn count<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// The count for `key`, or `None` when the key is absent.
    pub fn get<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(key).copied()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.contains_key(key)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.shift_remove(key)
    }

    /// Keep only the entries for which `keep` returns true.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, u64) -> bool,
    {
        self.counts.retain(|key, count| keep(key, *count));
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    pub fn keys(&self) -> map::Keys<'_, K, u64> {
        self.counts.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.counts.iter().map(|(key, count)| (key, *count))
    }
}

impl<K> Counter<K>
where
    K: Eq + Hash + Clone,
{
    /// Add every count of `other` into this counter.
    pub fn merge_from(&mut self, other: &Counter<K>) {
        for (key, count) in other.iter() {
            self.add(key.clone(), count);
        }
    }
}

impl<K> Default for Counter<K>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> PartialEq for Counter<K>
where
    K: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<K> Eq for Counter<K> where K: Eq + Hash {}

impl<K> FromIterator<(K, u64)> for Counter<K>
where
    K: Eq + Hash,
{
    /// Build a counter from `(key, count)` pairs, summing repeated keys.
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut counter = Counter::new();
        for (key, count) in iter {
            counter.add(key, count);
        }
        counter
    }
}

impl<K> Extend<K> for Counter<K>
where
    K: Eq + Hash,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.increment(key);
        }
    }
}

impl<K> IntoIterator for Counter<K> {
    type Item = (K, u64);
    type IntoIter = map::IntoIter<K, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a Counter<K> {
    type Item = (&'a K, &'a u64);
    type IntoIter = map::Iter<'a, K, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}
