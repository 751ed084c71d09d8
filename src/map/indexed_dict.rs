//! IndexedDictionary: a key/value mapping that preserves insertion order
//!
//! A hash mapping plus an ordered sequence of keys. Iteration and positional
//! access follow the order keys were first added; updating the value of an
//! existing key keeps its position, while removing a key and adding it again
//! appends it at the end.
//!
//! # Examples
//!
//! ```rust
//! use ordix::map::IndexedDictionary;
//!
//! let mut dict = IndexedDictionary::new();
//! dict.add("x", 1).unwrap();
//! dict.add("y", 2).unwrap();
//! dict.remove(&"x");
//! dict.add("x", 3).unwrap();
//!
//! let keys: Vec<_> = dict.keys().copied().collect();
//! assert_eq!(keys, vec!["y", "x"]);
//! ```

use crate::error::{check_bounds, OrdixError, Result};
use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, Hash};
use std::mem;

/// Key/value mapping with insertion-order iteration and positional access
///
/// Strict addition (`add`) rejects duplicate keys; `insert` carries indexer
/// semantics (update in place, or append when new). Removal is probe-style
/// and returns the removed value as an `Option`.
#[derive(Clone)]
pub struct IndexedDictionary<K, V, S = ahash::RandomState> {
    entries: HashMap<K, V, S>,
    order: Vec<K>,
}

impl<K, V> IndexedDictionary<K, V, ahash::RandomState>
where
    K: Hash + Eq + Clone,
{
    /// Create a new empty dictionary with the default hasher
    pub fn new() -> Self {
        Self::with_hasher(ahash::RandomState::new())
    }

    /// Create a dictionary pre-sized for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, ahash::RandomState::new())
    }
}

impl<K, V, S> IndexedDictionary<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Create a new empty dictionary with a custom hasher
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            entries: HashMap::with_hasher(hash_builder),
            order: Vec::new(),
        }
    }

    /// Create a pre-sized dictionary with a custom hasher
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            entries: HashMap::with_capacity_and_hasher(capacity, hash_builder),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Number of entries in the dictionary
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the dictionary is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Check whether `key` is present
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Add a new entry, failing with `DuplicateKey` if `key` exists
    pub fn add(&mut self, key: K, value: V) -> Result<()> {
        if self.entries.contains_key(&key) {
            return Err(OrdixError::duplicate_key());
        }
        self.order.push(key.clone());
        self.entries.insert(key, value);
        Ok(())
    }

    /// Set `key` to `value`, returning the previous value if any
    ///
    /// Indexer semantics: an existing key keeps its position in the key
    /// order and only its value changes; a new key is appended at the end.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.entries.get_mut(&key) {
            return Some(mem::replace(slot, value));
        }
        self.order.push(key.clone());
        self.entries.insert(key, value);
        None
    }

    /// Value for `key`, or `None` if absent
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Mutable value for `key`, or `None` if absent
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    /// Value for `key`, failing with `KeyNotFound` if absent
    pub fn value(&self, key: &K) -> Result<&V> {
        self.entries.get(key).ok_or_else(OrdixError::key_not_found)
    }

    /// Remove `key`, returning its value if it was present
    ///
    /// The key leaves the order sequence as well; adding it again later
    /// appends it at the end rather than restoring its old position.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let value = self.entries.remove(key)?;
        if let Some(index) = self.order.iter().position(|held| held == key) {
            self.order.remove(index);
        }
        Some(value)
    }

    /// Position of `key` in the order sequence, failing with `KeyNotFound`
    /// if absent; O(n)
    pub fn index_of_key(&self, key: &K) -> Result<usize> {
        self.order
            .iter()
            .position(|held| held == key)
            .ok_or_else(OrdixError::key_not_found)
    }

    /// Key at `index` in the order sequence
    pub fn key_at(&self, index: usize) -> Result<&K> {
        check_bounds(index, self.order.len())?;
        Ok(&self.order[index])
    }

    /// Value at `index` in the order sequence
    pub fn value_at(&self, index: usize) -> Result<&V> {
        check_bounds(index, self.order.len())?;
        self.entries
            .get(&self.order[index])
            .ok_or_else(OrdixError::key_not_found)
    }

    /// Replace the value at `index`, returning the old value
    pub fn set_value_at(&mut self, index: usize, value: V) -> Result<V> {
        check_bounds(index, self.order.len())?;
        match self.entries.get_mut(&self.order[index]) {
            Some(slot) => Ok(mem::replace(slot, value)),
            None => Err(OrdixError::key_not_found()),
        }
    }

    /// Keep only the entries satisfying `predicate`, preserving key order
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.entries.retain(|key, value| predicate(key, value));
        let entries = &self.entries;
        self.order.retain(|key| entries.contains_key(key));
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Iterate over the keys in insertion order
    pub fn keys(&self) -> std::slice::Iter<'_, K> {
        self.order.iter()
    }

    /// Iterate over the values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.order.iter().filter_map(|key| self.entries.get(key))
    }

    /// Iterate over `(key, value)` entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.order
            .iter()
            .filter_map(|key| self.entries.get_key_value(key))
    }

    /// Check that the order sequence mirrors the mapping's key set exactly
    ///
    /// Intended for tests and debug assertions.
    pub fn is_consistent(&self) -> bool {
        if self.order.len() != self.entries.len() {
            return false;
        }
        let mut seen: HashSet<&K> = HashSet::with_capacity(self.order.len());
        self.order
            .iter()
            .all(|key| self.entries.contains_key(key) && seen.insert(key))
    }
}

impl<K, V, S> Default for IndexedDictionary<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> std::fmt::Debug for IndexedDictionary<K, V, S>
where
    K: Hash + Eq + Clone + std::fmt::Debug,
    V: std::fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Mapping equality, independent of key order
impl<K, V, S> PartialEq for IndexedDictionary<K, V, S>
where
    K: Hash + Eq + Clone,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K, V, S> Eq for IndexedDictionary<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Eq,
    S: BuildHasher,
{
}

/// Bulk construction uses indexer semantics: first occurrence fixes the
/// position, last occurrence fixes the value
impl<K, V, S> FromIterator<(K, V)> for IndexedDictionary<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::with_hasher(S::default());
        dict.extend(iter);
        dict
    }
}

impl<K, V, S> Extend<(K, V)> for IndexedDictionary<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, S> IntoIterator for IndexedDictionary<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut entries = Vec::with_capacity(self.order.len());
        for key in mem::take(&mut self.order) {
            if let Some(value) = self.entries.remove(&key) {
                entries.push((key, value));
            }
        }
        entries.into_iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a IndexedDictionary<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
