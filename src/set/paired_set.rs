//! PairedSet: ordered key/value pairs with O(1) key lookup
//!
//! An ordered sequence of [`Pair`]s plus a key-to-value hash lookup. Keys are
//! unique; values may repeat. The pair at position `i` is reachable in O(1)
//! via its position and in O(1) via its key.
//!
//! # Deliberate asymmetry
//!
//! [`PairedSet::index_of_key`] is O(n). This container trades O(1)
//! position-by-key lookup for O(1) value-by-key lookup: the hash structure
//! maps keys to values, not to positions, so positional inserts and removals
//! never have to renumber it. Callers that need fast position-by-key should
//! use [`IndexedDictionary`](crate::map::IndexedDictionary) or keep their own
//! reverse index.
//!
//! Lookup by value is unsupported altogether and fails fast with
//! `NotSupported` rather than silently scanning; values are not unique, so a
//! scan could only ever return an arbitrary match.

use crate::error::{check_bounds, check_insert_bounds, OrdixError, Result};
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::mem;
use std::ops::Index;

/// A key/value pair held by [`PairedSet`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair<K, V> {
    /// The unique key
    pub key: K,
    /// The payload value; not required to be unique
    pub value: V,
}

impl<K, V> Pair<K, V> {
    /// Create a new pair
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

/// Ordered sequence of key/value pairs with unique keys
///
/// # Examples
///
/// ```rust
/// use ordix::set::{Pair, PairedSet};
///
/// let mut set = PairedSet::new();
/// set.add("a", 1).unwrap();
/// set.add("b", 2).unwrap();
///
/// assert_eq!(set.get_by_key(&"a").unwrap(), (&"a", &1));
/// assert_eq!(set.get(1).unwrap(), &Pair::new("b", 2));
/// assert!(set.add("a", 9).is_err());
/// ```
#[derive(Clone)]
pub struct PairedSet<K, V, S = ahash::RandomState> {
    pairs: Vec<Pair<K, V>>,
    lookup: HashMap<K, V, S>,
}

impl<K, V> PairedSet<K, V, ahash::RandomState>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a new empty paired set with the default hasher
    pub fn new() -> Self {
        Self::with_hasher(ahash::RandomState::new())
    }

    /// Create a paired set pre-sized for `capacity` pairs
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, ahash::RandomState::new())
    }

    /// Build a paired set from a sequence of pairs, failing on the first
    /// duplicate key
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut set = Self::new();
        for (key, value) in pairs {
            set.add(key, value)?;
        }
        Ok(set)
    }
}

impl<K, V, S> PairedSet<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    /// Create a new empty paired set with a custom hasher
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            pairs: Vec::new(),
            lookup: HashMap::with_hasher(hash_builder),
        }
    }

    /// Create a pre-sized paired set with a custom hasher
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
            lookup: HashMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Number of pairs in the set
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if the set is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Check whether a pair with `key` is present
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.lookup.contains_key(key)
    }

    /// Append a pair, failing with `DuplicateKey` if `key` exists
    pub fn add(&mut self, key: K, value: V) -> Result<()> {
        if self.lookup.contains_key(&key) {
            return Err(OrdixError::duplicate_key());
        }
        self.lookup.insert(key.clone(), value.clone());
        self.pairs.push(Pair::new(key, value));
        Ok(())
    }

    /// Get the pair at `index`, failing with `OutOfBounds` if invalid
    #[inline]
    pub fn get(&self, index: usize) -> Result<&Pair<K, V>> {
        check_bounds(index, self.pairs.len())?;
        Ok(&self.pairs[index])
    }

    /// Replace the pair at `index`, returning the old pair
    ///
    /// The old key is evicted from the lookup and the new key inserted. If
    /// the new key collides with a pair at another position, the lookup is
    /// rebuilt from the sequence and the call fails with `DuplicateKey`,
    /// leaving the set exactly as it was.
    pub fn set(&mut self, index: usize, pair: Pair<K, V>) -> Result<Pair<K, V>> {
        check_bounds(index, self.pairs.len())?;
        if self.pairs[index].key == pair.key {
            self.lookup.insert(pair.key.clone(), pair.value.clone());
            return Ok(mem::replace(&mut self.pairs[index], pair));
        }
        self.lookup.remove(&self.pairs[index].key);
        if self.lookup.contains_key(&pair.key) {
            self.rebuild_lookup();
            return Err(OrdixError::duplicate_key());
        }
        self.lookup.insert(pair.key.clone(), pair.value.clone());
        Ok(mem::replace(&mut self.pairs[index], pair))
    }

    /// Key and value for `key`, failing with `KeyNotFound` if absent; O(1)
    pub fn get_by_key(&self, key: &K) -> Result<(&K, &V)> {
        self.lookup
            .get_key_value(key)
            .ok_or_else(OrdixError::key_not_found)
    }

    /// Key and value for `key`, or `None` if absent; O(1)
    pub fn try_get_by_key(&self, key: &K) -> Option<(&K, &V)> {
        self.lookup.get_key_value(key)
    }

    /// Position of the pair with `key`, failing with `KeyNotFound` if absent
    ///
    /// O(n) scan over the sequence; see the module docs for why this is not
    /// backed by the hash lookup.
    pub fn index_of_key(&self, key: &K) -> Result<usize> {
        self.pairs
            .iter()
            .position(|pair| &pair.key == key)
            .ok_or_else(OrdixError::key_not_found)
    }

    /// Position of the first pair holding `value`
    ///
    /// Unsupported: values are not unique and no reverse index is kept, so
    /// this fails fast with `NotSupported` instead of scanning. Callers
    /// needing value lookup must build their own reverse index.
    pub fn index_of_value(&self, _value: &V) -> Result<usize> {
        Err(OrdixError::not_supported(
            "value-based lookup on PairedSet; build a reverse index",
        ))
    }

    /// Remove and return the pair with `key`, failing with `KeyNotFound`
    /// if absent
    pub fn remove_by_key(&mut self, key: &K) -> Result<Pair<K, V>> {
        let index = self.index_of_key(key)?;
        let pair = self.pairs.remove(index);
        self.lookup.remove(key);
        Ok(pair)
    }

    /// Insert a pair at `index`, failing with `DuplicateKey` if `key` exists
    pub fn insert(&mut self, index: usize, pair: Pair<K, V>) -> Result<()> {
        check_insert_bounds(index, self.pairs.len())?;
        if self.lookup.contains_key(&pair.key) {
            return Err(OrdixError::duplicate_key());
        }
        self.lookup.insert(pair.key.clone(), pair.value.clone());
        self.pairs.insert(index, pair);
        Ok(())
    }

    /// Remove and return the pair at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<Pair<K, V>> {
        check_bounds(index, self.pairs.len())?;
        let pair = self.pairs.remove(index);
        self.lookup.remove(&pair.key);
        Ok(pair)
    }

    /// Remove all pairs
    pub fn clear(&mut self) {
        self.pairs.clear();
        self.lookup.clear();
    }

    /// View the pairs as a slice in positional order
    #[inline]
    pub fn as_slice(&self) -> &[Pair<K, V>] {
        &self.pairs
    }

    /// Iterate over the pairs in positional order
    pub fn iter(&self) -> std::slice::Iter<'_, Pair<K, V>> {
        self.pairs.iter()
    }

    /// Iterate over the keys in positional order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.pairs.iter().map(|pair| &pair.key)
    }

    /// Iterate over the values in positional order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.pairs.iter().map(|pair| &pair.value)
    }

    /// Check that the sequence and the key lookup agree
    ///
    /// Intended for tests and debug assertions. Values must compare equal
    /// across the two structures for the check to pass.
    pub fn is_consistent(&self) -> bool
    where
        V: PartialEq,
    {
        self.pairs.len() == self.lookup.len()
            && self
                .pairs
                .iter()
                .all(|pair| self.lookup.get(&pair.key) == Some(&pair.value))
    }

    /// Rebuild the key lookup from the ordered sequence
    fn rebuild_lookup(&mut self) {
        self.lookup.clear();
        for pair in &self.pairs {
            self.lookup.insert(pair.key.clone(), pair.value.clone());
        }
    }
}

impl<K, V, S> Default for PairedSet<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> std::fmt::Debug for PairedSet<K, V, S>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.pairs.iter().map(|pair| (&pair.key, &pair.value)))
            .finish()
    }
}

/// Panicking positional access; use [`PairedSet::get`] for the checked form
impl<K, V, S> Index<usize> for PairedSet<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    type Output = Pair<K, V>;

    fn index(&self, index: usize) -> &Pair<K, V> {
        &self.pairs[index]
    }
}

impl<K, V, S> IntoIterator for PairedSet<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    type Item = Pair<K, V>;
    type IntoIter = std::vec::IntoIter<Pair<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a PairedSet<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    type Item = &'a Pair<K, V>;
    type IntoIter = std::slice::Iter<'a, Pair<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut set = PairedSet::new();
        set.add("a", 1).unwrap();
        set.add("b", 2).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap(), &Pair::new("a", 1));
        assert_eq!(set.get_by_key(&"a").unwrap(), (&"a", &1));
        assert!(set.is_consistent());
    }

    #[test]
    fn test_add_duplicate_key() {
        let mut set = PairedSet::new();
        set.add("a", 1).unwrap();
        assert_eq!(set.add("a", 2), Err(OrdixError::DuplicateKey));
        assert_eq!(set.get_by_key(&"a").unwrap(), (&"a", &1));
        assert!(set.is_consistent());
    }

    #[test]
    fn test_values_may_repeat() {
        let mut set = PairedSet::new();
        set.add("a", 1).unwrap();
        set.add("b", 1).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.is_consistent());
    }

    #[test]
    fn test_set_rekeys() {
        let mut set = PairedSet::new();
        set.add("a", 1).unwrap();
        set.add("b", 2).unwrap();

        let old = set.set(0, Pair::new("c", 1)).unwrap();
        assert_eq!(old, Pair::new("a", 1));
        assert_eq!(set.get_by_key(&"c").unwrap(), (&"c", &1));
        assert_eq!(set.get_by_key(&"a"), Err(OrdixError::KeyNotFound));
        assert!(set.is_consistent());
    }

    #[test]
    fn test_set_duplicate_key_rolls_back() {
        let mut set = PairedSet::new();
        set.add("c", 1).unwrap();
        set.add("b", 2).unwrap();

        // "c" already names the pair at index 0.
        assert_eq!(
            set.set(1, Pair::new("c", 9)),
            Err(OrdixError::DuplicateKey)
        );
        assert_eq!(set.get(1).unwrap(), &Pair::new("b", 2));
        assert_eq!(set.index_of_key(&"c").unwrap(), 0);
        assert_eq!(set.get_by_key(&"c").unwrap(), (&"c", &1));
        assert!(set.is_consistent());
    }

    #[test]
    fn test_set_same_key_updates_value() {
        let mut set = PairedSet::new();
        set.add("a", 1).unwrap();
        let old = set.set(0, Pair::new("a", 5)).unwrap();
        assert_eq!(old, Pair::new("a", 1));
        assert_eq!(set.get_by_key(&"a").unwrap(), (&"a", &5));
        assert!(set.is_consistent());
    }

    #[test]
    fn test_index_of_key_scans() {
        let mut set = PairedSet::new();
        set.add("a", 1).unwrap();
        set.add("b", 2).unwrap();
        assert_eq!(set.index_of_key(&"b").unwrap(), 1);
        assert_eq!(set.index_of_key(&"z"), Err(OrdixError::KeyNotFound));
    }

    #[test]
    fn test_index_of_value_unsupported() {
        let mut set = PairedSet::new();
        set.add("a", 1).unwrap();
        let err = set.index_of_value(&1).unwrap_err();
        assert_eq!(err.category(), "unsupported");
    }

    #[test]
    fn test_remove_by_key() {
        let mut set = PairedSet::new();
        set.add("a", 1).unwrap();
        set.add("b", 2).unwrap();

        let removed = set.remove_by_key(&"a").unwrap();
        assert_eq!(removed, Pair::new("a", 1));
        assert_eq!(set.len(), 1);
        assert_eq!(set.index_of_key(&"b").unwrap(), 0);
        assert_eq!(set.remove_by_key(&"a"), Err(OrdixError::KeyNotFound));
        assert!(set.is_consistent());
    }

    #[test]
    fn test_insert_and_remove_at() {
        let mut set = PairedSet::new();
        set.add("a", 1).unwrap();
        set.add("c", 3).unwrap();

        set.insert(1, Pair::new("b", 2)).unwrap();
        assert_eq!(set.index_of_key(&"b").unwrap(), 1);
        assert_eq!(set.index_of_key(&"c").unwrap(), 2);

        let removed = set.remove_at(0).unwrap();
        assert_eq!(removed, Pair::new("a", 1));
        assert!(!set.contains_key(&"a"));
        assert!(set.is_consistent());

        assert_eq!(
            set.insert(9, Pair::new("z", 0)),
            Err(OrdixError::out_of_bounds(9, 2))
        );
        assert_eq!(
            set.insert(0, Pair::new("b", 7)),
            Err(OrdixError::DuplicateKey)
        );
    }

    #[test]
    fn test_from_pairs_strict() {
        let set = PairedSet::from_pairs([("a", 1), ("b", 2)]).unwrap();
        assert_eq!(set.len(), 2);

        let err = PairedSet::from_pairs([("a", 1), ("a", 2)]).unwrap_err();
        assert_eq!(err, OrdixError::DuplicateKey);
    }

    #[test]
    fn test_keys_values_order() {
        let set = PairedSet::from_pairs([("x", 10), ("y", 20)]).unwrap();
        let keys: Vec<_> = set.keys().copied().collect();
        let values: Vec<_> = set.values().copied().collect();
        assert_eq!(keys, vec!["x", "y"]);
        assert_eq!(values, vec![10, 20]);
    }

    #[test]
    fn test_bounds() {
        let set: PairedSet<&str, i32> = PairedSet::new();
        assert_eq!(set.get(0), Err(OrdixError::out_of_bounds(0, 0)));
    }
}
