//! IndexedSet: a duplicate-free set with list-like positional access
//!
//! Combines the position bookkeeping of [`OrderedIndex`] with the algebraic
//! operations of [`UnorderedSet`](crate::set::UnorderedSet): membership and
//! `index_of` are O(1) average, positional `insert`/`remove_at` are O(n)
//! (tail renumbering), and the four set algebra operations return a fresh
//! `IndexedSet` without touching their operands.
//!
//! # Result ordering of algebra operations
//!
//! The result order is deterministic: the first named operand is always
//! iterated first, then the second. `union_of([1, 2], [3, 2])` yields
//! `[1, 2, 3]`; `symmetric_difference_of(a, b)` yields `a`'s survivors in
//! `a`'s order followed by `b`'s survivors in `b`'s order. There is no
//! operand-size shortcut that could reorder results.
//!
//! # Examples
//!
//! ```rust
//! use ordix::set::IndexedSet;
//!
//! let mut set = IndexedSet::new();
//! set.add("a").unwrap();
//! set.add("b").unwrap();
//! set.insert(1, "c").unwrap();
//!
//! assert_eq!(set.as_slice(), &["a", "c", "b"]);
//! assert_eq!(set.index_of(&"b").unwrap(), 2);
//! ```

use crate::error::{OrdixError, Result};
use crate::set::OrderedIndex;
use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};
use std::ops::Index;

/// Ordered, duplicate-free set with O(1) membership and position lookup
///
/// Positional order is insertion order, preserved across every operation
/// except explicit positional mutation. Equality is set equality
/// (cardinality plus mutual containment); compare [`IndexedSet::as_slice`]
/// when sequence equality is wanted.
#[derive(Clone)]
pub struct IndexedSet<T, S = ahash::RandomState> {
    inner: OrderedIndex<T, S>,
}

impl<T> IndexedSet<T, ahash::RandomState>
where
    T: Hash + Eq + Clone,
{
    /// Create a new empty set with the default hasher
    pub fn new() -> Self {
        Self {
            inner: OrderedIndex::new(),
        }
    }

    /// Create a set pre-sized for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: OrderedIndex::with_capacity(capacity),
        }
    }
}

impl<T, S> IndexedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Create a new empty set with a custom hasher
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            inner: OrderedIndex::with_hasher(hash_builder),
        }
    }

    /// Create a pre-sized set with a custom hasher
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            inner: OrderedIndex::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Number of elements in the set
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the set is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Check whether `item` is present
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.inner.contains(item)
    }

    /// Check whether every element of `items` is present
    pub fn contains_all<'a, I>(&self, items: I) -> bool
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().all(|item| self.inner.contains(item))
    }

    /// Position of `item`, failing with `ElementNotFound` if absent
    ///
    /// This is a strict lookup; probe with [`IndexedSet::contains`] first
    /// when absence is an expected outcome.
    pub fn index_of(&self, item: &T) -> Result<usize> {
        self.inner
            .position_of(item)
            .ok_or_else(OrdixError::element_not_found)
    }

    /// Get the element at `index`, failing with `OutOfBounds` if invalid
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        self.inner.get(index)
    }

    /// First element in positional order, or `None` if empty
    pub fn first(&self) -> Option<&T> {
        self.inner.as_slice().first()
    }

    /// Last element in positional order, or `None` if empty
    pub fn last(&self) -> Option<&T> {
        self.inner.as_slice().last()
    }

    /// View the set as a slice in positional order
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// Iterate over the elements in positional order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.inner.iter()
    }

    /// Access the set's hash state
    #[inline]
    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    /// Append `item`, failing with `DuplicateElement` if already present
    pub fn add(&mut self, item: T) -> Result<()> {
        self.inner.push(item)
    }

    /// Idempotent append; returns whether the element was newly inserted
    pub fn include(&mut self, item: T) -> bool {
        if self.inner.contains(&item) {
            false
        } else {
            // Freshly checked, push cannot observe a duplicate.
            self.inner.push(item).is_ok()
        }
    }

    /// Add every element of `items`, failing on the first duplicate
    pub fn add_all<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.add(item)?;
        }
        Ok(())
    }

    /// Idempotently append every element of `items`; returns how many were new
    pub fn include_all<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut inserted = 0;
        for item in items {
            if self.include(item) {
                inserted += 1;
            }
        }
        inserted
    }

    /// Replace the element at `index` with `item`, returning the old element
    ///
    /// Fails with `DuplicateElement` if `item` already exists at another
    /// position; the failed call leaves the set exactly as it was.
    pub fn set(&mut self, index: usize, item: T) -> Result<T> {
        self.inner.replace(index, item)
    }

    /// Insert `item` at `index`, shifting subsequent elements right
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        self.inner.insert(index, item)
    }

    /// Remove and return the element at `index`, shifting subsequent
    /// elements left
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.inner.remove_at(index)
    }

    /// Remove `item`, failing with `ElementNotFound` if absent
    pub fn remove(&mut self, item: &T) -> Result<()> {
        let index = self.index_of(item)?;
        self.inner.remove_at(index)?;
        Ok(())
    }

    /// Remove `item` if present; returns whether it was removed
    pub fn try_remove(&mut self, item: &T) -> bool {
        match self.inner.position_of(item) {
            Some(index) => self.inner.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Keep only the elements satisfying `predicate`, preserving order
    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.inner.retain(predicate);
    }

    /// Remove all elements
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Check the bijection invariant between sequence and position lookup
    ///
    /// Intended for tests and debug assertions.
    pub fn is_consistent(&self) -> bool {
        self.inner.is_consistent()
    }
}

impl<T, S> IndexedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    /// Elements of `a` then `b`, each exactly once, in first-seen order
    pub fn union_of<A, B>(a: A, b: B) -> Self
    where
        A: IntoIterator<Item = T>,
        B: IntoIterator<Item = T>,
    {
        let mut result = Self::with_hasher(S::default());
        result.include_all(a);
        result.include_all(b);
        result
    }

    /// Elements present in both `a` and `b`, in `a`'s order
    pub fn intersect_of<A, B>(a: A, b: B) -> Self
    where
        A: IntoIterator<Item = T>,
        B: IntoIterator<Item = T>,
    {
        let right: HashSet<T, S> = b.into_iter().collect();
        let mut result = Self::with_hasher(S::default());
        for item in a {
            if right.contains(&item) {
                result.include(item);
            }
        }
        result
    }

    /// Elements of `a` absent from `b`, in `a`'s order
    pub fn difference_of<A, B>(a: A, b: B) -> Self
    where
        A: IntoIterator<Item = T>,
        B: IntoIterator<Item = T>,
    {
        let right: HashSet<T, S> = b.into_iter().collect();
        let mut result = Self::with_hasher(S::default());
        for item in a {
            if !right.contains(&item) {
                result.include(item);
            }
        }
        result
    }

    /// Elements in exactly one operand: `a`'s survivors first, then `b`'s
    pub fn symmetric_difference_of<A, B>(a: A, b: B) -> Self
    where
        A: IntoIterator<Item = T>,
        B: IntoIterator<Item = T>,
    {
        let left: Self = a.into_iter().collect();
        let right: Self = b.into_iter().collect();
        let mut result = Self::with_hasher(S::default());
        for item in left.iter() {
            if !right.contains(item) {
                result.include(item.clone());
            }
        }
        for item in right.iter() {
            if !left.contains(item) {
                result.include(item.clone());
            }
        }
        result
    }
}

impl<T, S> IndexedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    /// Union with another set: `self`'s elements first, then `other`'s
    ///
    /// The result carries a clone of `self`'s hash state, so these methods
    /// stay available for injected hashers without a `Default` impl.
    pub fn union_with(&self, other: &Self) -> Self {
        let mut result =
            Self::with_capacity_and_hasher(self.len() + other.len(), self.hasher().clone());
        result.include_all(self.iter().cloned());
        result.include_all(other.iter().cloned());
        result
    }

    /// Intersection with another set, in `self`'s order
    pub fn intersect_with(&self, other: &Self) -> Self {
        let mut result = Self::with_hasher(self.hasher().clone());
        for item in self.iter() {
            if other.contains(item) {
                result.include(item.clone());
            }
        }
        result
    }

    /// Difference with another set, in `self`'s order
    pub fn difference_with(&self, other: &Self) -> Self {
        let mut result = Self::with_hasher(self.hasher().clone());
        for item in self.iter() {
            if !other.contains(item) {
                result.include(item.clone());
            }
        }
        result
    }

    /// Symmetric difference: `self`'s survivors first, then `other`'s
    pub fn symmetric_difference_with(&self, other: &Self) -> Self {
        let mut result = Self::with_hasher(self.hasher().clone());
        for item in self.iter() {
            if !other.contains(item) {
                result.include(item.clone());
            }
        }
        for item in other.iter() {
            if !self.contains(item) {
                result.include(item.clone());
            }
        }
        result
    }
}

impl<T, S> Default for IndexedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> std::fmt::Debug for IndexedSet<T, S>
where
    T: Hash + Eq + Clone + std::fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.inner.iter()).finish()
    }
}

/// Set equality: same cardinality and mutual containment, order-free
impl<T, S> PartialEq for IndexedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T, S> Eq for IndexedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
}

/// Panicking positional access; use [`IndexedSet::get`] for the checked form
impl<T, S> Index<usize> for IndexedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

/// Bulk construction dedupes silently, keeping first-occurrence order
impl<T, S> FromIterator<T> for IndexedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::with_hasher(S::default());
        set.include_all(iter);
        set
    }
}

impl<T, S> Extend<T> for IndexedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.include_all(iter);
    }
}

impl<T, S> IntoIterator for IndexedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_items().into_iter()
    }
}

impl<'a, T, S> IntoIterator for &'a IndexedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
