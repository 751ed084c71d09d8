//! OrderedIndex: ordered sequence of unique elements with position lookup
//!
//! This is the shared low-level building block of the indexed containers: a
//! `Vec<T>` holding the ordered sequence plus a hash mapping from each element
//! to its current position. Every mutation keeps the two structures in sync;
//! the bijection invariant is `positions[e] == i` iff `items[i] == e` for
//! every element `e` currently present.
//!
//! # Recovery discipline
//!
//! Mutations that can fail after the structures started diverging never
//! attempt a fine-grained undo. The ordered sequence is the single source of
//! truth, and [`OrderedIndex::rebuild_positions`] reconstructs the lookup from
//! it in O(n). Failure paths rebuild, then return the original error, so the
//! container is always consistent when control returns to the caller.
//!
//! # Time Complexity
//!
//! | Operation     | Cost             |
//! |---------------|------------------|
//! | `push`        | O(1) amortized   |
//! | `position_of` | O(1) average     |
//! | `get`         | O(1)             |
//! | `replace`     | O(1) average     |
//! | `insert`      | O(n)             |
//! | `remove_at`   | O(n)             |
//! | `rebuild_positions` | O(n)       |

use crate::error::{check_bounds, check_insert_bounds, OrdixError, Result};
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::mem;

/// Ordered sequence of unique elements with O(1) element-to-position lookup
///
/// Elements are stored in both the sequence and the lookup mapping, so `T`
/// must be `Clone`. Equality and hashing come from the element type; the
/// hash state `S` is injected at construction.
///
/// # Examples
///
/// ```rust
/// use ordix::set::OrderedIndex;
///
/// let mut index = OrderedIndex::new();
/// index.push("a").unwrap();
/// index.push("b").unwrap();
/// assert_eq!(index.position_of(&"b"), Some(1));
/// assert!(index.push("a").is_err());
/// ```
#[derive(Clone)]
pub struct OrderedIndex<T, S = ahash::RandomState> {
    items: Vec<T>,
    positions: HashMap<T, usize, S>,
}

impl<T> OrderedIndex<T, ahash::RandomState>
where
    T: Hash + Eq + Clone,
{
    /// Create a new empty index with the default hasher
    pub fn new() -> Self {
        Self::with_hasher(ahash::RandomState::new())
    }

    /// Create an index pre-sized for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, ahash::RandomState::new())
    }
}

impl<T, S> OrderedIndex<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Create a new empty index with a custom hasher
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            items: Vec::new(),
            positions: HashMap::with_hasher(hash_builder),
        }
    }

    /// Create a pre-sized index with a custom hasher
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Number of elements in the sequence
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the sequence is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the element at `index`, failing with `OutOfBounds` if invalid
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        check_bounds(index, self.items.len())?;
        Ok(&self.items[index])
    }

    /// Get the position of `item`, or `None` if absent
    #[inline]
    pub fn position_of(&self, item: &T) -> Option<usize> {
        self.positions.get(item).copied()
    }

    /// Check whether `item` is present
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    /// View the sequence as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate over the sequence in positional order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Access the index's hash state
    #[inline]
    pub fn hasher(&self) -> &S {
        self.positions.hasher()
    }

    /// Append `item`, failing with `DuplicateElement` if already present
    pub fn push(&mut self, item: T) -> Result<()> {
        if self.positions.contains_key(&item) {
            return Err(OrdixError::duplicate_element());
        }
        self.positions.insert(item.clone(), self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// Insert `item` at `index`, shifting subsequent elements right
    ///
    /// Every element previously at position `>= index` has its recorded
    /// position incremented by one.
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        check_insert_bounds(index, self.items.len())?;
        if self.positions.contains_key(&item) {
            return Err(OrdixError::duplicate_element());
        }
        self.items.insert(index, item.clone());
        self.positions.insert(item, index);
        self.renumber_from(index + 1);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting subsequent
    /// elements left
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        check_bounds(index, self.items.len())?;
        let removed = self.items.remove(index);
        self.positions.remove(&removed);
        self.renumber_from(index);
        Ok(removed)
    }

    /// Replace the element at `index` with `item`, returning the old element
    ///
    /// Fails with `DuplicateElement` if `item` already exists at a different
    /// position. On that failure path the lookup mapping may already have
    /// evicted the old element, so it is rebuilt from the sequence before the
    /// error is returned; the caller observes an unchanged container.
    pub fn replace(&mut self, index: usize, item: T) -> Result<T> {
        check_bounds(index, self.items.len())?;
        if self.items[index] == item {
            // Same element by equality; swap the stored value in place.
            self.positions.remove(&self.items[index]);
            self.positions.insert(item.clone(), index);
            return Ok(mem::replace(&mut self.items[index], item));
        }
        self.positions.remove(&self.items[index]);
        if self.positions.contains_key(&item) {
            self.rebuild_positions();
            return Err(OrdixError::duplicate_element());
        }
        self.positions.insert(item.clone(), index);
        Ok(mem::replace(&mut self.items[index], item))
    }

    /// Keep only the elements satisfying `predicate`, preserving order
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.items.retain(|item| predicate(item));
        self.rebuild_positions();
    }

    /// Remove all elements
    pub fn clear(&mut self) {
        self.items.clear();
        self.positions.clear();
    }

    /// Consume the index, yielding the ordered sequence
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Rebuild the position lookup from the ordered sequence
    ///
    /// The O(n) recovery primitive: the sequence is the source of truth and
    /// the lookup is derived from it wholesale.
    pub fn rebuild_positions(&mut self) {
        self.positions.clear();
        for (index, item) in self.items.iter().enumerate() {
            self.positions.insert(item.clone(), index);
        }
    }

    /// Check the bijection invariant between sequence and lookup
    ///
    /// Intended for tests and debug assertions.
    pub fn is_consistent(&self) -> bool {
        self.items.len() == self.positions.len()
            && self
                .items
                .iter()
                .enumerate()
                .all(|(index, item)| self.positions.get(item) == Some(&index))
    }

    /// Restore recorded positions for the tail starting at `from`
    fn renumber_from(&mut self, from: usize) {
        for index in from..self.items.len() {
            if let Some(position) = self.positions.get_mut(&self.items[index]) {
                *position = index;
            }
        }
    }
}

impl<T, S> Default for OrderedIndex<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> std::fmt::Debug for OrderedIndex<T, S>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<'a, T, S> IntoIterator for &'a OrderedIndex<T, S>
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
