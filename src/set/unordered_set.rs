//! UnorderedSet: duplicate-free set with algebraic binary operations
//!
//! A hash-backed set with no positional guarantees. Iteration order is
//! whatever the backing store yields and may differ from insertion order.
//!
//! The algebraic operations (union, intersection, difference, symmetric
//! difference) are pure: they accept two source sequences, allocate a fresh
//! result, and never mutate an operand. The associated-function forms
//! (`union_of` and friends) accept any `IntoIterator` sources, so operands do
//! not need to be `UnorderedSet` instances.
//!
//! # Examples
//!
//! ```rust
//! use ordix::set::UnorderedSet;
//!
//! let a: UnorderedSet<i32> = [1, 2, 3].into_iter().collect();
//! let b: UnorderedSet<i32> = [2, 3, 4].into_iter().collect();
//!
//! let both = a.intersect_with(&b);
//! assert_eq!(both.len(), 2);
//! assert!(both.contains(&2) && both.contains(&3));
//! ```

use crate::error::{OrdixError, Result};
use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// Duplicate-free set of elements with no ordering guarantee
///
/// Strict mutation (`add`, `remove`) surfaces violations as errors; the
/// probe-style counterparts (`include`, `try_remove`) report outcomes as
/// booleans and never fail.
#[derive(Clone)]
pub struct UnorderedSet<T, S = ahash::RandomState> {
    elements: HashSet<T, S>,
}

impl<T> UnorderedSet<T, ahash::RandomState>
where
    T: Hash + Eq + Clone,
{
    /// Create a new empty set with the default hasher
    pub fn new() -> Self {
        Self::with_hasher(ahash::RandomState::new())
    }

    /// Create a set pre-sized for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, ahash::RandomState::new())
    }
}

impl<T, S> UnorderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Create a new empty set with a custom hasher
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            elements: HashSet::with_hasher(hash_builder),
        }
    }

    /// Create a pre-sized set with a custom hasher
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            elements: HashSet::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Number of elements in the set
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the set is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Check whether `item` is present
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.elements.contains(item)
    }

    /// Check whether every element of `items` is present
    pub fn contains_all<'a, I>(&self, items: I) -> bool
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().all(|item| self.elements.contains(item))
    }

    /// Add `item`, failing with `DuplicateElement` if already present
    pub fn add(&mut self, item: T) -> Result<()> {
        if self.elements.contains(&item) {
            return Err(OrdixError::duplicate_element());
        }
        self.elements.insert(item);
        Ok(())
    }

    /// Idempotent add; returns whether the element was newly inserted
    pub fn include(&mut self, item: T) -> bool {
        self.elements.insert(item)
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

    /// Idempotently add every element of `items`; returns how many were new
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

    /// Remove `item`, failing with `ElementNotFound` if absent
    pub fn remove(&mut self, item: &T) -> Result<()> {
        if self.elements.remove(item) {
            Ok(())
        } else {
            Err(OrdixError::element_not_found())
        }
    }

    /// Remove `item` if present; returns whether it was removed
    pub fn try_remove(&mut self, item: &T) -> bool {
        self.elements.remove(item)
    }

    /// Remove every element of `items` that is present; returns the count
    pub fn exclude_all<'a, I>(&mut self, items: I) -> usize
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut removed = 0;
        for item in items {
            if self.elements.remove(item) {
                removed += 1;
            }
        }
        removed
    }

    /// Remove all elements
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Iterate over the elements in backing-store order
    pub fn iter(&self) -> std::collections::hash_set::Iter<'_, T> {
        self.elements.iter()
    }

    /// Access the set's hash state
    #[inline]
    pub fn hasher(&self) -> &S {
        self.elements.hasher()
    }
}

impl<T, S> UnorderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    /// Elements that appear in `a` or `b`, each exactly once
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

    /// Elements present in both `a` and `b`
    pub fn intersect_of<A, B>(a: A, b: B) -> Self
    where
        A: IntoIterator<Item = T>,
        B: IntoIterator<Item = T>,
    {
        let mut result = Self::with_hasher(S::default());
        let right: HashSet<T, S> = b.into_iter().collect();
        for item in a {
            if right.contains(&item) {
                result.include(item);
            }
        }
        result
    }

    /// Elements of `a` with `b`'s elements removed
    pub fn difference_of<A, B>(a: A, b: B) -> Self
    where
        A: IntoIterator<Item = T>,
        B: IntoIterator<Item = T>,
    {
        let mut result = Self::with_hasher(S::default());
        result.include_all(a);
        for item in b {
            result.try_remove(&item);
        }
        result
    }

    /// Elements present in exactly one of `a`, `b`
    ///
    /// Membership is decided on the deduplicated operands, so repeated
    /// occurrences of an element within one source sequence count once.
    pub fn symmetric_difference_of<A, B>(a: A, b: B) -> Self
    where
        A: IntoIterator<Item = T>,
        B: IntoIterator<Item = T>,
    {
        let left: HashSet<T, S> = a.into_iter().collect();
        let right: HashSet<T, S> = b.into_iter().collect();
        let mut result = Self::with_hasher(S::default());
        for item in &left {
            if !right.contains(item) {
                result.include(item.clone());
            }
        }
        for item in right {
            if !left.contains(&item) {
                result.include(item);
            }
        }
        result
    }
}

impl<T, S> UnorderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    /// Union with another set, returning a new set
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

    /// Intersection with another set, returning a new set
    pub fn intersect_with(&self, other: &Self) -> Self {
        let mut result = Self::with_hasher(self.hasher().clone());
        for item in self.iter() {
            if other.contains(item) {
                result.include(item.clone());
            }
        }
        result
    }

    /// Difference with another set, returning a new set
    pub fn difference_with(&self, other: &Self) -> Self {
        let mut result = Self::with_hasher(self.hasher().clone());
        for item in self.iter() {
            if !other.contains(item) {
                result.include(item.clone());
            }
        }
        result
    }

    /// Symmetric difference with another set, returning a new set
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

impl<T, S> Default for UnorderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> std::fmt::Debug for UnorderedSet<T, S>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

/// Set equality: same cardinality and mutual containment, order-free
impl<T, S> PartialEq for UnorderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T, S> Eq for UnorderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
}

/// Bulk construction dedupes silently; use [`UnorderedSet::add`] for the
/// strict single-element path.
impl<T, S> FromIterator<T> for UnorderedSet<T, S>
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

impl<T, S> Extend<T> for UnorderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.include_all(iter);
    }
}

impl<T, S> IntoIterator for UnorderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    type Item = T;
    type IntoIter = std::collections::hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T, S> IntoIterator for &'a UnorderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    type Item = &'a T;
    type IntoIter = std::collections::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
