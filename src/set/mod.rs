//! Set containers: unordered, indexed, and key/value paired
//!
//! - [`UnorderedSet<T>`] - duplicate-free set with algebraic binary operations
//! - [`IndexedSet<T>`] - set with list-like positional access on top of the
//!   same algebra
//! - [`PairedSet<K, V>`] - ordered key/value pairs with O(1) key lookup
//! - [`OrderedIndex<T>`] - the shared sequence-plus-position building block

mod indexed_set;
mod ordered_index;
mod paired_set;
mod unordered_set;

pub use indexed_set::IndexedSet;
pub use ordered_index::OrderedIndex;
pub use paired_set::{Pair, PairedSet};
pub use unordered_set::UnorderedSet;
