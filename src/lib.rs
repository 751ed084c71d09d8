//! # Ordix: Ordered, Duplicate-Free, Addressable Collections
//!
//! This crate provides a family of containers that combine mathematical set
//! semantics with list-like positional access over the same underlying data,
//! keeping an ordered sequence and a hash lookup in sync under every
//! mutation.
//!
//! ## Containers
//!
//! - **`UnorderedSet<T>`**: duplicate-free set with algebraic binary
//!   operations (union, intersection, difference, symmetric difference)
//! - **`IndexedSet<T>`**: a set that is also a positional list - O(1)
//!   membership and `index_of`, O(n) positional insert/remove
//! - **`PairedSet<K, V>`**: ordered key/value pairs with O(1) key lookup and
//!   a deliberately O(n) position-by-key lookup
//! - **`IndexedDictionary<K, V>`**: a key/value mapping exposing insertion
//!   order and positional access to keys and values
//! - **`OrderedIndex<T>`**: the low-level sequence-plus-position building
//!   block the indexed containers share
//!
//! ## Consistency discipline
//!
//! Each indexed container owns both of its internal structures and routes
//! every mutation through methods that either fully apply or fully discard
//! the change. Failure paths that could leave the structures diverged
//! rebuild the hash lookup from the ordered sequence before re-raising the
//! triggering error, so a failed call always leaves the container consistent
//! and usable.
//!
//! ## Failure modes
//!
//! Strict APIs surface contract violations as [`OrdixError`]; probe-style
//! APIs (`contains`, `include`, `try_remove`, `get(key) -> Option`) report
//! outcomes without failing. See the [`error`] module for the taxonomy.
//!
//! ## Concurrency
//!
//! The containers are single-threaded and make no thread-safety claim.
//! Callers sharing an instance across threads must supply their own
//! exclusive synchronization.
//!
//! ## Quick Start
//!
//! ```rust
//! use ordix::{IndexedDictionary, IndexedSet, PairedSet, UnorderedSet};
//!
//! let mut set = IndexedSet::new();
//! set.add("a").unwrap();
//! set.add("b").unwrap();
//! assert_eq!(set.index_of(&"b").unwrap(), 1);
//!
//! let evens: UnorderedSet<i32> = (0..10).filter(|n| n % 2 == 0).collect();
//! let small: UnorderedSet<i32> = (0..4).collect();
//! assert_eq!(evens.intersect_with(&small).len(), 2);
//!
//! let mut pairs = PairedSet::new();
//! pairs.add("answer", 42).unwrap();
//! assert_eq!(pairs.get_by_key(&"answer").unwrap(), (&"answer", &42));
//!
//! let mut dict = IndexedDictionary::new();
//! dict.add("x", 1).unwrap();
//! dict.insert("x", 2);
//! assert_eq!(dict.value_at(0).unwrap(), &2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod map;
pub mod set;

#[cfg(feature = "serde")]
mod serde_support;

pub use error::{OrdixError, Result};
pub use map::IndexedDictionary;
pub use set::{IndexedSet, OrderedIndex, Pair, PairedSet, UnorderedSet};
