//! Map containers
//!
//! - [`IndexedDictionary<K, V>`] - key/value mapping with insertion-order
//!   iteration and positional access

mod indexed_dict;

pub use indexed_dict::IndexedDictionary;
