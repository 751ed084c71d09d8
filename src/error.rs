//! Error handling for the ordix collection library
//!
//! Every fallible container operation returns [`Result`] with an
//! [`OrdixError`] describing exactly which contract was violated. Probe-style
//! APIs (`contains`, `try_remove`, `get(key) -> Option`) never construct an
//! error; strict APIs (`add`, `index_of`, `get_by_key`) always do.

use thiserror::Error;

/// Main error type for the ordix library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrdixError {
    /// An element equal to one already present was added to a set
    #[error("duplicate element")]
    DuplicateElement,

    /// A key equal to one already present was added to a keyed container
    #[error("duplicate key")]
    DuplicateKey,

    /// A strict element lookup did not find the element
    #[error("element not found")]
    ElementNotFound,

    /// A strict key lookup did not find the key
    #[error("key not found")]
    KeyNotFound,

    /// Index out of bounds access
    #[error("out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// Operation structurally unavailable on this container variant
    #[error("not supported: {feature}")]
    NotSupported {
        /// Description of the unsupported operation
        feature: String,
    },
}

impl OrdixError {
    /// Create a duplicate element error
    pub fn duplicate_element() -> Self {
        Self::DuplicateElement
    }

    /// Create a duplicate key error
    pub fn duplicate_key() -> Self {
        Self::DuplicateKey
    }

    /// Create an element not found error
    pub fn element_not_found() -> Self {
        Self::ElementNotFound
    }

    /// Create a key not found error
    pub fn key_not_found() -> Self {
        Self::KeyNotFound
    }

    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create a not supported error
    pub fn not_supported<S: Into<String>>(feature: S) -> Self {
        Self::NotSupported {
            feature: feature.into(),
        }
    }

    /// Get the error category for assertions and diagnostics
    pub fn category(&self) -> &'static str {
        match self {
            Self::DuplicateElement => "duplicate",
            Self::DuplicateKey => "duplicate",
            Self::ElementNotFound => "not_found",
            Self::KeyNotFound => "not_found",
            Self::OutOfBounds { .. } => "bounds",
            Self::NotSupported { .. } => "unsupported",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, OrdixError>;

/// Assert that an index is within bounds
#[inline]
pub fn check_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(OrdixError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}

/// Assert that an index is a valid insertion point (`index <= size`)
#[inline]
pub fn check_insert_bounds(index: usize, size: usize) -> Result<()> {
    if index > size {
        Err(OrdixError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}
