//! Error types shared by [`Chain`](crate::Chain) and [`HashTable`](crate::HashTable)

use thiserror::Error;

/// Errors raised by chain and table operations
///
/// Lookups that are allowed to miss (`find`, `has`, `remove`) report absence through
/// `Option`/`bool` instead and never produce one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// A chain position outside `0..len` was addressed
    #[error("index {index} out of bounds for chain of length {len}")]
    OutOfBounds {
        /// The requested position
        index: usize,
        /// The chain length at the time of the call
        len: usize,
    },
    /// No entry with this key exists
    #[error("key {key:?} not found")]
    NotFound {
        /// The key that was looked up
        key: String,
    },
    /// The initial capacity must be at least one bucket
    #[error("initial capacity must be positive, got {0}")]
    InvalidCapacity(usize),
    /// The load factor must lie in `(0, 1]`
    #[error("load factor must be in (0, 1], got {0}")]
    InvalidLoadFactor(f64),
}

impl TableError {
    /// Shorthand for a [`TableError::NotFound`] carrying an owned copy of `key`
    pub(crate) fn not_found(key: &str) -> Self {
        Self::NotFound { key: key.to_owned() }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            TableError::OutOfBounds { index: 3, len: 2 }.to_string(),
            "index 3 out of bounds for chain of length 2"
        );
        assert_eq!(TableError::not_found("kite").to_string(), "key \"kite\" not found");
        assert_eq!(
            TableError::InvalidCapacity(0).to_string(),
            "initial capacity must be positive, got 0"
        );
        assert_eq!(
            TableError::InvalidLoadFactor(1.5).to_string(),
            "load factor must be in (0, 1], got 1.5"
        );
    }
}
