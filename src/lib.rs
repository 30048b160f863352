//! # Chain Map
//!
//! A string-keyed hash table that resolves collisions with separate chaining.
//!
//! Keys are hashed with a polynomial rolling hash (multiplier 31) reduced modulo the
//! current number of buckets. Each bucket holds an ordered [`Chain`] of the entries that
//! land in it. Once the number of entries reaches `capacity * load_factor` the table
//! doubles its capacity; the [`GrowthPolicy`] decides whether existing entries are
//! rehashed into the larger bucket array or left where they are.
//!
//! Lookups that must succeed report a miss as [`TableError::NotFound`], while `has` and
//! `remove` report it as `false`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainmap::{HashTable, TableError};
//!
//! // Create a table with load factor 0.75 and 16 buckets
//! let mut table = HashTable::new(0.75, 16)?;
//!
//! // Insert values
//! table.set("apple", 1);
//! table.set("banana", 2);
//!
//! // Retrieve values
//! assert_eq!(table.get("apple"), Ok(&1));
//!
//! // Update values
//! table.set("apple", 10);
//! assert_eq!(table.get("apple"), Ok(&10));
//! assert_eq!(table.len(), 2);
//!
//! // Remove values
//! assert!(table.remove("apple"));
//! assert!(!table.has("apple"));
//! assert!(matches!(table.get("apple"), Err(TableError::NotFound { .. })));
//! # Ok::<(), TableError>(())
//! ```
//!
//! ## Growth
//!
//! ```rust
//! use chainmap::{GrowthPolicy, HashTable, TableConfig};
//!
//! let config = TableConfig::new(0.5, 4).with_growth_policy(GrowthPolicy::Rehash);
//! let mut table = HashTable::with_config(config)?;
//!
//! table.set("a", 1);
//! assert_eq!(table.capacity(), 4);
//!
//! // Two entries reach 4 * 0.5, so the table doubles
//! table.set("b", 2);
//! assert_eq!(table.capacity(), 8);
//!
//! table.clear();
//! assert_eq!(table.capacity(), 4);
//! # Ok::<(), chainmap::TableError>(())
//! ```

/// Module implementing the per-bucket collision chain
mod chain;
/// Construction parameters and growth policy
mod config;
/// Error types
mod error;
/// Module implementing the separately-chained hash table
mod hash_table;
/// Logger initialization
pub mod logger;
/// Hashing helpers and convenience constructors
mod utils;

pub use chain::{Chain, Entry};
pub use config::{DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR, GrowthPolicy, TableConfig};
pub use error::{Result, TableError};
pub use hash_table::{HashTable, Iter};
pub use utils::{from_pairs, rolling_hash};
