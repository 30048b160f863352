//! Construction parameters for [`HashTable`](crate::HashTable)

use crate::error::{Result, TableError};

/// Load factor used by [`TableConfig::default`]
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Bucket count used by [`TableConfig::default`]
pub const DEFAULT_CAPACITY: usize = 16;

/// What happens to existing entries when the table doubles its capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthPolicy {
    /// Every entry is moved to the bucket its key hashes to under the new capacity
    #[default]
    Rehash,
    /// The bucket array is only extended with empty slots; entries stay where they are.
    ///
    /// Keys whose hash changes with the new capacity become unreachable through
    /// `get`/`has`/`remove` while still being counted by `len` and listed by `keys`.
    /// Only useful for reproducing that behavior.
    ExtendOnly,
}

/// Parameters a [`HashTable`](crate::HashTable) is built from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    /// Fraction of `capacity` that occupancy may reach before the table grows
    pub load_factor: f64,
    /// Number of buckets the table starts with and returns to on `clear`
    pub initial_capacity: usize,
    /// How entries are treated when the table grows
    pub growth_policy: GrowthPolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            load_factor: DEFAULT_LOAD_FACTOR,
            initial_capacity: DEFAULT_CAPACITY,
            growth_policy: GrowthPolicy::default(),
        }
    }
}

impl TableConfig {
    /// Creates a config with the given load factor and capacity and the default growth policy
    #[must_use]
    pub fn new(load_factor: f64, initial_capacity: usize) -> Self {
        Self { load_factor, initial_capacity, ..Self::default() }
    }

    /// Replaces the load factor
    #[must_use]
    pub const fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Replaces the initial capacity
    #[must_use]
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Replaces the growth policy
    #[must_use]
    pub const fn with_growth_policy(mut self, growth_policy: GrowthPolicy) -> Self {
        self.growth_policy = growth_policy;
        self
    }

    /// Checks that the capacity is positive and the load factor lies in `(0, 1]`
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidCapacity`] or [`TableError::InvalidLoadFactor`].
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(TableError::InvalidCapacity(self.initial_capacity));
        }
        // NaN fails both comparisons and is rejected here too
        if !(self.load_factor > 0.0 && self.load_factor <= 1.0) {
            return Err(TableError::InvalidLoadFactor(self.load_factor));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TableConfig::default();
        assert_eq!(config.initial_capacity, 16);
        assert!((config.load_factor - 0.75).abs() < f64::EPSILON);
        assert_eq!(config.growth_policy, GrowthPolicy::Rehash);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let config = TableConfig::new(0.75, 0);
        assert_eq!(config.validate(), Err(TableError::InvalidCapacity(0)));
    }

    #[test]
    fn test_load_factor_bounds() {
        assert!(TableConfig::new(1.0, 4).validate().is_ok());
        assert!(TableConfig::new(0.01, 4).validate().is_ok());
        assert_eq!(
            TableConfig::new(0.0, 4).validate(),
            Err(TableError::InvalidLoadFactor(0.0))
        );
        assert_eq!(
            TableConfig::new(1.25, 4).validate(),
            Err(TableError::InvalidLoadFactor(1.25))
        );
        assert!(TableConfig::new(f64::NAN, 4).validate().is_err());
    }

    #[test]
    fn test_builder_setters() {
        let config = TableConfig::default()
            .with_load_factor(0.5)
            .with_initial_capacity(4)
            .with_growth_policy(GrowthPolicy::ExtendOnly);
        assert_eq!(config, TableConfig {
            load_factor: 0.5,
            initial_capacity: 4,
            growth_policy: GrowthPolicy::ExtendOnly,
        });
    }
}
