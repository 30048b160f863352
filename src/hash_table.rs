use std::{iter, mem, slice};

use log::{debug, trace, warn};

use crate::{
    chain::{Chain, Entry},
    config::{GrowthPolicy, TableConfig},
    error::{Result, TableError},
    utils::rolling_hash,
};

/// A string-keyed hash table resolving collisions with per-bucket chains.
///
/// Each bucket is either empty or holds a [`Chain`] of the entries whose key hashes to it.
/// After a new key is appended, the table doubles its capacity once the number of entries
/// reaches `capacity * load_factor`. How existing entries are treated on growth is decided
/// by the table's [`GrowthPolicy`].
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct HashTable<V> {
    /// One slot per bucket; `buckets.len() == capacity`
    buckets: Vec<Option<Chain<V>>>,
    /// Current number of buckets, doubled on growth
    capacity: usize,
    /// Number of buckets the table was created with and returns to on `clear`
    original_capacity: usize,
    /// Fraction of `capacity` that occupancy may reach before growing
    load_factor: f64,
    /// What happens to existing entries on growth
    growth_policy: GrowthPolicy,
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::from_valid_config(TableConfig::default())
    }
}

impl<V> Extend<(String, V)> for HashTable<V> {
    fn extend<T: IntoIterator<Item = (String, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

/// Builds a bucket array of `capacity` empty slots
fn empty_buckets<V>(capacity: usize) -> Vec<Option<Chain<V>>> {
    iter::repeat_with(|| None).take(capacity).collect()
}

impl<V> HashTable<V> {
    /// Creates a table with the given load factor and initial capacity
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidCapacity`] for a zero capacity and
    /// [`TableError::InvalidLoadFactor`] for a load factor outside `(0, 1]`.
    pub fn new(load_factor: f64, initial_capacity: usize) -> Result<Self> {
        Self::with_config(TableConfig::new(load_factor, initial_capacity))
    }

    /// Creates a table from a full [`TableConfig`]
    ///
    /// # Errors
    ///
    /// Returns the error produced by [`TableConfig::validate`].
    pub fn with_config(config: TableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Builds the table without validating `config`
    fn from_valid_config(config: TableConfig) -> Self {
        Self {
            buckets: empty_buckets(config.initial_capacity),
            capacity: config.initial_capacity,
            original_capacity: config.initial_capacity,
            load_factor: config.load_factor,
            growth_policy: config.growth_policy,
        }
    }

    /// Computes the bucket index of `key` under the current capacity
    #[must_use]
    pub fn hash(&self, key: &str) -> usize {
        rolling_hash(key, self.capacity)
    }

    /// Returns the chain in the bucket `key` hashes to, if that bucket is occupied
    fn bucket(&self, key: &str) -> Option<&Chain<V>> {
        self.buckets.get(self.hash(key)).and_then(Option::as_ref)
    }

    /// Mutable counterpart of [`Self::bucket`]
    fn bucket_mut(&mut self, key: &str) -> Option<&mut Chain<V>> {
        let index = self.hash(key);
        self.buckets.get_mut(index).and_then(Option::as_mut)
    }

    /// Inserts a key-value pair into the table
    ///
    /// If the key is already present its value is replaced in place and the previous value
    /// is returned; the growth check only runs when a new key was appended.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let index = self.hash(&key);
        let Some(slot) = self.buckets.get_mut(index) else {
            return None;
        };
        let chain = slot.get_or_insert_with(Chain::new);

        if let Some(position) = chain.find(&key) {
            return chain.at_mut(position).ok().map(|entry| mem::replace(entry.value_mut(), value));
        }

        chain.append(Entry::new(key, value));
        self.grow_if_needed();
        None
    }

    /// Returns the value stored for `key`
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NotFound`] if the key is absent.
    pub fn get(&self, key: &str) -> Result<&V> {
        let chain = self.bucket(key).ok_or_else(|| TableError::not_found(key))?;
        chain.get(key).map(Entry::value)
    }

    /// Returns a mutable reference to the value stored for `key`
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NotFound`] if the key is absent.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut V> {
        let chain = self.bucket_mut(key).ok_or_else(|| TableError::not_found(key))?;
        chain.get_mut(key).map(Entry::value_mut)
    }

    /// Returns true if the table holds `key`
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.bucket(key).is_some_and(|chain| chain.contains(key))
    }

    /// Removes `key` from the table, returning whether an entry was removed
    pub fn remove(&mut self, key: &str) -> bool {
        let Some(chain) = self.bucket_mut(key) else {
            return false;
        };
        match chain.find(key) {
            Some(position) => chain.remove_at(position).is_ok(),
            None => false,
        }
    }

    /// Removes every entry and shrinks the table back to its original capacity
    pub fn clear(&mut self) {
        trace!(
            "clearing table: {} buckets -> {} buckets",
            self.capacity, self.original_capacity
        );
        self.capacity = self.original_capacity;
        self.buckets = empty_buckets(self.original_capacity);
    }

    /// Returns the number of entries, counted across all buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.chains().map(Chain::size).sum()
    }

    /// Returns true if the table holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chains().all(Chain::is_empty)
    }

    /// Returns the keys in bucket order, then chain order
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.chains().flat_map(Chain::keys_to_vec).collect()
    }

    /// Returns the number of buckets
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of buckets the table was created with
    #[must_use]
    pub const fn original_capacity(&self) -> usize {
        self.original_capacity
    }

    /// Returns the configured growth threshold
    #[must_use]
    pub const fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns the policy applied on growth
    #[must_use]
    pub const fn growth_policy(&self) -> GrowthPolicy {
        self.growth_policy
    }

    /// Returns the current ratio of entries to buckets
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn occupancy_ratio(&self) -> f64 {
        self.len() as f64 / self.capacity as f64
    }

    /// Returns the size of the longest chain
    #[must_use]
    pub fn longest_chain(&self) -> usize {
        self.chains().map(Chain::size).max().unwrap_or(0)
    }

    /// Returns an iterator over the key-value pairs in bucket order, then chain order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { buckets: self.buckets.iter(), current: None }
    }

    /// Iterates the occupied buckets
    fn chains(&self) -> impl Iterator<Item = &Chain<V>> {
        self.buckets.iter().flatten()
    }

    /// Doubles the capacity once occupancy reaches `capacity * load_factor`
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    fn grow_if_needed(&mut self) {
        let occupancy = self.len();
        if occupancy as f64 >= self.capacity as f64 * self.load_factor {
            self.grow(occupancy);
        }
    }

    /// Doubles the capacity, handling existing entries according to the growth policy
    fn grow(&mut self, occupancy: usize) {
        let Some(new_capacity) = self.capacity.checked_mul(2) else {
            warn!("cannot grow table beyond {} buckets", self.capacity);
            return;
        };
        debug!(
            "growing table from {} to {} buckets ({:?}, {} entries)",
            self.capacity, new_capacity, self.growth_policy, occupancy
        );

        match self.growth_policy {
            GrowthPolicy::Rehash => {
                let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_capacity));
                self.capacity = new_capacity;
                for entry in old_buckets.into_iter().flatten().flat_map(Chain::into_entries) {
                    self.place(entry);
                }
            }
            GrowthPolicy::ExtendOnly => {
                self.buckets.resize_with(new_capacity, || None);
                self.capacity = new_capacity;
            }
        }
    }

    /// Appends an entry to the bucket its key hashes to, without a duplicate check
    fn place(&mut self, entry: Entry<V>) {
        let index = self.hash(entry.key());
        if let Some(slot) = self.buckets.get_mut(index) {
            slot.get_or_insert_with(Chain::new).append(entry);
        }
    }
}

impl<V: Clone> HashTable<V> {
    /// Returns clones of the values in bucket order, then chain order
    #[must_use]
    pub fn values(&self) -> Vec<V> {
        self.chains().flat_map(Chain::values_to_vec).collect()
    }

    /// Returns clones of the entries in bucket order, then chain order
    #[must_use]
    pub fn entries(&self) -> Vec<Entry<V>> {
        self.chains().flat_map(Chain::entries_to_vec).collect()
    }
}

/// Iterator over the key-value pairs of a [`HashTable`]
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Remaining buckets
    buckets: slice::Iter<'a, Option<Chain<V>>>,
    /// Entries left in the chain currently being walked
    current: Option<slice::Iter<'a, Entry<V>>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(Iterator::next) {
                return Some((entry.key(), entry.value()));
            }
            self.current = self.buckets.next()?.as_ref().map(Chain::iter);
        }
    }
}

#[allow(single_use_lifetimes)]
impl<'a, V> IntoIterator for &'a HashTable<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
