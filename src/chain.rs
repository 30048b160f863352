use std::slice;

use crate::error::{Result, TableError};

/// A key-value pair stored in a [`Chain`]
///
/// The key is fixed once the entry exists; only the value can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<V> {
    /// The key in the key-value pair
    key: String,
    /// The value associated with the key
    value: V,
}

impl<V> Entry<V> {
    /// Creates an entry from a key and its value
    pub fn new(key: impl Into<String>, value: V) -> Self {
        Self { key: key.into(), value }
    }

    /// Returns the key
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the value
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the value
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Splits the entry into its key and value
    #[must_use]
    pub fn into_parts(self) -> (String, V) {
        (self.key, self.value)
    }
}

/// Ordered list of the entries that hash to a single bucket
///
/// A chain never deduplicates on its own: [`Chain::append`] trusts the caller to have
/// checked [`Chain::find`] first. Enumeration follows insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain<V> {
    /// The entries in insertion order
    entries: Vec<Entry<V>>,
}

impl<V> Default for Chain<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Chain<V> {
    /// Creates an empty chain
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Adds an entry at the end of the chain
    pub fn append(&mut self, entry: Entry<V>) {
        self.entries.push(entry);
    }

    /// Returns the position of the entry with this key
    #[must_use]
    pub fn find(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == key)
    }

    /// Returns the entry at `index`
    ///
    /// # Errors
    ///
    /// Returns [`TableError::OutOfBounds`] if `index >= self.size()`.
    pub fn at(&self, index: usize) -> Result<&Entry<V>> {
        let len = self.entries.len();
        self.entries.get(index).ok_or(TableError::OutOfBounds { index, len })
    }

    /// Returns the entry at `index` mutably
    ///
    /// # Errors
    ///
    /// Returns [`TableError::OutOfBounds`] if `index >= self.size()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Entry<V>> {
        let len = self.entries.len();
        self.entries.get_mut(index).ok_or(TableError::OutOfBounds { index, len })
    }

    /// Returns the entry with this key
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NotFound`] if no entry has this key.
    pub fn get(&self, key: &str) -> Result<&Entry<V>> {
        self.entries.iter().find(|entry| entry.key == key).ok_or_else(|| TableError::not_found(key))
    }

    /// Returns the entry with this key mutably
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NotFound`] if no entry has this key.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut Entry<V>> {
        self.entries
            .iter_mut()
            .find(|entry| entry.key == key)
            .ok_or_else(|| TableError::not_found(key))
    }

    /// Returns true if an entry has this key
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Returns the number of entries
    #[must_use]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the chain holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes and returns the entry at `index`, shifting the following entries left
    ///
    /// # Errors
    ///
    /// Returns [`TableError::OutOfBounds`] if `index >= self.size()`.
    pub fn remove_at(&mut self, index: usize) -> Result<Entry<V>> {
        let len = self.entries.len();
        if index >= len {
            return Err(TableError::OutOfBounds { index, len });
        }
        Ok(self.entries.remove(index))
    }

    /// Returns the keys in chain order
    #[must_use]
    pub fn keys_to_vec(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.key.clone()).collect()
    }

    /// Returns an iterator over the entries in chain order
    pub fn iter(&self) -> slice::Iter<'_, Entry<V>> {
        self.entries.iter()
    }

    /// Consumes the chain, yielding its entries in order
    pub(crate) fn into_entries(self) -> Vec<Entry<V>> {
        self.entries
    }
}

impl<V: Clone> Chain<V> {
    /// Returns clones of the values in chain order
    #[must_use]
    pub fn values_to_vec(&self) -> Vec<V> {
        self.entries.iter().map(|entry| entry.value.clone()).collect()
    }

    /// Returns clones of the entries in chain order
    #[must_use]
    pub fn entries_to_vec(&self) -> Vec<Entry<V>> {
        self.entries.clone()
    }
}

#[allow(single_use_lifetimes)]
impl<'a, V> IntoIterator for &'a Chain<V> {
    type Item = &'a Entry<V>;
    type IntoIter = slice::Iter<'a, Entry<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Chain<i32> {
        let mut chain = Chain::new();
        chain.append(Entry::new("grape", 1));
        chain.append(Entry::new("hat", 2));
        chain.append(Entry::new("dog", 3));
        chain
    }

    #[test]
    fn test_append_and_find() {
        let chain = sample();
        assert_eq!(chain.size(), 3);
        assert_eq!(chain.find("grape"), Some(0));
        assert_eq!(chain.find("dog"), Some(2));
        assert_eq!(chain.find("lion"), None);
    }

    #[test]
    fn test_at_out_of_bounds() {
        let chain = sample();
        assert_eq!(chain.at(1).map(Entry::key), Ok("hat"));
        assert_eq!(chain.at(3), Err(TableError::OutOfBounds { index: 3, len: 3 }));
        assert_eq!(Chain::<i32>::new().at(0), Err(TableError::OutOfBounds { index: 0, len: 0 }));
    }

    #[test]
    fn test_get_not_found() {
        let chain = sample();
        assert_eq!(chain.get("hat").map(Entry::value), Ok(&2));
        assert_eq!(chain.get("kite"), Err(TableError::NotFound { key: "kite".to_string() }));
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut chain = sample();
        if let Ok(entry) = chain.get_mut("hat") {
            *entry.value_mut() = 20;
        }
        if let Ok(entry) = chain.at_mut(0) {
            *entry.value_mut() += 10;
        }
        assert_eq!(chain.values_to_vec(), vec![11, 20, 3]);
        assert_eq!(chain.size(), 3);
    }

    #[test]
    fn test_contains() {
        let chain = sample();
        assert!(chain.contains("dog"));
        assert!(!chain.contains("Dog"));
        assert!(!Chain::<i32>::new().contains("dog"));
    }

    #[test]
    fn test_remove_at_shifts_entries() {
        let mut chain = sample();
        let removed = chain.remove_at(0);
        assert_eq!(removed.map(Entry::into_parts), Ok(("grape".to_string(), 1)));
        assert_eq!(chain.keys_to_vec(), vec!["hat".to_string(), "dog".to_string()]);
        assert_eq!(chain.find("dog"), Some(1));
        assert_eq!(chain.remove_at(2), Err(TableError::OutOfBounds { index: 2, len: 2 }));
        assert_eq!(chain.size(), 2);
    }

    #[test]
    fn test_bulk_extraction_preserves_order() {
        let chain = sample();
        assert_eq!(
            chain.keys_to_vec(),
            vec!["grape".to_string(), "hat".to_string(), "dog".to_string()]
        );
        assert_eq!(chain.values_to_vec(), vec![1, 2, 3]);
        assert_eq!(chain.entries_to_vec(), vec![
            Entry::new("grape", 1),
            Entry::new("hat", 2),
            Entry::new("dog", 3)
        ]);
    }

    #[test]
    fn test_extraction_is_a_copy() {
        let mut chain = sample();
        let mut keys = chain.keys_to_vec();
        keys.clear();
        assert!(chain.remove_at(0).is_ok());
        assert_eq!(chain.size(), 2);
        assert!(keys.is_empty());
    }

    #[test]
    fn test_iter() {
        let chain = sample();
        let sum: i32 = chain.iter().map(|entry| *entry.value()).sum();
        assert_eq!(sum, 6);
        assert_eq!((&chain).into_iter().count(), 3);
        assert!(!chain.is_empty());
    }
}
