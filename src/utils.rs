//! Hashing helpers and convenience constructors for `HashTable`

use crate::HashTable;

/// Multiplier of the polynomial rolling hash
const HASH_MULTIPLIER: u128 = 31;

/// Polynomial rolling hash of `key` reduced modulo `modulus`
///
/// Folds `h = (31 * h + c) mod modulus` over the Unicode scalar values of `key`, left to
/// right, starting from zero. Non-ASCII characters contribute their full code point.
/// A zero modulus yields zero.
#[must_use]
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
pub fn rolling_hash(key: &str, modulus: usize) -> usize {
    if modulus == 0 {
        return 0;
    }
    // `h < modulus <= usize::MAX`, so `31 * h + c` cannot overflow a u128
    let modulus = modulus as u128;
    let hash = key.chars().fold(0_u128, |hash, c| {
        HASH_MULTIPLIER.wrapping_mul(hash).wrapping_add(u128::from(u32::from(c))) % modulus
    });
    hash as usize
}

/// Creates a `HashTable` with the default configuration from an iterator of key-value pairs
pub fn from_pairs<K, V, I>(iter: I) -> HashTable<V>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut table = HashTable::default();
    table.extend(iter.into_iter().map(|(key, value)| (key.into(), value)));
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_hash_known_values() {
        assert_eq!(rolling_hash("", 16), 0);
        assert_eq!(rolling_hash("a", 16), 1);
        assert_eq!(rolling_hash("apple", 16), 10);
        assert_eq!(rolling_hash("apple", 32), 26);
        assert_eq!(rolling_hash("Kat", 16), 14);
        assert_eq!(rolling_hash("Kat", 32), 30);
    }

    #[test]
    fn test_rolling_hash_depends_on_order() {
        assert_eq!(rolling_hash("ab", 16), 1);
        assert_eq!(rolling_hash("ba", 16), 15);
    }

    #[test]
    fn test_rolling_hash_uses_full_code_points() {
        // U+00E9 is a single scalar value, not two UTF-8 bytes
        assert_eq!(rolling_hash("\u{e9}", 1000), 0xe9);
        assert_eq!(rolling_hash("\u{d8}rkenrotte", 16), 14);
        assert_eq!(rolling_hash("\u{d8}rkenrotte", 32), 14);
        assert_eq!(rolling_hash("\u{1f980}", usize::MAX), 0x1_f980);
    }

    #[test]
    fn test_rolling_hash_large_modulus() {
        let key = "a fairly long key that would overflow a naive u64 fold";
        let hash = rolling_hash(key, usize::MAX);
        assert!(hash < usize::MAX);
        assert_eq!(hash, rolling_hash(key, usize::MAX));
    }

    #[test]
    fn test_rolling_hash_zero_modulus() {
        assert_eq!(rolling_hash("anything", 0), 0);
    }

    #[test]
    fn test_from_pairs() {
        let table = from_pairs(vec![("a", 1), ("b", 2), ("c", 3)]);

        assert_eq!(table.get("a"), Ok(&1));
        assert_eq!(table.get("b"), Ok(&2));
        assert_eq!(table.get("c"), Ok(&3));
        assert_eq!(table.len(), 3);
    }
}
