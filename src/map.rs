//! Key→value map layered on the sorted set.
//!
//! Entries are ordered and equated by key alone, so the underlying
//! [`SortedSet`] keeps them sorted by key and the borrowed-key lookups
//! (`get`, `remove`) resolve without a value in hand.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::set::SortedSet;

struct MapEntry<K, V> {
    key: K,
    value: V,
}

impl<K: PartialEq, V> PartialEq for MapEntry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, V> Eq for MapEntry<K, V> {}

impl<K: Ord, V> PartialOrd for MapEntry<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, V> Ord for MapEntry<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K, V> Borrow<K> for MapEntry<K, V> {
    fn borrow(&self) -> &K {
        &self.key
    }
}

/// Map from `Ord` keys to owned values.
pub struct Map<K, V> {
    entries: SortedSet<MapEntry<K, V>>,
}

impl<K: Ord, V> Map<K, V> {
    pub fn new() -> Self {
        Self {
            entries: SortedSet::new(),
        }
    }

    /// Adds or overwrites. Overwriting keeps the originally stored key and
    /// returns the displaced value.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.entries.remove(&key) {
            Some(MapEntry {
                key: original_key,
                value: displaced,
            }) => {
                self.insert_new(original_key, value);
                Some(displaced)
            }
            None => {
                self.insert_new(key, value);
                None
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .filter(|entry| entry.key == *key)
            .map(|entry| &entry.value)
    }

    /// Removes the entry for `key`, handing back both the stored key and
    /// the value.
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        self.entries.remove(key).map(|entry| (entry.key, entry.value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert_new(&mut self, key: K, value: V) {
        if self.entries.add(MapEntry { key, value }).is_err() {
            unreachable!("key was checked absent before insertion");
        }
    }
}

impl<K: Ord, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
