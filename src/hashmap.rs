// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! String-keyed hash map with djb2 hashing and power-of-two bucketing.

use thiserror::Error;

use crate::config::DEFAULT_BUCKET_EXPONENT;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashMapError<V> {
    /// The key is already mapped; the rejected value travels back to the
    /// caller.
    #[error("key is already present in the map")]
    Exists(V),
}

struct MapEntry<V> {
    key: String,
    value: V,
    next: Option<Box<MapEntry<V>>>,
}

/// Map from strings to owned values.
///
/// Keys are deep-copied on insertion. Collisions chain through per-bucket
/// singly-linked lists, newest entry first; the bucket count is fixed at
/// `2^exponent` for the lifetime of the map.
pub struct StrHashMap<V> {
    buckets: Vec<Option<Box<MapEntry<V>>>>,
    exponent: u32,
    len: usize,
}

impl<V> StrHashMap<V> {
    pub fn new(exponent: u32) -> Self {
        let mut buckets = Vec::new();
        buckets.resize_with(1usize << exponent, || None);
        Self {
            buckets,
            exponent,
            len: 0,
        }
    }

    /// Maps `key` to `value` if the key is absent.
    pub fn add(&mut self, key: &str, value: V) -> Result<(), HashMapError<V>> {
        let index = self.bucket_index(key);
        let mut cursor = self.buckets[index].as_deref();
        while let Some(entry) = cursor {
            if entry.key == key {
                return Err(HashMapError::Exists(value));
            }
            cursor = entry.next.as_deref();
        }
        let next = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(MapEntry {
            key: key.to_owned(),
            value,
            next,
        }));
        self.len += 1;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        let mut cursor = self.buckets[self.bucket_index(key)].as_deref();
        while let Some(entry) = cursor {
            if entry.key == key {
                return Some(&entry.value);
            }
            cursor = entry.next.as_deref();
        }
        None
    }

    /// Unmaps `key`, handing its value back to the caller.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.bucket_index(key);
        let mut link = &mut self.buckets[index];
        while link.is_some() {
            if link.as_deref().is_some_and(|entry| entry.key == key) {
                let mut entry = link.take()?;
                *link = entry.next.take();
                self.len -= 1;
                return Some(entry.value);
            }
            link = &mut link.as_mut()?.next;
        }
        None
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn bucket_index(&self, key: &str) -> usize {
        (djb2(key) & ((1u64 << self.exponent) - 1)) as usize
    }
}

impl<V> Default for StrHashMap<V> {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKET_EXPONENT)
    }
}

fn djb2(key: &str) -> u64 {
    let mut hash: u64 = 5381;
    for byte in key.bytes() {
        hash = (hash << 5).wrapping_add(hash).wrapping_add(u64::from(byte));
    }
    hash
}
