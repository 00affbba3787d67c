// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use pretty_assertions::assert_eq;

use crate::hashmap::{HashMapError, StrHashMap};

#[test]
fn test_add_get_remove() {
    let mut map = StrHashMap::default();
    map.add("alpha", 1).unwrap();
    map.add("beta", 2).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("alpha"), Some(&1));
    assert_eq!(map.get("gamma"), None);
    assert_eq!(map.remove("alpha"), Some(1));
    assert_eq!(map.get("alpha"), None);
    assert_eq!(map.remove("alpha"), None);
    assert_eq!(map.len(), 1);
}

#[test]
fn test_add_existing_key_gives_value_back() {
    let mut map = StrHashMap::default();
    map.add("key", 1).unwrap();
    assert_eq!(map.add("key", 2), Err(HashMapError::Exists(2)));
    assert_eq!(map.get("key"), Some(&1));
}

#[test]
fn test_single_bucket_chains() {
    // Exponent 0 leaves one bucket, so every entry collides.
    let mut map = StrHashMap::new(0);
    for (index, key) in ["a", "b", "c", "d", "e"].iter().enumerate() {
        map.add(key, index).unwrap();
    }
    assert_eq!(map.len(), 5);
    for (index, key) in ["a", "b", "c", "d", "e"].iter().enumerate() {
        assert_eq!(map.get(key), Some(&index));
    }
    // Removing from the middle of the chain keeps the rest reachable.
    assert_eq!(map.remove("c"), Some(2));
    assert_eq!(map.get("b"), Some(&1));
    assert_eq!(map.get("d"), Some(&3));
    assert_eq!(map.len(), 4);
}

#[test]
fn test_key_is_deep_copied() {
    let mut map = StrHashMap::default();
    let key = String::from("ephemeral");
    map.add(&key, 9).unwrap();
    drop(key);
    assert_eq!(map.get("ephemeral"), Some(&9));
}
