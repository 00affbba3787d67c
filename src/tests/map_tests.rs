use pretty_assertions::assert_eq;

use crate::map::Map;

#[test]
fn test_put_get_remove() {
    let mut map = Map::new();
    assert_eq!(map.put("one".to_owned(), 1), None);
    assert_eq!(map.put("two".to_owned(), 2), None);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&"one".to_owned()), Some(&1));
    assert_eq!(map.get(&"three".to_owned()), None);
    assert_eq!(map.remove(&"one".to_owned()), Some(("one".to_owned(), 1)));
    assert_eq!(map.get(&"one".to_owned()), None);
    assert_eq!(map.len(), 1);
}

#[test]
fn test_put_overwrites_and_returns_displaced_value() {
    let mut map = Map::new();
    assert_eq!(map.put(7, "first"), None);
    assert_eq!(map.put(7, "second"), Some("first"));
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&7), Some(&"second"));
}

#[test]
fn test_remove_missing_key() {
    let mut map: Map<i32, i32> = Map::new();
    assert_eq!(map.remove(&1), None);
    assert!(map.is_empty());
}

#[test]
fn test_many_keys_stay_resolvable() {
    let mut map = Map::new();
    for key in 0..50 {
        assert_eq!(map.put(key, key * 10), None);
    }
    for key in 0..50 {
        assert_eq!(map.get(&key), Some(&(key * 10)));
    }
    for key in (0..50).step_by(2) {
        assert_eq!(map.remove(&key), Some((key, key * 10)));
    }
    assert_eq!(map.len(), 25);
    assert_eq!(map.get(&2), None);
    assert_eq!(map.get(&3), Some(&30));
}
