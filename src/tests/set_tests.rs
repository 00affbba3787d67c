// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use crate::set::{CursorError, SetError, SortedSet};
use crate::tests::support::DropTally;

fn collect(set: &mut SortedSet<i32>) -> Vec<i32> {
    let mut items = Vec::new();
    if set.cursor_first().is_err() {
        return items;
    }
    loop {
        items.push(*set.current().unwrap());
        if set.cursor_next().is_err() {
            return items;
        }
    }
}

#[test]
fn test_add_keeps_items_sorted() {
    let mut set = SortedSet::new();
    for item in [30, 10, 50, 20, 40] {
        set.add(item).unwrap();
    }
    assert_eq!(set.len(), 5);
    assert_eq!(collect(&mut set), vec![10, 20, 30, 40, 50]);
}

#[test]
fn test_add_contains_remove_round_trip() {
    let mut set = SortedSet::new();
    set.add(7).unwrap();
    assert!(set.contains(&7));
    assert_eq!(set.remove(&7), Some(7));
    assert!(!set.contains(&7));
    assert_eq!(set.remove(&7), None);
    assert!(set.is_empty());
}

#[test]
fn test_duplicate_add_gives_item_back() {
    let mut set = SortedSet::new();
    set.add(5).unwrap();
    assert_eq!(set.add(5), Err(SetError::AlreadyContains(5)));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_bracketed_probe_is_absent() {
    let mut set = SortedSet::new();
    set.add(10).unwrap();
    set.add(20).unwrap();
    set.add(40).unwrap();
    // 30 falls between stored neighbours; the locality walk reverses and
    // reports absence without scanning the whole list.
    assert!(!set.contains(&30));
    assert!(!set.contains(&5));
    assert!(!set.contains(&50));
}

#[test]
fn test_cursor_reanchors_to_previous_on_remove() {
    let mut set = SortedSet::new();
    set.add(10).unwrap();
    set.add(20).unwrap();
    set.add(30).unwrap();
    // Park the external cursor on the middle item.
    set.cursor_first().unwrap();
    set.cursor_next().unwrap();
    assert_eq!(set.current(), Ok(&20));

    assert_eq!(set.remove(&20), Some(20));
    assert_eq!(set.current(), Ok(&10));
}

#[test]
fn test_cursor_reanchors_to_next_without_previous() {
    let mut set = SortedSet::new();
    set.add(10).unwrap();
    set.add(20).unwrap();
    set.cursor_first().unwrap();
    assert_eq!(set.current(), Ok(&10));

    assert_eq!(set.remove(&10), Some(10));
    assert_eq!(set.current(), Ok(&20));
}

#[test]
fn test_cursor_bounds() {
    let mut set = SortedSet::new();
    assert_eq!(set.current(), Err(CursorError::Empty));
    assert_eq!(set.cursor_first(), Err(CursorError::Empty));
    set.add(1).unwrap();
    set.add(2).unwrap();
    set.cursor_last().unwrap();
    assert_eq!(set.cursor_next(), Err(CursorError::OutOfBounds));
    set.cursor_first().unwrap();
    assert_eq!(set.cursor_previous(), Err(CursorError::OutOfBounds));
    // A refused step leaves the cursor in place.
    assert_eq!(set.current(), Ok(&1));
}

#[test]
fn test_filter_wraps_past_the_tail() {
    let mut set = SortedSet::new();
    for item in [10, 20, 30, 40] {
        set.add(item).unwrap();
    }
    // The last add anchored the internal cursor at 40; finding 10 forces
    // the circular scan to wrap from the tail to the head.
    assert_eq!(set.filter(|&item| item == 10), Some(&10));
    assert_eq!(set.filter(|&item| item % 20 == 0), Some(&40));
    assert_eq!(set.filter(|&item| item > 100), None);
}

#[test]
fn test_filter_finds_single_match_from_any_anchor() {
    for anchor in [10, 20, 30] {
        let mut set = SortedSet::new();
        for item in [10, 20, 30] {
            set.add(item).unwrap();
        }
        // Re-anchor the internal cursor by removing and re-adding.
        assert_eq!(set.remove(&anchor), Some(anchor));
        set.add(anchor).unwrap();
        assert_eq!(set.filter(|&item| item == 20), Some(&20));
    }
}

#[test]
fn test_into_iter_ascending() {
    let mut set = SortedSet::new();
    for item in [3, 1, 2] {
        set.add(item).unwrap();
    }
    assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_every_item_dropped_exactly_once() {
    let drops = Rc::new(Cell::new(0));
    let mut set = SortedSet::new();
    for id in 0..8 {
        set.add(DropTally::new(id, &drops)).unwrap();
    }
    let removed = set.remove(&DropTally::new(2, &drops));
    assert!(removed.is_some());
    drop(removed);
    assert_eq!(drops.get(), 2); // the probe tally and the removed item
    drop(set);
    assert_eq!(drops.get(), 9);
}
