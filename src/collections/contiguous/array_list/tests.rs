#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::collections::traits::{Bidirectional, Direction, Sequenceable};
use crate::util::alloc::CountedDrop;
use crate::util::error::{CursorError, Exhausted, IndexOutOfBounds, NoCurrentElement};
use crate::util::panic::assert_panics;

#[test]
fn test_add_remove_insert_rendering() {
    let mut list = ArrayList::new();
    assert_eq!(list.to_string(), "[]", "An empty list should render as a pair of brackets.");

    list.push(1);
    list.push(2);
    list.push(3);
    assert_eq!(list.to_string(), "[1, 2, 3]");

    assert_eq!(list.remove(1), 2, "Remove should return the element that was at the index.");
    assert_eq!(list.to_string(), "[1, 3]");

    list.insert(1, 5);
    assert_eq!(list.to_string(), "[1, 5, 3]");
    assert_eq!(list.len(), 3);
}

#[test]
fn test_growth() {
    let mut list = ArrayList::new();
    assert_eq!(list.cap(), 0);

    let mut caps = [0; 9];
    for i in 0..9 {
        list.push(i);
        caps[i] = list.cap();

        for j in 0..=i {
            assert_eq!(list[j], j, "Growth shouldn't lose or reorder existing elements.");
        }
        assert_eq!(list[list.len() - 1], i, "The pushed element should be last.");
    }

    assert_eq!(
        caps,
        [1, 2, 4, 4, 8, 8, 8, 8, 16],
        "Capacity should start at 1 and double whenever the list is full."
    );

    let mut list = ArrayList::with_cap(1);
    list.push('a');
    list.push('b');
    assert_eq!(list.cap(), 2, "Growing from a capacity of 1 should double it.");

    let mut list = ArrayList::new();
    list.insert(0, 'a');
    assert_eq!(list.cap(), 1, "Inserting into an empty list should also grow it.");
}

#[test]
fn test_reserve() {
    let mut list: ArrayList<u8> = ArrayList::new();
    list.reserve(10);
    assert_eq!(list.cap(), 10);

    list.extend(0..10);
    assert_eq!(list.cap(), 10, "Reserved capacity should be used before growing.");

    list.reserve(5);
    assert_eq!(list.cap(), 15);
    list.reserve(3);
    assert_eq!(list.cap(), 15, "Reserving within the existing capacity should be a no-op.");

    assert_panics!({
        let mut list: ArrayList<u8> = (0..5).collect();
        list.reserve(usize::MAX);
    }, "Capacity overflow!");
}

#[test]
fn test_boundary_indices() {
    let mut list: ArrayList<_> = (0..5).collect();

    list.insert(0, 10);
    list.insert(list.len(), 20);
    assert_eq!(list.to_string(), "[10, 0, 1, 2, 3, 4, 20]");

    assert_eq!(list.remove(0), 10);
    assert_eq!(list.remove(list.len() - 1), 20);
    assert_eq!(list.to_string(), "[0, 1, 2, 3, 4]");

    assert_eq!(list.set(0, 100), 0);
    assert_eq!(list.set(4, 400), 4);
    assert_eq!(list.to_string(), "[100, 1, 2, 3, 400]");

    let mut single = ArrayList::new();
    single.push("only");
    assert_eq!(single.remove(0), "only");
    assert!(single.is_empty());
    assert_eq!(single.arr[0], None, "The vacated tail slot should be cleared.");
}

#[test]
fn test_index_errors() {
    let mut list: ArrayList<_> = (0..3).collect();

    assert_eq!(list.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(list.try_set(3, 0), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(list.try_remove(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(list.try_insert(4, 0), Err(IndexOutOfBounds { index: 4, len: 3 }));
    assert_eq!(list.try_insert(3, 3), Ok(()), "Inserting at len should be allowed.");

    let empty: ArrayList<u8> = ArrayList::new();
    assert_eq!(empty.try_get(0), Err(IndexOutOfBounds { index: 0, len: 0 }));

    assert_panics!({ list.get(10); }, "Index 10 out of bounds for collection with 4 elements!");
    assert_panics!({ list.remove(4); });
    assert_panics!({ let _value = list[7]; });
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut list: ArrayList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(list.remove(3));
    assert_eq!(counter.count(), 1, "A removed element should be dropped by its new owner.");

    drop(list.set(0, counter.clone()));
    assert_eq!(counter.count(), 2);

    drop(list);
    assert_eq!(counter.count(), 11, "Dropping the list should drop the other 9 elements.");

    let counter = CountedDrop::new(0);
    let list: ArrayList<_> = iter::repeat_with(|| counter.clone()).take(6).collect();
    let mut iter = list.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    drop(iter);
    assert_eq!(counter.count(), 6, "Dropping an owned iterator should drop all elements.");
}

#[test]
fn test_iterators() {
    let mut list: ArrayList<usize> = (0..5).collect();
    assert!(list.iter().copied().eq(0..5), "Iteration should be in index order.");
    assert_eq!(list.iter().len(), 5);

    for i in list.iter_mut() {
        *i *= 2;
    }
    assert_eq!(list.to_string(), "[0, 2, 4, 6, 8]");

    let mut iter = list.clone().into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_equality_hash_and_format() {
    let list: ArrayList<_> = (0_usize..5).collect();
    let mut other = ArrayList::with_cap(20);
    other.extend([0, 1, 2, 3, 4]);

    assert_eq!(list, other, "Capacity shouldn't affect equality.");
    assert_ne!(list, (0..4).collect::<ArrayList<_>>());

    let state = RandomState::new();
    assert_eq!(state.hash_one(&list), state.hash_one(&other));

    assert_eq!(list.clone(), list);
    assert_eq!(list.index_of(&3), Some(3));
    assert!(!list.contains(&7));

    assert_eq!(
        format!("{other:?}"),
        "ArrayList { contents: [0, 1, 2, 3, 4], len: 5, cap: 20 }"
    );
}

#[test]
fn test_cursor_forward() {
    let mut list: ArrayList<_> = (0..4).collect();
    let mut cursor = list.cursor();

    assert_eq!(
        cursor.remove(&mut list),
        Err(CursorError::NoCurrentElement(NoCurrentElement)),
        "Removing before any element has been returned should fail."
    );

    let mut seen = ArrayList::new();
    while cursor.has_next(&list) {
        seen.push(*cursor.next(&list).unwrap());
    }
    assert_eq!(seen, list, "The cursor should yield every element in index order.");
    assert_eq!(cursor.next(&list), Err(CursorError::Exhausted(Exhausted)));

    let mut cursor = list.cursor();
    while cursor.has_next(&list) {
        let value = *cursor.next(&list).unwrap();
        if value % 2 == 1 {
            assert_eq!(cursor.remove(&mut list), Ok(value));
            assert!(
                cursor.remove(&mut list).unwrap_err().is_no_current_element(),
                "Only one removal should be allowed per step."
            );
        }
    }
    assert_eq!(list.to_string(), "[0, 2]");
}

#[test]
fn test_cursor_bidirectional() {
    let list: ArrayList<_> = (10..15).collect();
    let mut cursor = list.cursor();
    assert!(!cursor.has_previous(&list));
    assert_eq!(cursor.previous_index(), None);
    assert_eq!(cursor.previous(&list), Err(CursorError::Exhausted(Exhausted)));

    let mut forward = ArrayList::new();
    for k in 0..4 {
        assert_eq!(cursor.next_index(), k);
        forward.push(*cursor.next(&list).unwrap());
        assert_eq!(cursor.previous_index(), Some(k));
        assert_eq!(cursor.direction(), Direction::Forward);
    }

    let mut backward = ArrayList::new();
    for k in (0..4).rev() {
        assert_eq!(cursor.previous_index(), Some(k));
        backward.push(*cursor.previous(&list).unwrap());
        assert_eq!(cursor.next_index(), k);
        assert_eq!(cursor.direction(), Direction::Backward);
    }

    assert!(
        forward.iter().rev().eq(backward.iter()),
        "Stepping back should return the forward sequence in reverse."
    );
    assert_eq!(cursor.next_index(), 0);
    assert!(!cursor.has_previous(&list));
}

#[test]
fn test_cursor_mutation() {
    let mut list: ArrayList<_> = (0..5).collect();
    let mut cursor = list.cursor();

    cursor.next(&list).unwrap();
    cursor.next(&list).unwrap();
    assert_eq!(cursor.set(&mut list, 10), Ok(1), "Set should replace the element just returned.");

    assert_eq!(cursor.previous(&list), Ok(&10));
    assert_eq!(cursor.remove(&mut list), Ok(10), "Remove after previous removes that element.");
    assert_eq!(cursor.next_index(), 1);
    assert_eq!(cursor.next(&list), Ok(&2));

    cursor.add(&mut list, 20).unwrap();
    cursor.add(&mut list, 21).unwrap();
    assert_eq!(list.to_string(), "[0, 2, 20, 21, 3, 4]");
    assert_eq!(cursor.next(&list), Ok(&3), "Adding shouldn't change the next element.");
    assert_eq!(cursor.previous(&list), Ok(&3));
    assert_eq!(cursor.previous(&list), Ok(&21), "The added element should precede the cursor.");

    cursor.add(&mut list, 30).unwrap();
    assert!(cursor.set(&mut list, 0).unwrap_err().is_no_current_element());
    assert!(cursor.remove(&mut list).unwrap_err().is_no_current_element());

    while cursor.has_next(&list) {
        cursor.next(&list).unwrap();
    }
    cursor.add(&mut list, 40).unwrap();
    assert_eq!(list.to_string(), "[0, 2, 20, 30, 21, 3, 4, 40]");
    assert!(!cursor.has_next(&list));
}

#[test]
fn test_cursor_concurrent_modification() {
    let mut list: ArrayList<_> = (0..5).collect();
    let mut cursor = list.cursor();
    cursor.next(&list).unwrap();

    list.push(5);
    assert!(
        cursor.next(&list).unwrap_err().is_concurrent_modification(),
        "Pushing directly onto the list should invalidate the cursor."
    );
    assert!(cursor.previous(&list).unwrap_err().is_concurrent_modification());
    assert!(cursor.remove(&mut list).unwrap_err().is_concurrent_modification());
    assert_eq!(list.len(), 6, "A failed cursor operation shouldn't modify the list.");

    let mut cursor = list.cursor();
    cursor.next(&list).unwrap();
    list.set(3, 30);
    assert_eq!(cursor.next(&list), Ok(&1), "Replacing an element isn't a structural change.");

    let mut cursor_a = list.cursor();
    let mut cursor_b = list.cursor();
    cursor_a.next(&list).unwrap();
    cursor_b.next(&list).unwrap();
    cursor_a.remove(&mut list).unwrap();
    assert!(cursor_a.next(&list).is_ok(), "A cursor should stay in sync with its own changes.");
    assert!(cursor_b.next(&list).unwrap_err().is_concurrent_modification());

    let other = list.clone();
    let mut cursor = list.cursor();
    assert!(
        cursor.next(&other).unwrap_err().is_concurrent_modification(),
        "A cursor shouldn't accept a list other than the one that created it."
    );
}
