#![cfg(all(test, feature = "contiguous", feature = "linked"))]

use proptest::prelude::*;

use super::contiguous::ArrayList;
use super::linked::LinkedList;
use super::traits::Sequenceable;

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Insert(usize, i32),
    Remove(usize),
    Set(usize, i32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::Push),
        (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        any::<usize>().prop_map(Op::Remove),
        (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
    ]
}

fn assert_same(array: &ArrayList<i32>, linked: &LinkedList<i32>) -> Result<(), TestCaseError> {
    prop_assert_eq!(array.len(), linked.len());
    for i in 0..array.len() {
        prop_assert_eq!(array.get(i), linked.get(i));
    }
    prop_assert_eq!(array.to_string(), linked.to_string());
    Ok(())
}

proptest! {
    #[test]
    fn test_lists_behave_the_same(ops in prop::collection::vec(op(), 0..64)) {
        let mut array = ArrayList::new();
        let mut linked = LinkedList::new();

        for op in ops {
            match op {
                Op::Push(value) => {
                    array.push(value);
                    linked.push(value);
                },
                // Indices are taken modulo len + 1 so that insertion at the end is exercised.
                Op::Insert(index, value) => {
                    let index = index % (array.len() + 1);
                    array.insert(index, value);
                    linked.insert(index, value);
                },
                Op::Remove(index) if !array.is_empty() => {
                    let index = index % array.len();
                    prop_assert_eq!(array.remove(index), linked.remove(index));
                },
                Op::Set(index, value) if !array.is_empty() => {
                    let index = index % array.len();
                    prop_assert_eq!(array.set(index, value), linked.set(index, value));
                },
                Op::Remove(index) | Op::Set(index, _) => {
                    prop_assert_eq!(array.try_remove(index), Err(super::IndexOutOfBounds {
                        index,
                        len: 0,
                    }));
                    prop_assert!(linked.try_remove(index).is_err());
                },
            }
            linked.verify_links();
            assert_same(&array, &linked)?;
        }

        let mut array_cursor = array.cursor();
        let mut linked_cursor = linked.cursor();
        while array_cursor.has_next(&array) {
            prop_assert!(linked_cursor.has_next(&linked));
            prop_assert_eq!(array_cursor.next(&array), linked_cursor.next(&linked));
        }
        prop_assert!(!linked_cursor.has_next(&linked));
    }
}
