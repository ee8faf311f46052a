#![cfg(test)]

use std::iter;

use super::*;
#[cfg(feature = "contiguous")]
use crate::collections::contiguous::ArrayList;
use crate::collections::traits::List;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;
use crate::util::testing::CountedDrop;

#[test]
fn test_push_and_pop_both_ends() {
    let mut list = DoublyLinkedList::new();
    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    list.verify_double_links();

    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_back(), Some(3));
    list.verify_double_links();
    assert_eq!(list.pop_back(), Some(2));
    assert!(list.is_empty(), "Popping the last element should leave the list empty.");
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);
}

#[test]
fn test_insert_seeks_from_both_ends() {
    let mut list: DoublyLinkedList<_> = (0..6).collect();

    list.insert(1, 10);
    list.insert(5, 50);
    list.insert(0, -1);
    list.insert(list.len(), 99);
    list.verify_double_links();

    assert!(list.iter().copied().eq([-1, 0, 10, 1, 2, 3, 50, 4, 5, 99]));
    for (index, value) in [-1, 0, 10, 1, 2, 3, 50, 4, 5, 99].into_iter().enumerate() {
        assert_eq!(list[index], value, "Indexing should agree with iteration at {index}.");
    }
}

#[test]
fn test_remove() {
    let mut list: DoublyLinkedList<_> = "abcdef".chars().collect();

    assert_eq!(list.remove(2), 'c');
    assert_eq!(list.remove(3), 'e');
    assert_eq!(list.remove(0), 'a');
    assert_eq!(list.remove(list.len() - 1), 'f');
    list.verify_double_links();
    assert!(list.iter().copied().eq(['b', 'd']));

    assert_eq!(list.remove_item(&'d'), Some('d'));
    assert_eq!(list.remove_item(&'z'), None);
    assert_eq!(list.remove_item(&'b'), Some('b'));
    assert!(list.is_empty());
}

#[test]
fn test_bounds() {
    let mut list: DoublyLinkedList<_> = (0..3).collect();

    assert_eq!(list.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(list.try_remove(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(list.try_replace(5, 1), Err(IndexOutOfBounds { index: 5, len: 3 }));
    assert_eq!(list.try_insert(4, 1), Err(IndexOutOfBounds { index: 4, len: 3 }));
    assert!(list.iter().copied().eq(0..3), "Failed calls shouldn't modify the list.");

    let mut empty = DoublyLinkedList::<u8>::new();
    assert_eq!(empty.try_remove(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
    assert_panics!({ empty.get(0); });
}

#[test]
fn test_replace() {
    let mut list: DoublyLinkedList<_> = ["a", "b", "c"].into_iter().collect();
    assert_eq!(list.replace(1, "x"), "b");
    *list.get_mut(2) = "y";
    assert!(list.iter().copied().eq(["a", "x", "y"]));
}

#[test]
fn test_index_of_is_one_based() {
    let list: DoublyLinkedList<_> = [5, 6, 7, 6].into_iter().collect();

    assert_eq!(list.index_of(&5), Some(1));
    assert_eq!(list.index_of(&6), Some(2), "The first match should be reported.");
    assert_eq!(list.index_of(&8), None);
    assert!(list.contains(&7));
    assert!(!list.contains(&8));
}

#[cfg(feature = "contiguous")]
#[test]
fn test_add_all() {
    let mut list: DoublyLinkedList<_> = (0..2).collect();
    let other: ArrayList<_> = (2..4).collect();

    assert!(list.add_all(&other));
    assert!(list.iter().copied().eq(0..4));
    assert!(
        !list.add_all(&ArrayList::new()),
        "Adding an empty list should report that nothing changed."
    );
    assert_eq!(list.len(), 4);
}

#[test]
fn test_to_array() {
    let list: DoublyLinkedList<_> = (1..=3).collect();
    assert_eq!(&*list.to_array(), &[1, 2, 3]);
    assert_eq!(&*list.to_array_in(Box::new([7, 7, 7, 7])), &[1, 2, 3, 7]);
}

#[test]
fn test_iterators() {
    let mut list: DoublyLinkedList<_> = (0..5).collect();

    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.len(), 3);
    assert!(iter.copied().eq(1..4));

    for value in list.iter_mut() {
        *value *= 10;
    }
    assert!(list.iter().copied().eq([0, 10, 20, 30, 40]));

    let mut owned = list.into_iter();
    assert_eq!(owned.next_back(), Some(40));
    assert!(owned.eq([0, 10, 20, 30]));
}

#[test]
fn test_clear_and_drop() {
    let counter = CountedDrop::new();
    let mut list: DoublyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(8).collect();

    list.clear();
    assert!(list.is_empty());
    assert_eq!(counter.dropped(), 8, "Clearing should drop every node.");

    list.extend(iter::repeat_with(|| counter.clone()).take(4));
    drop(list);
    assert_eq!(counter.dropped(), 12);
}

#[test]
fn test_equality_and_display() {
    let a: DoublyLinkedList<_> = (0..3).collect();
    let mut b = a.clone();
    assert_eq!(a, b);

    b.push_back(3);
    assert_ne!(a, b);
    assert_eq!(format!("{a}"), "(0) <-> (1) <-> (2)");
}
