//! Property tests for adt-collections
//!
//! Ordering guarantees of the stack and queue, the search tree's ordering and removal invariants,
//! and content preservation across growth and serialization.

use std::collections::BTreeSet;

use adt_collections::collections::adapters::{Queue, Stack};
use adt_collections::collections::binary_tree::{BinarySearchTree, Traversal, TreeIterator};
use adt_collections::collections::contiguous::ArrayList;
use adt_collections::collections::linked::DoublyLinkedList;
use adt_collections::collections::traits::List;
use adt_collections::collections::{CollectionError, EmptyStructure, IndexOutOfBounds};
use proptest::prelude::*;

// ============================================================================
// Stack and Queue
// ============================================================================

proptest! {
    // Popping everything returns the pushed elements in reverse.
    #[test]
    fn prop_stack_is_lifo(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut stack = Stack::new();
        for value in &values {
            stack.push(*value);
        }

        let mut popped = Vec::new();
        while let Ok(value) = stack.try_pop() {
            popped.push(value);
        }

        popped.reverse();
        prop_assert_eq!(popped, values);
        prop_assert!(stack.is_empty());
    }

    // Dequeuing everything returns the enqueued elements in order.
    #[test]
    fn prop_queue_is_fifo(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut queue = Queue::new();
        for value in &values {
            queue.enqueue(*value);
        }
        prop_assert_eq!(queue.len(), values.len());

        let mut dequeued = Vec::new();
        while let Ok(value) = queue.try_dequeue() {
            dequeued.push(value);
        }

        prop_assert_eq!(dequeued, values);
        prop_assert_eq!(queue.try_peek(), Err(EmptyStructure));
    }

    // Search distances count from the top of the stack and the head of the queue.
    #[test]
    fn prop_search_is_one_based(values in prop::collection::btree_set(any::<u16>(), 1..50)) {
        let values: Vec<_> = values.into_iter().collect();
        let stack: Stack<_> = values.iter().copied().collect();
        let queue: Queue<_> = values.iter().copied().collect();

        for (index, value) in values.iter().enumerate() {
            prop_assert_eq!(queue.search(value), Some(index + 1));
            prop_assert_eq!(stack.search(value), Some(values.len() - index));
        }
    }
}

// ============================================================================
// Lists
// ============================================================================

proptest! {
    // Growing past the initial capacity keeps every element in insertion order.
    #[test]
    fn prop_array_list_growth_preserves_content(
        values in prop::collection::vec(any::<u64>(), 0..300)
    ) {
        let mut list = ArrayList::new();
        for value in &values {
            list.push(*value);
        }

        prop_assert_eq!(list.as_slice(), values.as_slice());
        prop_assert!(list.cap() >= list.len());
        prop_assert_eq!(list.cap() % 10, 0, "Capacity should only ever double from 10.");
    }

    // Both lists agree with a Vec under the same sequence of inserts and removals.
    #[test]
    fn prop_lists_match_vec(
        ops in prop::collection::vec((any::<bool>(), any::<usize>(), any::<i8>()), 0..100)
    ) {
        let mut model = Vec::new();
        let mut array = ArrayList::new();
        let mut linked = DoublyLinkedList::new();

        for (insert, index, value) in ops {
            if insert {
                let index = index % (model.len() + 1);
                model.insert(index, value);
                array.insert(index, value);
                linked.insert(index, value);
            } else if !model.is_empty() {
                let index = index % model.len();
                let expected = model.remove(index);
                prop_assert_eq!(array.remove(index), expected);
                prop_assert_eq!(linked.remove(index), expected);
            } else {
                prop_assert_eq!(array.try_remove(index), Err(IndexOutOfBounds { index, len: 0 }));
            }
        }

        prop_assert_eq!(&*array.to_array(), model.as_slice());
        prop_assert_eq!(&*linked.to_array(), model.as_slice());
    }
}

// ============================================================================
// Binary Search Tree
// ============================================================================

proptest! {
    // Inorder traversal yields the distinct inputs in ascending order.
    #[test]
    fn prop_inorder_is_sorted(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let tree: BinarySearchTree<_> = values.iter().copied().collect();
        let expected: Vec<_> = values.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

        prop_assert_eq!(tree.len(), expected.len());
        prop_assert!(tree.inorder_iter().copied().eq(expected));
    }

    // Adding a present element changes nothing.
    #[test]
    fn prop_duplicates_rejected(values in prop::collection::vec(any::<u8>(), 1..100)) {
        let mut tree: BinarySearchTree<_> = values.iter().copied().collect();
        let len = tree.len();
        let before = tree.to_preorder();

        for value in &values {
            prop_assert!(!tree.add(*value));
        }
        prop_assert_eq!(tree.len(), len);
        prop_assert_eq!(tree.to_preorder(), before);
    }

    // Every traversal visits each element exactly once.
    #[test]
    fn prop_traversals_visit_everything(values in prop::collection::vec(any::<i16>(), 0..100)) {
        let tree: BinarySearchTree<_> = values.iter().copied().collect();

        for order in [Traversal::Inorder, Traversal::Preorder, Traversal::Postorder] {
            let mut iter = tree.iter_with(order);
            let mut seen = BTreeSet::new();
            while iter.has_next() {
                let value = iter.next();
                prop_assert!(value.is_some_and(|value| seen.insert(*value)));
            }
            prop_assert_eq!(seen.len(), tree.len());
        }
    }

    // Repeated extremal removal drains the tree in sorted order.
    #[test]
    fn prop_extremal_removal_order(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut ascending: BinarySearchTree<_> = values.iter().copied().collect();
        let mut descending: BinarySearchTree<_> = values.iter().copied().collect();
        let expected: Vec<_> = values.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

        let mut mins = Vec::new();
        while let Some(value) = ascending.remove_min() {
            mins.push(value);
        }
        let mut maxes = Vec::new();
        while let Some(value) = descending.remove_max() {
            maxes.push(value);
        }
        maxes.reverse();

        prop_assert_eq!(&mins, &expected);
        prop_assert_eq!(&maxes, &expected);
        prop_assert!(ascending.is_empty() && descending.is_empty());
    }

    // Rebuilding from a preorder sequence reproduces the exact shape.
    #[test]
    fn prop_preorder_round_trip(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let tree: BinarySearchTree<_> = values.iter().copied().collect();
        let rebuilt = BinarySearchTree::from_preorder(tree.to_preorder());

        prop_assert!(rebuilt.is_ok());
        if let Ok(rebuilt) = rebuilt {
            prop_assert!(rebuilt.preorder_iter().eq(tree.preorder_iter()));
            prop_assert_eq!(rebuilt.height(), tree.height());
        }
    }

    // Serialized bytes are reproduced exactly after a round trip.
    #[test]
    fn prop_serde_round_trip(values in prop::collection::vec(any::<i64>(), 0..100)) {
        let tree: BinarySearchTree<_> = values.iter().copied().collect();
        let json = serde_json::to_vec(&tree).unwrap();
        let decoded: BinarySearchTree<i64> = serde_json::from_slice(&json).unwrap();
        prop_assert_eq!(serde_json::to_vec(&decoded).unwrap(), json);

        let list: DoublyLinkedList<_> = values.iter().copied().collect();
        let json = serde_json::to_vec(&list).unwrap();
        let decoded: DoublyLinkedList<i64> = serde_json::from_slice(&json).unwrap();
        prop_assert_eq!(decoded, list);
    }
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_errors_unify() {
    let list: ArrayList<u8> = ArrayList::new();
    let error: CollectionError = list.try_get(2).unwrap_err().into();
    assert!(error.is_index_out_of_bounds());
    assert_eq!(error.to_string(), "Index 2 out of bounds for collection with 0 elements!");

    let error: CollectionError = Stack::<u8>::new().try_peek().unwrap_err().into();
    assert!(error.is_empty_structure());
    assert_eq!(EmptyStructure::try_from(error).ok(), Some(EmptyStructure));
}
