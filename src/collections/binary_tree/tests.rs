#![cfg(test)]

use std::cmp::Ordering;

use super::*;
use crate::util::error::{EmptyStructure, InvalidArgument};
use crate::util::panic::assert_panics;
use crate::util::testing::CountedDrop;

fn sample() -> BinarySearchTree<i32> {
    [5, 3, 8, 1, 4].into_iter().collect()
}

#[test]
fn test_traversal_orders() {
    let tree = sample();

    assert!(tree.inorder_iter().copied().eq([1, 3, 4, 5, 8]));
    assert!(tree.preorder_iter().copied().eq([5, 3, 1, 4, 8]));
    assert!(tree.postorder_iter().copied().eq([1, 4, 3, 8, 5]));
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.len(), 5);
}

#[test]
fn test_iter_with() {
    let tree = sample();

    for (order, expected) in [
        (Traversal::Inorder, [1, 3, 4, 5, 8]),
        (Traversal::Preorder, [5, 3, 1, 4, 8]),
        (Traversal::Postorder, [1, 4, 3, 8, 5]),
    ] {
        let iter = tree.iter_with(order);
        assert_eq!(iter.order(), order);
        assert_eq!(iter.len(), 5);
        assert!(iter.copied().eq(expected), "Wrong visiting order for {order:?}.");
    }
}

#[test]
fn test_has_next() {
    let tree: BinarySearchTree<_> = [2, 1].into_iter().collect();

    let mut inorder = tree.inorder_iter();
    assert!(inorder.has_next());
    assert_eq!(inorder.next(), Some(&1));
    assert!(inorder.has_next());
    assert_eq!(inorder.next(), Some(&2));
    assert!(!inorder.has_next());
    assert_eq!(inorder.next(), None);

    let mut postorder = tree.postorder_iter();
    assert_eq!(postorder.len(), 2);
    postorder.next();
    postorder.next();
    assert!(!postorder.has_next());
    assert_eq!(postorder.next(), None);

    let empty = BinarySearchTree::<u8>::new();
    for order in [Traversal::Inorder, Traversal::Preorder, Traversal::Postorder] {
        assert!(!empty.iter_with(order).has_next());
    }
}

#[test]
fn test_duplicates_rejected() {
    let mut tree = sample();

    assert!(!tree.add(3), "Adding a present element should report no change.");
    assert_eq!(tree.len(), 5);
    assert!(tree.preorder_iter().copied().eq([5, 3, 1, 4, 8]), "The shape shouldn't change.");
    assert!(tree.add(6));
    assert_eq!(tree.len(), 6);
}

#[test]
fn test_contains_and_search() {
    let tree = sample();

    assert!(tree.contains(&4));
    assert!(!tree.contains(&7));

    let node = tree.search(&3).expect("3 should be present");
    assert_eq!(node.element(), &3);
    assert_eq!(node.left().map(TreeNode::element), Some(&1));
    assert_eq!(node.right().map(TreeNode::element), Some(&4));
    assert!(!node.is_leaf());
    assert!(tree.search(&8).is_some_and(TreeNode::is_leaf));
    assert!(tree.search(&0).is_none());
}

#[test]
fn test_root() {
    let mut tree = BinarySearchTree::new();
    assert_eq!(tree.try_root().err(), Some(EmptyStructure));
    assert_panics!({ tree.root(); });

    tree.add('m');
    tree.add('a');
    assert_eq!(tree.root().element(), &'m');
    assert_eq!(tree.first(), Some(&'a'));
    assert_eq!(tree.last(), Some(&'m'));
}

#[test]
fn test_remove_min_rethreads_right_child() {
    let mut tree = sample();

    assert_eq!(tree.remove_min(), Some(1));
    assert_eq!(tree.remove_min(), Some(3));
    // 4 takes the place of 3 as the left child of 5.
    assert_eq!(tree.root().left().map(TreeNode::element), Some(&4));
    assert_eq!(tree.len(), 3);

    assert_eq!(tree.remove_min(), Some(4));
    assert_eq!(tree.remove_min(), Some(5));
    assert_eq!(tree.root().element(), &8, "Removing the root should promote its right child.");
    assert_eq!(tree.remove_min(), Some(8));
    assert_eq!(tree.remove_min(), None);
    assert!(tree.is_empty());
}

#[test]
fn test_remove_max_rethreads_left_child() {
    let mut tree: BinarySearchTree<_> = [5, 3, 8, 7, 6].into_iter().collect();

    assert_eq!(tree.remove_max(), Some(8));
    assert_eq!(tree.root().right().map(TreeNode::element), Some(&7));
    assert_eq!(tree.remove_max(), Some(7));
    assert_eq!(tree.remove_max(), Some(6));
    assert_eq!(tree.remove_max(), Some(5));
    assert_eq!(tree.root().element(), &3);
    assert_eq!(tree.remove_max(), Some(3));
    assert_eq!(tree.remove_max(), None);
    assert_eq!(tree.len(), 0);
}

#[test]
fn test_height() {
    let mut tree = BinarySearchTree::new();
    assert_eq!(tree.height(), 0);

    tree.add(1);
    assert_eq!(tree.height(), 1);

    tree.extend(2..=4);
    assert_eq!(tree.height(), 4, "Sorted insertion should produce a chain.");
}

#[test]
fn test_preorder_round_trip() {
    let tree = sample();
    let preorder = tree.to_preorder();
    assert_eq!(&*preorder, &[5, 3, 1, 4, 8]);

    let rebuilt = BinarySearchTree::from_preorder(preorder).expect("the sequence came from a tree");
    assert!(rebuilt.preorder_iter().eq(tree.preorder_iter()), "The shape should be identical.");
    assert_eq!(rebuilt.len(), tree.len());
    assert_eq!(rebuilt.height(), tree.height());

    let empty = BinarySearchTree::<u8>::from_preorder([]).expect("an empty sequence is valid");
    assert!(empty.is_empty());
}

#[test]
fn test_from_preorder_rejects_invalid_sequences() {
    assert_eq!(
        BinarySearchTree::from_preorder([5, 3, 5]).err(),
        Some(InvalidArgument { reason: "duplicate element in preorder sequence" }),
    );
    assert_eq!(
        BinarySearchTree::from_preorder([5, 3, 4, 3]).err(),
        Some(InvalidArgument { reason: "duplicate element in preorder sequence" }),
    );
    // 4 can't appear after 8 has entered 5's right subtree.
    assert_eq!(
        BinarySearchTree::from_preorder([5, 3, 8, 4]).err(),
        Some(InvalidArgument { reason: "sequence is not a valid preorder" }),
    );
    assert_eq!(
        BinarySearchTree::from_preorder([2, 3, 1]).err(),
        Some(InvalidArgument { reason: "sequence is not a valid preorder" }),
    );
}

#[test]
fn test_equality_ignores_shape() {
    let a: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
    let b: BinarySearchTree<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(a, b);
    assert_ne!(a.height(), b.height());

    let c = a.clone();
    assert!(c.preorder_iter().eq(a.preorder_iter()), "Clones should keep the shape.");
    assert_ne!(a, [1, 2].into_iter().collect::<BinarySearchTree<_>>());
}

#[test]
fn test_formatting() {
    let tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
    assert_eq!(format!("{tree}"), "{1, 2, 3}");
    assert_eq!(format!("{:?}", tree.root()), "┌    (1)\n(2)\n└    (3)");

    let lopsided: BinarySearchTree<_> = [2, 1].into_iter().collect();
    assert_eq!(format!("{:?}", lopsided.root()), "┌    (1)\n(2)\n└    -");

    let nested: BinarySearchTree<_> = [4, 2, 6, 1, 3].into_iter().collect();
    assert_eq!(
        format!("{:?}", nested.root()),
        "┌    ┌    (1)\n┌    (2)\n┌    └    (3)\n(4)\n└    (6)",
        "Each level should add one prefix to the lines beneath it."
    );
}

#[derive(Debug)]
struct Keyed(u32, CountedDrop);

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

#[test]
fn test_clear_and_drop() {
    let counter = CountedDrop::new();
    let mut tree: BinarySearchTree<_> =
        [4, 2, 6, 1, 3].into_iter().map(|key| Keyed(key, counter.clone())).collect();

    assert!(!tree.add(Keyed(2, counter.clone())));
    assert_eq!(counter.dropped(), 1, "A rejected duplicate should be dropped immediately.");

    tree.clear();
    assert_eq!(counter.dropped(), 6);
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);

    tree.extend((0..3).map(|key| Keyed(key, counter.clone())));
    let removed = tree.remove_min();
    assert_eq!(counter.dropped(), 6, "Removal should hand the element back rather than drop it.");
    drop(removed);
    drop(tree);
    assert_eq!(counter.dropped(), 9);
}

#[test]
fn test_degenerate_tree_drop() {
    let mut tree: BinarySearchTree<u32> = (0..10_000).collect();
    assert_eq!(tree.len(), 10_000);
    assert_eq!(tree.last(), Some(&9_999));
    assert_eq!(tree.inorder_iter().len(), 10_000);

    assert_eq!(tree.remove_max(), Some(9_999));
    drop(tree);
}

#[test]
fn test_degenerate_tree_height() {
    let mut tree: BinarySearchTree<u32> = (0..10_000).collect();
    assert_eq!(tree.height(), 10_000, "Sorted input should build a chain as tall as it is long.");

    tree.remove_min();
    assert_eq!(tree.height(), 9_999);

    let descending: BinarySearchTree<u32> = (0..10_000).rev().collect();
    assert_eq!(descending.height(), 10_000);
}
