use std::iter::FusedIterator;

use super::node::{Branch, TreeNode};

/// The capability shared by every tree traversal: an [`Iterator`] that can also report whether
/// another element remains without consuming it.
pub trait TreeIterator: Iterator {
    fn has_next(&self) -> bool;
}

/// Selects one of the three depth-first traversal orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Left subtree, node, right subtree. Yields elements in ascending order.
    Inorder,
    /// Node, left subtree, right subtree.
    Preorder,
    /// Left subtree, right subtree, node.
    Postorder,
}

/// A lazy, ascending traversal. Only the path to the next element is held, so each step is
/// amortized `O(1)` with `O(h)` extra space.
pub struct InorderIter<'a, T> {
    pub(crate) stack: Vec<&'a TreeNode<T>>,
    pub(crate) remaining: usize,
}

impl<'a, T> InorderIter<'a, T> {
    pub(crate) fn new(root: &'a Branch<T>, len: usize) -> InorderIter<'a, T> {
        let mut iter = InorderIter {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut branch: &'a Branch<T>) {
        while let Some(node) = branch.as_deref() {
            self.stack.push(node);
            branch = &node.left;
        }
    }
}

impl<'a, T> Iterator for InorderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> TreeIterator for InorderIter<'a, T> {
    fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }
}

impl<'a, T> ExactSizeIterator for InorderIter<'a, T> {}

impl<'a, T> FusedIterator for InorderIter<'a, T> {}

/// An eager traversal. The full visiting order is collected when the iterator is created and then
/// replayed by index, at the cost of `O(n)` time and space up front.
pub struct SnapshotIter<'a, T> {
    pub(crate) elements: Box<[&'a T]>,
    pub(crate) current: usize,
}

/// Root first, then the left subtree, then the right subtree.
pub type PreorderIter<'a, T> = SnapshotIter<'a, T>;

/// Left subtree, then the right subtree, then the root.
pub type PostorderIter<'a, T> = SnapshotIter<'a, T>;

impl<'a, T> SnapshotIter<'a, T> {
    pub(crate) fn preorder(root: &'a Branch<T>, len: usize) -> SnapshotIter<'a, T> {
        let mut elements = Vec::with_capacity(len);
        let mut pending: Vec<&'a TreeNode<T>> = root.as_deref().into_iter().collect();

        while let Some(node) = pending.pop() {
            elements.push(&node.element);
            // Right is pushed first so that left is visited first.
            pending.extend(node.right.as_deref());
            pending.extend(node.left.as_deref());
        }

        SnapshotIter {
            elements: elements.into_boxed_slice(),
            current: 0,
        }
    }

    pub(crate) fn postorder(root: &'a Branch<T>, len: usize) -> SnapshotIter<'a, T> {
        // Node, right, left reversed is left, right, node.
        let mut elements = Vec::with_capacity(len);
        let mut pending: Vec<&'a TreeNode<T>> = root.as_deref().into_iter().collect();

        while let Some(node) = pending.pop() {
            elements.push(&node.element);
            pending.extend(node.left.as_deref());
            pending.extend(node.right.as_deref());
        }
        elements.reverse();

        SnapshotIter {
            elements: elements.into_boxed_slice(),
            current: 0,
        }
    }
}

impl<'a, T> Iterator for SnapshotIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = *self.elements.get(self.current)?;
        self.current += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len() - self.current;
        (remaining, Some(remaining))
    }
}

impl<'a, T> TreeIterator for SnapshotIter<'a, T> {
    fn has_next(&self) -> bool {
        self.current < self.elements.len()
    }
}

impl<'a, T> ExactSizeIterator for SnapshotIter<'a, T> {}

impl<'a, T> FusedIterator for SnapshotIter<'a, T> {}

/// Any of the three traversals, chosen at runtime with a [`Traversal`].
pub enum TraversalIter<'a, T> {
    Inorder(InorderIter<'a, T>),
    Preorder(PreorderIter<'a, T>),
    Postorder(PostorderIter<'a, T>),
}

impl<'a, T> TraversalIter<'a, T> {
    pub const fn order(&self) -> Traversal {
        match self {
            TraversalIter::Inorder(_) => Traversal::Inorder,
            TraversalIter::Preorder(_) => Traversal::Preorder,
            TraversalIter::Postorder(_) => Traversal::Postorder,
        }
    }
}

impl<'a, T> Iterator for TraversalIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            TraversalIter::Inorder(iter) => iter.next(),
            TraversalIter::Preorder(iter) | TraversalIter::Postorder(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            TraversalIter::Inorder(iter) => iter.size_hint(),
            TraversalIter::Preorder(iter) | TraversalIter::Postorder(iter) => iter.size_hint(),
        }
    }
}

impl<'a, T> TreeIterator for TraversalIter<'a, T> {
    fn has_next(&self) -> bool {
        match self {
            TraversalIter::Inorder(iter) => iter.has_next(),
            TraversalIter::Preorder(iter) | TraversalIter::Postorder(iter) => iter.has_next(),
        }
    }
}

impl<'a, T> ExactSizeIterator for TraversalIter<'a, T> {}

impl<'a, T> FusedIterator for TraversalIter<'a, T> {}
