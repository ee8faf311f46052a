use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use super::iter::{InorderIter, PostorderIter, PreorderIter, SnapshotIter, Traversal, TraversalIter};
use super::node::{Branch, TreeNode};
use crate::util::error::{EmptyStructure, InvalidArgument};
use crate::util::result::ResultExtension;

/// An unbalanced binary search tree holding unique elements, ordered by [`Ord`].
///
/// New elements are always placed as leaves, so the shape of the tree depends entirely on
/// insertion order. Inserting sorted elements will degrade the tree into a list.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the tree.
/// - `h`: The height of the tree, between `log2(n)` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `search` | `O(h)` |
/// | `remove_min` | `O(h)` |
/// | `remove_max` | `O(h)` |
/// | `height` | `O(n)` |
/// | `clear` | `O(n)` |
/// | `inorder_iter` | `O(h)` |
/// | `preorder_iter` | `O(n)` |
/// | `postorder_iter` | `O(n)` |
pub struct BinarySearchTree<T> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T> BinarySearchTree<T> {
    /// Creates a new, empty tree. Doesn't allocate.
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch(None),
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every element of the tree.
    pub fn clear(&mut self) {
        self.root.clear();
        self.len = 0;
    }

    /// Returns the number of nodes on the longest path from the root to a leaf. An empty tree has
    /// a height of 0 and a single element has a height of 1.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Returns the root node of the tree.
    ///
    /// # Panics
    /// Panics if the tree is empty.
    pub fn root(&self) -> &TreeNode<T> {
        self.try_root().throw()
    }

    /// Returns the root node of the tree, or an [`Err`] if it is empty.
    pub fn try_root(&self) -> Result<&TreeNode<T>, EmptyStructure> {
        self.root.as_deref().ok_or(EmptyStructure)
    }

    /// Returns the smallest element of the tree, if any.
    pub fn first(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.element)
    }

    /// Returns the largest element of the tree, if any.
    pub fn last(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.element)
    }

    /// Removes and returns the smallest element of the tree. The removed node's right subtree
    /// takes its place.
    pub fn remove_min(&mut self) -> Option<T> {
        let node = self.root.take_first()?;
        self.len -= 1;
        Some(node.element)
    }

    /// Removes and returns the largest element of the tree. The removed node's left subtree takes
    /// its place.
    pub fn remove_max(&mut self) -> Option<T> {
        let node = self.root.take_last()?;
        self.len -= 1;
        Some(node.element)
    }

    /// Returns an iterator over the elements of the tree in ascending order. Traversal is lazy,
    /// holding only the path down to the next element.
    pub fn inorder_iter(&self) -> InorderIter<'_, T> {
        InorderIter::new(&self.root, self.len)
    }

    /// Returns an iterator visiting each node before either of its subtrees. The visiting order is
    /// collected up front.
    pub fn preorder_iter(&self) -> PreorderIter<'_, T> {
        SnapshotIter::preorder(&self.root, self.len)
    }

    /// Returns an iterator visiting each node after both of its subtrees. The visiting order is
    /// collected up front.
    pub fn postorder_iter(&self) -> PostorderIter<'_, T> {
        SnapshotIter::postorder(&self.root, self.len)
    }

    /// Returns an iterator using the provided traversal order.
    pub fn iter_with(&self, order: Traversal) -> TraversalIter<'_, T> {
        match order {
            Traversal::Inorder => TraversalIter::Inorder(self.inorder_iter()),
            Traversal::Preorder => TraversalIter::Preorder(self.preorder_iter()),
            Traversal::Postorder => TraversalIter::Postorder(self.postorder_iter()),
        }
    }

    /// Returns an iterator over the elements of the tree in ascending order. Identical to
    /// [`inorder_iter`](BinarySearchTree::inorder_iter).
    pub fn iter(&self) -> InorderIter<'_, T> {
        self.inorder_iter()
    }

    /// Flattens the tree into its preorder sequence, from which
    /// [`from_preorder`](BinarySearchTree::from_preorder) can rebuild an identically shaped tree.
    pub fn to_preorder(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.preorder_iter().cloned().collect()
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Adds `element` to the tree as a new leaf, returning true if it was added. If an equal
    /// element is already present, the tree is left unchanged and false is returned.
    pub fn add(&mut self, element: T) -> bool {
        let added = self.root.insert(element);
        if added {
            self.len += 1;
        }
        added
    }

    pub fn contains(&self, element: &T) -> bool {
        self.root.get(element).is_some()
    }

    /// Returns the node holding an element equal to `element`, if there is one.
    pub fn search(&self, element: &T) -> Option<&TreeNode<T>> {
        self.root.get(element)
    }

    /// Rebuilds a tree from its preorder sequence, as produced by
    /// [`to_preorder`](BinarySearchTree::to_preorder). The resulting tree has exactly the shape
    /// that produced the sequence.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if the sequence contains duplicates, or if it couldn't have been
    /// produced by a preorder traversal of any binary search tree.
    pub fn from_preorder<I: IntoIterator<Item = T>>(
        preorder: I,
    ) -> Result<BinarySearchTree<T>, InvalidArgument> {
        let elements: Vec<T> = preorder.into_iter().collect();
        check_preorder(&elements)?;

        // Adding a valid preorder sequence in order places every node where it was originally.
        let mut tree = BinarySearchTree::new();
        for element in elements {
            tree.add(element);
        }
        Ok(tree)
    }
}

/// Checks that `elements` is the preorder traversal of some binary search tree. `ancestors` holds
/// the nodes whose right subtree hasn't been entered yet, while `lower` is the largest element
/// that everything remaining must exceed.
fn check_preorder<T: Ord>(elements: &[T]) -> Result<(), InvalidArgument> {
    let mut ancestors: Vec<&T> = Vec::new();
    let mut lower: Option<&T> = None;

    for element in elements {
        match lower.map(|bound| element.cmp(bound)) {
            Some(Ordering::Equal) => {
                return Err(InvalidArgument { reason: "duplicate element in preorder sequence" });
            },
            Some(Ordering::Less) => {
                return Err(InvalidArgument { reason: "sequence is not a valid preorder" });
            },
            _ => (),
        }

        while let Some(&top) = ancestors.last() {
            match element.cmp(top) {
                Ordering::Less => break,
                Ordering::Equal => {
                    return Err(InvalidArgument {
                        reason: "duplicate element in preorder sequence",
                    });
                },
                Ordering::Greater => lower = ancestors.pop(),
            }
        }
        ancestors.push(element);
    }

    Ok(())
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.root.clear();
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        let mut root = Branch(None);
        let mut pending = vec![(&self.root, &mut root)];

        while let Some((source, target)) = pending.pop() {
            if let Some(node) = source.as_deref() {
                let copy = target.0.insert(Box::new(TreeNode::leaf(node.element.clone())));
                pending.push((&node.left, &mut copy.left));
                pending.push((&node.right, &mut copy.right));
            }
        }

        BinarySearchTree {
            root,
            len: self.len,
        }
    }
}

/// Two trees are equal if they hold equal elements, regardless of shape.
impl<T: PartialEq> PartialEq for BinarySearchTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BinarySearchTree<T> {}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = InorderIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder_iter()
    }
}

impl<T: Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("nodes", &format_args!("\n{:?}\n", self.root))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
