use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};

/// A single element of a [`BinarySearchTree`](super::BinarySearchTree), along with the two
/// subtrees it owns. Every element in `left` orders before this node's element, and every element
/// in `right` orders after it.
pub struct TreeNode<T> {
    pub(crate) element: T,
    pub(crate) left: Branch<T>,
    pub(crate) right: Branch<T>,
}

/// An owning link to an optional subtree.
pub(crate) struct Branch<T>(pub Option<Box<TreeNode<T>>>);

impl<T> TreeNode<T> {
    pub(crate) const fn leaf(element: T) -> TreeNode<T> {
        TreeNode {
            element,
            left: Branch(None),
            right: Branch(None),
        }
    }

    pub const fn element(&self) -> &T {
        &self.element
    }

    pub fn left(&self) -> Option<&TreeNode<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode<T>> {
        self.right.as_deref()
    }

    pub const fn is_leaf(&self) -> bool {
        self.left.0.is_none() && self.right.0.is_none()
    }
}

impl<T: Ord> Branch<T> {
    /// Descends to the empty branch where `element` belongs and places a new leaf there. Returns
    /// false, leaving the tree untouched, if an equal element is found on the way.
    pub fn insert(&mut self, element: T) -> bool {
        let mut branch = &mut self.0;
        while let Some(node) = branch {
            branch = match element.cmp(&node.element) {
                Ordering::Less => &mut node.left.0,
                Ordering::Greater => &mut node.right.0,
                Ordering::Equal => return false,
            };
        }

        *branch = Some(Box::new(TreeNode::leaf(element)));
        true
    }

    pub fn get(&self, element: &T) -> Option<&TreeNode<T>> {
        let mut branch = &self.0;
        while let Some(node) = branch {
            branch = match element.cmp(&node.element) {
                Ordering::Less => &node.left.0,
                Ordering::Greater => &node.right.0,
                Ordering::Equal => return Some(node),
            };
        }
        None
    }
}

impl<T> Branch<T> {
    /// Detaches the leftmost node of this subtree, putting its right subtree in its place.
    pub fn take_first(&mut self) -> Option<Box<TreeNode<T>>> {
        let mut branch = &mut self.0;
        while branch.as_ref()?.left.0.is_some() {
            // The loop condition has just checked that this branch holds a node.
            branch = &mut branch.as_mut()?.left.0;
        }

        let mut node = branch.take()?;
        *branch = node.right.0.take();
        Some(node)
    }

    /// Detaches the rightmost node of this subtree, putting its left subtree in its place.
    pub fn take_last(&mut self) -> Option<Box<TreeNode<T>>> {
        let mut branch = &mut self.0;
        while branch.as_ref()?.right.0.is_some() {
            branch = &mut branch.as_mut()?.right.0;
        }

        let mut node = branch.take()?;
        *branch = node.left.0.take();
        Some(node)
    }

    /// The number of nodes on the longest path from this branch down to a leaf. Walks the tree
    /// with an explicit stack, so that a degenerate tree can't overflow the call stack.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut pending: Vec<(&TreeNode<T>, usize)> =
            self.as_deref().into_iter().map(|node| (node, 1)).collect();

        while let Some((node, depth)) = pending.pop() {
            max = max.max(depth);
            pending.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            pending.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }
        max
    }

    /// Drops the whole subtree without recursing, so that a degenerate tree can't overflow the
    /// stack.
    pub fn clear(&mut self) {
        let mut pending = Vec::new();
        pending.extend(self.0.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.0.take());
            pending.extend(node.right.0.take());
        }
    }
}

impl<T> Deref for Branch<T> {
    type Target = Option<Box<TreeNode<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => Debug::fmt(node, f),
            None => write!(f, "-"),
        }
    }
}

enum Render<'a, T> {
    Branch(&'a Branch<T>, String),
    Line(String, &'a T),
}

/// Renders the subtree sideways, with the left subtree above the node and the right subtree
/// below it. Each level of depth adds one prefix, pointing up for a left child and down for a
/// right one.
impl<T: Debug> Debug for TreeNode<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_leaf() {
            return write!(f, "({:?})", self.element);
        }

        let mut pending = vec![
            Render::Branch(&self.right, String::from("└    ")),
            Render::Line(String::new(), &self.element),
            Render::Branch(&self.left, String::from("┌    ")),
        ];
        let mut first = true;

        while let Some(item) = pending.pop() {
            let (prefix, element) = match item {
                Render::Line(prefix, element) => (prefix, Some(element)),
                Render::Branch(Branch(None), prefix) => (prefix, None),
                Render::Branch(Branch(Some(node)), prefix) if node.is_leaf() => {
                    (prefix, Some(&node.element))
                },
                Render::Branch(Branch(Some(node)), prefix) => {
                    pending.push(Render::Branch(&node.right, format!("{prefix}└    ")));
                    pending.push(Render::Line(prefix.clone(), &node.element));
                    pending.push(Render::Branch(&node.left, format!("{prefix}┌    ")));
                    continue;
                },
            };

            if !first {
                writeln!(f)?;
            }
            first = false;

            match element {
                Some(element) => write!(f, "{prefix}({element:?})")?,
                None => write!(f, "{prefix}-")?,
            }
        }
        Ok(())
    }
}
