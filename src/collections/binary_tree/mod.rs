//! A module containing [`BinarySearchTree`] and its traversal iterators.
//!
//! [`InorderIter`] walks the tree lazily, while [`PreorderIter`] and [`PostorderIter`] collect
//! their visiting order when they are created. All three implement [`TreeIterator`], and
//! [`TraversalIter`] picks between them at runtime.

mod iter;
mod node;
mod tests;
mod tree;

pub use iter::*;
pub use node::TreeNode;
pub use tree::*;
