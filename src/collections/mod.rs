//! Various general-purpose collection types.
//!
//! # Purpose
//! Two sequences with opposite trade-offs, [`ArrayList`](contiguous::ArrayList) and
//! [`DoublyLinkedList`](linked::DoublyLinkedList), both implementing [`List`](traits::List). A
//! [`Stack`](adapters::Stack) and a [`Queue`](adapters::Queue) restrict each of them to one access
//! pattern, while [`BinarySearchTree`](binary_tree::BinarySearchTree) keeps unique elements in
//! order.
//!
//! # Errors
//! Fallible operations come in pairs: a `try_` method returning one of the error types below, and
//! a method of the same name without the prefix that panics with the error's message instead.

#[cfg(feature = "adapters")]
pub mod adapters;
#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;

#[cfg(feature = "serde")]
mod serialization;

pub use crate::util::error::{
    CapacityOverflow, CollectionError, EmptyStructure, IndexOutOfBounds, InvalidArgument,
};
