//! A small collections library: growable and linked lists, the stack and queue built on top of
//! them, and an unbalanced binary search tree with three traversal orders.
//!
//! # Method
//! The sequences manage their own memory. [`ArrayList`](collections::contiguous::ArrayList) owns a
//! raw buffer that doubles in capacity when full, and
//! [`DoublyLinkedList`](collections::linked::DoublyLinkedList) links heap-allocated nodes with raw
//! pointers in both directions. The tree owns its nodes through boxes, and every walk over it is
//! iterative so that a degenerate tree can't overflow the stack.
//!
//! # Error Handling
//! It is more ergonomic for some functions to panic, because users don't want to be forced to
//! handle an error every time they invoke a method. Each fallible operation is therefore offered
//! twice: a `try_` method returning a [`Result`], and a method that panics with the same message.
//!
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using enums for static dispatch rather than dynamic, with structs (often ZSTs) that implement
//! [`Error`](std::error::Error).
//!
//! # Dependencies
//! This crate depends on some derive macros because they remove the need for some very repetitive
//! programming. With the `serde` feature, every collection can be serialized as a flat sequence.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
