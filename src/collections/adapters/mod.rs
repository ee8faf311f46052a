//! Restricted views over the sequence types: a LIFO [`Stack`] backed by an
//! [`ArrayList`](crate::collections::contiguous::ArrayList) and a FIFO [`Queue`] backed by a
//! [`DoublyLinkedList`](crate::collections::linked::DoublyLinkedList).
//!
//! Neither has a capacity limit, so `is_full` always returns false.

pub mod queue;
pub mod stack;

#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use stack::Stack;
