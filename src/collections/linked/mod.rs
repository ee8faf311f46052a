//! Linked collection types. Primarily revolves around [`DoublyLinkedList`].

pub mod list;

#[doc(inline)]
pub use list::DoublyLinkedList;
