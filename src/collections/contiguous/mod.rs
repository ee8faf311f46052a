//! Contiguous collection types. Primarily revolves around [`ArrayList`], which is backed by a
//! growable, heap-allocated buffer.

pub(crate) mod buffer;
pub mod array_list;

#[doc(inline)]
pub use array_list::ArrayList;
