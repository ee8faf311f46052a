//! Traits shared between collection types.

pub mod list;

#[doc(inline)]
pub use list::List;
