//! A module containing [`ArrayList`] and associated types.
//!
//! Borrowed iteration uses [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from
//! [`std::slice`]. [`IntoIter`] provides owned iteration.

mod array_list;
mod iter;

pub use array_list::*;
pub use iter::*;
