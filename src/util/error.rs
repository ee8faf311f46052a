//! Error types shared by every collection in this crate.
//!
//! Each failure kind is its own small type, so that methods which can only fail one way return
//! exactly that type. [`CollectionError`] joins them for callers that handle several operations in
//! one place.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside the valid range for the requested operation. Insertion accepts
/// `0..=len`, all other indexed operations accept `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The length of the collection at the time of the call.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// An operation that needs at least one element was invoked on an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStructure;

impl Display for EmptyStructure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation requires a non-empty collection!")
    }
}

impl Error for EmptyStructure {}

/// An argument was rejected before any state was modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidArgument {
    /// A short description of what was wrong with the argument.
    pub reason: &'static str,
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid argument: {}!", self.reason)
    }
}

impl Error for InvalidArgument {}

/// A collection would need more than [`isize::MAX`] bytes, or more than [`usize::MAX`] elements.
/// This is never returned, only thrown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// Any of the failure kinds raised by this crate's collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum CollectionError {
    /// See [`InvalidArgument`].
    InvalidArgument(InvalidArgument),
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`EmptyStructure`].
    EmptyStructure(EmptyStructure),
}
