//! Error types shared by all collections in this crate.
//!
//! Each failure is its own (often zero-sized) struct implementing [`Error`], and the cursor
//! operations, which can fail in several ways, group them into [`CursorError`] for static
//! dispatch.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

use crate::util::generation::Generation;

/// An index was outside of the valid range for the operation. Reading, replacing and removing
/// accept `0..len`, inserting accepts `0..=len`.
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

/// The collection has no elements, so there is no first or last element to read or remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Collection is empty!")]
pub struct EmptyContainer;

/// The length of a collection would exceed [`usize::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// A cursor has no element left in the direction it was asked to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cursor has no more elements in this direction!")]
pub struct Exhausted;

/// A cursor was asked to remove or replace the element it last returned, but there isn't one.
/// This happens before the first call to `next` or `previous`, and after `remove` or `add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cursor has no current element!")]
pub struct NoCurrentElement;

/// The collection was structurally modified by something other than the cursor since the cursor
/// last observed it, or the cursor is being used with a different collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Collection was modified during iteration (expected {expected}, found {found})!")]
pub struct ConcurrentModification {
    /// The generation recorded by the cursor.
    pub expected: Generation,
    /// The generation of the collection passed to the cursor.
    pub found: Generation,
}

/// Any of the ways a cursor operation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum CursorError {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`Exhausted`].
    Exhausted(Exhausted),
    /// See [`NoCurrentElement`].
    NoCurrentElement(NoCurrentElement),
    /// See [`ConcurrentModification`].
    ConcurrentModification(ConcurrentModification),
}
