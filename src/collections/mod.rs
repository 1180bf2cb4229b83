//! Generic sequence collections.
//!
//! # Purpose
//! Both collections here are ordered, index-addressable and mutable sequences, which differ in how
//! they store their elements and therefore in what each operation costs:
//! - [`ArrayList`](contiguous::ArrayList) keeps its elements in one contiguous block which doubles
//!   in size when full.
//! - [`LinkedList`](linked::LinkedList) keeps each element in its own node, linked in both
//!   directions.
//!
//! # Cursors
//! Alongside the usual borrowed iterators, each collection can create a cursor. Cursors are
//! detached from their collection: the collection is passed to each call instead of being
//! borrowed for the cursor's lifetime. This means the collection can be changed directly while a
//! cursor is in use, in which case the cursor reports a
//! [`ConcurrentModification`](CursorError::ConcurrentModification) error rather than continuing
//! from a stale position. The capabilities of a cursor are split between the
//! [`Sequenceable`](traits::Sequenceable) and [`Bidirectional`](traits::Bidirectional) traits.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;

mod tests;

#[doc(inline)]
pub use crate::util::error::{
    CapacityOverflow,
    ConcurrentModification,
    CursorError,
    EmptyContainer,
    Exhausted,
    IndexOutOfBounds,
    NoCurrentElement,
};
#[doc(inline)]
pub use crate::util::generation::Generation;
