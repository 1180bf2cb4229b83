//! Capability traits shared by the cursors of this crate's collections.
//!
//! A cursor is a detached position within a collection: it doesn't borrow the collection, which
//! is instead passed to every call. This allows the collection to be used directly between calls,
//! and the cursor to detect when that use has modified it structurally.

mod cursor;

pub use cursor::*;
