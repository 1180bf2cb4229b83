//! A module containing [`ArrayList`] and associated types.
//!
//! Borrowed iteration is provided by [`Iter`] and [`IterMut`], owned iteration by [`IntoIter`].
//! [`ArrayCursor`] provides detached traversal in both directions with insertion, replacement and
//! removal, see [`Sequenceable`](crate::collections::traits::Sequenceable) and
//! [`Bidirectional`](crate::collections::traits::Bidirectional).
//!
//! [`ArrayList`] and [`ArrayCursor`] are also re-exported under the parent module.

mod array_list;
mod cursor;
mod iter;
mod tests;

pub use array_list::*;
pub use cursor::*;
pub use iter::*;
