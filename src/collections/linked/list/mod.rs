//! A module containing [`LinkedList`] and associated types.
//!
//! Borrowed iteration is provided by [`Iter`] and [`IterMut`], owned iteration by [`IntoIter`].
//! [`LinkedCursor`] provides detached forward traversal with removal, see
//! [`Sequenceable`](crate::collections::traits::Sequenceable).

mod cursor;
mod iter;
mod length;
mod linked_list;
mod node;

pub use cursor::*;
pub use iter::*;
pub(crate) use length::*;
pub use linked_list::*;
pub(crate) use node::*;
