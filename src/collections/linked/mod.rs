//! Linked collection types. Primarily revolves around [`LinkedList`] and its accompanying
//! [`LinkedCursor`] type.

pub mod list;

#[doc(inline)]
pub use list::{LinkedCursor, LinkedList};
