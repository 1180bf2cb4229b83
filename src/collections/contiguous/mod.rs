//! Contiguous collection types. Currently, this module contains only [`ArrayList`] and the types
//! that accompany it.

pub mod array_list;

#[doc(inline)]
pub use array_list::{ArrayCursor, ArrayList};
