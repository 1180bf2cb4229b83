//! Two generic sequence collections, written from scratch: a resizable array list and a doubly
//! linked list, each with its own iterators and cursor.
//!
//! # Method
//! Both collections share one contract: an ordered, index-addressable, mutable sequence. They
//! differ in storage, so the same operation costs something different in each, and each
//! collection's documentation includes a table of time complexities.
//!
//! # Error Handling
//! Every fallible operation comes in two forms. The `try_` form returns a [`Result`] with a
//! strongly typed error, using structs (often ZSTs) that implement
//! [`Error`](std::error::Error), grouped into enums for static dispatch where an operation can fail
//! in more than one way. The plain form panics with the error's message, because indexing out of
//! bounds is usually a bug rather than something to recover from.
//!
//! # Dependencies
//! This crate uses `std` only for allocation through [`Box`], and doesn't use [`Vec`] at all. It
//! depends on some derive macros because they remove the need for some very repetitive
//! programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
