#![warn(missing_docs)]

#[cfg(test)]
pub mod alloc;
pub mod error;
pub mod fmt;
pub mod generation;
pub mod option;
pub mod panic;
pub mod result;
