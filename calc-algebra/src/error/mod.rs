//! Errors produced by arithmetic and simplification.
//!
//! Every fallible operation returns the [`Error`] type from `calc_error`, which boxes one of the
//! error kinds in [`kind`]. Use [`Error::is`] or [`Error::downcast_ref`] to find out which kind
//! occurred.

pub mod kind;

pub use calc_error::{Error, ErrorKind};
