//! Dynamically-typed natives for the sift collection helpers.
//!
//! This crate wraps the typed helpers in `sift_ops` as native functions over
//! [`Value`](sift_foundation::Value) arguments, with loose calling rules:
//! - Missing trailing arguments read as `undefined`, extra ones are ignored
//! - Callbacks are passed as function values and receive
//!   `(element, index-or-key, collection)`
//! - `first`/`last` fall back to empty arrays instead of failing
//!
//! [`Library`] is the export table: every native by name, with its arity.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod library;
mod native;

pub use config::LibraryConfig;
pub use library::Library;
