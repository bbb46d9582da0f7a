//! Core types, values, and persistent collections for sift.
//!
//! This crate provides:
//! - [`Value`] - The dynamic value type the stdlib natives operate on
//! - [`TypeTag`] - The type classification reported by `typeOf`
//! - [`Arity`] - Argument-count descriptors for native functions
//! - [`Error`] - Error types with call-stack context
//! - Persistent collections ([`LtVec`], [`LtMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod types;
pub mod value;

pub use collections::{LtMap, LtVec};
pub use error::{Error, ErrorContext, ErrorKind};
pub use types::{Arity, TypeTag};
pub use value::{NativeFn, Symbol, Value};

/// Result type for fallible sift operations.
pub type Result<T> = std::result::Result<T, Error>;
