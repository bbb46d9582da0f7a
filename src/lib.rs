//! sift - collection helpers over sequences and string-keyed mappings
//!
//! This crate re-exports all layers of sift for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: sift_stdlib     — Dynamically-typed natives, export registry
//! Layer 1: sift_ops        — Typed helpers: each, filter, map, reduce, extend, ...
//! Layer 0: sift_foundation — Core types (Value, TypeTag, Error, LtVec, LtMap)
//! ```

pub use sift_foundation as foundation;
pub use sift_ops as ops;
pub use sift_stdlib as stdlib;
