//! Collection helpers over sequences and string-keyed mappings.
//!
//! Every helper is a synchronous transformation of a collection the caller
//! lends it. Inputs are only ever borrowed shared, with one exception:
//! [`extend`] writes into the map it is handed by `&mut` and gives the same
//! reference back.
//!
//! # Tiers
//!
//! ```text
//! Tier 2: reject, partition, pluck              — built on filter/map
//! Tier 1: each, filter, unique, map, contains,
//!         every, some, reduce, fold, extend     — built on each/index_of
//! Tier 0: identity, type_of, first, last,
//!         index_of                              — no internal dependencies
//! ```
//!
//! Higher-order helpers take a [`Collection`] and a callback receiving
//! `(element, key, collection)`, where [`Key`] is a position for sequences
//! and a name for mappings. Predicates may return anything [`Truthy`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collection;
pub mod derived;
pub mod iteration;
pub mod merge;
pub mod primitives;
pub mod property;
pub mod truthy;

pub use collection::{Collection, Key};
pub use derived::{partition, pluck, reject};
pub use iteration::{
    contains, each, every, every_truthy, filter, fold, map, reduce, some, some_truthy, unique,
};
pub use merge::extend;
pub use primitives::{NOT_FOUND, Taken, first, identity, index_of, last, type_of};
pub use property::Property;
pub use truthy::Truthy;
