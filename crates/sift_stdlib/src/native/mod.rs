//! Native function implementations.
//!
//! Organized the same way as the typed helpers:
//! - `access`: identity, typeOf, first, last, indexOf, contains
//! - `iteration`: each, filter, reject, partition, unique, map, pluck,
//!   every, some, reduce
//! - `merge`: extend

#[allow(clippy::unnecessary_wraps)]
mod access;
mod iteration;
mod merge;

// Re-export everything for the library table
#[allow(clippy::wildcard_imports)]
pub(crate) use access::*;
#[allow(clippy::wildcard_imports)]
pub(crate) use iteration::*;
#[allow(clippy::wildcard_imports)]
pub(crate) use merge::*;

use sift_foundation::{Error, LtVec, NativeFn, Result, TypeTag, Value};
use sift_ops::{Collection, Key};

static UNDEFINED: Value = Value::Undefined;

/// Reads an argument, treating a missing one as `undefined`.
pub(crate) fn arg(args: &[Value], index: usize) -> &Value {
    args.get(index).unwrap_or(&UNDEFINED)
}

/// Views an argument as an array or object.
pub(crate) fn collection_arg(value: &Value) -> Result<Collection<'_, Value>> {
    Collection::of(value).ok_or_else(|| Error::not_a_collection(value.type_tag()))
}

/// Reads an argument that must be an array.
pub(crate) fn array_arg(value: &Value) -> Result<&LtVec<Value>> {
    value
        .as_array()
        .ok_or_else(|| Error::type_mismatch(TypeTag::Array, value.type_tag()))
}

/// Calls a function-valued argument on behalf of a native.
///
/// The first failing call is remembered and every later call is skipped,
/// returning `undefined`; [`Invoker::finish`] then reports the failure.
pub(crate) struct Invoker<'v> {
    callback: &'v NativeFn,
    collection: &'v Value,
    failure: Option<Error>,
}

impl<'v> Invoker<'v> {
    /// Fails if `callback` is not a function.
    pub(crate) fn new(callback: &'v Value, collection: &'v Value) -> Result<Self> {
        let callback = callback
            .as_function()
            .ok_or_else(|| Error::not_callable(callback.type_tag()))?;
        Ok(Self {
            callback,
            collection,
            failure: None,
        })
    }

    /// Calls back with `(element, key, collection)`.
    pub(crate) fn visit(&mut self, element: &Value, key: Key<'_>) -> Value {
        let args = [element.clone(), Value::from(key), self.collection.clone()];
        self.call(&args)
    }

    /// Calls back with arbitrary arguments.
    pub(crate) fn call(&mut self, args: &[Value]) -> Value {
        if self.failure.is_some() {
            return Value::Undefined;
        }
        match self.callback.call(args) {
            Ok(value) => value,
            Err(err) => {
                tracing::trace!(
                    callback = self.callback.name,
                    error = %err,
                    "callback failed, skipping remaining elements"
                );
                self.failure = Some(err.in_frame(self.callback.name));
                Value::Undefined
            }
        }
    }

    /// Returns `output`, unless a callback failed.
    pub(crate) fn finish<T>(self, output: T) -> Result<T> {
        match self.failure {
            Some(err) => Err(err),
            None => Ok(output),
        }
    }
}
