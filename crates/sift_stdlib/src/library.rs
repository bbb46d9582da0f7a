//! The export table: every native by name, with its arity.

use sift_foundation::{Arity, Error, NativeFn, Result, Value};
use tracing::debug;

use crate::config::LibraryConfig;
use crate::native::{
    native_contains, native_each, native_every, native_extend, native_filter, native_first,
    native_identity, native_index_of, native_last, native_map, native_partition, native_pluck,
    native_reduce, native_reject, native_some, native_type_of, native_unique,
};

/// Every exported native, in declaration order.
const EXPORTS: [NativeFn; 17] = [
    NativeFn::new("identity", Arity::Exact(1), native_identity),
    NativeFn::new("typeOf", Arity::Exact(1), native_type_of),
    NativeFn::new("first", Arity::Range(1, 2), native_first),
    NativeFn::new("last", Arity::Range(1, 2), native_last),
    NativeFn::new("each", Arity::Exact(2), native_each),
    NativeFn::new("indexOf", Arity::Exact(2), native_index_of),
    NativeFn::new("filter", Arity::Exact(2), native_filter),
    NativeFn::new("reject", Arity::Exact(2), native_reject),
    NativeFn::new("partition", Arity::Exact(2), native_partition),
    NativeFn::new("unique", Arity::Exact(1), native_unique),
    NativeFn::new("map", Arity::Exact(2), native_map),
    NativeFn::new("pluck", Arity::Exact(2), native_pluck),
    NativeFn::new("contains", Arity::Exact(2), native_contains),
    NativeFn::new("every", Arity::Range(1, 2), native_every),
    NativeFn::new("some", Arity::Range(1, 2), native_some),
    NativeFn::new("reduce", Arity::Range(2, 3), native_reduce),
    NativeFn::new("extend", Arity::Variadic(1), native_extend),
];

/// Alternate spellings accepted by [`Library::get`].
const ALIASES: [(&str, &str); 1] = [("typeof", "typeOf")];

/// Registry of the exported natives.
///
/// Looks functions up by name and calls them with the configured argument
/// checking. Natives can also be fetched as function values and handed to
/// other natives as callbacks.
#[derive(Clone, Debug)]
pub struct Library {
    config: LibraryConfig,
    natives: Vec<NativeFn>,
}

impl Library {
    /// Creates a library with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LibraryConfig::default())
    }

    /// Creates a library with the given configuration.
    #[must_use]
    pub fn with_config(config: LibraryConfig) -> Self {
        Self {
            config,
            natives: EXPORTS.to_vec(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    /// Returns every native, in declaration order.
    #[must_use]
    pub fn natives(&self) -> &[NativeFn] {
        &self.natives
    }

    /// Returns the exported names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.natives.iter().map(|native| native.name)
    }

    /// Looks up a native by name or alias.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NativeFn> {
        let name = ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map_or(name, |&(_, canonical)| canonical);
        self.natives.iter().find(|native| native.name == name)
    }

    /// Returns the arity of a native.
    #[must_use]
    pub fn arity(&self, name: &str) -> Option<Arity> {
        self.get(name).map(|native| native.arity)
    }

    /// Returns a native as a function value, for use as a callback.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<Value> {
        self.get(name).cloned().map(Value::Function)
    }

    /// Calls a native by name.
    ///
    /// # Errors
    ///
    /// Fails if no native has that name, if `strict_arity` is set and the
    /// argument count is not accepted, or if the native itself fails.
    /// Failures from the native carry a context frame naming it.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let native = self
            .get(name)
            .ok_or_else(|| Error::undefined_function(name))?;

        if self.config.log_calls {
            debug!(native = native.name, argc = args.len(), "calling native");
        }

        if self.config.strict_arity && !native.arity.accepts(args.len()) {
            return Err(Error::arity_mismatch(native.arity, args.len()).in_frame(native.name));
        }

        native.call(args).map_err(|err| err.in_frame(native.name))
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}
