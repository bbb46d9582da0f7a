//! Configuration for the native library.

/// Configuration for a [`Library`](crate::Library).
///
/// Controls argument validation and call logging.
#[derive(Clone, Debug, Default)]
pub struct LibraryConfig {
    /// Reject calls whose argument count falls outside the native's arity.
    ///
    /// When off, missing arguments read as `undefined` and extras are
    /// ignored.
    pub strict_arity: bool,

    /// Emit a `debug` event for every call made through the library.
    pub log_calls: bool,
}

impl LibraryConfig {
    /// Creates a configuration that validates arity.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict_arity: true,
            ..Self::default()
        }
    }

    /// Creates a configuration that logs every call.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            log_calls: true,
            ..Self::default()
        }
    }

    /// Builder method to set arity validation.
    #[must_use]
    pub fn with_strict_arity(mut self, strict: bool) -> Self {
        self.strict_arity = strict;
        self
    }

    /// Builder method to enable/disable call logging.
    #[must_use]
    pub fn with_log_calls(mut self, log: bool) -> Self {
        self.log_calls = log;
        self
    }
}
