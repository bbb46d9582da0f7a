//! Error types for sift.
//!
//! Uses `thiserror` for ergonomic error definition. Only the dynamic
//! natives in `sift_stdlib` produce errors; the typed helpers fall back to
//! plain values instead.

use std::fmt;

use thiserror::Error;

use crate::types::{Arity, TypeTag};

/// The main error type for sift operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Pushes a frame onto this error's call stack, creating the context
    /// if there is none yet.
    #[must_use]
    pub fn in_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: TypeTag, actual: TypeTag) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates an error for a value that is neither an array nor an object.
    #[must_use]
    pub fn not_a_collection(actual: TypeTag) -> Self {
        Self::new(ErrorKind::NotACollection(actual))
    }

    /// Creates an error for invoking a non-function.
    #[must_use]
    pub fn not_callable(actual: TypeTag) -> Self {
        Self::new(ErrorKind::NotCallable(actual))
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(expected: Arity, actual: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch { expected, actual })
    }

    /// Creates an undefined function error.
    #[must_use]
    pub fn undefined_function(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UndefinedFunction(name.into()))
    }

    /// Creates an error for reading a property of `null` or `undefined`.
    #[must_use]
    pub fn property_of_nullish(property: impl Into<String>, target: TypeTag) -> Self {
        Self::new(ErrorKind::PropertyOfNullish {
            property: property.into(),
            target,
        })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An argument had the wrong type.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected type.
        expected: TypeTag,
        /// The actual type encountered.
        actual: TypeTag,
    },

    /// A collection argument was neither an array nor an object.
    #[error("expected an array or object, got {0}")]
    NotACollection(TypeTag),

    /// A callback argument was not a function.
    #[error("{0} is not a function")]
    NotCallable(TypeTag),

    /// Wrong number of arguments to function.
    #[error("arity mismatch: expected {expected}, got {actual}")]
    ArityMismatch {
        /// The accepted arity.
        expected: Arity,
        /// Actual number of arguments.
        actual: usize,
    },

    /// No native is registered under the name.
    #[error("undefined function: {0}")]
    UndefinedFunction(String),

    /// Property read on `null` or `undefined`.
    #[error("cannot read property '{property}' of {target}")]
    PropertyOfNullish {
        /// The property being read.
        property: String,
        /// The nullish value's tag.
        target: TypeTag,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Native calls active when the error was raised, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in &self.stack {
            writeln!(f, "  in {frame}")?;
        }
        Ok(())
    }
}
