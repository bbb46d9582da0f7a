//! Type tags and arity descriptors.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of a [`Value`](crate::Value), as reported by `typeOf`.
///
/// Arrays and dates get their own tags even though they are both
/// "objects" in the loose sense, and `null` is distinguished from object.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TypeTag {
    /// Ordered sequence.
    Array,
    /// Point in time.
    Date,
    /// The null value.
    Null,
    /// String-keyed mapping.
    Object,
    /// Double-precision number.
    Number,
    /// Text.
    String,
    /// `true` or `false`.
    Boolean,
    /// Callable.
    Function,
    /// The absent value.
    Undefined,
    /// Unique opaque token.
    Symbol,
    /// Arbitrary-size integer.
    BigInt,
}

impl TypeTag {
    /// Every tag, in declaration order.
    pub const ALL: [TypeTag; 11] = [
        Self::Array,
        Self::Date,
        Self::Null,
        Self::Object,
        Self::Number,
        Self::String,
        Self::Boolean,
        Self::Function,
        Self::Undefined,
        Self::Symbol,
        Self::BigInt,
    ];

    /// Returns the lowercase tag string (`"array"`, `"bigint"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Date => "date",
            Self::Null => "null",
            Self::Object => "object",
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Function => "function",
            Self::Undefined => "undefined",
            Self::Symbol => "symbol",
            Self::BigInt => "bigint",
        }
    }

    /// Parses a lowercase tag string.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == name)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Function arity specification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Arity {
    /// Exactly N arguments.
    Exact(usize),
    /// Between min and max arguments (inclusive).
    Range(usize, usize),
    /// At least N arguments, then any number more.
    Variadic(usize),
}

impl Arity {
    /// Returns true if a call with `count` arguments satisfies this arity.
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exact(n) => count == n,
            Self::Range(min, max) => count >= min && count <= max,
            Self::Variadic(min) => count >= min,
        }
    }

    /// The smallest accepted argument count.
    #[must_use]
    pub const fn min(self) -> usize {
        match self {
            Self::Exact(n) | Self::Range(n, _) | Self::Variadic(n) => n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::Range(min, max) => write!(f, "{min}..{max}"),
            Self::Variadic(min) => write!(f, "{min}+"),
        }
    }
}
