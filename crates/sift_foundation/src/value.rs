//! Dynamic value type used by the stdlib natives.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::collections::{LtMap, LtVec};
use crate::types::{Arity, TypeTag};

/// A dynamically-typed value.
///
/// Values are cheaply cloneable: strings are shared and compound values
/// use structural sharing via persistent data structures.
#[derive(Clone)]
pub enum Value {
    /// The absent value.
    Undefined,
    /// The null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Double-precision number.
    Number(f64),
    /// Arbitrary-size integer (128-bit here).
    BigInt(i128),
    /// String value.
    String(Arc<str>),
    /// Unique token.
    Symbol(Symbol),
    /// Point in time.
    Date(DateTime<Utc>),
    /// Ordered sequence.
    Array(LtVec<Value>),
    /// String-keyed mapping.
    Object(LtMap<Arc<str>, Value>),
    /// Callable.
    Function(NativeFn),
}

/// A unique token with an optional description.
///
/// Two symbols are equal only if one is a clone of the other, even when
/// their descriptions match.
#[derive(Clone)]
pub struct Symbol(Arc<Option<Arc<str>>>);

impl Symbol {
    /// Creates a fresh symbol.
    #[must_use]
    pub fn new(description: Option<&str>) -> Self {
        Self(Arc::new(description.map(Arc::from)))
    }

    /// Returns the description given at creation.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or_default())
    }
}

/// Native function callable with a slice of values.
#[derive(Clone)]
pub struct NativeFn {
    /// Function name for debugging.
    pub name: &'static str,
    /// Accepted argument counts.
    pub arity: Arity,
    /// Function pointer.
    pub func: fn(&[Value]) -> crate::Result<Value>,
}

impl NativeFn {
    /// Creates a native function.
    #[must_use]
    pub const fn new(
        name: &'static str,
        arity: Arity,
        func: fn(&[Value]) -> crate::Result<Value>,
    ) -> Self {
        Self { name, arity, func }
    }

    /// Invokes the function.
    ///
    /// # Errors
    ///
    /// Returns whatever error the function itself produces.
    pub fn call(&self, args: &[Value]) -> crate::Result<Value> {
        (self.func)(args)
    }
}

impl PartialEq for NativeFn {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::fn_addr_eq(self.func, other.func)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native fn {}>", self.name)
    }
}

impl Value {
    /// Classifies this value.
    ///
    /// Arrays and dates are checked before the general categories, and
    /// `null` is reported as its own tag rather than as an object.
    #[must_use]
    pub const fn type_tag(&self) -> TypeTag {
        match self {
            Self::Array(_) => TypeTag::Array,
            Self::Date(_) => TypeTag::Date,
            Self::Null => TypeTag::Null,
            Self::Object(_) => TypeTag::Object,
            Self::Number(_) => TypeTag::Number,
            Self::String(_) => TypeTag::String,
            Self::Bool(_) => TypeTag::Boolean,
            Self::Function(_) => TypeTag::Function,
            Self::Undefined => TypeTag::Undefined,
            Self::Symbol(_) => TypeTag::Symbol,
            Self::BigInt(_) => TypeTag::BigInt,
        }
    }

    /// Creates a string value.
    #[must_use]
    pub fn string(s: &str) -> Self {
        Self::String(Arc::from(s))
    }

    /// Creates an object from key-value pairs.
    #[must_use]
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<Arc<str>>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns true if this value is `undefined`.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns true if this value is `null` or `undefined`.
    #[must_use]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Returns true if this value is truthy.
    ///
    /// `undefined`, `null`, `false`, `0`, `-0`, `NaN`, `0n` and the empty
    /// string are falsy; everything else is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::BigInt(n) => *n != 0,
            Self::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract an array reference.
    #[must_use]
    pub const fn as_array(&self) -> Option<&LtVec<Value>> {
        match self {
            Self::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to extract an object reference.
    #[must_use]
    pub const fn as_object(&self) -> Option<&LtMap<Arc<str>, Value>> {
        match self {
            Self::Object(m) => Some(m),
            _ => None,
        }
    }

    /// Attempts to extract a function reference.
    #[must_use]
    pub const fn as_function(&self) -> Option<&NativeFn> {
        match self {
            Self::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Reads a named property.
    ///
    /// Objects look up the field; arrays and strings answer `length` and
    /// decimal indices. Anything missing, including every property of
    /// `null` and `undefined`, reads as `undefined`.
    #[must_use]
    pub fn property(&self, name: &str) -> Value {
        match self {
            Self::Object(fields) => fields.get(name).cloned().unwrap_or(Self::Undefined),
            Self::Array(items) if name == "length" => Self::from(items.len()),
            Self::Array(items) => parse_index(name)
                .and_then(|i| items.get(i).cloned())
                .unwrap_or(Self::Undefined),
            Self::String(s) if name == "length" => Self::from(s.chars().count()),
            Self::String(s) => parse_index(name)
                .and_then(|i| s.chars().nth(i))
                .map_or(Self::Undefined, |c| Self::from(c.to_string())),
            _ => Self::Undefined,
        }
    }
}

/// Parses a canonical decimal array index (`"0"`, `"12"`, not `"01"`).
fn parse_index(name: &str) -> Option<usize> {
    if name.len() > 1 && name.starts_with('0') {
        return None;
    }
    if !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}

// Strict equality: numbers by IEEE comparison, compound values structurally
impl PartialEq for Value {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::BigInt(a), Self::BigInt(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", NumberDisplay(*n)),
            Self::BigInt(n) => write!(f, "{n}n"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Symbol(s) => write!(f, "{s:?}"),
            Self::Date(d) => write!(f, "Date({})", d.to_rfc3339()),
            Self::Array(v) => write!(f, "{v:?}"),
            Self::Object(m) => write!(f, "{m:?}"),
            Self::Function(func) => write!(f, "{func:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", NumberDisplay(*n)),
            Self::BigInt(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Symbol(s) => write!(f, "{s:?}"),
            Self::Date(d) => write!(f, "{}", d.to_rfc3339()),
            Self::Array(v) => {
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    if !item.is_nullish() {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Self::Object(_) => write!(f, "[object Object]"),
            Self::Function(func) => write!(f, "function {}", func.name),
        }
    }
}

/// Formats numbers the way property keys are spelled: `1` rather than `1.0`.
struct NumberDisplay(f64);

impl fmt::Display for NumberDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        if n.is_nan() {
            write!(f, "NaN")
        } else if n.is_infinite() {
            write!(f, "{}Infinity", if n < 0.0 { "-" } else { "" })
        } else {
            write!(f, "{n}")
        }
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: usize) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Self::Date(d)
    }
}

impl From<NativeFn> for Value {
    fn from(f: NativeFn) -> Self {
        Self::Function(f)
    }
}

impl From<LtVec<Value>> for Value {
    fn from(v: LtVec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<LtMap<Arc<str>, Value>> for Value {
    fn from(m: LtMap<Arc<str>, Value>) -> Self {
        Self::Object(m)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Undefined, Into::into)
    }
}
