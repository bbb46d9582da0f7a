//! The tagged collection type every higher-order helper dispatches on.

use std::fmt;
use std::sync::Arc;

use sift_foundation::{LtMap, LtVec, Value};

/// A borrowed view of either an ordered sequence or a string-keyed mapping.
///
/// Helpers match on the variant instead of inspecting the value at runtime.
/// The view is `Copy`, so callbacks receive it by value.
pub enum Collection<'a, T: Clone> {
    /// Ordered, index-addressable elements.
    Sequence(&'a LtVec<T>),
    /// Key-value pairs with unique keys, iterated in unspecified order.
    Mapping(&'a LtMap<Arc<str>, T>),
}

impl<T: Clone> Clone for Collection<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Clone> Copy for Collection<'_, T> {}

impl<T: Clone> Collection<'_, T> {
    /// Number of elements (sequence length or key count).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(items) => items.len(),
            Self::Mapping(entries) => entries.len(),
        }
    }

    /// Returns true if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> Collection<'a, Value> {
    /// Views an array or object value as a collection.
    ///
    /// Returns `None` for every other kind of value.
    #[must_use]
    pub fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(Self::Sequence(items)),
            Value::Object(entries) => Some(Self::Mapping(entries)),
            _ => None,
        }
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Collection<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            Self::Mapping(entries) => f.debug_tuple("Mapping").field(entries).finish(),
        }
    }
}

/// Where an element sits in its collection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// Zero-based position in a sequence.
    Index(usize),
    /// Key in a mapping.
    Name(&'a str),
}

impl<'a> Key<'a> {
    /// The position, if this is a sequence key.
    #[must_use]
    pub const fn as_index(self) -> Option<usize> {
        match self {
            Self::Index(i) => Some(i),
            Self::Name(_) => None,
        }
    }

    /// The name, if this is a mapping key.
    #[must_use]
    pub const fn as_name(self) -> Option<&'a str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Index(_) => None,
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<Key<'_>> for Value {
    fn from(key: Key<'_>) -> Self {
        match key {
            Key::Index(i) => Value::from(i),
            Key::Name(name) => Value::from(name),
        }
    }
}
