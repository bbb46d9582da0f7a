//! Named property lookup, as used by [`pluck`](crate::pluck).

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::sync::Arc;

use sift_foundation::{LtMap, Value};

/// Elements that expose named properties.
pub trait Property {
    /// What a lookup produces, including the "absent" case.
    type Output;

    /// Reads the property called `name`.
    fn property(&self, name: &str) -> Self::Output;
}

impl Property for Value {
    type Output = Value;

    /// Absent properties read as [`Value::Undefined`].
    fn property(&self, name: &str) -> Value {
        Value::property(self, name)
    }
}

impl<V: Clone> Property for LtMap<Arc<str>, V> {
    type Output = Option<V>;

    fn property(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

impl<V: Clone, S: BuildHasher> Property for HashMap<String, V, S> {
    type Output = Option<V>;

    fn property(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

impl<V: Clone> Property for BTreeMap<String, V> {
    type Output = Option<V>;

    fn property(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}
