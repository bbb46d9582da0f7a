//! Type and access primitives. Nothing here depends on the rest of the crate.

use sift_foundation::{LtVec, TypeTag, Value};

/// What [`index_of`] reports for a value that is not present.
pub const NOT_FOUND: i64 = -1;

/// Result of [`first`] and [`last`]: a single element, or a run of them.
#[derive(Clone, Debug, PartialEq)]
pub enum Taken<T: Clone> {
    /// No count was given; the element at the end in question, if any.
    One(Option<T>),
    /// A count was given; the prefix or suffix, possibly shorter than asked.
    Many(LtVec<T>),
}

impl<T: Clone> Taken<T> {
    /// The single element, if this is [`Taken::One`] and one existed.
    #[must_use]
    pub fn into_one(self) -> Option<T> {
        match self {
            Self::One(element) => element,
            Self::Many(_) => None,
        }
    }

    /// The run of elements, if this is [`Taken::Many`].
    #[must_use]
    pub fn into_many(self) -> Option<LtVec<T>> {
        match self {
            Self::Many(items) => Some(items),
            Self::One(_) => None,
        }
    }
}

impl<T: Clone + Into<Value>> From<Taken<T>> for Value {
    fn from(taken: Taken<T>) -> Self {
        match taken {
            Taken::One(element) => Value::from(element),
            Taken::Many(items) => Value::Array(items.into_iter().map(Into::into).collect()),
        }
    }
}

/// Returns its argument unchanged.
#[must_use]
pub fn identity<T>(value: T) -> T {
    value
}

/// Classifies a value: array, date and null first, then its primitive kind.
#[must_use]
pub fn type_of(value: &Value) -> TypeTag {
    value.type_tag()
}

/// Takes from the front of a sequence.
///
/// Without a count, returns the first element. A negative count yields an
/// empty run; a count beyond the length yields the whole sequence.
#[must_use]
pub fn first<T: Clone>(items: &LtVec<T>, n: Option<i64>) -> Taken<T> {
    match n {
        Some(n) if n < 0 => Taken::Many(LtVec::new()),
        None => Taken::One(items.first().cloned()),
        Some(n) => Taken::Many(items.slice(0, clamp_count(n))),
    }
}

/// Takes from the back of a sequence. Mirrors [`first`].
#[must_use]
pub fn last<T: Clone>(items: &LtVec<T>, n: Option<i64>) -> Taken<T> {
    match n {
        Some(n) if n < 0 => Taken::Many(LtVec::new()),
        None => Taken::One(items.last().cloned()),
        Some(n) => {
            let start = items.len().saturating_sub(clamp_count(n));
            Taken::Many(items.slice(start, items.len()))
        }
    }
}

/// Position of the first element equal to `value`, or [`NOT_FOUND`].
#[must_use]
pub fn index_of<T: Clone + PartialEq>(items: &LtVec<T>, value: &T) -> i64 {
    items
        .iter()
        .position(|item| item == value)
        .map_or(NOT_FOUND, |i| i64::try_from(i).unwrap_or(i64::MAX))
}

fn clamp_count(n: i64) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}
