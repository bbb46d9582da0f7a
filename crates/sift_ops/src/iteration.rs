//! The iteration core: everything here is built on [`each`] or [`index_of`].

use sift_foundation::LtVec;

use crate::collection::{Collection, Key};
use crate::primitives::{NOT_FOUND, index_of};
use crate::truthy::Truthy;

/// Calls `action(element, key, collection)` for every element.
///
/// Sequences are visited from index 0 upwards. Mappings are visited once
/// per key, in unspecified order.
pub fn each<'a, T, F>(collection: Collection<'a, T>, mut action: F)
where
    T: Clone,
    F: FnMut(&'a T, Key<'a>, Collection<'a, T>),
{
    match collection {
        Collection::Sequence(items) => {
            for (index, element) in items.iter().enumerate() {
                action(element, Key::Index(index), collection);
            }
        }
        Collection::Mapping(entries) => {
            for (key, value) in entries.iter() {
                action(value, Key::Name(&**key), collection);
            }
        }
    }
}

/// Collects the elements for which `test` is truthy, in iteration order.
pub fn filter<'a, T, F, R>(collection: Collection<'a, T>, mut test: F) -> LtVec<T>
where
    T: Clone,
    F: FnMut(&'a T, Key<'a>, Collection<'a, T>) -> R,
    R: Truthy,
{
    let mut output = Vec::new();
    each(collection, |element, key, collection| {
        if test(element, key, collection).is_truthy() {
            output.push(element.clone());
        }
    });
    LtVec::from(output)
}

/// Drops repeated elements, keeping each value's first occurrence.
#[must_use]
pub fn unique<T: Clone + PartialEq>(items: &LtVec<T>) -> LtVec<T> {
    let mut kept = LtVec::new();
    each(Collection::Sequence(items), |element, _, _| {
        if index_of(&kept, element) == NOT_FOUND {
            kept = kept.push_back(element.clone());
        }
    });
    kept
}

/// Collects `transform(element, key, collection)` for every element.
pub fn map<'a, T, F, R>(collection: Collection<'a, T>, mut transform: F) -> LtVec<R>
where
    T: Clone,
    F: FnMut(&'a T, Key<'a>, Collection<'a, T>) -> R,
    R: Clone,
{
    let mut output = Vec::with_capacity(collection.len());
    each(collection, |element, key, collection| {
        output.push(transform(element, key, collection));
    });
    LtVec::from(output)
}

/// Returns true if some element equals `value`.
#[must_use]
pub fn contains<T: Clone + PartialEq>(items: &LtVec<T>, value: &T) -> bool {
    index_of(items, value) != NOT_FOUND
}

/// Returns true if `test` is truthy for every element.
///
/// Every element is tested even after a failure.
pub fn every<'a, T, F, R>(collection: Collection<'a, T>, mut test: F) -> bool
where
    T: Clone,
    F: FnMut(&'a T, Key<'a>, Collection<'a, T>) -> R,
    R: Truthy,
{
    let mut result = true;
    each(collection, |element, key, collection| {
        if !test(element, key, collection).is_truthy() {
            result = false;
        }
    });
    result
}

/// Returns true if every element is itself truthy.
#[must_use]
pub fn every_truthy<T: Clone + Truthy>(collection: Collection<'_, T>) -> bool {
    every(collection, |element, _, _| element.is_truthy())
}

/// Returns true if `test` is truthy for at least one element.
///
/// Every element is tested even after a success.
pub fn some<'a, T, F, R>(collection: Collection<'a, T>, mut test: F) -> bool
where
    T: Clone,
    F: FnMut(&'a T, Key<'a>, Collection<'a, T>) -> R,
    R: Truthy,
{
    let mut result = false;
    each(collection, |element, key, collection| {
        if test(element, key, collection).is_truthy() {
            result = true;
        }
    });
    result
}

/// Returns true if at least one element is itself truthy.
#[must_use]
pub fn some_truthy<T: Clone + Truthy>(collection: Collection<'_, T>) -> bool {
    some(collection, |element, _, _| element.is_truthy())
}

/// Folds a sequence into one value with `combine(accumulator, element, index)`.
///
/// With a seed, the accumulator starts there and every element is combined.
/// Without one, it starts at the first element and combining begins at
/// index 1; an empty sequence then yields `None`.
pub fn reduce<T, F>(items: &LtVec<T>, mut combine: F, seed: Option<T>) -> Option<T>
where
    T: Clone,
    F: FnMut(T, &T, usize) -> T,
{
    match seed {
        Some(seed) => Some(fold(items, seed, combine)),
        None => {
            let start = items.first()?.clone();
            Some(
                items
                    .iter()
                    .enumerate()
                    .skip(1)
                    .fold(start, |acc, (index, element)| combine(acc, element, index)),
            )
        }
    }
}

/// Seeded reduction whose accumulator may differ in type from the elements.
pub fn fold<T, A, F>(items: &LtVec<T>, seed: A, mut combine: F) -> A
where
    T: Clone,
    F: FnMut(A, &T, usize) -> A,
{
    items
        .iter()
        .enumerate()
        .fold(seed, |acc, (index, element)| combine(acc, element, index))
}
