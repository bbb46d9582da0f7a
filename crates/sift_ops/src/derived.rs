//! Helpers composed from [`filter`] and [`map`].

use sift_foundation::LtVec;

use crate::collection::{Collection, Key};
use crate::iteration::{filter, map};
use crate::property::Property;
use crate::truthy::Truthy;

/// Collects the elements for which `test` is falsy, in iteration order.
pub fn reject<'a, T, F, R>(collection: Collection<'a, T>, mut test: F) -> LtVec<T>
where
    T: Clone,
    F: FnMut(&'a T, Key<'a>, Collection<'a, T>) -> R,
    R: Truthy,
{
    filter(collection, |element, key, collection| {
        !test(element, key, collection).is_truthy()
    })
}

/// Splits elements into `(passed, failed)` by `test`, each in iteration order.
///
/// `test` runs exactly once per element.
pub fn partition<'a, T, F, R>(collection: Collection<'a, T>, mut test: F) -> (LtVec<T>, LtVec<T>)
where
    T: Clone,
    F: FnMut(&'a T, Key<'a>, Collection<'a, T>) -> R,
    R: Truthy,
{
    let mut failed = Vec::new();
    let passed = filter(collection, |element, key, collection| {
        let keep = test(element, key, collection).is_truthy();
        if !keep {
            failed.push(element.clone());
        }
        keep
    });
    (passed, LtVec::from(failed))
}

/// Reads the property `name` from every element.
pub fn pluck<P>(collection: Collection<'_, P>, name: &str) -> LtVec<P::Output>
where
    P: Property + Clone,
    P::Output: Clone,
{
    map(collection, |element, _, _| element.property(name))
}
