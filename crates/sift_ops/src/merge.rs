//! Shallow merging of string-keyed mappings.

use std::sync::Arc;

use sift_foundation::LtMap;

use crate::collection::{Collection, Key};
use crate::iteration::each;

/// Copies every key of each source into `target` and returns `target`.
///
/// Sources are applied in order, so later sources overwrite earlier ones as
/// well as keys the target already had. The returned reference is the one
/// passed in.
pub fn extend<'t, V: Clone>(
    target: &'t mut LtMap<Arc<str>, V>,
    sources: &[&LtMap<Arc<str>, V>],
) -> &'t mut LtMap<Arc<str>, V> {
    for source in sources {
        each(Collection::Mapping(*source), |value, key, _| {
            if let Key::Name(name) = key {
                target.assign(Arc::from(name), value.clone());
            }
        });
    }
    target
}
