//! Object merging native.

use std::sync::Arc;

use sift_foundation::{Error, LtMap, Result, TypeTag, Value};
use sift_ops::{Collection, extend, map};

use super::arg;

/// extend - returns the target with every source's keys written over it
///
/// Values are immutable, so the merged object is a new value sharing
/// structure with the target.
pub(crate) fn native_extend(args: &[Value]) -> Result<Value> {
    let target = arg(args, 0);
    let Value::Object(fields) = target else {
        return Err(Error::type_mismatch(TypeTag::Object, target.type_tag()));
    };
    let sources: Vec<LtMap<Arc<str>, Value>> = args.iter().skip(1).map(own_keys).collect();
    let sources: Vec<&LtMap<Arc<str>, Value>> = sources.iter().collect();

    let mut merged = fields.clone();
    extend(&mut merged, &sources);
    Ok(Value::Object(merged))
}

/// The keys a value contributes as a merge source.
///
/// Arrays contribute their indices and strings one key per character;
/// other primitives have no keys.
fn own_keys(value: &Value) -> LtMap<Arc<str>, Value> {
    match value {
        Value::Object(fields) => fields.clone(),
        Value::Array(items) => map(Collection::Sequence(items), |element, key, _| {
            (Arc::from(key.to_string()), element.clone())
        })
        .into_iter()
        .collect(),
        Value::String(s) => s
            .chars()
            .enumerate()
            .map(|(i, c)| (Arc::from(i.to_string()), Value::from(c.to_string())))
            .collect(),
        _ => LtMap::new(),
    }
}
