//! Type and access natives.

use sift_foundation::{LtVec, Result, Value};
use sift_ops::{contains, first, identity, index_of, last, type_of};

use super::{arg, array_arg};

/// identity
pub(crate) fn native_identity(args: &[Value]) -> Result<Value> {
    Ok(identity(arg(args, 0).clone()))
}

/// typeOf
pub(crate) fn native_type_of(args: &[Value]) -> Result<Value> {
    Ok(Value::from(type_of(arg(args, 0)).as_str()))
}

/// first - non-arrays and negative counts give `[]`
pub(crate) fn native_first(args: &[Value]) -> Result<Value> {
    let Value::Array(items) = arg(args, 0) else {
        return Ok(Value::Array(LtVec::new()));
    };
    Ok(first(items, count(arg(args, 1))).into())
}

/// last - non-arrays and negative counts give `[]`
pub(crate) fn native_last(args: &[Value]) -> Result<Value> {
    let Value::Array(items) = arg(args, 0) else {
        return Ok(Value::Array(LtVec::new()));
    };
    Ok(last(items, count(arg(args, 1))).into())
}

/// indexOf - `-1` when absent
pub(crate) fn native_index_of(args: &[Value]) -> Result<Value> {
    let items = array_arg(arg(args, 0))?;
    Ok(Value::from(index_of(items, arg(args, 1))))
}

/// contains
pub(crate) fn native_contains(args: &[Value]) -> Result<Value> {
    let items = array_arg(arg(args, 0))?;
    Ok(Value::Bool(contains(items, arg(args, 1))))
}

/// Reads a `first`/`last` count.
///
/// Anything other than a number, and `NaN`, means "no count". Negative
/// numbers collapse to -1, fractions truncate, and infinity saturates.
#[allow(clippy::cast_possible_truncation)]
fn count(n: &Value) -> Option<i64> {
    match n {
        Value::Number(n) if n.is_nan() => None,
        Value::Number(n) if *n < 0.0 => Some(-1),
        Value::Number(n) => Some(n.trunc() as i64),
        _ => None,
    }
}
