//! Native callbacks shared by the stdlib tests.

use sift_foundation::{Arity, Error, NativeFn, Result, TypeTag, Value};

fn number(args: &[Value], index: usize) -> f64 {
    args.get(index)
        .and_then(Value::as_number)
        .unwrap_or(f64::NAN)
}

fn is_even_impl(args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(number(args, 0) % 2.0 == 0.0))
}

fn double_impl(args: &[Value]) -> Result<Value> {
    Ok(Value::from(number(args, 0) * 2.0))
}

fn add_impl(args: &[Value]) -> Result<Value> {
    Ok(Value::from(number(args, 0) + number(args, 1)))
}

fn concat_impl(args: &[Value]) -> Result<Value> {
    let acc = args.first().map(ToString::to_string).unwrap_or_default();
    let next = args.get(1).map(ToString::to_string).unwrap_or_default();
    Ok(Value::from(acc + &next))
}

fn arguments_impl(args: &[Value]) -> Result<Value> {
    Ok(Value::from(args.to_vec()))
}

fn strict_number_impl(args: &[Value]) -> Result<Value> {
    match args.first() {
        Some(Value::Number(_)) => Ok(Value::Bool(true)),
        Some(other) => Err(Error::type_mismatch(TypeTag::Number, other.type_tag())),
        None => Err(Error::type_mismatch(TypeTag::Number, TypeTag::Undefined)),
    }
}

/// `n % 2 == 0`
pub fn is_even() -> Value {
    Value::from(NativeFn::new("isEven", Arity::Range(1, 3), is_even_impl))
}

/// `n * 2`
pub fn double() -> Value {
    Value::from(NativeFn::new("double", Arity::Range(1, 3), double_impl))
}

/// `a + b`
pub fn add() -> Value {
    Value::from(NativeFn::new("add", Arity::Range(2, 3), add_impl))
}

/// String concatenation of the first two arguments.
pub fn concat() -> Value {
    Value::from(NativeFn::new("concat", Arity::Range(2, 3), concat_impl))
}

/// Returns its whole argument list as an array.
pub fn arguments() -> Value {
    Value::from(NativeFn::new("arguments", Arity::Variadic(0), arguments_impl))
}

/// Fails on anything that is not a number.
pub fn strict_number() -> Value {
    Value::from(NativeFn::new("strictNumber", Arity::Range(1, 3), strict_number_impl))
}
