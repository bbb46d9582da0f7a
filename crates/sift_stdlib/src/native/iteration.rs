//! Iteration natives. Each takes a collection and, mostly, a callback.

use sift_foundation::{Error, Result, Value};
use sift_ops::{
    each, every, every_truthy, filter, map, partition, pluck, reduce, reject, some, some_truthy,
    unique,
};

use super::{Invoker, arg, array_arg, collection_arg};

/// each - returns `undefined`
pub(crate) fn native_each(args: &[Value]) -> Result<Value> {
    let target = arg(args, 0);
    let collection = collection_arg(target)?;
    let mut invoker = Invoker::new(arg(args, 1), target)?;
    each(collection, |element, key, _| {
        invoker.visit(element, key);
    });
    invoker.finish(Value::Undefined)
}

/// filter
pub(crate) fn native_filter(args: &[Value]) -> Result<Value> {
    let target = arg(args, 0);
    let collection = collection_arg(target)?;
    let mut invoker = Invoker::new(arg(args, 1), target)?;
    let kept = filter(collection, |element, key, _| invoker.visit(element, key));
    invoker.finish(Value::Array(kept))
}

/// reject
pub(crate) fn native_reject(args: &[Value]) -> Result<Value> {
    let target = arg(args, 0);
    let collection = collection_arg(target)?;
    let mut invoker = Invoker::new(arg(args, 1), target)?;
    let kept = reject(collection, |element, key, _| invoker.visit(element, key));
    invoker.finish(Value::Array(kept))
}

/// partition - `[passed, failed]`
pub(crate) fn native_partition(args: &[Value]) -> Result<Value> {
    let target = arg(args, 0);
    let collection = collection_arg(target)?;
    let mut invoker = Invoker::new(arg(args, 1), target)?;
    let (passed, failed) = partition(collection, |element, key, _| invoker.visit(element, key));
    invoker.finish(Value::from(vec![Value::Array(passed), Value::Array(failed)]))
}

/// unique
pub(crate) fn native_unique(args: &[Value]) -> Result<Value> {
    let items = array_arg(arg(args, 0))?;
    Ok(Value::Array(unique(items)))
}

/// map
pub(crate) fn native_map(args: &[Value]) -> Result<Value> {
    let target = arg(args, 0);
    let collection = collection_arg(target)?;
    let mut invoker = Invoker::new(arg(args, 1), target)?;
    let mapped = map(collection, |element, key, _| invoker.visit(element, key));
    invoker.finish(Value::Array(mapped))
}

/// pluck - `null`/`undefined` elements are an error
pub(crate) fn native_pluck(args: &[Value]) -> Result<Value> {
    let collection = collection_arg(arg(args, 0))?;
    let name = match arg(args, 1) {
        Value::String(s) => s.to_string(),
        other => other.to_string(),
    };
    let nullish = filter(collection, |element, _, _| element.is_nullish());
    if let Some(element) = nullish.first() {
        return Err(Error::property_of_nullish(name, element.type_tag()));
    }
    Ok(Value::Array(pluck(collection, &name)))
}

/// every - without a function, tests the elements themselves
pub(crate) fn native_every(args: &[Value]) -> Result<Value> {
    let target = arg(args, 0);
    let collection = collection_arg(target)?;
    let test = arg(args, 1);
    if test.as_function().is_none() {
        return Ok(Value::Bool(every_truthy(collection)));
    }
    let mut invoker = Invoker::new(test, target)?;
    let result = every(collection, |element, key, _| invoker.visit(element, key));
    invoker.finish(Value::Bool(result))
}

/// some - without a function, tests the elements themselves
pub(crate) fn native_some(args: &[Value]) -> Result<Value> {
    let target = arg(args, 0);
    let collection = collection_arg(target)?;
    let test = arg(args, 1);
    if test.as_function().is_none() {
        return Ok(Value::Bool(some_truthy(collection)));
    }
    let mut invoker = Invoker::new(test, target)?;
    let result = some(collection, |element, key, _| invoker.visit(element, key));
    invoker.finish(Value::Bool(result))
}

/// reduce - a third argument, even `undefined`, is the seed
pub(crate) fn native_reduce(args: &[Value]) -> Result<Value> {
    let target = arg(args, 0);
    let items = array_arg(target)?;
    let mut invoker = Invoker::new(arg(args, 1), target)?;
    let seed = args.get(2).cloned();
    let result = reduce(
        items,
        |acc, element, index| invoker.call(&[acc, element.clone(), Value::from(index)]),
        seed,
    );
    invoker.finish(result.unwrap_or(Value::Undefined))
}
