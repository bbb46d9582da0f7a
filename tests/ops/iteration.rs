//! Integration tests for the iteration core and derived helpers
//!
//! Tests each, filter, reject, partition, unique, map, pluck, contains,
//! every, some, reduce, and fold over sequences and mappings.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use sift_foundation::{LtMap, LtVec, Value};
use sift_ops::{
    Collection, Key, contains, each, every, every_truthy, filter, fold, map, partition, pluck,
    reduce, reject, some, some_truthy, unique,
};

fn nums(items: &[i64]) -> LtVec<i64> {
    items.iter().copied().collect()
}

fn scores() -> LtMap<Arc<str>, i64> {
    [("ann", 3), ("bob", 8), ("cy", 4)]
        .into_iter()
        .map(|(k, v)| (Arc::from(k), v))
        .collect()
}

fn sorted(items: &LtVec<i64>) -> Vec<i64> {
    let mut out: Vec<_> = items.iter().copied().collect();
    out.sort_unstable();
    out
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_even(n: &i64) -> bool {
    n % 2 == 0
}

// =============================================================================
// each
// =============================================================================

#[test]
fn each_passes_element_index_and_collection() {
    let items = nums(&[1, 2, 3]);
    let mut seen = Vec::new();
    each(Collection::Sequence(&items), |element, key, collection| {
        assert_eq!(collection.len(), 3);
        seen.push((*element, key.as_index()));
    });
    assert_eq!(seen, vec![(1, Some(0)), (2, Some(1)), (3, Some(2))]);
}

#[test]
fn each_over_mapping_passes_names() {
    let entries = scores();
    let mut seen = Vec::new();
    each(Collection::Mapping(&entries), |value, key, _| {
        seen.push((key.to_string(), *value));
    });
    seen.sort();
    assert_eq!(
        seen,
        vec![
            ("ann".to_string(), 3),
            ("bob".to_string(), 8),
            ("cy".to_string(), 4)
        ]
    );
}

#[test]
fn each_on_empty_never_calls() {
    let mut calls = 0;
    each(Collection::Sequence(&nums(&[])), |_, _, _| calls += 1);
    each(Collection::Mapping(&LtMap::<Arc<str>, i64>::new()), |_, _, _| calls += 1);
    assert_eq!(calls, 0);
}

// =============================================================================
// filter / reject / partition
// =============================================================================

#[test]
fn filter_and_reject_sequences() {
    let items = nums(&[1, 2, 3, 4]);
    let evens = filter(Collection::Sequence(&items), |n, _, _| is_even(n));
    let odds = reject(Collection::Sequence(&items), |n, _, _| is_even(n));
    assert_eq!(evens, nums(&[2, 4]));
    assert_eq!(odds, nums(&[1, 3]));
    assert_eq!(items, nums(&[1, 2, 3, 4]));
}

#[test]
fn filter_mapping_collects_values() {
    let entries = scores();
    let evens = filter(Collection::Mapping(&entries), |n, _, _| is_even(n));
    assert_eq!(sorted(&evens), vec![4, 8]);

    let by_key = filter(Collection::Mapping(&entries), |_, key, _| key.as_name() == Some("ann"));
    assert_eq!(by_key, nums(&[3]));
}

#[test]
fn filter_accepts_truthy_results() {
    let items = nums(&[0, 1, 2]);
    let kept = filter(Collection::Sequence(&items), |n, _, _| *n);
    assert_eq!(kept, nums(&[1, 2]));

    let words: LtVec<String> = vec![String::new(), "a".to_string()].into();
    let kept = filter(Collection::Sequence(&words), |w, _, _| w.clone());
    assert_eq!(kept.len(), 1);
}

#[test]
fn partition_splits_in_order() {
    let items = nums(&[1, 2, 3, 4]);
    let mut calls = 0;
    let (passed, failed) = partition(Collection::Sequence(&items), |n, _, _| {
        calls += 1;
        is_even(n)
    });
    assert_eq!(passed, nums(&[2, 4]));
    assert_eq!(failed, nums(&[1, 3]));
    assert_eq!(calls, 4);
}

// =============================================================================
// unique / contains
// =============================================================================

#[test]
fn unique_keeps_first_occurrences() {
    assert_eq!(unique(&nums(&[1, 2, 2, 3, 1])), nums(&[1, 2, 3]));
    assert_eq!(unique(&nums(&[])), nums(&[]));
}

#[test]
fn unique_values_by_strict_equality() {
    let items: LtVec<Value> = vec![
        Value::from(1),
        Value::from("1"),
        Value::from(1),
        Value::Number(f64::NAN),
        Value::Number(f64::NAN),
    ]
    .into();
    // NaN never equals itself, so both survive
    assert_eq!(unique(&items).len(), 4);
}

#[test]
fn contains_reports_membership() {
    let items = nums(&[1, 2, 3]);
    assert!(contains(&items, &2));
    assert!(!contains(&items, &9));
    assert!(!contains(&nums(&[]), &0));
}

// =============================================================================
// map / pluck
// =============================================================================

#[test]
fn map_sequence() {
    let doubled = map(Collection::Sequence(&nums(&[1, 2, 3])), |n, _, _| n * 2);
    assert_eq!(doubled, nums(&[2, 4, 6]));
}

#[test]
fn map_mapping_has_one_result_per_key() {
    let entries = scores();
    let labels = map(Collection::Mapping(&entries), |n, key, _| format!("{key}={n}"));
    let mut labels: Vec<_> = labels.iter().cloned().collect();
    labels.sort();
    assert_eq!(labels, vec!["ann=3", "bob=8", "cy=4"]);
}

#[test]
fn pluck_values() {
    let rows: LtVec<Value> = vec![
        Value::object([("a", 1)]),
        Value::object([("a", 2)]),
        Value::object([("b", 3)]),
    ]
    .into();
    let plucked = pluck(Collection::Sequence(&rows), "a");
    assert_eq!(
        plucked.iter().cloned().collect::<Vec<_>>(),
        vec![Value::from(1), Value::from(2), Value::Undefined]
    );
}

#[test]
fn pluck_typed_maps() {
    let rows: LtVec<HashMap<String, i32>> = vec![
        HashMap::from([("id".to_string(), 7)]),
        HashMap::new(),
    ]
    .into();
    let ids = pluck(Collection::Sequence(&rows), "id");
    assert_eq!(ids.iter().cloned().collect::<Vec<_>>(), vec![Some(7), None]);

    let rows: LtVec<BTreeMap<String, &str>> =
        vec![BTreeMap::from([("name".to_string(), "x")])].into();
    let names = pluck(Collection::Sequence(&rows), "name");
    assert_eq!(names.first(), Some(&Some("x")));
}

// =============================================================================
// every / some
// =============================================================================

#[test]
fn every_and_some_with_test() {
    let evens = nums(&[2, 4, 6]);
    let mixed = nums(&[1, 2, 3]);
    let odds = nums(&[1, 3, 5]);
    assert!(every(Collection::Sequence(&evens), |n, _, _| is_even(n)));
    assert!(!every(Collection::Sequence(&mixed), |n, _, _| is_even(n)));
    assert!(some(Collection::Sequence(&mixed), |n, _, _| is_even(n)));
    assert!(!some(Collection::Sequence(&odds), |n, _, _| is_even(n)));
}

#[test]
fn every_and_some_traverse_everything() {
    let items = nums(&[1, 2, 3, 4]);
    let mut calls = 0;
    let result = every(Collection::Sequence(&items), |_, _, _| {
        calls += 1;
        false
    });
    assert!(!result);
    assert_eq!(calls, 4);

    calls = 0;
    assert!(some(Collection::Sequence(&items), |_, _, _| {
        calls += 1;
        true
    }));
    assert_eq!(calls, 4);
}

#[test]
fn empty_collections() {
    let empty = nums(&[]);
    assert!(every(Collection::Sequence(&empty), |_, _, _| false));
    assert!(!some(Collection::Sequence(&empty), |_, _, _| true));
}

#[test]
fn truthiness_mode() {
    assert!(every_truthy(Collection::Sequence(&nums(&[1, 2]))));
    assert!(!every_truthy(Collection::Sequence(&nums(&[1, 0]))));
    assert!(some_truthy(Collection::Sequence(&nums(&[0, 3]))));

    let entries: LtMap<Arc<str>, Value> = [(Arc::from("x"), Value::Null)].into_iter().collect();
    assert!(!some_truthy(Collection::Mapping(&entries)));
}

// =============================================================================
// reduce / fold
// =============================================================================

#[test]
fn reduce_with_and_without_seed() {
    let items = nums(&[1, 2, 3]);
    assert_eq!(reduce(&items, |a, b, _| a + b, Some(0)), Some(6));
    assert_eq!(reduce(&items, |a, b, _| a + b, None), Some(6));
    assert_eq!(reduce(&items, |a, b, _| a + b, Some(-10)), Some(-4));
}

#[test]
fn reduce_indices() {
    let items = nums(&[10, 20, 30]);
    let mut seeded = Vec::new();
    let record = |acc: i64, _: &i64, i: usize| {
        seeded.push(i);
        acc
    };
    reduce(&items, record, Some(0));
    assert_eq!(seeded, vec![0, 1, 2]);

    let mut unseeded = Vec::new();
    let record = |acc: i64, _: &i64, i: usize| {
        unseeded.push(i);
        acc
    };
    reduce(&items, record, None);
    assert_eq!(unseeded, vec![1, 2]);
}

#[test]
fn reduce_empty() {
    let empty = nums(&[]);
    assert_eq!(reduce(&empty, |a, b, _| a + b, None), None);
    assert_eq!(reduce(&empty, |a, b, _| a + b, Some(5)), Some(5));
    assert_eq!(reduce(&nums(&[9]), |a, b, _| a + b, None), Some(9));
}

#[test]
fn fold_changes_accumulator_type() {
    let words: LtVec<&str> = vec!["a", "bb", "ccc"].into();
    let total = fold(&words, 0usize, |acc, w, _| acc + w.len());
    assert_eq!(total, 6);

    let joined = fold(&words, String::new(), |mut acc, w, i| {
        if i > 0 {
            acc.push('-');
        }
        acc.push_str(w);
        acc
    });
    assert_eq!(joined, "a-bb-ccc");
}

#[test]
fn keys_convert_to_values() {
    assert_eq!(Value::from(Key::Index(2)), Value::from(2));
    assert_eq!(Value::from(Key::Name("k")), Value::from("k"));
}
