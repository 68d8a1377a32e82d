mod common;

use common::*;
use dio::{string_hash, DioError, Forwarder, StringHashForwarder, Value};
use pretty_assertions::assert_eq;
use serde_json::json;

fn fixture() -> Value {
    Value::try_from(json!({
        "a": 1,
        "b": 2,
        "c": {
            "d": 3,
            "e": { "f": 4 }
        }
    }))
    .unwrap()
}

#[test]
fn test_dive_into_a_string_hash() {
    // { a: 1, b: 2 }
    let pattern = hash(vec![("a", eq(1)), ("b", eq(2))]);
    assert!(matches(&string_hash(fixture()), &pattern).unwrap());
}

#[test]
fn test_dive_into_deep_hashes() {
    // { a: 1, b: 2, c: { d: 1..10, e: { f: 3.. } } }
    let pattern = hash(vec![
        ("a", eq(1)),
        ("b", eq(2)),
        (
            "c",
            hash(vec![
                ("d", range(Some(1), Some(10))),
                ("e", hash(vec![("f", range(Some(3), None))])),
            ]),
        ),
    ]);
    assert!(matches(&string_hash(fixture()), &pattern).unwrap());
}

#[test]
fn test_missing_keys_yield_empty_mapping() {
    let fields = string_hash(fixture()).deconstruct_keys(&kws(&["z"])).unwrap();
    assert!(fields.is_empty());
    // so the host simply reports no match
    assert!(!matches(&string_hash(fixture()), &hash(vec![("z", Pattern::Any)])).unwrap());
}

#[test]
fn test_symbolic_keys_come_back() {
    let fields = string_hash(fixture())
        .deconstruct_keys(&kws(&["c", "a"]))
        .unwrap();
    assert_eq!(fields.keys().cloned().collect::<Vec<_>>(), kws(&["c", "a"]));
    assert_eq!(fields[&kw("a")].value(), &Value::Integer(1));
    assert!(matches!(fields[&kw("c")].value(), Value::Map(_)));
}

#[test]
fn test_arrays_of_hashes() {
    let records = Value::try_from(json!([
        { "name": "Ada", "role": "admin" },
        { "name": "Brian", "role": "user" }
    ]))
    .unwrap();
    let pattern = find(hash(vec![("role", eq("admin")), ("name", re("^A"))]));
    assert!(matches(&string_hash(records), &pattern).unwrap());
}

#[test]
fn test_hash_is_not_array_like() {
    let err = matches(&string_hash(fixture()), &array(vec![Pattern::Any])).unwrap_err();
    assert_eq!(err, DioError::NoDeconstructionMethod);
}

#[test]
fn test_host_objects_are_not_array_like_either() {
    // Node converts to a sequence, but this strategy only accepts real sequences
    let err = string_hash(tree()).deconstruct().unwrap_err();
    assert_eq!(err, DioError::NoDeconstructionMethod);
}

#[test]
fn test_nested_values_stay_string_hash_forwarders() {
    let fields = string_hash(fixture()).deconstruct_keys(&kws(&["c"])).unwrap();
    let c: &StringHashForwarder = &fields[&kw("c")];
    let e = c.deconstruct_keys(&kws(&["e"])).unwrap();
    assert_eq!(e[&kw("e")].depth(), 2);
}
