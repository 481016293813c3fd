//! Bridging between [`jsonc_core::Value`] and the serde ecosystem.

use jsonc_core::{parse, Object, Value};
use serde_json::json;

fn doc(text: &str) -> Value {
    parse(text).expect("test document must parse")
}

// ============================================================================
// Serialize impl
// ============================================================================

#[test]
fn value_serializes_through_serde_json() {
    let value = doc(r#"{"a": 1, "b": [true, null, "x"], "c": 2.5}"#);
    let out = serde_json::to_string(&value).expect("serialization succeeds");
    assert_eq!(out, r#"{"a":1,"b":[true,null,"x"],"c":2.5}"#);
}

#[test]
fn entry_order_survives_serialization() {
    let value = doc(r#"{"z": 1, "a": 2, "m": 3}"#);
    let out = serde_json::to_string(&value).expect("serialization succeeds");
    assert_eq!(out, r#"{"z":1,"a":2,"m":3}"#);
}

// ============================================================================
// Into serde_json::Value
// ============================================================================

#[test]
fn tree_converts_to_serde_json() {
    let value = doc(r#"{"a": 0x10, "b": [1.5, "s"], "c": null}"#);
    let converted = serde_json::Value::from(&value);
    assert_eq!(converted, json!({"a": 16, "b": [1.5, "s"], "c": null}));
}

#[test]
fn duplicate_keys_collapse_to_last_value() {
    let mut obj = Object::new();
    obj.add("a", 1i64);
    obj.add("a", 2i64);
    let converted = serde_json::Value::from(Value::Object(obj));
    assert_eq!(converted, json!({"a": 2}));
}

#[test]
fn non_finite_floats_convert_to_null() {
    let converted = serde_json::Value::from(Value::Float(f64::NAN));
    assert_eq!(converted, serde_json::Value::Null);
}

// ============================================================================
// From serde_json::Value
// ============================================================================

#[test]
fn numbers_keep_the_integer_float_split() {
    let value = Value::from(json!({"i": 3, "f": 3.5}));
    let obj = value.as_object().expect("object");
    assert_eq!(obj.get("i"), Some(&Value::Integer(3)));
    assert_eq!(obj.get("f"), Some(&Value::Float(3.5)));
}

#[test]
fn u64_beyond_i64_widens_to_float() {
    let value = Value::from(json!(18446744073709551615u64));
    assert_eq!(value, Value::Float(18446744073709551615u64 as f64));
}

#[test]
fn nested_structures_convert_both_ways() {
    let original = doc(r#"{"a": {"b": [1, 2.5, "x", true, null]}}"#);
    let through = Value::from(serde_json::Value::from(&original));
    assert_eq!(through, original);
}
