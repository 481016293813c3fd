//! Bridges into the serde ecosystem.
//!
//! [`Value`] stays its own closed type (ordered, duplicate-tolerant, with
//! the integer/float split), but documents frequently cross into code built on
//! `serde_json`. This module provides lossless-where-possible conversions in
//! both directions plus a `Serialize` impl so a tree can be handed straight
//! to any serde serializer.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::value::{Array, Object, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for item in arr {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for entry in obj {
                    map.serialize_entry(&entry.key, &entry.value)?;
                }
                map.end()
            }
        }
    }
}

/// Into `serde_json::Value`. Entry order is preserved (the workspace enables
/// `preserve_order`); duplicate keys collapse to the last occurrence, and
/// non-finite floats become null; `serde_json` has no representation for
/// either.
impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Integer(n) => serde_json::Value::Number((*n).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(arr) => {
                serde_json::Value::Array(arr.iter().map(serde_json::Value::from).collect())
            }
            Value::Object(obj) => {
                let mut map = serde_json::Map::new();
                for entry in obj {
                    map.insert(entry.key.clone(), serde_json::Value::from(&entry.value));
                }
                serde_json::Value::Object(map)
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        serde_json::Value::from(&value)
    }
}

/// From `serde_json::Value`. Numbers keep the integer/float split where the
/// source does: anything `as_i64` answers is an `Integer`, a `u64` beyond
/// `i64::MAX` widens to `Float`, everything else stays `Float`.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect::<Array>())
            }
            serde_json::Value::Object(map) => {
                let mut obj = Object::new();
                for (key, child) in map {
                    obj.add(key, Value::from(child));
                }
                Value::Object(obj)
            }
        }
    }
}
