//! Deep merge of object values
//!
//! Unlike RFC 7396 merge patch, `null` in the source is an ordinary value and
//! never deletes a key.
//!
//! ## Rules
//!
//! - Start from a copy of the target's entries
//! - For each key in the source:
//!   - source object + target object → merged recursively
//!   - anything else → source value replaces the target value
//! - Arrays are scalars: replaced wholesale, never merged element-wise
//!
//! ## Example
//!
//! ```text
//! Target: {"name": "John", "age": 30, "tags": ["a"]}
//! Source: {"age": 31, "tags": ["b"]}
//! Result: {"name": "John", "age": 31, "tags": ["b"]}
//! ```
//!
//! Merging is pure: both inputs are left untouched.

use crate::value::{Map, Value};

/// Deep-merge `source` into a copy of `target`
pub fn deep_merge(target: &Map, source: &Map) -> Map {
    let mut merged = target.clone();
    for (key, incoming) in source {
        let next = match (merged.get(key), incoming) {
            (Some(Value::Object(existing)), Value::Object(nested)) => {
                Value::Object(deep_merge(existing, nested))
            }
            _ => incoming.clone(),
        };
        merged.insert(key.clone(), next);
    }
    merged
}

/// Merge two values, falling back to "source wins" unless both are objects
pub fn merge_values(target: &Value, source: &Value) -> Value {
    match (target, source) {
        (Value::Object(t), Value::Object(s)) => Value::Object(deep_merge(t, s)),
        _ => source.clone(),
    }
}
