//! Key and entry enumeration
//!
//! Listing never mutates the document. Keys come out in map order, which is
//! lexicographic and therefore stable across calls.

use serde::Serialize;
use vault_core::{Map, Value};

/// One listed top-level entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Top-level key
    pub key: String,
    /// Whole value, composite values included
    pub value: Value,
    /// Always false: entries are never exploded into nested paths
    pub is_nested: bool,
}

/// List keys of the document
///
/// With `include_nested`, performs a depth-first pre-order walk emitting the
/// full dotted path of every key at every level. Only objects are descended
/// into; arrays are opaque leaves.
pub fn list_keys(doc: &Map, include_nested: bool) -> Vec<String> {
    if !include_nested {
        return doc.keys().cloned().collect();
    }
    let mut out = Vec::new();
    walk(doc, None, &mut out);
    out
}

fn walk(map: &Map, prefix: Option<&str>, out: &mut Vec<String>) {
    for (key, value) in map {
        let full = match prefix {
            Some(parent) => format!("{}.{}", parent, key),
            None => key.clone(),
        };
        out.push(full.clone());
        if let Value::Object(child) = value {
            walk(child, Some(&full), out);
        }
    }
}

/// List top-level entries with their whole values
pub fn list_entries(doc: &Map) -> Vec<Entry> {
    doc.iter()
        .map(|(key, value)| Entry {
            key: key.clone(),
            value: value.clone(),
            is_nested: false,
        })
        .collect()
}
