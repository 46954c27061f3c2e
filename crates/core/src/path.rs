//! Dotted-path addressing into a document
//!
//! A key string such as `users.admin.settings` addresses a value nested
//! `segments - 1` levels below the document root. Every non-terminal segment
//! must resolve to (or be creatable as) an object.
//!
//! ## Semantics
//!
//! | Function | Missing intermediate | Non-object intermediate |
//! |----------|----------------------|-------------------------|
//! | [`resolve`] | `None` | `None` |
//! | [`ensure_and_set`] | created as `{}` | **overwritten with `{}`** |
//! | [`remove`] | `None` | `None` |
//!
//! `ensure_and_set` is destructive: a scalar or array sitting where an
//! intermediate object is needed is replaced by an empty object.
//!
//! Arrays are never indexed into; they are opaque values.
//!
//! A key's segment count plus the nesting depth of the value stored there may
//! not exceed [`MAX_PATH_DEPTH`]; see [`check_depth`].

use crate::error::{Result, VaultError};
use crate::key::{validate_key, MAX_PATH_DEPTH, SEPARATOR};
use crate::value::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Parsed key: one or more non-empty segments
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Validate and split a key string
    ///
    /// # Errors
    ///
    /// `KeyInvalid` if the key fails [`validate_key`].
    pub fn parse(key: &str) -> Result<Self> {
        validate_key(key)?;
        Ok(Self {
            segments: key.split(SEPARATOR).map(str::to_string).collect(),
        })
    }

    /// Path segments, root first
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments (always at least one)
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether the path addresses a top-level key
    pub fn is_top_level(&self) -> bool {
        self.segments.len() == 1
    }

    /// Split into intermediate segments and the leaf segment
    fn split_leaf(&self) -> (&[String], &str) {
        match self.segments.split_last() {
            Some((leaf, parents)) => (parents, leaf.as_str()),
            None => (&[], ""),
        }
    }
}

impl FromStr for KeyPath {
    type Err = crate::error::VaultError;

    fn from_str(s: &str) -> Result<Self> {
        KeyPath::parse(s)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

// =============================================================================
// Read
// =============================================================================

/// Resolve the value at `path`
///
/// Returns `None` when any intermediate segment is absent or not an object,
/// or when the leaf is absent. A stored `null` resolves to `Some(&Value::Null)`.
pub fn resolve<'a>(doc: &'a Map, path: &KeyPath) -> Option<&'a Value> {
    let (parents, leaf) = path.split_leaf();
    let mut current = doc;
    for segment in parents {
        match current.get(segment) {
            Some(Value::Object(next)) => current = next,
            _ => return None,
        }
    }
    current.get(leaf)
}

/// Whether `path` resolves to a value
pub fn exists(doc: &Map, path: &KeyPath) -> bool {
    resolve(doc, path).is_some()
}

// =============================================================================
// Write
// =============================================================================

/// Reject a write whose value would nest deeper than [`MAX_PATH_DEPTH`]
/// below the document root
///
/// # Errors
///
/// `MalformedPayload` when `path.len() + value.depth()` exceeds the bound.
pub fn check_depth(path: &KeyPath, value: &Value) -> Result<()> {
    let depth = path.len() + value.depth();
    if depth > MAX_PATH_DEPTH {
        return Err(VaultError::malformed_payload(format!(
            "value at '{}' would nest {} levels below the root; at most {} allowed",
            path, depth, MAX_PATH_DEPTH
        )));
    }
    Ok(())
}

/// Assign `value` at `path`, creating intermediate objects as needed
///
/// Intermediate segments that are absent become `{}`. Intermediate segments
/// holding a non-object value are overwritten with `{}`.
pub fn ensure_and_set(doc: &mut Map, path: &KeyPath, value: Value) {
    if path.is_top_level() {
        doc.insert(path.segments[0].clone(), value);
        return;
    }

    let (parents, leaf) = path.split_leaf();
    let mut current = doc;
    for segment in parents {
        let slot = current.entry(segment.clone()).or_insert_with(Value::object);
        current = coerce_object(slot, segment);
    }
    current.insert(leaf.to_string(), value);
}

/// Remove the value at `path` without creating anything
///
/// Returns the removed value, or `None` if the path did not resolve.
pub fn remove(doc: &mut Map, path: &KeyPath) -> Option<Value> {
    if path.is_top_level() {
        return doc.remove(&path.segments[0]);
    }

    let (parents, leaf) = path.split_leaf();
    let mut current = doc;
    for segment in parents {
        match current.get_mut(segment) {
            Some(Value::Object(next)) => current = next,
            _ => return None,
        }
    }
    current.remove(leaf)
}

fn coerce_object<'a>(slot: &'a mut Value, segment: &str) -> &'a mut Map {
    if !slot.is_object() {
        tracing::debug!(
            segment = segment,
            replaced = slot.type_name(),
            "overwriting non-object path segment with an empty object"
        );
        *slot = Value::object();
    }
    match slot {
        Value::Object(map) => map,
        _ => unreachable!("path segment was coerced to an object"),
    }
}
