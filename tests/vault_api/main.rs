//! Vault API Comprehensive Test Suite
//!
//! Exercises the public facade end to end: every operation, the atomicity
//! guarantee, batching, sharing across threads, and builder setup.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all vault API tests
//! cargo test --test vault_api
//!
//! # Run atomicity tests only
//! cargo test --test vault_api atomicity::
//! ```

pub use vaultdb::prelude::*;

// Test modules
pub mod atomicity;
pub mod batch;
pub mod clear;
pub mod delete;
pub mod find;
pub mod insert;
pub mod shared;
pub mod update;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Vault pre-loaded with `json`, which must be an object
pub fn vault_with(json: serde_json::Value) -> Vault {
    let document =
        Document::try_from(Value::from(json)).expect("test document must be an object");
    Vault::builder()
        .document(document)
        .open()
        .expect("Failed to open vault")
}

/// Compact JSON text of the vault's current document
pub fn doc_json(vault: &Vault) -> String {
    vault
        .document()
        .map(|d| d.to_json_string().unwrap())
        .unwrap_or_else(|| "{}".to_string())
}

/// Operation error kind, panicking on success
pub fn err_kind<T: std::fmt::Debug>(result: Result<T>) -> ErrorKind {
    result
        .expect_err("operation should have failed")
        .kind()
        .expect("expected an operation error")
}

/// Standard test values covering every value type
pub fn standard_test_values() -> Vec<(&'static str, Value)> {
    vec![
        ("null", Value::Null),
        ("bool_true", Value::Bool(true)),
        ("bool_false", Value::Bool(false)),
        ("int_pos", Value::Int(42)),
        ("int_neg", Value::Int(-42)),
        ("float", Value::Float(3.5)),
        ("string", Value::String("hello world".into())),
        ("string_unicode", Value::String("日本語 🌍".into())),
        ("string_empty", Value::String("".into())),
        (
            "array",
            Value::Array(vec![Value::Int(1), Value::String("two".into())]),
        ),
        ("object", Value::from(json!({"nested": {"deep": 123}}))),
    ]
}
