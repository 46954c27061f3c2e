//! Delete Tests

use crate::*;

#[test]
fn test_delete_top_level() {
    let mut vault = vault_with(json!({"a": 1, "b": 2}));

    let record = vault.delete("a", true).unwrap();

    assert!(record.existed);
    assert_eq!(record.deleted_value, Some(Value::Int(1)));
    assert_eq!(record.vault_size, r#"{"b":2}"#.len());
    assert_eq!(doc_json(&vault), r#"{"b":2}"#);
}

#[test]
fn test_delete_nested_keeps_parent() {
    let mut vault = vault_with(json!({"a": {"b": {"c": 1}}}));

    let record = vault.delete("a.b.c", false).unwrap();

    assert!(record.existed);
    assert_eq!(doc_json(&vault), r#"{"a":{"b":{}}}"#);
}

#[test]
fn test_delete_composite_value_returned_whole() {
    let mut vault = vault_with(json!({"a": {"b": [1, {"c": 2}]}}));

    let record = vault.delete("a", false).unwrap();

    assert_eq!(
        record.deleted_value,
        Some(Value::from(json!({"b": [1, {"c": 2}]})))
    );
    assert_eq!(doc_json(&vault), "{}");
}

#[test]
fn test_delete_missing_lenient() {
    let mut vault = vault_with(json!({"a": 1}));

    let record = vault.delete("missing", false).unwrap();

    assert!(!record.existed);
    assert_eq!(record.deleted_value, None);
    assert_eq!(doc_json(&vault), r#"{"a":1}"#);
}

#[test]
fn test_delete_missing_strict() {
    let mut vault = vault_with(json!({"a": 1}));

    let kind = err_kind(vault.delete("missing", true));

    assert_eq!(kind, ErrorKind::KeyNotFound);
    assert_eq!(doc_json(&vault), r#"{"a":1}"#);
}

#[test]
fn test_delete_through_scalar_is_missing() {
    let mut vault = vault_with(json!({"a": 5}));

    let record = vault.delete("a.b", false).unwrap();
    assert!(!record.existed);

    let kind = err_kind(vault.delete("a.b", true));
    assert_eq!(kind, ErrorKind::KeyNotFound);
    assert_eq!(doc_json(&vault), r#"{"a":5}"#);
}

#[test]
fn test_delete_stored_null_existed() {
    let mut vault = vault_with(json!({"n": null}));

    let record = vault.delete("n", true).unwrap();

    assert!(record.existed);
    assert_eq!(record.deleted_value, Some(Value::Null));
}

#[test]
fn test_delete_invalid_key() {
    let mut vault = Vault::new();

    assert_eq!(err_kind(vault.delete("a b", false)), ErrorKind::KeyInvalid);
    assert_eq!(err_kind(vault.delete("a.", false)), ErrorKind::KeyInvalid);
}
