//! Update Tests

use crate::*;

#[test]
fn test_update_merge_changes_one_field() {
    let mut vault = vault_with(json!({"p": {"name": "John", "age": 30}}));

    let record = vault
        .update("p", json!({"age": 31}), MergeMode::Merge, false)
        .unwrap();

    assert_eq!(record.action, Action::Merged);
    assert_eq!(
        vault.find("p").unwrap(),
        Some(Value::from(json!({"name": "John", "age": 31})))
    );
}

#[test]
fn test_update_replace_drops_other_fields() {
    let mut vault = vault_with(json!({"p": {"name": "John", "age": 30}}));

    let record = vault
        .update("p", json!({"age": 31}), MergeMode::Replace, false)
        .unwrap();

    assert_eq!(record.action, Action::Updated);
    assert_eq!(vault.find("p").unwrap(), Some(Value::from(json!({"age": 31}))));
}

#[test]
fn test_update_nested_leaf() {
    let mut vault = vault_with(json!({"a": {"b": {"c": 1}, "d": 2}}));

    vault.update("a.b.c", 10, MergeMode::Replace, false).unwrap();

    assert_eq!(doc_json(&vault), r#"{"a":{"b":{"c":10},"d":2}}"#);
}

#[test]
fn test_update_existing_null_is_not_missing() {
    let mut vault = vault_with(json!({"n": null}));

    let record = vault.update("n", 1, MergeMode::Replace, false).unwrap();

    assert_eq!(record.action, Action::Updated);
}

#[test]
fn test_update_missing_without_create_fails() {
    let mut vault = vault_with(json!({"a": 1}));

    let result = vault.update("b", 2, MergeMode::Replace, false);

    assert!(result.as_ref().unwrap_err().is_not_found());
    assert_eq!(doc_json(&vault), r#"{"a":1}"#);
}

#[test]
fn test_update_missing_nested_without_create_fails() {
    let mut vault = vault_with(json!({"a": 1}));

    let kind = err_kind(vault.update("a.b", 2, MergeMode::Merge, false));

    assert_eq!(kind, ErrorKind::KeyNotFound);
    assert_eq!(doc_json(&vault), r#"{"a":1}"#);
}

#[test]
fn test_update_missing_with_create() {
    let mut vault = Vault::new();

    let record = vault
        .update("x.y", json!({"z": 1}), MergeMode::Merge, true)
        .unwrap();

    assert_eq!(record.action, Action::Created);
    assert_eq!(doc_json(&vault), r#"{"x":{"y":{"z":1}}}"#);
}

#[test]
fn test_update_merge_object_over_scalar_replaces() {
    let mut vault = vault_with(json!({"p": 7}));

    let record = vault
        .update("p", json!({"a": 1}), MergeMode::Merge, false)
        .unwrap();

    assert_eq!(record.action, Action::Updated);
    assert_eq!(doc_json(&vault), r#"{"p":{"a":1}}"#);
}

#[test]
fn test_update_merge_null_does_not_delete() {
    let mut vault = vault_with(json!({"p": {"a": 1, "b": 2}}));

    vault
        .update("p", json!({"b": null}), MergeMode::Merge, false)
        .unwrap();

    assert_eq!(doc_json(&vault), r#"{"p":{"a":1,"b":null}}"#);
}
