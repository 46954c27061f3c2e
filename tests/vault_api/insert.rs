//! Insert Tests

use crate::*;

// =============================================================================
// REPLACE MODE
// =============================================================================

#[test]
fn test_insert_top_level_reports_size() {
    let mut vault = Vault::new();

    let record = vault.insert("x", 1, MergeMode::Replace).unwrap();

    assert_eq!(record.key, "x");
    assert_eq!(record.action, Action::Inserted);
    assert_eq!(record.vault_size, r#"{"x":1}"#.len());
}

#[test]
fn test_insert_every_value_type() {
    let mut vault = Vault::new();

    for (key, value) in standard_test_values() {
        vault.insert(key, value.clone(), MergeMode::Replace).unwrap();
        assert_eq!(vault.find(key).unwrap(), Some(value), "key {}", key);
    }
}

#[test]
fn test_insert_existing_key_fails_and_keeps_value() {
    let mut vault = vault_with(json!({"x": 1}));

    let kind = err_kind(vault.insert("x", 2, MergeMode::Replace));

    assert_eq!(kind, ErrorKind::KeyAlreadyExists);
    assert_eq!(doc_json(&vault), r#"{"x":1}"#);
}

#[test]
fn test_insert_existing_nested_key_fails() {
    let mut vault = vault_with(json!({"a": {"b": null}}));

    let kind = err_kind(vault.insert("a.b", 1, MergeMode::Replace));

    assert_eq!(kind, ErrorKind::KeyAlreadyExists);
}

#[test]
fn test_insert_creates_intermediate_objects() {
    let mut vault = Vault::new();

    vault
        .insert("users.admin.settings", json!({"theme": "dark"}), MergeMode::Replace)
        .unwrap();

    assert_eq!(
        doc_json(&vault),
        r#"{"users":{"admin":{"settings":{"theme":"dark"}}}}"#
    );
}

#[test]
fn test_insert_beside_existing_sibling() {
    let mut vault = vault_with(json!({"users": {"alice": 1}}));

    vault.insert("users.bob", 2, MergeMode::Replace).unwrap();

    assert_eq!(doc_json(&vault), r#"{"users":{"alice":1,"bob":2}}"#);
}

#[test]
fn test_insert_through_scalar_coerces_it() {
    let mut vault = vault_with(json!({"a": 5}));

    vault.insert("a.b", 1, MergeMode::Replace).unwrap();

    assert_eq!(doc_json(&vault), r#"{"a":{"b":1}}"#);
}

#[test]
fn test_insert_through_array_coerces_it() {
    let mut vault = vault_with(json!({"a": [1, 2]}));

    vault.insert("a.b", 1, MergeMode::Replace).unwrap();

    assert_eq!(doc_json(&vault), r#"{"a":{"b":1}}"#);
}

// =============================================================================
// MERGE MODE
// =============================================================================

#[test]
fn test_insert_merge_into_existing_object() {
    let mut vault = vault_with(json!({"cfg": {"a": 1, "nested": {"x": 1}}}));

    let record = vault
        .insert("cfg", json!({"b": 2, "nested": {"y": 2}}), MergeMode::Merge)
        .unwrap();

    assert_eq!(record.action, Action::Merged);
    assert_eq!(
        doc_json(&vault),
        r#"{"cfg":{"a":1,"b":2,"nested":{"x":1,"y":2}}}"#
    );
}

#[test]
fn test_insert_merge_absent_key_inserts() {
    let mut vault = Vault::new();

    let record = vault.insert("cfg", json!({"a": 1}), MergeMode::Merge).unwrap();

    assert_eq!(record.action, Action::Inserted);
}

#[test]
fn test_insert_merge_scalar_replaces() {
    let mut vault = vault_with(json!({"cfg": {"a": 1}}));

    let record = vault.insert("cfg", "flat", MergeMode::Merge).unwrap();

    assert_eq!(record.action, Action::Updated);
    assert_eq!(doc_json(&vault), r#"{"cfg":"flat"}"#);
}

#[test]
fn test_insert_merge_replaces_arrays_wholesale() {
    let mut vault = vault_with(json!({"cfg": {"list": [1, 2, 3]}}));

    vault
        .insert("cfg", json!({"list": [9]}), MergeMode::Merge)
        .unwrap();

    assert_eq!(doc_json(&vault), r#"{"cfg":{"list":[9]}}"#);
}

// =============================================================================
// MANUAL PAYLOADS
// =============================================================================

#[test]
fn test_insert_manual_payload() {
    let mut vault = Vault::new();

    vault
        .execute(Command::Insert {
            key: "doc".into(),
            payload: Payload::Manual(r#"{"name": "John", "tags": ["a", "b"]}"#.into()),
            mode: MergeMode::Replace,
        })
        .unwrap();

    assert_eq!(doc_json(&vault), r#"{"doc":{"name":"John","tags":["a","b"]}}"#);
}

#[test]
fn test_insert_malformed_manual_payload() {
    let mut vault = vault_with(json!({"keep": true}));

    let result = vault.execute(Command::Insert {
        key: "doc".into(),
        payload: Payload::Manual("{'single': 'quotes'}".into()),
        mode: MergeMode::Replace,
    });

    assert_eq!(err_kind(result), ErrorKind::MalformedPayload);
    assert_eq!(doc_json(&vault), r#"{"keep":true}"#);
}

#[test]
fn test_insert_from_input_item() {
    let mut vault = Vault::new();
    let item = Value::from(json!({"id": 1}));

    vault
        .execute_for(
            Command::Insert {
                key: "last_item".into(),
                payload: Payload::Input,
                mode: MergeMode::Replace,
            },
            &item,
        )
        .unwrap();

    assert_eq!(vault.find("last_item").unwrap(), Some(item));
}
