//! Clear Tests

use crate::*;

#[test]
fn test_clear_all_twice_yields_empty_document() {
    let mut vault = vault_with(json!({"a": 1, "b": {"c": [1, 2]}}));

    let first = vault.clear().unwrap();
    assert_eq!(first.action, Action::ClearedAll);
    assert_eq!(first.cleared_keys, Some(2));
    assert_eq!(first.vault_size, 2);
    assert_eq!(doc_json(&vault), "{}");

    let second = vault.clear().unwrap();
    assert_eq!(second.cleared_keys, Some(0));
    assert_eq!(doc_json(&vault), "{}");
}

#[test]
fn test_clear_all_record_shape() {
    let mut vault = vault_with(json!({"a": 1}));

    let output = vault
        .execute(Command::Clear {
            scope: ClearScope::All,
        })
        .unwrap();

    assert_eq!(
        output.to_json(),
        json!({"success": true, "action": "cleared_all", "clearedKeys": 1, "vaultSize": 2})
    );
}

#[test]
fn test_clear_key_present() {
    let mut vault = vault_with(json!({"a": {"b": 1, "c": 2}}));

    let record = vault.clear_key("a.b").unwrap();

    assert_eq!(record.action, Action::ClearedKey);
    assert_eq!(record.key.as_deref(), Some("a.b"));
    assert_eq!(record.existed, Some(true));
    assert_eq!(doc_json(&vault), r#"{"a":{"c":2}}"#);
}

#[test]
fn test_clear_key_absent_is_silent() {
    let mut vault = vault_with(json!({"a": 1}));

    let record = vault.clear_key("x.y.z").unwrap();

    assert_eq!(record.existed, Some(false));
    assert_eq!(doc_json(&vault), r#"{"a":1}"#);
}

#[test]
fn test_clear_key_invalid() {
    let mut vault = vault_with(json!({"a": 1}));

    assert_eq!(err_kind(vault.clear_key("")), ErrorKind::KeyInvalid);
    assert_eq!(err_kind(vault.clear_key("a$")), ErrorKind::KeyInvalid);
    assert_eq!(doc_json(&vault), r#"{"a":1}"#);
}
