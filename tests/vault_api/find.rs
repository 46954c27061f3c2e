//! Find Tests

use crate::*;

#[test]
fn test_find_nested_value() {
    let mut vault = vault_with(json!({"users": {"admin": {"theme": "dark"}}}));

    assert_eq!(
        vault.find("users.admin.theme").unwrap(),
        Some(Value::from("dark"))
    );
    assert_eq!(
        vault.find("users.admin").unwrap(),
        Some(Value::from(json!({"theme": "dark"})))
    );
}

#[test]
fn test_find_missing_is_none() {
    let mut vault = vault_with(json!({"a": {"b": 1}}));

    assert_eq!(vault.find("a.c").unwrap(), None);
    assert_eq!(vault.find("z").unwrap(), None);
}

#[test]
fn test_find_distinguishes_null_from_missing() {
    let mut vault = vault_with(json!({"n": null}));

    assert_eq!(vault.find("n").unwrap(), Some(Value::Null));
    assert_eq!(vault.find("m").unwrap(), None);
}

#[test]
fn test_find_does_not_descend_arrays() {
    let mut vault = vault_with(json!({"list": [{"a": 1}]}));

    assert_eq!(vault.find("list.0").unwrap(), None);
    assert_eq!(vault.find("list.a").unwrap(), None);
}

#[test]
fn test_get_strict() {
    let mut vault = vault_with(json!({"a": 1}));

    assert_eq!(vault.get("a").unwrap(), Value::Int(1));
    assert!(vault.get("b").unwrap_err().is_not_found());
}

#[test]
fn test_find_record_shape() {
    let mut vault = vault_with(json!({"a": {"b": true}}));

    let output = vault
        .execute(Command::Find {
            key: "a.b".into(),
            error_if_not_exists: true,
        })
        .unwrap();

    assert_eq!(
        output.to_json(),
        json!({"success": true, "key": "a.b", "found": true, "value": true})
    );
}

#[test]
fn test_find_on_fresh_vault_creates_empty_document() {
    let mut vault = Vault::new();
    assert!(vault.document().is_none());

    assert_eq!(vault.find("anything").unwrap(), None);

    assert_eq!(doc_json(&vault), "{}");
    assert!(vault.document().is_some());
}
