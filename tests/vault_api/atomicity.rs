//! Atomicity Tests
//!
//! A failed operation must leave the document byte-identical to its
//! pre-operation state.

use crate::*;

fn capped_vault(max_bytes: usize, json: serde_json::Value) -> Vault {
    let document = Document::try_from(Value::from(json)).unwrap();
    Vault::builder()
        .max_vault_bytes(max_bytes)
        .document(document)
        .open()
        .unwrap()
}

// =============================================================================
// SIZE CAP
// =============================================================================

#[test]
fn test_insert_over_cap_restores_state() {
    let mut vault = capped_vault(64, json!({"a": {"b": 1}, "c": [1, 2, 3]}));
    let before = doc_json(&vault);

    let kind = err_kind(vault.insert("big", "x".repeat(100), MergeMode::Replace));

    assert_eq!(kind, ErrorKind::VaultSizeExceeded);
    assert_eq!(doc_json(&vault), before);
}

#[test]
fn test_deep_insert_over_cap_removes_created_intermediates() {
    let mut vault = capped_vault(32, json!({"k": 1}));

    let kind = err_kind(vault.insert("p.q.r.s.t", "y".repeat(40), MergeMode::Replace));

    assert_eq!(kind, ErrorKind::VaultSizeExceeded);
    assert_eq!(doc_json(&vault), r#"{"k":1}"#);
    assert_eq!(vault.keys(true).unwrap(), vec!["k"]);
}

#[test]
fn test_coercing_insert_over_cap_restores_scalar() {
    let mut vault = capped_vault(24, json!({"a": 5}));

    let kind = err_kind(vault.insert("a.b", "z".repeat(30), MergeMode::Replace));

    assert_eq!(kind, ErrorKind::VaultSizeExceeded);
    assert_eq!(vault.find("a").unwrap(), Some(Value::Int(5)));
}

#[test]
fn test_merge_over_cap_restores_original_object() {
    let mut vault = capped_vault(48, json!({"p": {"name": "John", "age": 30}}));
    let before = doc_json(&vault);

    let kind = err_kind(vault.update(
        "p",
        json!({"bio": "much longer than the remaining budget allows"}),
        MergeMode::Merge,
        false,
    ));

    assert_eq!(kind, ErrorKind::VaultSizeExceeded);
    assert_eq!(doc_json(&vault), before);
}

#[test]
fn test_size_error_message_names_sizes() {
    let mut vault = capped_vault(16, json!({}));

    let err = vault
        .insert("k", "v".repeat(20), MergeMode::Replace)
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("> 16 bytes"), "message: {}", message);
}

#[test]
fn test_write_exactly_at_cap_succeeds() {
    // {"k":"vvvv"} is 12 bytes
    let mut vault = capped_vault(12, json!({}));

    let record = vault.insert("k", "vvvv", MergeMode::Replace).unwrap();

    assert_eq!(record.vault_size, 12);
}

#[test]
fn test_vault_usable_after_failed_write() {
    let mut vault = capped_vault(32, json!({}));

    vault
        .insert("big", "x".repeat(64), MergeMode::Replace)
        .unwrap_err();
    vault.insert("small", 1, MergeMode::Replace).unwrap();

    assert_eq!(doc_json(&vault), r#"{"small":1}"#);
}

#[test]
fn test_default_cap_is_ten_mib() {
    let mut vault = Vault::new();
    assert_eq!(vault.config().max_vault_bytes, 10 * 1024 * 1024);

    // A value that alone exceeds the cap
    let huge = "a".repeat(MAX_VAULT_BYTES);
    let kind = err_kind(vault.insert("huge", huge, MergeMode::Replace));

    assert_eq!(kind, ErrorKind::VaultSizeExceeded);
    assert_eq!(doc_json(&vault), "{}");
}

// =============================================================================
// VALIDATION BEFORE MUTATION
// =============================================================================

#[test]
fn test_validation_failures_touch_nothing() {
    let mut vault = vault_with(json!({"x": 1, "p": {"a": 1}}));
    let before = doc_json(&vault);

    assert_eq!(
        err_kind(vault.insert("bad key", 1, MergeMode::Replace)),
        ErrorKind::KeyInvalid
    );
    assert_eq!(
        err_kind(vault.insert("x", 2, MergeMode::Replace)),
        ErrorKind::KeyAlreadyExists
    );
    assert_eq!(
        err_kind(vault.update("q", 2, MergeMode::Merge, false)),
        ErrorKind::KeyNotFound
    );
    assert_eq!(
        err_kind(vault.delete("nope", true)),
        ErrorKind::KeyNotFound
    );

    assert_eq!(doc_json(&vault), before);
}

#[test]
fn test_key_deeper_than_bound_is_rejected_cleanly() {
    let mut vault = vault_with(json!({"keep": true}));
    let key = vec!["a"; 5000].join(".");

    let kind = err_kind(vault.insert(&key, 1, MergeMode::Replace));

    assert_eq!(kind, ErrorKind::KeyInvalid);
    assert_eq!(doc_json(&vault), r#"{"keep":true}"#);
}

#[test]
fn test_deepest_allowed_key_round_trips() {
    let mut vault = Vault::new();
    let key = vec!["a"; MAX_PATH_DEPTH].join(".");

    vault.insert(&key, 1, MergeMode::Replace).unwrap();

    assert_eq!(vault.find(&key).unwrap(), Some(Value::Int(1)));
    let dumped = vault.snapshot().unwrap().to_json_string().unwrap();
    assert_eq!(Document::from_json_str(&dumped).unwrap().depth(), MAX_PATH_DEPTH);
}
