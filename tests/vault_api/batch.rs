//! Batch Tests

use crate::*;

fn put(key: &str, json: &str) -> Invocation {
    Invocation::new(Command::Insert {
        key: key.into(),
        payload: Payload::Manual(json.into()),
        mode: MergeMode::Replace,
    })
}

#[test]
fn test_batch_runs_in_order() {
    let mut vault = Vault::new();

    let outputs = vault
        .execute_batch(
            vec![
                put("a", "1"),
                Invocation::new(Command::Update {
                    key: "a".into(),
                    payload: Payload::Manual("2".into()),
                    mode: MergeMode::Replace,
                    create_if_not_exists: false,
                }),
                Invocation::new(Command::Find {
                    key: "a".into(),
                    error_if_not_exists: true,
                }),
            ],
            FailurePolicy::Abort,
        )
        .unwrap();

    assert_eq!(outputs.len(), 3);
    assert_eq!(
        outputs[2].to_json(),
        json!({"success": true, "key": "a", "found": true, "value": 2})
    );
}

#[test]
fn test_batch_abort_attaches_item_index() {
    let mut vault = Vault::new();

    let err = vault
        .execute_batch(
            vec![put("a", "1"), put("b", "2"), put("c", "{broken")],
            FailurePolicy::Abort,
        )
        .unwrap_err();

    let vault_err = err.as_vault_error().unwrap();
    assert_eq!(vault_err.kind(), ErrorKind::MalformedPayload);
    assert_eq!(vault_err.item_index(), Some(2));
    assert_eq!(doc_json(&vault), r#"{"a":1,"b":2}"#);
}

#[test]
fn test_batch_continue_reports_failures_inline() {
    let mut vault = Vault::new();

    let outputs = vault
        .execute_batch(
            vec![put("a", "1"), put("a", "1"), put("bad key", "1"), put("b", "2")],
            FailurePolicy::Continue,
        )
        .unwrap();

    let flags: Vec<bool> = outputs.iter().map(Output::is_success).collect();
    assert_eq!(flags, vec![true, false, false, true]);

    match &outputs[2] {
        Output::Failure(record) => {
            assert_eq!(record.code, ErrorKind::KeyInvalid.code());
            assert_eq!(record.item_index, Some(2));
        }
        other => panic!("Expected Failure output, got {:?}", other),
    }
    assert_eq!(doc_json(&vault), r#"{"a":1,"b":2}"#);
}

#[test]
fn test_batch_input_items() {
    let mut vault = Vault::new();
    let items = vec![json!({"id": 1}), json!({"id": 2})];

    let batch = items.into_iter().enumerate().map(|(i, item)| {
        Invocation::with_input(
            Command::Insert {
                key: format!("seen.item{}", i),
                payload: Payload::Input,
                mode: MergeMode::Replace,
            },
            Value::from(item),
        )
    });
    vault.execute_batch(batch, FailurePolicy::Abort).unwrap();

    assert_eq!(
        doc_json(&vault),
        r#"{"seen":{"item0":{"id":1},"item1":{"id":2}}}"#
    );
}
