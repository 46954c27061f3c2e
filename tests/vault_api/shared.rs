//! SharedVault Tests
//!
//! One lock acquisition per operation: concurrent writers never lose each
//! other's updates and never observe a half-applied operation.

use std::sync::Arc;
use std::thread;

use crate::*;

#[test]
fn test_concurrent_inserts_all_land() {
    let vault = SharedVault::new();
    let threads = 8;
    let per_thread = 50;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let vault = vault.clone();
            thread::spawn(move || {
                for i in 0..per_thread {
                    let key = format!("t{}.k{}", t, i);
                    vault.insert(&key, i, MergeMode::Replace).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let keys = vault.keys(true).unwrap();
    assert_eq!(keys.len(), threads + threads * per_thread as usize);
}

#[test]
fn test_concurrent_merges_into_one_object() {
    let vault = Arc::new(SharedVault::new());
    vault
        .insert("counters", json!({}), MergeMode::Replace)
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let vault = Arc::clone(&vault);
            thread::spawn(move || {
                let mut patch = Map::new();
                patch.insert(format!("worker{}", t), Value::Bool(true));
                vault
                    .update("counters", Value::Object(patch), MergeMode::Merge, false)
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(
        vault.find("counters").unwrap(),
        Some(Value::from(json!({
            "worker0": true, "worker1": true, "worker2": true, "worker3": true
        })))
    );
}

#[test]
fn test_with_runs_sequence_under_one_lock() {
    let vault = SharedVault::new();

    let size = vault.with(|v| {
        v.insert("a", 1, MergeMode::Replace).unwrap();
        v.update("a", 2, MergeMode::Replace, false).unwrap();
        v.delete("a", true).unwrap().vault_size
    });

    assert_eq!(size, 2);
    assert_eq!(vault.snapshot().unwrap(), Document::new());
}

#[test]
fn test_open_shared_from_builder() {
    let vault = Vault::builder()
        .max_vault_bytes(16)
        .open_shared()
        .unwrap();

    let err = vault
        .insert("k", "v".repeat(32), MergeMode::Replace)
        .unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::VaultSizeExceeded));
    assert!(vault.clear().unwrap().cleared_keys == Some(0));
}
