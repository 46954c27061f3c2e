//! Executor tests.
//!
//! - `dispatch`: each command through `Executor::execute`
//! - `batch`: ordering, failure policies and item indices
//! - `properties`: generated batches under both policies


use vault_core::Value;
use vault_engine::DocumentSlot;

use crate::{Command, Executor, MergeMode, Output, Payload};

/// Slot pre-loaded from JSON text.
fn slot_with(json: &str) -> DocumentSlot {
    DocumentSlot::with_document(vault_engine::Document::from_json_str(json).unwrap())
}

/// JSON text of the slot's document.
fn doc_json(slot: &DocumentSlot) -> String {
    slot.document().unwrap().to_json_string().unwrap()
}

fn insert(key: &str, json: &str) -> Command {
    Command::Insert {
        key: key.into(),
        payload: Payload::Manual(json.into()),
        mode: MergeMode::Replace,
    }
}

fn run(executor: &Executor, slot: &mut DocumentSlot, command: Command) -> Output {
    executor.execute(slot, command, None).unwrap()
}

fn value(v: serde_json::Value) -> Value {
    Value::from(v)
}
