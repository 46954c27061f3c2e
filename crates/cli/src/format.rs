//! Output rendering.
//!
//! - `Human`: redis-cli style, e.g. `(inserted) users.admin`, `1) "key"`
//! - `Json`: the output record exactly as the executor serializes it
//! - `Raw`: bare values, one per line, for scripting

use vault_executor::output::FailureRecord;
use vault_executor::{Action, Output, Value, VaultError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Raw,
}

/// Render one output record.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => output.to_json().to_string(),
        OutputMode::Raw => format_raw(output),
        OutputMode::Human => format_human(output),
    }
}

/// Render an operation error.
pub fn format_error(err: &VaultError, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => Output::Failure(FailureRecord::from(err)).to_json().to_string(),
        OutputMode::Raw | OutputMode::Human => match err.item_index() {
            Some(index) => format!("(error) {} {} (item {})", err.code(), err.message(), index),
            None => format!("(error) {} {}", err.code(), err.message()),
        },
    }
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Write(r) => format!("({}) {} [{} bytes]", r.action.as_str(), r.key, r.vault_size),
        Output::Delete(r) => match &r.deleted_value {
            Some(value) => format!("(deleted) {} = {}", r.key, compact(value)),
            None => format!("(not found) {}", r.key),
        },
        Output::Find(r) => match &r.value {
            Some(value) => pretty(value),
            None => "(nil)".to_string(),
        },
        Output::Clear(r) => match (&r.key, r.action) {
            (Some(key), _) if r.existed == Some(true) => format!("(cleared) {}", key),
            (Some(key), _) => format!("(not found) {}", key),
            (None, Action::ClearedAll) => {
                format!("(cleared) {} keys", r.cleared_keys.unwrap_or(0))
            }
            (None, _) => "(cleared)".to_string(),
        },
        Output::Keys(r) => {
            if r.keys.is_empty() {
                return "(empty)".to_string();
            }
            r.keys
                .iter()
                .enumerate()
                .map(|(i, key)| format!("{}) \"{}\"", i + 1, key))
                .collect::<Vec<_>>()
                .join("\n")
        }
        Output::Entries(r) => {
            if r.items.is_empty() {
                return "(empty)".to_string();
            }
            r.items
                .iter()
                .map(|entry| format!("{} = {}", entry.key, compact(&entry.value)))
                .collect::<Vec<_>>()
                .join("\n")
        }
        Output::Vault(r) => format!(
            "{}\n({} keys, {} bytes)",
            pretty(&r.vault.to_value()),
            r.count,
            r.vault_size
        ),
        Output::Failure(r) => match r.item_index {
            Some(index) => format!("(error) {} {} (item {})", r.code, r.error, index),
            None => format!("(error) {} {}", r.code, r.error),
        },
    }
}

fn format_raw(output: &Output) -> String {
    match output {
        Output::Write(r) => r.vault_size.to_string(),
        Output::Delete(r) => r.deleted_value.as_ref().map(compact).unwrap_or_default(),
        Output::Find(r) => r.value.as_ref().map(compact).unwrap_or_default(),
        Output::Clear(r) => r.vault_size.to_string(),
        Output::Keys(r) => r.keys.join("\n"),
        Output::Entries(r) => r
            .items
            .iter()
            .map(|entry| format!("{}\t{}", entry.key, compact(&entry.value)))
            .collect::<Vec<_>>()
            .join("\n"),
        Output::Vault(r) => compact(&r.vault.to_value()),
        Output::Failure(r) => format!("{}\t{}", r.code, r.error),
    }
}

fn compact(value: &Value) -> String {
    value.to_json_string()
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_json_string())
}
