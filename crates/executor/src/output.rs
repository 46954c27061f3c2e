//! Output records returned by the executor.
//!
//! Every record serializes as a flat camelCase JSON object carrying
//! `success`. Successful records carry `success: true`; a
//! [`Output::Failure`] carries `success: false` with the error details.

use serde::{Serialize, Serializer};
use vault_core::{Value, VaultError};
use vault_engine::{Action, Document, Entry};

/// Result of an insert or update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteRecord {
    pub key: String,
    pub action: Action,
    pub vault_size: usize,
}

/// Result of a delete.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRecord {
    pub key: String,
    pub action: Action,
    pub existed: bool,
    pub deleted_value: Option<Value>,
    pub vault_size: usize,
}

/// Result of a find. `value` is `null` when nothing was found.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindRecord {
    pub key: String,
    pub found: bool,
    pub value: Option<Value>,
}

/// Result of a clear.
///
/// Clear-all reports `clearedKeys`; clear-key reports `key` and `existed`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearRecord {
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleared_keys: Option<usize>,
    pub vault_size: usize,
}

/// Key listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeysRecord {
    pub keys: Vec<String>,
    pub count: usize,
}

/// Entry listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntriesRecord {
    pub items: Vec<Entry>,
    pub count: usize,
}

/// Whole-document listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultRecord {
    pub vault: Document,
    /// Number of top-level keys
    pub count: usize,
    pub vault_size: usize,
}

/// A failed invocation recorded by a continue-on-fail batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureRecord {
    pub error: String,
    pub code: &'static str,
    pub item_index: Option<usize>,
}

impl From<&VaultError> for FailureRecord {
    fn from(e: &VaultError) -> Self {
        Self {
            error: e.message().to_string(),
            code: e.code(),
            item_index: e.item_index(),
        }
    }
}

/// Output of one executed command.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Write(WriteRecord),
    Delete(DeleteRecord),
    Find(FindRecord),
    Clear(ClearRecord),
    Keys(KeysRecord),
    Entries(EntriesRecord),
    Vault(VaultRecord),
    Failure(FailureRecord),
}

impl Output {
    /// `false` only for [`Output::Failure`].
    pub fn is_success(&self) -> bool {
        !matches!(self, Output::Failure(_))
    }

    /// Post-operation document size, for records that report one.
    pub fn vault_size(&self) -> Option<usize> {
        match self {
            Output::Write(r) => Some(r.vault_size),
            Output::Delete(r) => Some(r.vault_size),
            Output::Clear(r) => Some(r.vault_size),
            Output::Vault(r) => Some(r.vault_size),
            Output::Find(_) | Output::Keys(_) | Output::Entries(_) | Output::Failure(_) => None,
        }
    }

    /// Render as a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    success: bool,
    #[serde(flatten)]
    body: &'a T,
}

fn envelope<S: Serializer, T: Serialize>(
    serializer: S,
    success: bool,
    body: &T,
) -> Result<S::Ok, S::Error> {
    Envelope { success, body }.serialize(serializer)
}

impl Serialize for Output {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Output::Write(r) => envelope(serializer, true, r),
            Output::Delete(r) => envelope(serializer, true, r),
            Output::Find(r) => envelope(serializer, true, r),
            Output::Clear(r) => envelope(serializer, true, r),
            Output::Keys(r) => envelope(serializer, true, r),
            Output::Entries(r) => envelope(serializer, true, r),
            Output::Vault(r) => envelope(serializer, true, r),
            Output::Failure(r) => envelope(serializer, false, r),
        }
    }
}
