//! Parameter types shared by commands.

use serde::{Deserialize, Serialize};
use vault_core::{Result, Value, VaultError};

pub use vault_engine::MergeMode;

/// Where a write's value comes from (`dataSource`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "dataSource", content = "data", rename_all = "camelCase")]
pub enum Payload {
    /// JSON text entered by the caller
    Manual(String),
    /// The current input item, taken whole
    Input,
    /// An already-typed value (Rust callers)
    Value(Value),
}

impl Payload {
    /// Resolve to a value, using `input` for [`Payload::Input`].
    ///
    /// # Errors
    ///
    /// `MalformedPayload` when manual text is not JSON, or when the payload
    /// asks for the input item and there is none.
    pub fn resolve(self, input: Option<&Value>) -> Result<Value> {
        match self {
            Payload::Manual(text) => {
                serde_json::from_str(&text).map_err(VaultError::malformed_payload)
            }
            Payload::Input => input
                .cloned()
                .ok_or_else(|| VaultError::malformed_payload("no input item to take data from")),
            Payload::Value(value) => Ok(value),
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Value(value)
    }
}

/// What a clear removes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClearScope {
    /// The whole document
    All,
    /// One dotted path
    Key(String),
}

/// Shape of a list result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Key names only
    #[default]
    Keys,
    /// Top-level entries with whole values
    Full,
    /// The whole document as one record
    Vault,
}

/// How a batch reacts to a failing invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FailurePolicy {
    /// Stop at the first failure and return it
    #[default]
    Abort,
    /// Record the failure as an output and keep going
    Continue,
}
