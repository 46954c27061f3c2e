//! Command enum: one variant per vault operation.
//!
//! Commands are plain data. They carry everything an operation needs except
//! the document itself, which the caller lends to
//! [`Executor::execute`](crate::Executor::execute).

use serde::{Deserialize, Serialize};

use crate::types::{ClearScope, MergeMode, OutputFormat, Payload};

/// A single vault operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Command {
    /// Write a value at a path that must not exist yet (replace mode), or
    /// merge into whatever is there (merge mode).
    Insert {
        key: String,
        payload: Payload,
        #[serde(default)]
        mode: MergeMode,
    },

    /// Overwrite or merge into an existing path.
    Update {
        key: String,
        payload: Payload,
        #[serde(default)]
        mode: MergeMode,
        #[serde(default)]
        create_if_not_exists: bool,
    },

    /// Remove a path.
    Delete {
        key: String,
        #[serde(default)]
        error_if_not_exists: bool,
    },

    /// Read the value at a path.
    Find {
        key: String,
        #[serde(default)]
        error_if_not_exists: bool,
    },

    /// Empty the document or remove one path.
    Clear { scope: ClearScope },

    /// Enumerate the document.
    List {
        #[serde(default)]
        format: OutputFormat,
        #[serde(default)]
        include_nested: bool,
    },
}

impl Command {
    /// Operation name, for logs and error records.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Insert { .. } => "insert",
            Command::Update { .. } => "update",
            Command::Delete { .. } => "delete",
            Command::Find { .. } => "find",
            Command::Clear { .. } => "clear",
            Command::List { .. } => "list",
        }
    }

    /// Whether the command can change the document.
    pub fn is_write(&self) -> bool {
        !matches!(self, Command::Find { .. } | Command::List { .. })
    }

    /// Key the command addresses, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Command::Insert { key, .. }
            | Command::Update { key, .. }
            | Command::Delete { key, .. }
            | Command::Find { key, .. } => Some(key),
            Command::Clear {
                scope: ClearScope::Key(key),
            } => Some(key),
            Command::Clear {
                scope: ClearScope::All,
            }
            | Command::List { .. } => None,
        }
    }
}
