//! Convenient imports for vaultdb.
//!
//! ```
//! use vaultdb::prelude::*;
//!
//! let mut vault = Vault::new();
//! vault.insert("key", "value", MergeMode::Replace)?;
//! # Ok::<(), vaultdb::Error>(())
//! ```

// Main entry points
pub use crate::vault::{SharedVault, Vault, VaultBuilder};

// Error handling
pub use crate::error::{Error, Result};
pub use vault_core::{ErrorKind, VaultError};

// Core types
pub use vault_core::{Map, Value};
pub use vault_core::{MAX_PATH_DEPTH, MAX_VAULT_BYTES};
pub use vault_engine::{Action, Document, VaultConfig};

// Commands
pub use vault_executor::{
    ClearScope, Command, FailurePolicy, Invocation, MergeMode, Output, OutputFormat, Payload,
};

// Re-export serde_json for convenience
pub use serde_json::json;
