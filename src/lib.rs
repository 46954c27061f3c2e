//! # vaultdb
//!
//! A shared, in-process JSON document vault.
//!
//! One JSON object (the vault) is shared by independent operations that
//! address into it with dotted paths: `users.admin.settings` names the
//! `settings` key inside `admin` inside `users`. Every operation is atomic:
//! a failed operation leaves the document exactly as it was before.
//!
//! ## Quick Start
//!
//! ```
//! use vaultdb::prelude::*;
//!
//! let mut vault = Vault::new();
//!
//! // Intermediate objects are created on demand
//! vault.insert("users.admin.settings", json!({"theme": "dark"}), MergeMode::Replace)?;
//!
//! // Merge into an existing object
//! vault.update("users.admin.settings", json!({"font": "mono"}), MergeMode::Merge, false)?;
//!
//! assert_eq!(
//!     vault.keys(true)?,
//!     vec![
//!         "users",
//!         "users.admin",
//!         "users.admin.settings",
//!         "users.admin.settings.font",
//!         "users.admin.settings.theme",
//!     ]
//! );
//! # Ok::<(), vaultdb::Error>(())
//! ```
//!
//! ## Layers
//!
//! - [`vault_core`]: value model, key validation, path addressing, deep merge,
//!   size accounting
//! - [`vault_engine`]: the document, snapshot atomicity, read verification,
//!   enumeration, configuration
//! - [`vault_executor`]: `Command`/`Output` model and batch execution
//! - this crate: [`Vault`], [`VaultBuilder`] and [`SharedVault`]

#![warn(missing_docs)]

mod error;
mod vault;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use vault::{SharedVault, Vault, VaultBuilder};

// Re-export layers
pub use vault_core;
pub use vault_engine;
pub use vault_executor;

// Re-export common types
pub use vault_core::{ErrorKind, Map, Value, VaultError, MAX_PATH_DEPTH, MAX_VAULT_BYTES};
pub use vault_engine::{Action, Document, Entry, VaultConfig};
pub use vault_executor::output::{
    ClearRecord, DeleteRecord, EntriesRecord, FailureRecord, FindRecord, KeysRecord, VaultRecord,
    WriteRecord,
};
pub use vault_executor::{
    ClearScope, Command, FailurePolicy, Invocation, MergeMode, Output, OutputFormat, Payload,
};
