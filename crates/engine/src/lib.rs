//! Document store for the vault
//!
//! The engine owns nothing long-lived. A host keeps a [`DocumentSlot`] alive
//! for as long as it wants the vault to exist; each operation borrows that
//! slot through a [`DocumentStore`] for its synchronous extent.
//!
//! # Example
//!
//! ```
//! use vault_core::Value;
//! use vault_engine::{DocumentSlot, DocumentStore, MergeMode, VaultConfig};
//!
//! let mut slot = DocumentSlot::new();
//! let config = VaultConfig::default();
//! let mut store = DocumentStore::open(&mut slot, &config);
//!
//! store.insert("users.admin.theme", Value::from("dark"), MergeMode::Replace).unwrap();
//! assert_eq!(
//!     store.find("users.admin.theme", true).unwrap(),
//!     Some(Value::from("dark"))
//! );
//! ```

pub mod config;
pub mod document;
pub mod enumerate;
pub mod snapshot;
pub mod store;

pub use config::{ConfigError, VaultConfig};
pub use document::{Document, DocumentSlot};
pub use enumerate::{list_entries, list_keys, Entry};
pub use snapshot::{Fingerprint, Snapshot};
pub use store::{Action, ClearOutcome, DeleteOutcome, DocumentStore, MergeMode, WriteOutcome};
