//! Command execution layer for the vault.
//!
//! Every vault operation is expressed as a [`Command`]. The [`Executor`]
//! runs commands against a host-owned document slot and returns [`Output`]
//! records shaped for the host's presentation layer.
//!
//! # Example
//!
//! ```
//! use vault_executor::{Command, DocumentSlot, Executor, MergeMode, Output, Payload};
//!
//! let executor = Executor::default();
//! let mut slot = DocumentSlot::new();
//!
//! let out = executor
//!     .execute(
//!         &mut slot,
//!         Command::Insert {
//!             key: "profile".into(),
//!             payload: Payload::Manual(r#"{"name": "John"}"#.into()),
//!             mode: MergeMode::Replace,
//!         },
//!         None,
//!     )
//!     .unwrap();
//! assert!(matches!(out, Output::Write(_)));
//! ```

mod command;
mod executor;
pub mod handlers;
pub mod output;
mod types;

#[cfg(test)]
mod tests;

pub use command::Command;
pub use executor::{Executor, Invocation};
pub use output::Output;
pub use types::{ClearScope, FailurePolicy, MergeMode, OutputFormat, Payload};

pub use vault_core::{ErrorKind, Result, Value, VaultError};
pub use vault_engine::{Action, DocumentSlot, VaultConfig};
