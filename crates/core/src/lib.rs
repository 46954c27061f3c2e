//! Core types for the vault document store
//!
//! This crate holds the pieces of the document mutation engine that do not
//! depend on how a document is owned:
//!
//! - [`value`]: the JSON-shaped [`Value`] model
//! - [`key`]: key grammar validation
//! - [`path`]: dotted-path addressing (resolve, create-and-set, remove)
//! - [`merge`]: deep merge of object values
//! - [`limits`]: serialized-size accounting and the size guard
//! - [`error`]: the structured [`VaultError`]

pub mod error;
pub mod key;
pub mod limits;
pub mod merge;
pub mod path;
pub mod value;

pub use error::{ErrorKind, Result, VaultError};
pub use key::{is_valid_key, validate_key, MAX_PATH_DEPTH};
pub use limits::{serialized_size, SizeGuard, MAX_VAULT_BYTES};
pub use merge::{deep_merge, merge_values};
pub use path::KeyPath;
pub use value::{Map, Value};
