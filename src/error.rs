//! Unified error type for the vault facade.
//!
//! Operation failures carry the engine's [`VaultError`] unchanged; setup
//! failures (configuration, loading a starting document) get their own
//! variants.

use thiserror::Error;
use vault_core::{ErrorKind, VaultError};
use vault_engine::ConfigError;

/// All vault facade errors.
#[derive(Debug, Error)]
pub enum Error {
    /// An operation failed (invalid key, missing key, size cap, ...)
    #[error(transparent)]
    Vault(#[from] VaultError),

    /// Configuration could not be loaded or is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Starting document could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for vault facade operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Operation error kind, if this is an operation failure.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Vault(e) => Some(e.kind()),
            Error::Config(_) | Error::Io(_) => None,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        self.kind() == Some(ErrorKind::KeyNotFound)
    }

    /// Check if the operation was rejected before touching the document.
    pub fn is_validation(&self) -> bool {
        self.kind().is_some_and(|k| k.is_validation())
    }

    /// Underlying operation error, if any.
    pub fn as_vault_error(&self) -> Option<&VaultError> {
        match self {
            Error::Vault(e) => Some(e),
            Error::Config(_) | Error::Io(_) => None,
        }
    }
}
