//! Error types for vault operations
//!
//! Every failure is a [`VaultError`]: a kind, a human-readable message, and an
//! optional batch item index. The index belongs to the host's batching
//! convention and is attached once, at the batch boundary, via
//! [`VaultError::with_item`].
//!
//! ## Error Codes (Canonical)
//!
//! | Code | Description |
//! |------|-------------|
//! | KeyInvalid | Key is empty or fails the key grammar |
//! | KeyAlreadyExists | Insert in replace mode targeting an occupied path |
//! | KeyNotFound | Update without create permission, or delete/find with error-if-absent |
//! | MalformedPayload | Payload JSON text failed to parse |
//! | VaultSizeExceeded | Post-mutation serialized size over the cap |
//! | Internal | Bug or invariant violation |

use std::fmt;
use thiserror::Error;

/// Kind of a [`VaultError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Key is empty or contains characters outside the grammar
    KeyInvalid,
    /// Insert (replace mode) targeted a path that already holds a value
    KeyAlreadyExists,
    /// Target path does not resolve and the operation required it
    KeyNotFound,
    /// Payload text is not valid JSON
    MalformedPayload,
    /// The document would exceed the configured size cap
    VaultSizeExceeded,
    /// Bug or invariant violation
    Internal,
}

impl ErrorKind {
    /// Get the canonical error code
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::KeyInvalid => "KeyInvalid",
            ErrorKind::KeyAlreadyExists => "KeyAlreadyExists",
            ErrorKind::KeyNotFound => "KeyNotFound",
            ErrorKind::MalformedPayload => "MalformedPayload",
            ErrorKind::VaultSizeExceeded => "VaultSizeExceeded",
            ErrorKind::Internal => "Internal",
        }
    }

    /// Whether this kind is raised before any mutation is attempted
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ErrorKind::KeyInvalid
                | ErrorKind::KeyAlreadyExists
                | ErrorKind::KeyNotFound
                | ErrorKind::MalformedPayload
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Vault operation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct VaultError {
    kind: ErrorKind,
    message: String,
    item_index: Option<usize>,
}

/// Result type for vault operations.
pub type Result<T> = std::result::Result<T, VaultError>;

impl VaultError {
    /// Create an error of the given kind
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            item_index: None,
        }
    }

    /// Key failed validation
    pub fn key_invalid(key: &str, reason: impl fmt::Display) -> Self {
        Self::new(ErrorKind::KeyInvalid, format!("Invalid key '{}': {}", key, reason))
    }

    /// Key is already present (insert in replace mode)
    pub fn key_already_exists(key: &str) -> Self {
        Self::new(
            ErrorKind::KeyAlreadyExists,
            format!(
                "Key '{}' already exists. Use merge mode or the update operation to change it",
                key
            ),
        )
    }

    /// Key is absent
    pub fn key_not_found(key: &str) -> Self {
        Self::new(ErrorKind::KeyNotFound, format!("Key '{}' not found", key))
    }

    /// Payload text is not valid JSON
    pub fn malformed_payload(reason: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::MalformedPayload,
            format!("Invalid JSON payload: {}", reason),
        )
    }

    /// Serialized document would exceed the cap
    pub fn size_exceeded(size: usize, limit: usize) -> Self {
        Self::new(
            ErrorKind::VaultSizeExceeded,
            format!(
                "Vault size limit exceeded: {} bytes > {} bytes ({:.2} MiB cap)",
                size,
                limit,
                limit as f64 / (1024.0 * 1024.0)
            ),
        )
    }

    /// Bug or invariant violation
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Attach the batch item index this error belongs to
    ///
    /// The first index wins; later calls leave it untouched.
    pub fn with_item(mut self, index: usize) -> Self {
        if self.item_index.is_none() {
            self.item_index = Some(index);
        }
        self
    }

    /// Error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Canonical error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Batch item index, if attached
    pub fn item_index(&self) -> Option<usize> {
        self.item_index
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::KeyNotFound
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(e: serde_json::Error) -> Self {
        VaultError::internal(format!("serialization error: {}", e))
    }
}
