//! Main entry point for the vault.
//!
//! [`Vault`] owns one document slot and runs every operation through the
//! command executor. [`SharedVault`] puts a `Vault` behind a mutex for hosts
//! that hand it to more than one thread.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;
use vault_core::{Value, VaultError};
use vault_engine::{Document, DocumentSlot, Entry, VaultConfig};
use vault_executor::output::{ClearRecord, DeleteRecord, FindRecord, WriteRecord};
use vault_executor::{
    ClearScope, Command, Executor, FailurePolicy, Invocation, MergeMode, Output, OutputFormat,
    Payload,
};

use crate::error::Result;

/// A vault: one JSON document plus the operations over it.
///
/// Create one with [`Vault::new`] or [`Vault::builder`].
///
/// # Example
///
/// ```
/// use vaultdb::prelude::*;
///
/// let mut vault = Vault::new();
/// vault.insert("users.admin", json!({"theme": "dark"}), MergeMode::Replace)?;
/// vault.update("users.admin", json!({"lang": "en"}), MergeMode::Merge, false)?;
///
/// assert_eq!(
///     vault.find("users.admin.lang")?,
///     Some(Value::from("en"))
/// );
/// # Ok::<(), vaultdb::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Vault {
    executor: Executor,
    slot: DocumentSlot,
}

impl Vault {
    /// Empty vault with default settings (10 MiB cap, verified reads).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for vault configuration.
    pub fn builder() -> VaultBuilder {
        VaultBuilder::new()
    }

    /// Active configuration.
    pub fn config(&self) -> &VaultConfig {
        self.executor.config()
    }

    /// The document, if any operation has created it yet.
    pub fn document(&self) -> Option<&Document> {
        self.slot.document()
    }

    /// Tear down and hand back the document.
    pub fn into_document(mut self) -> Document {
        self.slot.take().unwrap_or_default()
    }

    // =========================================================================
    // Command Interface
    // =========================================================================

    /// Execute a command.
    pub fn execute(&mut self, command: Command) -> Result<Output> {
        Ok(self.executor.execute(&mut self.slot, command, None)?)
    }

    /// Execute a command for a specific input item.
    pub fn execute_for(&mut self, command: Command, input: &Value) -> Result<Output> {
        Ok(self.executor.execute(&mut self.slot, command, Some(input))?)
    }

    /// Execute a batch of invocations in order.
    pub fn execute_batch<I>(
        &mut self,
        invocations: I,
        policy: FailurePolicy,
    ) -> Result<Vec<Output>>
    where
        I: IntoIterator<Item = Invocation>,
    {
        Ok(self
            .executor
            .execute_batch(&mut self.slot, invocations, policy)?)
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Insert a value at `key`.
    ///
    /// In [`MergeMode::Replace`] the key must not exist yet.
    pub fn insert(
        &mut self,
        key: &str,
        value: impl Into<Value>,
        mode: MergeMode,
    ) -> Result<WriteRecord> {
        match self.execute(Command::Insert {
            key: key.to_string(),
            payload: Payload::Value(value.into()),
            mode,
        })? {
            Output::Write(record) => Ok(record),
            _ => Err(unexpected("Insert")),
        }
    }

    /// Update the value at `key`, optionally creating it.
    pub fn update(
        &mut self,
        key: &str,
        value: impl Into<Value>,
        mode: MergeMode,
        create_if_not_exists: bool,
    ) -> Result<WriteRecord> {
        match self.execute(Command::Update {
            key: key.to_string(),
            payload: Payload::Value(value.into()),
            mode,
            create_if_not_exists,
        })? {
            Output::Write(record) => Ok(record),
            _ => Err(unexpected("Update")),
        }
    }

    /// Delete the value at `key`.
    pub fn delete(&mut self, key: &str, error_if_not_exists: bool) -> Result<DeleteRecord> {
        match self.execute(Command::Delete {
            key: key.to_string(),
            error_if_not_exists,
        })? {
            Output::Delete(record) => Ok(record),
            _ => Err(unexpected("Delete")),
        }
    }

    /// Empty the whole document.
    pub fn clear(&mut self) -> Result<ClearRecord> {
        self.clear_scope(ClearScope::All)
    }

    /// Remove `key` if present.
    pub fn clear_key(&mut self, key: &str) -> Result<ClearRecord> {
        self.clear_scope(ClearScope::Key(key.to_string()))
    }

    fn clear_scope(&mut self, scope: ClearScope) -> Result<ClearRecord> {
        match self.execute(Command::Clear { scope })? {
            Output::Clear(record) => Ok(record),
            _ => Err(unexpected("Clear")),
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Value at `key`, or `None` if it does not resolve.
    pub fn find(&mut self, key: &str) -> Result<Option<Value>> {
        match self.execute(Command::Find {
            key: key.to_string(),
            error_if_not_exists: false,
        })? {
            Output::Find(record) => Ok(record.value),
            _ => Err(unexpected("Find")),
        }
    }

    /// Value at `key`, failing with `KeyNotFound` if absent.
    pub fn get(&mut self, key: &str) -> Result<Value> {
        match self.execute(Command::Find {
            key: key.to_string(),
            error_if_not_exists: true,
        })? {
            Output::Find(FindRecord { value: Some(v), .. }) => Ok(v),
            _ => Err(unexpected("Find")),
        }
    }

    /// Top-level keys, or every dotted path with `include_nested`.
    pub fn keys(&mut self, include_nested: bool) -> Result<Vec<String>> {
        match self.execute(Command::List {
            format: OutputFormat::Keys,
            include_nested,
        })? {
            Output::Keys(record) => Ok(record.keys),
            _ => Err(unexpected("List")),
        }
    }

    /// Top-level entries with whole values.
    pub fn entries(&mut self) -> Result<Vec<Entry>> {
        match self.execute(Command::List {
            format: OutputFormat::Full,
            include_nested: false,
        })? {
            Output::Entries(record) => Ok(record.items),
            _ => Err(unexpected("List")),
        }
    }

    /// Copy of the whole document.
    pub fn snapshot(&mut self) -> Result<Document> {
        match self.execute(Command::List {
            format: OutputFormat::Vault,
            include_nested: false,
        })? {
            Output::Vault(record) => Ok(record.vault),
            _ => Err(unexpected("List")),
        }
    }
}

fn unexpected(operation: &str) -> crate::Error {
    VaultError::internal(format!("Unexpected output for {}", operation)).into()
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for vault configuration.
///
/// # Example
///
/// ```
/// use vaultdb::Vault;
///
/// let vault = Vault::builder()
///     .max_vault_bytes(64 * 1024)
///     .verify_reads(false)
///     .open()?;
/// assert_eq!(vault.config().max_vault_bytes, 64 * 1024);
/// # Ok::<(), vaultdb::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct VaultBuilder {
    config: VaultConfig,
    config_file: Option<PathBuf>,
    document: Option<Document>,
    document_file: Option<PathBuf>,
}

impl VaultBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: VaultConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a TOML file when opening.
    ///
    /// The file replaces any configuration set on the builder.
    pub fn config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Cap on the serialized document, in bytes.
    pub fn max_vault_bytes(mut self, bytes: usize) -> Self {
        self.config = self.config.max_vault_bytes(bytes);
        self
    }

    /// Fingerprint the document around reads.
    pub fn verify_reads(mut self, enabled: bool) -> Self {
        self.config = self.config.verify_reads(enabled);
        self
    }

    /// Start from an existing document.
    pub fn document(mut self, document: Document) -> Self {
        self.document = Some(document);
        self
    }

    /// Start from a document read from a JSON file when opening.
    pub fn document_file(mut self, path: impl AsRef<Path>) -> Self {
        self.document_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Open the vault.
    ///
    /// # Errors
    ///
    /// - `Config`: the config file is unreadable or invalid
    /// - `Io`: the document file is unreadable
    /// - `Vault(MalformedPayload)`: the document file is not a JSON object
    /// - `Vault(VaultSizeExceeded)`: the starting document is over the cap
    pub fn open(self) -> Result<Vault> {
        let config = match &self.config_file {
            Some(path) => VaultConfig::from_file(path)?,
            None => {
                self.config.validate()?;
                self.config
            }
        };

        let document = match (&self.document_file, self.document) {
            (Some(path), _) => {
                let text = std::fs::read_to_string(path)?;
                Some(Document::from_json_str(&text)?)
            }
            (None, document) => document,
        };

        let slot = match document {
            Some(document) => {
                document.check_depth()?;
                let size = config.size_guard().check(&document)?;
                info!(keys = document.len(), size, "vault opened with starting document");
                DocumentSlot::with_document(document)
            }
            None => DocumentSlot::new(),
        };

        Ok(Vault {
            executor: Executor::new(config),
            slot,
        })
    }

    /// Open the vault behind a mutex.
    pub fn open_shared(self) -> Result<SharedVault> {
        self.open().map(SharedVault::from)
    }
}

// =============================================================================
// SharedVault
// =============================================================================

/// A [`Vault`] shared across threads.
///
/// Each method takes the lock exactly once and holds it for the whole
/// operation, so operations from different threads never interleave. Use
/// [`SharedVault::with`] to run several operations under one acquisition.
#[derive(Debug, Clone, Default)]
pub struct SharedVault {
    inner: Arc<Mutex<Vault>>,
}

impl From<Vault> for SharedVault {
    fn from(vault: Vault) -> Self {
        Self {
            inner: Arc::new(Mutex::new(vault)),
        }
    }
}

impl SharedVault {
    /// Empty shared vault with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with exclusive access to the vault.
    pub fn with<R>(&self, f: impl FnOnce(&mut Vault) -> R) -> R {
        let mut vault = self.inner.lock();
        f(&mut vault)
    }

    /// See [`Vault::execute`].
    pub fn execute(&self, command: Command) -> Result<Output> {
        self.inner.lock().execute(command)
    }

    /// See [`Vault::execute_batch`].
    pub fn execute_batch<I>(&self, invocations: I, policy: FailurePolicy) -> Result<Vec<Output>>
    where
        I: IntoIterator<Item = Invocation>,
    {
        self.inner.lock().execute_batch(invocations, policy)
    }

    /// See [`Vault::insert`].
    pub fn insert(
        &self,
        key: &str,
        value: impl Into<Value>,
        mode: MergeMode,
    ) -> Result<WriteRecord> {
        self.inner.lock().insert(key, value, mode)
    }

    /// See [`Vault::update`].
    pub fn update(
        &self,
        key: &str,
        value: impl Into<Value>,
        mode: MergeMode,
        create_if_not_exists: bool,
    ) -> Result<WriteRecord> {
        self.inner
            .lock()
            .update(key, value, mode, create_if_not_exists)
    }

    /// See [`Vault::delete`].
    pub fn delete(&self, key: &str, error_if_not_exists: bool) -> Result<DeleteRecord> {
        self.inner.lock().delete(key, error_if_not_exists)
    }

    /// See [`Vault::clear`].
    pub fn clear(&self) -> Result<ClearRecord> {
        self.inner.lock().clear()
    }

    /// See [`Vault::find`].
    pub fn find(&self, key: &str) -> Result<Option<Value>> {
        self.inner.lock().find(key)
    }

    /// See [`Vault::keys`].
    pub fn keys(&self, include_nested: bool) -> Result<Vec<String>> {
        self.inner.lock().keys(include_nested)
    }

    /// See [`Vault::snapshot`].
    pub fn snapshot(&self) -> Result<Document> {
        self.inner.lock().snapshot()
    }
}
