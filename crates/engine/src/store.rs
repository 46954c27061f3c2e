//! DocumentStore: atomic operations over the shared document
//!
//! ## Design: BORROWED HANDLE
//!
//! A `DocumentStore` borrows the host's document for exactly one operation
//! (or a short synchronous sequence of them). It holds no state of its own
//! beyond configuration; nothing outlives the borrow.
//!
//! ## Atomicity
//!
//! Every mutating operation either fully applies or leaves the document in
//! its exact pre-operation state:
//!
//! 1. Validate key and preconditions (no mutation yet)
//! 2. Capture a [`Snapshot`]
//! 3. Apply the mutation to the live document
//! 4. Check the serialized size against the cap
//! 5. On any error in 3-4, restore the snapshot, then return the error
//!
//! ## Read Verification
//!
//! Reads (`find`, `list_*`, `vault`) fingerprint the document at entry and
//! exit. A mismatch is an invariant violation: it is logged at error level and
//! the entry snapshot is restored. Disable with
//! [`VaultConfig::verify_reads`](crate::VaultConfig).

use crate::config::VaultConfig;
use crate::document::{Document, DocumentSlot};
use crate::enumerate::{self, Entry};
use crate::snapshot::{Fingerprint, Snapshot};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use vault_core::path::{self, KeyPath};
use vault_core::{merge_values, serialized_size, Map, Result, SizeGuard, Value, VaultError};

// =============================================================================
// Options and outcomes
// =============================================================================

/// How a write combines with an existing value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMode {
    /// New value replaces the existing one
    #[default]
    Replace,
    /// Deep-merge into the existing value when both are objects
    Merge,
}

/// What a successful operation did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Value written at a previously empty path (insert)
    Inserted,
    /// Value written at a previously empty path (update with create)
    Created,
    /// Existing value replaced
    Updated,
    /// Value deep-merged into an existing object
    Merged,
    /// Path removed
    Deleted,
    /// Whole document emptied
    ClearedAll,
    /// Single path cleared
    ClearedKey,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Inserted => "inserted",
            Action::Created => "created",
            Action::Updated => "updated",
            Action::Merged => "merged",
            Action::Deleted => "deleted",
            Action::ClearedAll => "cleared_all",
            Action::ClearedKey => "cleared_key",
        }
    }
}

/// Result of an insert or update
#[derive(Debug, Clone, PartialEq)]
pub struct WriteOutcome {
    pub key: String,
    pub action: Action,
    /// Serialized document size after the write
    pub vault_size: usize,
}

/// Result of a delete
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    pub key: String,
    pub existed: bool,
    /// Value held before deletion, if any
    pub deleted_value: Option<Value>,
    pub vault_size: usize,
}

/// Result of a clear
#[derive(Debug, Clone, PartialEq)]
pub struct ClearOutcome {
    /// `None` when the whole document was cleared
    pub key: Option<String>,
    pub action: Action,
    /// Whether anything was removed
    pub existed: bool,
    /// Number of top-level keys removed (clear-all) or 0/1 (clear-key)
    pub removed: usize,
    pub vault_size: usize,
}

// =============================================================================
// DocumentStore
// =============================================================================

/// Operations over one borrowed document
pub struct DocumentStore<'a> {
    doc: &'a mut Document,
    guard: SizeGuard,
    verify_reads: bool,
}

impl<'a> DocumentStore<'a> {
    /// Borrow the document held by `slot`, creating it if absent
    pub fn open(slot: &'a mut DocumentSlot, config: &VaultConfig) -> Self {
        Self::new(slot.document_mut(), config)
    }

    /// Borrow a document directly
    pub fn new(doc: &'a mut Document, config: &VaultConfig) -> Self {
        Self {
            doc,
            guard: config.size_guard(),
            verify_reads: config.verify_reads,
        }
    }

    /// Current serialized size of the document
    pub fn size(&self) -> Result<usize> {
        serialized_size(self.doc.as_map())
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Insert a value at `key`
    ///
    /// In replace mode the path must not resolve. In merge mode an existing
    /// object is deep-merged with an object value; any other existing value
    /// is replaced.
    ///
    /// # Errors
    ///
    /// - `KeyInvalid`: key fails validation
    /// - `KeyAlreadyExists`: replace mode and the path already resolves
    /// - `MalformedPayload`: the value would nest too deep below the root
    /// - `VaultSizeExceeded`: the result is over the cap (document restored)
    pub fn insert(&mut self, key: &str, value: Value, mode: MergeMode) -> Result<WriteOutcome> {
        let path = KeyPath::parse(key)?;
        let existing = path::resolve(self.doc.as_map(), &path);

        let (next, action) = match (existing, mode) {
            (Some(_), MergeMode::Replace) => return Err(VaultError::key_already_exists(key)),
            (None, _) => (value, Action::Inserted),
            (Some(current), MergeMode::Merge) => combine(current, value),
        };

        path::check_depth(&path, &next)?;

        let vault_size = self.mutate("insert", |doc| {
            path::ensure_and_set(doc, &path, next);
            Ok(())
        })?;

        debug!(key = key, action = action.as_str(), vault_size, "insert committed");
        Ok(WriteOutcome {
            key: key.to_string(),
            action,
            vault_size,
        })
    }

    /// Update the value at `key`
    ///
    /// If the path does not resolve, the value is created when
    /// `create_if_not_exists` is set and the call fails otherwise.
    ///
    /// # Errors
    ///
    /// - `KeyInvalid`: key fails validation
    /// - `KeyNotFound`: path absent and creation not permitted
    /// - `MalformedPayload`: the value would nest too deep below the root
    /// - `VaultSizeExceeded`: the result is over the cap (document restored)
    pub fn update(
        &mut self,
        key: &str,
        value: Value,
        mode: MergeMode,
        create_if_not_exists: bool,
    ) -> Result<WriteOutcome> {
        let path = KeyPath::parse(key)?;
        let existing = path::resolve(self.doc.as_map(), &path);

        let (next, action) = match (existing, mode) {
            (None, _) if !create_if_not_exists => return Err(VaultError::key_not_found(key)),
            (None, _) => (value, Action::Created),
            (Some(_), MergeMode::Replace) => (value, Action::Updated),
            (Some(current), MergeMode::Merge) => combine(current, value),
        };

        path::check_depth(&path, &next)?;

        let vault_size = self.mutate("update", |doc| {
            path::ensure_and_set(doc, &path, next);
            Ok(())
        })?;

        debug!(key = key, action = action.as_str(), vault_size, "update committed");
        Ok(WriteOutcome {
            key: key.to_string(),
            action,
            vault_size,
        })
    }

    /// Delete the value at `key`
    ///
    /// # Errors
    ///
    /// - `KeyInvalid`: key fails validation
    /// - `KeyNotFound`: path absent and `error_if_not_exists` is set
    pub fn delete(&mut self, key: &str, error_if_not_exists: bool) -> Result<DeleteOutcome> {
        let path = KeyPath::parse(key)?;
        if error_if_not_exists && !path::exists(self.doc.as_map(), &path) {
            return Err(VaultError::key_not_found(key));
        }

        let mut removed = None;
        let vault_size = self.mutate("delete", |doc| {
            removed = path::remove(doc, &path);
            Ok(())
        })?;

        let existed = removed.is_some();
        debug!(key = key, existed, vault_size, "delete committed");
        Ok(DeleteOutcome {
            key: key.to_string(),
            existed,
            deleted_value: removed,
            vault_size,
        })
    }

    /// Empty the whole document
    pub fn clear_all(&mut self) -> Result<ClearOutcome> {
        let mut removed = 0;
        let vault_size = self.mutate("clear", |doc| {
            removed = doc.len();
            doc.clear();
            Ok(())
        })?;

        debug!(removed, "vault cleared");
        Ok(ClearOutcome {
            key: None,
            action: Action::ClearedAll,
            existed: removed > 0,
            removed,
            vault_size,
        })
    }

    /// Remove `key` if present; absent keys are a silent no-op
    ///
    /// # Errors
    ///
    /// - `KeyInvalid`: key fails validation
    pub fn clear_key(&mut self, key: &str) -> Result<ClearOutcome> {
        let outcome = self.delete(key, false)?;
        Ok(ClearOutcome {
            key: Some(outcome.key),
            action: Action::ClearedKey,
            existed: outcome.existed,
            removed: usize::from(outcome.existed),
            vault_size: outcome.vault_size,
        })
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Look up the value at `key`
    ///
    /// # Errors
    ///
    /// - `KeyInvalid`: key fails validation
    /// - `KeyNotFound`: path absent and `error_if_not_exists` is set
    pub fn find(&mut self, key: &str, error_if_not_exists: bool) -> Result<Option<Value>> {
        let path = KeyPath::parse(key)?;
        let found = self.observe("find", |doc| path::resolve(doc.as_map(), &path).cloned())?;
        match found {
            None if error_if_not_exists => Err(VaultError::key_not_found(key)),
            other => Ok(other),
        }
    }

    /// List top-level keys, or every dotted path with `include_nested`
    pub fn list_keys(&mut self, include_nested: bool) -> Result<Vec<String>> {
        self.observe("list", |doc| enumerate::list_keys(doc.as_map(), include_nested))
    }

    /// List top-level entries with whole values
    pub fn list_entries(&mut self) -> Result<Vec<Entry>> {
        self.observe("list", |doc| enumerate::list_entries(doc.as_map()))
    }

    /// Copy of the whole document
    pub fn vault(&mut self) -> Result<Document> {
        self.observe("list", |doc| doc.clone())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Apply `apply` under snapshot protection and return the committed size
    fn mutate<F>(&mut self, operation: &'static str, apply: F) -> Result<usize>
    where
        F: FnOnce(&mut Map) -> Result<()>,
    {
        let snapshot = Snapshot::capture(self.doc);
        let guard = self.guard;

        let result = apply(self.doc.as_map_mut()).and_then(|()| guard.check(self.doc.as_map()));

        if let Err(e) = &result {
            snapshot.restore(self.doc);
            warn!(
                operation,
                code = e.code(),
                error = %e,
                "operation failed; document restored to pre-operation snapshot"
            );
        }
        result
    }

    /// Run a read and verify it left the document untouched
    fn observe<T, F>(&mut self, operation: &'static str, read: F) -> Result<T>
    where
        F: FnOnce(&Document) -> T,
    {
        if !self.verify_reads {
            return Ok(read(self.doc));
        }

        let snapshot = Snapshot::capture(self.doc);
        let out = read(self.doc);
        self.heal_if_changed(operation, snapshot)?;
        Ok(out)
    }

    /// Restore `snapshot` if the live document no longer matches it
    ///
    /// Reads only see `&Document`, so a mismatch means an invariant broke
    /// elsewhere. Returns whether a restore happened.
    fn heal_if_changed(&mut self, operation: &'static str, snapshot: Snapshot) -> Result<bool> {
        let before = snapshot.fingerprint()?;
        let after = Fingerprint::of(self.doc)?;
        if before == after {
            return Ok(false);
        }

        error!(
            operation,
            before = before.hash(),
            after = after.hash(),
            "document changed during a read-only operation; restoring entry snapshot"
        );
        snapshot.restore(self.doc);
        Ok(true)
    }
}

/// Merge-mode combination of an existing value with an incoming one
fn combine(current: &Value, incoming: Value) -> (Value, Action) {
    if current.is_object() && incoming.is_object() {
        (merge_values(current, &incoming), Action::Merged)
    } else {
        (incoming, Action::Updated)
    }
}
