//! The vault document and the host slot that owns it
//!
//! A [`Document`] is an object at the root: a map from string keys to values.
//! Exactly one document exists per execution scope. The host owns it through a
//! [`DocumentSlot`]; the engine only borrows it for the duration of a single
//! operation.

use serde::{Deserialize, Serialize};
use vault_core::{Map, Result, Value, VaultError, MAX_PATH_DEPTH};

/// The shared vault document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    root: Map,
}

impl Document {
    /// Create an empty document (`{}`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing root map
    pub fn from_map(root: Map) -> Self {
        Self { root }
    }

    /// Parse a document from JSON text
    ///
    /// # Errors
    ///
    /// `MalformedPayload` if the text is not JSON, its root is not an object,
    /// or it nests deeper than [`MAX_PATH_DEPTH`].
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(VaultError::malformed_payload)?;
        let doc = Self::try_from(value)?;
        doc.check_depth()?;
        Ok(doc)
    }

    /// Root map
    pub fn as_map(&self) -> &Map {
        &self.root
    }

    pub(crate) fn as_map_mut(&mut self) -> &mut Map {
        &mut self.root
    }

    /// Number of top-level keys
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Whether the document has no top-level keys
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Top-level value for `key`, without path interpretation
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Copy of the document as a single object value
    pub fn to_value(&self) -> Value {
        Value::Object(self.root.clone())
    }

    /// Consume into the root map
    pub fn into_map(self) -> Map {
        self.root
    }

    /// Nesting depth below the root: 1 for a document of scalars
    pub fn depth(&self) -> usize {
        1 + self.root.values().map(Value::depth).max().unwrap_or(0)
    }

    /// Reject documents nesting deeper than [`MAX_PATH_DEPTH`]
    ///
    /// # Errors
    ///
    /// `MalformedPayload` when the bound is exceeded.
    pub fn check_depth(&self) -> Result<()> {
        let depth = self.depth();
        if depth > MAX_PATH_DEPTH {
            return Err(VaultError::malformed_payload(format!(
                "document nests {} levels below the root; at most {} allowed",
                depth, MAX_PATH_DEPTH
            )));
        }
        Ok(())
    }

    /// Compact JSON text of the whole document
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.root)?)
    }
}

impl TryFrom<Value> for Document {
    type Error = VaultError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(VaultError::malformed_payload(format!(
                "document root must be an Object, got {}",
                other.type_name()
            ))),
        }
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Object(doc.root)
    }
}

/// Host-owned slot holding the execution scope's document
///
/// The document is created empty on first access.
#[derive(Debug, Default)]
pub struct DocumentSlot {
    document: Option<Document>,
}

impl DocumentSlot {
    /// Empty slot; the document is created on first access
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-populated with a document
    pub fn with_document(document: Document) -> Self {
        Self {
            document: Some(document),
        }
    }

    /// Whether a document has been created yet
    pub fn is_initialized(&self) -> bool {
        self.document.is_some()
    }

    /// Borrow the document, if created
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Borrow the document mutably, creating it empty if absent
    pub fn document_mut(&mut self) -> &mut Document {
        self.document.get_or_insert_with(Document::new)
    }

    /// Remove the document from the slot (host teardown)
    pub fn take(&mut self) -> Option<Document> {
        self.document.take()
    }
}
