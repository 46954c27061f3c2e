//! Snapshots and fingerprints of the document
//!
//! A [`Snapshot`] is a deep copy taken before a mutation and reinstated if the
//! mutation fails. A [`Fingerprint`] is the xxh3-64 hash of the document's JSON
//! text, used to prove a read left the document untouched.

use crate::document::Document;
use std::io;
use vault_core::Result;
use xxhash_rust::xxh3::Xxh3;

/// Immutable pre-operation copy of a document
#[derive(Debug, Clone)]
pub struct Snapshot {
    document: Document,
}

impl Snapshot {
    /// Deep-copy the document
    pub fn capture(document: &Document) -> Self {
        Self {
            document: document.clone(),
        }
    }

    /// Overwrite `target` with the captured state
    pub fn restore(self, target: &mut Document) {
        *target = self.document;
    }

    /// The captured state
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Fingerprint of the captured state
    pub fn fingerprint(&self) -> Result<Fingerprint> {
        Fingerprint::of(&self.document)
    }
}

/// Hash of a document's serialized form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    hash: u64,
    len: usize,
}

impl Fingerprint {
    /// Stream the document's JSON text through xxh3
    pub fn of(document: &Document) -> Result<Self> {
        let mut sink = HashSink {
            hasher: Xxh3::new(),
            len: 0,
        };
        serde_json::to_writer(&mut sink, document)?;
        Ok(Self {
            hash: sink.hasher.digest(),
            len: sink.len,
        })
    }

    /// Serialized length in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the serialized form was empty (never true for a document)
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw hash
    pub fn hash(&self) -> u64 {
        self.hash
    }
}

struct HashSink {
    hasher: Xxh3,
    len: usize,
}

impl io::Write for HashSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.hasher.update(buf);
        self.len += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
