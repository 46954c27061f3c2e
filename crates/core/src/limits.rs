//! Size limits
//!
//! The whole document is bounded by its serialized JSON length. The check
//! runs after a mutation is applied in memory, because a merge result cannot
//! be sized without materializing it.

use crate::error::{Result, VaultError};
use serde::Serialize;
use std::io;

/// Default cap on the serialized document: 10 MiB
pub const MAX_VAULT_BYTES: usize = 10 * 1024 * 1024;

/// `io::Write` sink that only counts bytes
#[derive(Debug, Default)]
struct ByteCounter {
    count: usize,
}

impl io::Write for ByteCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.count += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Length in bytes of the compact JSON encoding of `value`
///
/// The text is streamed into a counter, never materialized.
pub fn serialized_size<T: Serialize + ?Sized>(value: &T) -> Result<usize> {
    let mut counter = ByteCounter::default();
    serde_json::to_writer(&mut counter, value)?;
    Ok(counter.count)
}

/// Rejects documents whose serialized size exceeds a cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeGuard {
    max_bytes: usize,
}

impl SizeGuard {
    /// Guard with an explicit cap
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    /// The configured cap
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Measure `value`, failing with `VaultSizeExceeded` above the cap
    ///
    /// A size equal to the cap is accepted. Returns the measured size.
    pub fn check<T: Serialize + ?Sized>(&self, value: &T) -> Result<usize> {
        let size = serialized_size(value)?;
        if size > self.max_bytes {
            return Err(VaultError::size_exceeded(size, self.max_bytes));
        }
        Ok(size)
    }
}

impl Default for SizeGuard {
    fn default() -> Self {
        Self::new(MAX_VAULT_BYTES)
    }
}
