//! Vault configuration
//!
//! Use the builder pattern, or load from TOML:
//!
//! ```toml
//! max_vault_bytes = 10485760
//! verify_reads = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use vault_core::{SizeGuard, MAX_VAULT_BYTES};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config text is not valid TOML for [`VaultConfig`]
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config parsed but holds an unusable value
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Options governing a vault's document store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VaultConfig {
    /// Cap on the serialized document, in bytes
    pub max_vault_bytes: usize,
    /// Fingerprint the document around reads and self-heal on mismatch
    pub verify_reads: bool,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            max_vault_bytes: MAX_VAULT_BYTES,
            verify_reads: true,
        }
    }
}

impl VaultConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_vault_bytes(mut self, bytes: usize) -> Self {
        self.max_vault_bytes = bytes;
        self
    }

    pub fn verify_reads(mut self, enabled: bool) -> Self {
        self.verify_reads = enabled;
        self
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: VaultConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Reject configurations no document could satisfy
    pub fn validate(&self) -> Result<(), ConfigError> {
        // "{}" is the smallest document
        if self.max_vault_bytes < 2 {
            return Err(ConfigError::Invalid(format!(
                "max_vault_bytes must be at least 2, got {}",
                self.max_vault_bytes
            )));
        }
        Ok(())
    }

    /// Size guard for the configured cap
    pub fn size_guard(&self) -> SizeGuard {
        SizeGuard::new(self.max_vault_bytes)
    }
}
