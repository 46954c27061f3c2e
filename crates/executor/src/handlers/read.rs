//! Find and list handlers.
//!
//! Neither handler mutates the document.

use vault_engine::DocumentStore;

use crate::output::{EntriesRecord, FindRecord, KeysRecord, VaultRecord};
use crate::types::OutputFormat;
use crate::{Output, Result};

/// Handle Find command.
pub fn find(
    store: &mut DocumentStore<'_>,
    key: &str,
    error_if_not_exists: bool,
) -> Result<Output> {
    let value = store.find(key, error_if_not_exists)?;
    Ok(Output::Find(FindRecord {
        key: key.to_string(),
        found: value.is_some(),
        value,
    }))
}

/// Handle List command.
///
/// `include_nested` only affects [`OutputFormat::Keys`]; entries and the
/// vault record are always top-level.
pub fn list(
    store: &mut DocumentStore<'_>,
    format: OutputFormat,
    include_nested: bool,
) -> Result<Output> {
    match format {
        OutputFormat::Keys => {
            let keys = store.list_keys(include_nested)?;
            Ok(Output::Keys(KeysRecord {
                count: keys.len(),
                keys,
            }))
        }
        OutputFormat::Full => {
            let items = store.list_entries()?;
            Ok(Output::Entries(EntriesRecord {
                count: items.len(),
                items,
            }))
        }
        OutputFormat::Vault => {
            let vault = store.vault()?;
            let vault_size = store.size()?;
            Ok(Output::Vault(VaultRecord {
                count: vault.len(),
                vault,
                vault_size,
            }))
        }
    }
}
