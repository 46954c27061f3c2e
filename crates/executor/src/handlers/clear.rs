//! Clear handler.

use vault_engine::DocumentStore;

use crate::output::ClearRecord;
use crate::types::ClearScope;
use crate::{Output, Result};

/// Handle Clear command.
pub fn clear(store: &mut DocumentStore<'_>, scope: &ClearScope) -> Result<Output> {
    let record = match scope {
        ClearScope::All => {
            let outcome = store.clear_all()?;
            ClearRecord {
                action: outcome.action,
                key: None,
                existed: None,
                cleared_keys: Some(outcome.removed),
                vault_size: outcome.vault_size,
            }
        }
        ClearScope::Key(key) => {
            let outcome = store.clear_key(key)?;
            ClearRecord {
                action: outcome.action,
                key: outcome.key,
                existed: Some(outcome.existed),
                cleared_keys: None,
                vault_size: outcome.vault_size,
            }
        }
    };
    Ok(Output::Clear(record))
}
