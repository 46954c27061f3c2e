//! Delete handler.

use vault_engine::{Action, DocumentStore};

use crate::output::DeleteRecord;
use crate::{Output, Result};

/// Handle Delete command.
pub fn delete(
    store: &mut DocumentStore<'_>,
    key: &str,
    error_if_not_exists: bool,
) -> Result<Output> {
    let outcome = store.delete(key, error_if_not_exists)?;
    Ok(Output::Delete(DeleteRecord {
        key: outcome.key,
        action: Action::Deleted,
        existed: outcome.existed,
        deleted_value: outcome.deleted_value,
        vault_size: outcome.vault_size,
    }))
}
