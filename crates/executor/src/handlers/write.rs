//! Insert and update handlers.

use vault_core::Value;
use vault_engine::{DocumentStore, MergeMode, WriteOutcome};

use crate::output::WriteRecord;
use crate::{Output, Result};

/// Handle Insert command.
pub fn insert(
    store: &mut DocumentStore<'_>,
    key: &str,
    value: Value,
    mode: MergeMode,
) -> Result<Output> {
    let outcome = store.insert(key, value, mode)?;
    Ok(write_output(outcome))
}

/// Handle Update command.
pub fn update(
    store: &mut DocumentStore<'_>,
    key: &str,
    value: Value,
    mode: MergeMode,
    create_if_not_exists: bool,
) -> Result<Output> {
    let outcome = store.update(key, value, mode, create_if_not_exists)?;
    Ok(write_output(outcome))
}

fn write_output(outcome: WriteOutcome) -> Output {
    Output::Write(WriteRecord {
        key: outcome.key,
        action: outcome.action,
        vault_size: outcome.vault_size,
    })
}
