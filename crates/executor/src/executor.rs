//! The command executor.
//!
//! [`Executor`] dispatches a [`Command`] to its handler against a borrowed
//! [`DocumentSlot`]. It holds configuration only; the document always
//! belongs to the caller.

use tracing::debug;
use vault_core::Value;
use vault_engine::{DocumentSlot, DocumentStore, VaultConfig};

use crate::handlers;
use crate::output::FailureRecord;
use crate::types::FailurePolicy;
use crate::{Command, Output, Result};

/// One command together with the input item it runs for.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub command: Command,
    /// Item consulted by [`Payload::Input`](crate::Payload::Input)
    pub input: Option<Value>,
}

impl Invocation {
    /// Invocation with no input item.
    pub fn new(command: Command) -> Self {
        Self {
            command,
            input: None,
        }
    }

    /// Invocation for a specific input item.
    pub fn with_input(command: Command, input: Value) -> Self {
        Self {
            command,
            input: Some(input),
        }
    }
}

impl From<Command> for Invocation {
    fn from(command: Command) -> Self {
        Self::new(command)
    }
}

/// Executes commands against a host-owned document slot.
#[derive(Debug, Clone, Default)]
pub struct Executor {
    config: VaultConfig,
}

impl Executor {
    /// Executor with the given configuration.
    pub fn new(config: VaultConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    /// Execute one command.
    ///
    /// The document is created in `slot` on first use. A failed command
    /// leaves the document exactly as it was.
    pub fn execute(
        &self,
        slot: &mut DocumentSlot,
        command: Command,
        input: Option<&Value>,
    ) -> Result<Output> {
        debug!(
            operation = command.name(),
            key = command.key(),
            write = command.is_write(),
            "executing command"
        );

        let mut store = DocumentStore::open(slot, &self.config);
        match command {
            Command::Insert { key, payload, mode } => {
                let value = payload.resolve(input)?;
                handlers::write::insert(&mut store, &key, value, mode)
            }
            Command::Update {
                key,
                payload,
                mode,
                create_if_not_exists,
            } => {
                let value = payload.resolve(input)?;
                handlers::write::update(&mut store, &key, value, mode, create_if_not_exists)
            }
            Command::Delete {
                key,
                error_if_not_exists,
            } => handlers::delete::delete(&mut store, &key, error_if_not_exists),
            Command::Find {
                key,
                error_if_not_exists,
            } => handlers::read::find(&mut store, &key, error_if_not_exists),
            Command::Clear { scope } => handlers::clear::clear(&mut store, &scope),
            Command::List {
                format,
                include_nested,
            } => handlers::read::list(&mut store, format, include_nested),
        }
    }

    /// Execute a sequence of invocations in order.
    ///
    /// Each failure is tagged with its position in the batch. Under
    /// [`FailurePolicy::Abort`] the first failure ends the batch and is
    /// returned; under [`FailurePolicy::Continue`] it becomes an
    /// [`Output::Failure`] and the batch moves on. Earlier successful
    /// invocations are never undone.
    pub fn execute_batch<I>(
        &self,
        slot: &mut DocumentSlot,
        invocations: I,
        policy: FailurePolicy,
    ) -> Result<Vec<Output>>
    where
        I: IntoIterator<Item = Invocation>,
    {
        let mut outputs = Vec::new();
        for (index, invocation) in invocations.into_iter().enumerate() {
            match self.execute(slot, invocation.command, invocation.input.as_ref()) {
                Ok(output) => outputs.push(output),
                Err(e) => {
                    let e = e.with_item(index);
                    match policy {
                        FailurePolicy::Abort => return Err(e),
                        FailurePolicy::Continue => {
                            debug!(index, code = e.code(), "batch item failed; continuing");
                            outputs.push(Output::Failure(FailureRecord::from(&e)));
                        }
                    }
                }
            }
        }
        Ok(outputs)
    }
}
