//! Session state: the vault document plus the current input item.

use vault_engine::{Document, DocumentSlot, VaultConfig};
use vault_executor::{Command, Executor, FailurePolicy, Invocation, Output, Result, Value};

/// One CLI session. The document lives as long as the process.
pub struct SessionState {
    executor: Executor,
    slot: DocumentSlot,
    input: Option<Value>,
}

impl SessionState {
    pub fn new(config: VaultConfig, document: Option<Document>) -> Self {
        let slot = match document {
            Some(document) => DocumentSlot::with_document(document),
            None => DocumentSlot::new(),
        };
        Self {
            executor: Executor::new(config),
            slot,
            input: None,
        }
    }

    /// Execute a command against the session document.
    pub fn execute(&mut self, command: Command) -> Result<Output> {
        self.executor
            .execute(&mut self.slot, command, self.input.as_ref())
    }

    /// Execute a batch; invocations without their own input use the
    /// session's current input item.
    pub fn execute_batch(
        &mut self,
        invocations: Vec<Invocation>,
        policy: FailurePolicy,
    ) -> Result<Vec<Output>> {
        let fallback = self.input.clone();
        let invocations = invocations.into_iter().map(|mut inv| {
            if inv.input.is_none() {
                inv.input = fallback.clone();
            }
            inv
        });
        self.executor
            .execute_batch(&mut self.slot, invocations, policy)
    }

    pub fn set_input(&mut self, value: Value) {
        self.input = Some(value);
    }
}
