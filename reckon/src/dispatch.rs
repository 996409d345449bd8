//! Command dispatch
//!
//! The dispatcher owns the registry and the session history. Every command
//! that reaches `execute` produces exactly one history entry, whether it
//! succeeds or fails; the error taxonomy travels back as an `Outcome`.

use crate::{Command, HistoryEntry, HistoryLog};
use reckon_core::{CalcError, Outcome};
use reckon_plugin::OperationRegistry;
use tracing::debug;

pub struct Dispatcher {
    registry: OperationRegistry,
    history: HistoryLog,
}

impl Dispatcher {
    /// The registry is built and validated by the caller (plugin loading
    /// happens before the dispatcher exists).
    pub fn new(registry: OperationRegistry) -> Self {
        Self { registry, history: HistoryLog::new() }
    }

    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryLog {
        &mut self.history
    }

    /// Resolve, arity-check, and invoke the command's operation.
    ///
    /// Appends one history entry per call. Unknown operations are recorded
    /// too: anything that reached the dispatcher counts as an attempt.
    pub fn execute(&mut self, command: Command) -> Outcome {
        let outcome = self.evaluate(&command);
        debug!(
            operation = %command.operation,
            operands = command.operands.len(),
            ok = !outcome.is_error(),
            "dispatched"
        );
        self.history.append(HistoryEntry::now(command, outcome.clone()));
        outcome
    }

    fn evaluate(&self, command: &Command) -> Outcome {
        let operation = match self.registry.resolve(&command.operation) {
            Ok(operation) => operation,
            Err(e) => return Outcome::Error(e),
        };

        let meta = operation.meta();
        if !meta.arity.accepts(command.operands.len()) {
            return Outcome::Error(CalcError::arity(
                meta.name,
                meta.arity,
                command.operands.len(),
            ));
        }

        match operation.apply(&command.operands) {
            Ok(value) => Outcome::Value(value),
            Err(cause) => Outcome::Error(CalcError::execution(meta.name, cause)),
        }
    }
}
