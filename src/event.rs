use std::time::Duration;

use crossterm::event::Event;

use crate::command::{ActionId, ExecutionOutcome};

/// Result of one dispatch, delivered back to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    pub action: ActionId,
    /// `None` when the action had no command.
    pub outcome: Option<ExecutionOutcome>,
    pub elapsed: Duration,
}

#[derive(Debug)]
pub(crate) enum DomainEvent {
    Input(Event),
    InputError(String),
    DispatchComplete(DispatchReport),
}
