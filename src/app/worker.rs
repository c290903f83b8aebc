use std::time::Instant;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::command::{ActionId, CommandDispatcher};
use crate::event::{DispatchReport, DomainEvent};

/// Runs dispatches on tokio's blocking pool so a slow tool never stalls the
/// event loop. Every submit spawns its own task; nothing is deduplicated.
pub(crate) struct DispatchWorker {
    dispatcher: CommandDispatcher,
    result_tx: UnboundedSender<DomainEvent>,
}

impl DispatchWorker {
    pub(crate) fn new(dispatcher: CommandDispatcher, result_tx: UnboundedSender<DomainEvent>) -> Self {
        Self {
            dispatcher,
            result_tx,
        }
    }

    pub(crate) fn submit(&self, action: ActionId) -> JoinHandle<()> {
        let dispatcher = self.dispatcher.clone();
        let result_tx = self.result_tx.clone();
        tokio::task::spawn_blocking(move || {
            let started = Instant::now();
            let outcome = dispatcher.dispatch(action);
            let report = DispatchReport {
                action,
                outcome,
                elapsed: started.elapsed(),
            };
            let _ = result_tx.send(DomainEvent::DispatchComplete(report));
        })
    }
}
