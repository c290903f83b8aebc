use tracing::{debug, info, warn};

use crate::command::{ActionId, ExecutionOutcome};
use crate::event::DispatchReport;

use super::core::App;
use super::state::StatusState;
use super::worker::DispatchWorker;

impl App {
    /// Hands `action` to the worker. Returns `false`, touching nothing, when
    /// the action has no command on this panel.
    pub(crate) fn begin_dispatch(&mut self, action: ActionId, worker: &DispatchWorker) -> bool {
        let Some(spec) = self.dispatcher.table().get(action) else {
            debug!(%action, "no command for action on this panel, ignoring");
            return false;
        };

        self.state.running += 1;
        self.state.status = StatusState::info(action, format!("running: {spec}"));
        worker.submit(action);
        true
    }

    /// Records a finished dispatch. Returns `true` when the user should hear
    /// the bell.
    pub(crate) fn finish_dispatch(&mut self, report: DispatchReport) -> bool {
        self.state.running = self.state.running.saturating_sub(1);
        let action = report.action;
        let Some(outcome) = report.outcome else {
            return false;
        };

        match outcome {
            ExecutionOutcome::Ok => {
                let command = self
                    .dispatcher
                    .table()
                    .get(action)
                    .map(ToString::to_string)
                    .unwrap_or_else(|| action.to_string());
                info!(%action, elapsed_ms = report.elapsed.as_millis() as u64, "command succeeded");
                self.state.status = StatusState::info(action, format!("ok: {command}"));
                false
            }
            ExecutionOutcome::ToolMissing { program } => {
                warn!(%action, %program, "command not found");
                self.state.status = StatusState::error(
                    action,
                    format!("Command '{program}' not found. Is it installed?"),
                );
                true
            }
            ExecutionOutcome::ToolFailed { exit_code, message } => {
                warn!(%action, ?exit_code, %message, "command failed");
                self.state.status = StatusState::error(action, message);
                true
            }
        }
    }
}
