use std::io;
use std::process::{Command, Stdio};
use std::sync::Arc;

use tracing::{debug, trace};

use super::parse::parse_action_id;
use super::spec::CommandTable;
use super::types::{ActionId, CommandSpec, ExecutionOutcome};

/// What a finished child process reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessExit {
    pub success: bool,
    pub code: Option<i32>,
    pub stderr: String,
}

/// Runs a [`CommandSpec`] to completion.
///
/// An `Err` means the program could not be started at all.
pub trait ProcessRunner: Send + Sync {
    fn run(&self, spec: &CommandSpec) -> io::Result<ProcessExit>;
}

/// Spawns real child processes. stdin is closed and output is captured so the
/// child cannot draw over the terminal UI.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> io::Result<ProcessExit> {
        let output = Command::new(&spec.program)
            .args(&spec.args)
            .stdin(Stdio::null())
            .output()?;
        Ok(ProcessExit {
            success: output.status.success(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// Turns an [`ActionId`] into exactly one blocking child process and
/// classifies how it ended.
#[derive(Clone)]
pub struct CommandDispatcher {
    table: Arc<CommandTable>,
    runner: Arc<dyn ProcessRunner>,
}

impl CommandDispatcher {
    pub fn new(table: Arc<CommandTable>) -> Self {
        Self::with_runner(table, Arc::new(SystemRunner))
    }

    pub fn with_runner(table: Arc<CommandTable>, runner: Arc<dyn ProcessRunner>) -> Self {
        Self { table, runner }
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// Returns `None` when `action` has no entry in the table; nothing is
    /// spawned in that case.
    pub fn dispatch(&self, action: ActionId) -> Option<ExecutionOutcome> {
        let Some(spec) = self.table.get(action) else {
            trace!(%action, "no command mapped, ignoring");
            return None;
        };

        debug!(%action, command = %spec, "dispatching");
        let outcome = match self.runner.run(spec) {
            Err(err) => {
                debug!(program = %spec.program, error = %err, "failed to start command");
                ExecutionOutcome::ToolMissing {
                    program: spec.program.clone(),
                }
            }
            Ok(exit) if exit.success => ExecutionOutcome::Ok,
            Ok(exit) => ExecutionOutcome::ToolFailed {
                exit_code: exit.code,
                message: failure_message(spec, &exit),
            },
        };
        Some(outcome)
    }

    /// Like [`Self::dispatch`], for textual ids. Unknown ids are a no-op.
    pub fn dispatch_str(&self, id: &str) -> Option<ExecutionOutcome> {
        match parse_action_id(id) {
            Some(action) => self.dispatch(action),
            None => {
                debug!(id, "unknown action id, ignoring");
                None
            }
        }
    }
}

fn failure_message(spec: &CommandSpec, exit: &ProcessExit) -> String {
    let status = match exit.code {
        Some(code) => format!("exit status {code}"),
        None => "a signal".to_string(),
    };
    if exit.stderr.is_empty() {
        format!("error executing command: {spec} (terminated by {status})")
    } else {
        format!(
            "error executing command: {spec} (terminated by {status}): {}",
            exit.stderr
        )
    }
}
