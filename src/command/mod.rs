mod dispatch;
mod parse;
mod spec;
mod types;

pub use dispatch::{CommandDispatcher, ProcessExit, ProcessRunner, SystemRunner};
pub use parse::parse_action_id;
pub use spec::{CommandTable, RegistryEntry, command_registry};
pub use types::{ActionId, CommandSpec, ExecutionOutcome};
