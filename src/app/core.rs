use std::sync::Arc;

use crate::command::{CommandDispatcher, CommandTable};
use crate::config::Config;
use crate::panel::Panel;

use super::state::AppState;

pub struct App {
    pub state: AppState,
    pub panel: Panel,
    pub dispatcher: CommandDispatcher,
    pub config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        let table = Arc::new(CommandTable::for_variant(config.variant));
        Self::with_dispatcher(config, CommandDispatcher::new(table))
    }

    pub fn with_dispatcher(config: Config, dispatcher: CommandDispatcher) -> Self {
        let panel = Panel::for_variant(config.variant);
        Self {
            state: AppState::new(&panel),
            panel,
            dispatcher,
            config,
        }
    }
}
