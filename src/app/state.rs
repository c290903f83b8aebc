use crate::command::ActionId;
use crate::panel::Panel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusLevel {
    #[default]
    Info,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusState {
    pub message: String,
    pub level: StatusLevel,
    pub last_action_id: Option<ActionId>,
}

impl StatusState {
    pub fn info(action: ActionId, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Info,
            last_action_id: Some(action),
        }
    }

    pub fn error(action: ActionId, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Error,
            last_action_id: Some(action),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// `(row, col)` of the highlighted button.
    pub selected: (usize, usize),
    /// Commands spawned but not yet finished.
    pub running: usize,
    pub status: StatusState,
}

impl AppState {
    pub fn new(panel: &Panel) -> Self {
        Self {
            selected: panel.initial_selection(),
            running: 0,
            status: StatusState::default(),
        }
    }
}
