use crate::command::ActionId;
use crate::panel::Direction;

/// What a key press or click asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveSelection(Direction),
    PressSelected,
    /// Press a specific control, whether or not it is selected.
    Trigger(ActionId),
    Quit,
}
