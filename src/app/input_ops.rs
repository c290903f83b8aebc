use crate::input::Intent;
use crate::input::handler::InputEventOutcome;

use super::core::App;

impl App {
    pub(crate) fn apply_intent(&mut self, intent: Intent) -> InputEventOutcome {
        match intent {
            Intent::MoveSelection(direction) => {
                let next = self.panel.step(self.state.selected, direction);
                let moved = next != self.state.selected;
                self.state.selected = next;
                InputEventOutcome {
                    redraw: moved,
                    ..InputEventOutcome::default()
                }
            }
            Intent::PressSelected => InputEventOutcome {
                press: self.panel.action_at(self.state.selected),
                redraw: true,
                ..InputEventOutcome::default()
            },
            Intent::Trigger(action) => {
                if let Some(position) = self.panel.position_of(action) {
                    self.state.selected = position;
                }
                InputEventOutcome {
                    press: Some(action),
                    redraw: true,
                    ..InputEventOutcome::default()
                }
            }
            Intent::Quit => InputEventOutcome {
                quit_requested: true,
                ..InputEventOutcome::default()
            },
        }
    }
}
