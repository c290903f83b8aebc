use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::App;
use crate::app::terminal_session::TerminalSurface;
use crate::command::ActionId;
use crate::error::AppResult;
use crate::ui;

use super::keymap::map_key_to_intent;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct InputEventOutcome {
    pub(crate) quit_requested: bool,
    pub(crate) press: Option<ActionId>,
    pub(crate) redraw: bool,
}

impl App {
    pub(crate) fn handle_input_event(
        &mut self,
        event: Event,
        session: &impl TerminalSurface,
    ) -> AppResult<InputEventOutcome> {
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                Ok(map_key_to_intent(key)
                    .map(|intent| self.apply_intent(intent))
                    .unwrap_or_default())
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let area = Rect::from(session.size()?);
                Ok(self.handle_click(area, mouse.column, mouse.row))
            }
            Event::Resize(_, _) => Ok(InputEventOutcome {
                redraw: true,
                ..InputEventOutcome::default()
            }),
            _ => Ok(InputEventOutcome::default()),
        }
    }

    pub(crate) fn handle_click(&mut self, area: Rect, column: u16, row: u16) -> InputEventOutcome {
        let layout = ui::split_layout(area);
        let cells = ui::button_cells(layout.grid, &self.panel);
        let Some(cell) = ui::button_at(&cells, column, row) else {
            return InputEventOutcome::default();
        };

        self.state.selected = (cell.row, cell.col);
        InputEventOutcome {
            quit_requested: false,
            press: Some(cell.action),
            redraw: true,
        }
    }
}
