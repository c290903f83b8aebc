use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::command::ActionId;
use crate::panel::Panel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    pub header: Rect,
    pub grid: Rect,
    pub footer: Rect,
}

/// One button's place on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonCell {
    pub row: usize,
    pub col: usize,
    pub action: ActionId,
    pub area: Rect,
}

pub fn split_layout(area: Rect) -> UiLayout {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(2),
    ])
    .split(area);

    UiLayout {
        header: chunks[0],
        grid: chunks[1],
        footer: chunks[2],
    }
}

/// Rows share the grid height evenly; buttons share their row's width evenly
/// with a one-column gap between them.
pub fn button_cells(grid: Rect, panel: &Panel) -> Vec<ButtonCell> {
    let rows = panel.rows();
    if rows.is_empty() || grid.is_empty() {
        return Vec::new();
    }

    let row_areas = Layout::vertical(rows.iter().map(|_| Constraint::Fill(1))).split(grid);
    let mut cells = Vec::with_capacity(panel.actions().count());
    for (row, (buttons, row_area)) in rows.iter().zip(row_areas.iter()).enumerate() {
        let col_areas = Layout::horizontal(buttons.iter().map(|_| Constraint::Fill(1)))
            .spacing(1)
            .split(*row_area);
        for (col, (action, area)) in buttons.iter().zip(col_areas.iter()).enumerate() {
            cells.push(ButtonCell {
                row,
                col,
                action: *action,
                area: *area,
            });
        }
    }
    cells
}

pub fn button_at(cells: &[ButtonCell], column: u16, row: u16) -> Option<&ButtonCell> {
    let position = Position::new(column, row);
    cells
        .iter()
        .find(|cell| !cell.area.is_empty() && cell.area.contains(position))
}
