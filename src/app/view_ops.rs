use ratatui::Frame;

use crate::error::AppResult;
use crate::ui;

use super::core::App;
use super::terminal_session::TerminalSurface;

impl App {
    pub(crate) fn render_frame(&self, session: &mut impl TerminalSurface) -> AppResult<()> {
        session.draw(|frame| self.draw(frame))?;
        Ok(())
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        let layout = ui::split_layout(frame.area());
        ui::draw_header(frame, layout.header, self.panel.variant());

        let cells = ui::button_cells(layout.grid, &self.panel);
        ui::draw_grid(frame, &cells, self.state.selected);

        ui::draw_footer(frame, layout.footer, &self.state);
    }
}
