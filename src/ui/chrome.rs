use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, StatusLevel};
use crate::panel::Variant;

const KEY_HINTS: &str = "arrows/hjkl move | enter press | p , . m - + f hotkeys | q quit";

pub fn draw_header(frame: &mut Frame<'_>, area: Rect, variant: Variant) {
    let title = Line::from(vec![
        Span::styled(" rctl ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("| remote control | panel: "),
        Span::styled(variant.id(), Style::default().fg(Color::Cyan)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

pub fn draw_footer(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    if area.height == 0 {
        return;
    }
    let [status_row, hints_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    frame.render_widget(Paragraph::new(status_line(state)), status_row);
    frame.render_widget(
        Paragraph::new(KEY_HINTS).style(Style::default().fg(Color::DarkGray)),
        hints_row,
    );
}

fn status_line(state: &AppState) -> Line<'static> {
    let mut spans = Vec::new();
    if state.running > 0 {
        spans.push(Span::styled(
            format!(" [{} running] ", state.running),
            Style::default().fg(Color::Yellow),
        ));
    }

    let message = if state.status.message.is_empty() {
        "ready".to_string()
    } else {
        state.status.message.clone()
    };
    let style = match state.status.level {
        StatusLevel::Info => Style::default(),
        StatusLevel::Error => Style::default().fg(Color::Red),
    };
    spans.push(Span::styled(format!(" {message}"), style));
    Line::from(spans)
}
