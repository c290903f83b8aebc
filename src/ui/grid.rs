use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::layout::ButtonCell;

pub fn draw_grid(frame: &mut Frame<'_>, cells: &[ButtonCell], selected: (usize, usize)) {
    for cell in cells {
        let is_selected = (cell.row, cell.col) == selected;
        draw_button(frame, cell, is_selected);
    }
}

fn draw_button(frame: &mut Frame<'_>, cell: &ButtonCell, is_selected: bool) {
    if cell.area.is_empty() {
        return;
    }

    let (border_style, label_style) = if is_selected {
        (
            Style::default().fg(Color::Yellow),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default().fg(Color::DarkGray), Style::default())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(cell.area);
    frame.render_widget(block, cell.area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let label = fit_label(cell.action.label(), inner.width as usize);
    let label_row = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1) / 2,
        inner.width,
        1,
    );
    frame.render_widget(
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(label_style),
        label_row,
    );
}

/// Truncates `label` to `width` display columns, marking the cut with `…`.
pub(crate) fn fit_label(label: &str, width: usize) -> String {
    if label.width() <= width {
        return label.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut fitted = String::new();
    for ch in label.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        fitted.push(ch);
        used += ch_width;
    }
    fitted.push('…');
    fitted
}
