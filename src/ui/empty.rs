//! Empty state rendering.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use super::colors;

/// Draws an empty state with title and hint inside `block`.
pub fn draw_empty_state(area: Rect, buf: &mut Buffer, block: Block, title: &str, action: &str) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default().fg(colors::PRIMARY).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(action, Style::default().fg(colors::MUTED))),
    ];

    Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center)
        .render(area, buf);
}
