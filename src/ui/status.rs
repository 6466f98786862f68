//! Commands bar rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::colors;

/// Keys shown in the commands bar.
const COMMANDS: &[(&str, &str)] = &[
    ("j/k", "navigate"),
    ("Enter", "queue"),
    ("l", "like"),
    ("d", "dequeue"),
    ("p", "position"),
    ("+/-", "duration"),
    ("a", "about"),
    ("?", "help"),
    ("q", "quit"),
];

/// Draws the commands bar showing available actions.
pub fn draw_commands_bar(area: Rect, buf: &mut Buffer) {
    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default())];

    for (i, (key, desc)) in COMMANDS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors::BORDER)));
        }
        spans.push(Span::styled(*key, Style::default().fg(colors::KEY).bold()));
        spans.push(Span::styled(" ", Style::default()));
        spans.push(Span::styled(*desc, Style::default().fg(colors::MUTED)));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER));

    Paragraph::new(Line::from(spans)).block(block).render(area, buf);
}
