//! Help overlay rendering.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::colors;

/// Help popup width percentage.
const HELP_WIDTH: u16 = 60;
/// Help popup height percentage.
const HELP_HEIGHT: u16 = 70;

/// Draws a help overlay popup.
pub fn draw_help_overlay(area: Rect, buf: &mut Buffer) {
    let area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);

    // Clear the background
    Clear.render(area, buf);

    Paragraph::new(get_help_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::PRIMARY))
                .border_set(symbols::border::DOUBLE)
                .title(Line::from(vec![
                    Span::styled(" Help ", Style::default().fg(Color::White).bold()),
                    Span::styled(
                        "- Press any key to close ",
                        Style::default().fg(colors::MUTED),
                    ),
                ])),
        )
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

/// Helper function to create a centered rectangle from percentages.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);

    center
}

fn key_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::raw("    "),
        Span::styled(format!("{key:<8}"), Style::default().fg(colors::KEY).bold()),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

fn section_line(title: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(title, Style::default().fg(colors::PRIMARY).bold()),
    ])
}

/// Returns the help text content.
fn get_help_text() -> Text<'static> {
    Text::from(vec![
        Line::from(""),
        section_line("NAVIGATION"),
        key_line("j / ↓", "Next track"),
        key_line("k / ↑", "Previous track"),
        key_line("g / G", "First / last track"),
        Line::from(""),
        section_line("TOASTS"),
        key_line("Enter", "Add the selected track to the queue"),
        key_line("l", "Like the selected track (3s toast)"),
        key_line("d", "Remove the last queued track"),
        key_line("p", "Move toasts: top, middle, bottom"),
        key_line("+ / -", "Change the default toast duration"),
        Line::from(""),
        section_line("ALERTS"),
        key_line("a", "Show the about alert"),
        key_line("Enter", "Dismiss an open alert (also Esc, Space)"),
        Line::from(""),
        section_line("GENERAL"),
        key_line("?", "Toggle this help"),
        key_line("q", "Quit"),
    ])
}
