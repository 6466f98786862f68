//! Modal alert rendering.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Widget, Wrap},
};

use crate::constants::layout;
use crate::state::AlertState;

use super::colors;
use super::utils::centered_rect;

/// Rows used by the border and the two blank spacer lines.
const CHROME_HEIGHT: u16 = 2 + 2;

/// The modal alert dialog.
pub struct AlertDialog<'a> {
    alert: &'a AlertState,
}

impl<'a> AlertDialog<'a> {
    pub fn new(alert: &'a AlertState) -> Self {
        Self { alert }
    }

    /// Dialog rect for `screen`, tall enough for the wrapped message.
    pub fn area(&self, screen: Rect) -> Rect {
        let width = (u32::from(screen.width) * u32::from(layout::ALERT_WIDTH) / 100) as u16;
        let width = width.max(layout::ALERT_MIN_WIDTH).min(screen.width);
        let inner_width = width.saturating_sub(4);
        let height = wrapped_height(&self.alert.message, inner_width)
            .saturating_add(1)
            .saturating_add(CHROME_HEIGHT);
        centered_rect(width, height, screen)
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, screen: Rect, buf: &mut Buffer) {
        let area = self.area(screen);

        // Clear the background
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::ALERT_BORDER))
            .border_set(symbols::border::DOUBLE)
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    self.alert.title.as_str(),
                    Style::default().fg(colors::ALERT_BORDER).bold(),
                ),
                Span::raw(" "),
            ]))
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));

        let mut content = vec![Line::from("")];
        content.extend(
            self.alert
                .message
                .split('\n')
                .map(|line| Line::from(Span::styled(line, Style::default().fg(colors::ALERT_TEXT)))),
        );
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            format!(" {} ", self.alert.dismiss_button_text),
            Style::default()
                .fg(colors::BUTTON_TEXT)
                .bg(colors::BUTTON)
                .bold(),
        )));

        Paragraph::new(content)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

/// Rows `text` occupies when wrapped to `width` columns.
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .split('\n')
        .map(|line| Span::raw(line).width().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}
