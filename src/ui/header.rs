//! Header rendering with the current toast settings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::colors;
use super::HostView;

/// Draws the title and the active toast configuration.
pub fn draw_header(area: Rect, buf: &mut Buffer, view: &HostView) {
    let config = view.config;
    let label = Style::default().fg(colors::MUTED);
    let value = Style::default().fg(colors::SECONDARY).bold();

    let line = Line::from(vec![
        Span::styled(" ♫ ", Style::default().fg(colors::ACCENT)),
        Span::styled("TOPLEVEL", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled("::", label),
        Span::styled("DEMO", Style::default().fg(colors::KEY).bold()),
        Span::styled("   duration ", label),
        Span::styled(format!("{:.1}s", config.duration.as_secs_f64()), value),
        Span::styled("  opacity ", label),
        Span::styled(format!("{:.2}", config.opacity), value),
        Span::styled("  shadow ", label),
        Span::styled(format!("{:.1}", config.shadow_radius), value),
        Span::styled("  position ", label),
        Span::styled(config.position.to_string(), value),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .border_set(symbols::border::THICK);

    Paragraph::new(line).block(block).render(area, buf);
}
