//! Toast bubble rendering.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Widget},
};

use crate::config::ToastConfig;
use crate::constants::layout;
use crate::state::ToastState;

use super::colors;
use super::geometry::Geometry;
use super::icons;

/// A pill-shaped toast bubble at a given eased visibility.
pub struct ToastBubble<'a> {
    toast: &'a ToastState,
    config: &'a ToastConfig,
    visibility: f64,
}

impl<'a> ToastBubble<'a> {
    pub fn new(toast: &'a ToastState, config: &'a ToastConfig, visibility: f64) -> Self {
        Self {
            toast,
            config,
            visibility,
        }
    }

    fn content(&self) -> Line<'a> {
        let text_color = colors::blend(colors::BACKDROP, colors::TOAST_TEXT, self.visibility);
        let icon_color = colors::blend(colors::BACKDROP, colors::TOAST_ICON, self.visibility);
        Line::from(vec![
            Span::styled(icons::glyph(&self.toast.image), Style::default().fg(icon_color)),
            Span::raw(" "),
            Span::styled(self.toast.text.as_str(), Style::default().fg(text_color).bold()),
        ])
    }

    /// Bubble rect inside the cached screen geometry.
    pub fn area(&self, geometry: &Geometry) -> Rect {
        let content_width = u16::try_from(self.content().width()).unwrap_or(u16::MAX);
        let width = content_width
            .saturating_add(2 * layout::TOAST_PADDING)
            .saturating_add(2);
        geometry.toast_rect(self.config.position, width, layout::TOAST_HEIGHT)
    }

    /// Draws the shadow and the bubble into `buf`, clipped to `bounds`.
    ///
    /// `geometry` may be older than `bounds` when the screen has shrunk
    /// since it was captured; nothing is drawn outside `bounds`.
    pub fn render(self, geometry: &Geometry, bounds: Rect, buf: &mut Buffer) {
        if self.visibility <= 0.0 {
            return;
        }

        let bounds = bounds.intersection(buf.area);
        let placed = self.area(geometry);
        let area = placed.intersection(bounds);
        if area.is_empty() {
            return;
        }

        let cells = shadow_cells(self.config.shadow_radius);
        if cells > 0 {
            let shadow = Rect::new(
                placed.x.saturating_add(cells),
                placed.y.saturating_add(cells),
                placed.width,
                placed.height,
            )
            .intersection(geometry.screen)
            .intersection(bounds);
            let color = colors::blend(colors::BACKDROP, colors::SHADOW, self.visibility);
            buf.set_style(shadow, Style::default().bg(color));
        }

        let alpha = self.config.opacity.clamp(0.0, 1.0) * self.visibility;
        let background = colors::blend(colors::BACKDROP, colors::TOAST_BACKGROUND, alpha);
        let border = colors::blend(colors::BACKDROP, colors::TOAST_BORDER, self.visibility);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .border_style(Style::default().fg(border))
            .padding(Padding::horizontal(layout::TOAST_PADDING))
            .style(Style::default().bg(background));

        let content = self.content();
        Clear.render(area, buf);
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

/// Number of cells the shadow extends right and down for a radius.
pub fn shadow_cells(radius: f64) -> u16 {
    if radius.is_nan() || radius <= 0.0 {
        return 0;
    }
    let cells = (radius / layout::SHADOW_RADIUS_PER_CELL).round();
    (cells as u16).min(layout::MAX_SHADOW_CELLS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToastPosition;
    use crate::overlay::geometry::SafeArea;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
    }

    fn render(toast: &ToastState, config: &ToastConfig, visibility: f64) -> (Buffer, Rect) {
        let screen = Rect::new(0, 0, 40, 12);
        let geometry = Geometry::new(screen, SafeArea::new(1, 1));
        let mut buf = Buffer::empty(screen);
        let bubble = ToastBubble::new(toast, config, visibility);
        let area = bubble.area(&geometry);
        bubble.render(&geometry, screen, &mut buf);
        (buf, area)
    }

    fn toast(image: &str, text: &str) -> ToastState {
        ToastState {
            display: true,
            image: image.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_shadow_cells() {
        assert_eq!(shadow_cells(0.0), 0);
        assert_eq!(shadow_cells(-3.0), 0);
        assert_eq!(shadow_cells(f64::NAN), 0);
        assert_eq!(shadow_cells(5.0), 1);
        assert_eq!(shadow_cells(10.0), 2);
        assert_eq!(shadow_cells(100.0), 2);
    }

    #[test]
    fn test_bubble_shows_icon_and_text() {
        let (buf, area) = render(&toast("checkmark", "Saved"), &ToastConfig::default(), 1.0);
        let line = row_text(&buf, area.y + 1);
        assert!(line.contains("✔ Saved"), "row was {line:?}");
        assert_eq!(buf[(area.x, area.y)].symbol(), "╭");
    }

    #[test]
    fn test_bubble_width_fits_content() {
        let (_, area) = render(&toast("checkmark", "Saved"), &ToastConfig::default(), 1.0);
        // glyph + space + text, padding, border
        assert_eq!(area.width, 7 + 2 + 2);
    }

    #[test]
    fn test_invisible_bubble_draws_nothing() {
        let (buf, _) = render(&toast("checkmark", "Saved"), &ToastConfig::default(), 0.0);
        assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 40, 12)));
    }

    #[test]
    fn test_opacity_blends_background() {
        let mut config = ToastConfig::default();
        config.opacity = 1.0;
        let (opaque, area) = render(&toast("a", "b"), &config, 1.0);
        assert_eq!(opaque[(area.x + 1, area.y + 1)].bg, colors::TOAST_BACKGROUND);

        config.opacity = 0.0;
        let (clear, area) = render(&toast("a", "b"), &config, 1.0);
        assert_eq!(clear[(area.x + 1, area.y + 1)].bg, colors::BACKDROP);
    }

    #[test]
    fn test_shadow_drawn_outside_bubble() {
        let config = ToastConfig::default();
        let (buf, area) = render(&toast("a", "hello"), &config, 1.0);
        let corner = &buf[(area.right(), area.bottom())];
        assert_eq!(corner.bg, colors::SHADOW);

        let mut flat = config;
        flat.shadow_radius = 0.0;
        let (buf, area) = render(&toast("a", "hello"), &flat, 1.0);
        assert_ne!(buf[(area.right(), area.bottom())].bg, colors::SHADOW);
    }

    #[test]
    fn test_stale_geometry_is_clipped_to_bounds() {
        let geometry = Geometry::new(Rect::new(0, 0, 80, 30), SafeArea::new(3, 3));
        let mut config = ToastConfig::default();
        config.position = ToastPosition::Bottom;
        let toast = toast("checkmark", "Saved");

        let shrunk = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(shrunk);
        ToastBubble::new(&toast, &config, 1.0).render(&geometry, shrunk, &mut buf);
        assert_eq!(buf, Buffer::empty(shrunk));

        // Partly inside: the visible part is drawn, the rest is dropped.
        let cut = Rect::new(0, 0, 80, 26);
        let mut buf = Buffer::empty(cut);
        ToastBubble::new(&toast, &config, 1.0).render(&geometry, cut, &mut buf);
        let placed = ToastBubble::new(&toast, &config, 1.0).area(&geometry);
        assert!(placed.bottom() > 26);
        assert_eq!(buf[(placed.x, placed.y)].symbol(), "╭");
    }

    #[test]
    fn test_position_moves_bubble() {
        let mut config = ToastConfig::default();
        let (_, top) = render(&toast("a", "b"), &config, 1.0);
        config.position = ToastPosition::Bottom;
        let (_, bottom) = render(&toast("a", "b"), &config, 1.0);
        assert!(top.y < bottom.y);
    }
}
