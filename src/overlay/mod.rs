//! Toast and alert overlay.
//!
//! [`attach_overlay`] wraps any widget so that the alert dialog and the toast
//! bubble are drawn above it. The host renders the result as a stateful
//! widget; the state caches the screen geometry captured on first render.
//!
//! The toast is only drawn, never focused: the host keeps routing input to
//! its own content while a toast is up. The alert is modal, so while
//! [`crate::AlertState::display`] is set the host sends key presses to
//! [`TopLevel::dismiss_alert`] instead.

mod alert;
pub mod colors;
mod geometry;
mod icons;
mod toast;
mod utils;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
};
use tokio::time::Instant;

use crate::controller::TopLevel;

pub use alert::AlertDialog;
pub use geometry::{Geometry, SafeArea};
pub use icons::glyph;
pub use toast::ToastBubble;

/// Geometry cache kept by the host between frames.
#[derive(Debug, Default)]
pub struct OverlayState {
    geometry: Option<Geometry>,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Geometry captured on the first render, if any.
    pub fn geometry(&self) -> Option<Geometry> {
        self.geometry
    }

    /// Forgets the cached geometry so the next render captures it again.
    pub fn invalidate_geometry(&mut self) {
        self.geometry = None;
    }

    fn capture(&mut self, screen: Rect, safe_area: SafeArea) -> Geometry {
        *self
            .geometry
            .get_or_insert_with(|| Geometry::new(screen, safe_area))
    }
}

/// Host content decorated with the toast and alert layers.
pub struct Overlay<'a, W> {
    content: W,
    top_level: &'a TopLevel,
    safe_area: SafeArea,
    now: Option<Instant>,
}

/// Wraps `content` with the overlay driven by `top_level`.
pub fn attach_overlay<W: Widget>(content: W, top_level: &TopLevel) -> Overlay<'_, W> {
    Overlay {
        content,
        top_level,
        safe_area: SafeArea::default(),
        now: None,
    }
}

impl<W> Overlay<'_, W> {
    /// Rows at the screen edges the toast must stay clear of.
    pub fn safe_area(mut self, safe_area: SafeArea) -> Self {
        self.safe_area = safe_area;
        self
    }

    /// Renders the transition as of `now` instead of the current instant.
    pub fn at(mut self, now: Instant) -> Self {
        self.now = Some(now);
        self
    }
}

impl<W: Widget> StatefulWidget for Overlay<'_, W> {
    type State = OverlayState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        self.content.render(area, buf);

        let geometry = state.capture(area, self.safe_area);
        let top_level = self.top_level;

        if top_level.alert().display {
            AlertDialog::new(top_level.alert()).render(area, buf);
        }

        let now = self.now.unwrap_or_else(Instant::now);
        let visibility = top_level.toast_visibility(now);
        if visibility > 0.0 {
            ToastBubble::new(top_level.toast(), top_level.config(), visibility)
                .render(&geometry, area, buf);
        }
    }
}
