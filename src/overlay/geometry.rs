//! Screen geometry and toast placement.

use ratatui::layout::Rect;

use crate::config::ToastPosition;
use crate::constants::layout;

/// Rows at the top and bottom of the screen that host chrome (headers,
/// command bars) keeps for itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SafeArea {
    pub top: u16,
    pub bottom: u16,
}

impl SafeArea {
    pub fn new(top: u16, bottom: u16) -> Self {
        Self { top, bottom }
    }
}

/// Screen bounds and safe-area insets, captured once per overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub screen: Rect,
    pub safe_area: SafeArea,
}

impl Geometry {
    pub fn new(screen: Rect, safe_area: SafeArea) -> Self {
        Self { screen, safe_area }
    }

    /// Vertical offset of the toast centre from the screen centre, in rows.
    pub fn y_offset(&self, position: ToastPosition) -> i32 {
        let half_height = i32::from(self.screen.height) / 2;
        match position {
            ToastPosition::Top => -half_height + i32::from(self.safe_area.top) + layout::TOAST_MARGIN,
            ToastPosition::Middle => 0,
            ToastPosition::Bottom => {
                half_height - i32::from(self.safe_area.bottom) - layout::TOAST_MARGIN
            }
        }
    }

    /// Rect for a toast of `width` x `height`, centred horizontally and
    /// placed per `position`, kept inside the screen.
    pub fn toast_rect(&self, position: ToastPosition, width: u16, height: u16) -> Rect {
        let screen = self.screen;
        let width = width.min(screen.width);
        let height = height.min(screen.height);

        let center_y = i32::from(screen.y) + i32::from(screen.height) / 2 + self.y_offset(position);
        let top = center_y - i32::from(height) / 2;
        let max_top = i32::from(screen.bottom()) - i32::from(height);
        let top = top.clamp(i32::from(screen.y), max_top.max(i32::from(screen.y)));

        let x = screen.x + (screen.width - width) / 2;
        // Clamped into the screen's u16 range above.
        let y = u16::try_from(top).unwrap_or(screen.y);

        Rect::new(x, y, width, height)
    }
}
