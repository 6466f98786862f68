//! Application-wide constants.
//!
//! Centralizes default configuration values and layout dimensions.

use std::time::Duration;

/// Event polling timeout - balances responsiveness with CPU usage.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Default toast configuration.
pub mod defaults {
    /// Toast auto-dismiss delay in seconds.
    pub const DURATION_SECS: f64 = 1.5;
    /// Toast background opacity (0.0 - 1.0).
    pub const OPACITY: f64 = 0.8;
    /// Toast shadow radius.
    pub const SHADOW_RADIUS: f64 = 5.0;
    /// Icon identifier shown before the first `show` call.
    pub const TOAST_IMAGE: &str = "text.append";
    /// Message shown before the first `show` call.
    pub const TOAST_TEXT: &str = "Added to queue";
}

/// Overlay geometry.
pub mod layout {
    use std::time::Duration;

    /// Rows between the toast and the safe-area edge it is anchored to.
    pub const TOAST_MARGIN: i32 = 2;
    /// Toast bubble height (border + one line of content).
    pub const TOAST_HEIGHT: u16 = 3;
    /// Horizontal padding inside the toast bubble, per side.
    pub const TOAST_PADDING: u16 = 1;
    /// Shadow radius units per shadow cell.
    pub const SHADOW_RADIUS_PER_CELL: f64 = 5.0;
    /// Largest shadow extent in cells.
    pub const MAX_SHADOW_CELLS: u16 = 2;
    /// Duration of the toast appear/disappear transition.
    pub const TRANSITION: Duration = Duration::from_millis(250);
    /// Alert dialog width percentage.
    pub const ALERT_WIDTH: u16 = 50;
    /// Alert dialog minimum width in columns.
    pub const ALERT_MIN_WIDTH: u16 = 30;
}

/// Demo host layout.
pub mod host {
    /// Header height (reported as the top safe-area inset).
    pub const HEADER_HEIGHT: u16 = 3;
    /// Commands bar height (reported as the bottom safe-area inset).
    pub const COMMANDS_BAR_HEIGHT: u16 = 3;
}
