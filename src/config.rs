//! Toast configuration.

use std::fmt;
use std::time::Duration;

use clap::ValueEnum;

use crate::constants::defaults;

/// Vertical anchor for the toast bubble.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ToastPosition {
    /// Just below the top safe-area inset.
    #[default]
    Top,
    /// Vertical center of the screen.
    Middle,
    /// Just above the bottom safe-area inset.
    Bottom,
}

impl ToastPosition {
    /// Returns the next position in top -> middle -> bottom order, wrapping.
    pub fn next(self) -> Self {
        match self {
            ToastPosition::Top => ToastPosition::Middle,
            ToastPosition::Middle => ToastPosition::Bottom,
            ToastPosition::Bottom => ToastPosition::Top,
        }
    }
}

impl fmt::Display for ToastPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ToastPosition::Top => "top",
            ToastPosition::Middle => "middle",
            ToastPosition::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// Settings applied to every subsequent `show` call.
///
/// Values are stored as given. Opacity outside `0.0..=1.0` is clamped only
/// when it is turned into a color, and a negative shadow radius draws no
/// shadow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastConfig {
    /// Auto-dismiss delay used when `show` gets no override.
    pub duration: Duration,
    /// Toast background opacity.
    pub opacity: f64,
    /// Toast shadow radius.
    pub shadow_radius: f64,
    /// Vertical anchor.
    pub position: ToastPosition,
}

impl ToastConfig {
    /// Creates a configuration from the four settings.
    pub fn new(duration: Duration, opacity: f64, shadow_radius: f64, position: ToastPosition) -> Self {
        Self {
            duration,
            opacity,
            shadow_radius,
            position,
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs_f64(defaults::DURATION_SECS),
            opacity: defaults::OPACITY,
            shadow_radius: defaults::SHADOW_RADIUS,
            position: ToastPosition::default(),
        }
    }
}

/// Converts a seconds value from user input into a `Duration`.
///
/// Negative, NaN and infinite values become zero, which dismisses on the
/// next tick.
pub fn duration_from_secs(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
}
