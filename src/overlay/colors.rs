//! Overlay color theme.

use ratatui::style::Color;

/// Color the toast fades from (assumed terminal background)
pub const BACKDROP: Color = Color::Rgb(15, 23, 42); // Slate 900
/// Toast bubble background at full opacity
pub const TOAST_BACKGROUND: Color = Color::Rgb(51, 65, 85); // Slate 700
/// Toast text
pub const TOAST_TEXT: Color = Color::Rgb(241, 245, 249);
/// Toast border
pub const TOAST_BORDER: Color = Color::Rgb(129, 140, 248); // Light indigo
/// Toast icon
pub const TOAST_ICON: Color = Color::Rgb(52, 211, 153); // Bright emerald
/// Drop shadow under the toast
pub const SHADOW: Color = Color::Rgb(2, 6, 23);
/// Alert border and title
pub const ALERT_BORDER: Color = Color::Rgb(56, 189, 248); // Bright cyan
/// Alert message text
pub const ALERT_TEXT: Color = Color::White;
/// Dismiss button background
pub const BUTTON: Color = Color::Rgb(244, 114, 182); // Bright pink
/// Dismiss button label
pub const BUTTON_TEXT: Color = Color::Black;

/// Linear blend from `from` to `to`. `t` is clamped to `0.0..=1.0`.
///
/// Non-RGB colors cannot be mixed, so they switch over at the halfway point.
pub fn blend(from: Color, to: Color, t: f64) -> Color {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| -> u8 {
                (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}
