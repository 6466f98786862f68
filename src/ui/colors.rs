//! Palette for the track library host screen.

use ratatui::style::Color;

/// Brand text, panel titles and the help border.
pub const PRIMARY: Color = Color::Rgb(56, 189, 248);
/// Counts and header values.
pub const SECONDARY: Color = Color::Rgb(52, 211, 153);
pub const SELECTION: Color = Color::Rgb(99, 102, 241);
pub const SELECTION_TEXT: Color = Color::White;
/// Labels, hints and unselected rows.
pub const MUTED: Color = Color::Rgb(148, 163, 184);
/// Panel borders and the commands bar separators.
pub const BORDER: Color = Color::Rgb(129, 140, 248);
/// Key names.
pub const KEY: Color = Color::Rgb(244, 114, 182);
/// Row numbers and the header glyph.
pub const ACCENT: Color = Color::Rgb(192, 132, 252);
