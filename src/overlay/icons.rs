//! Toast icon identifiers.
//!
//! Callers pass symbolic names such as `"checkmark"`. Names the table does
//! not know are drawn verbatim when short enough to be a glyph themselves,
//! otherwise as a bullet.

use ratatui::text::Span;

/// Glyph drawn for unknown icon names.
pub const FALLBACK_GLYPH: &str = "•";

const ICONS: &[(&str, &str)] = &[
    ("text.append", "≡"),
    ("checkmark", "✔"),
    ("checkmark.circle", "✔"),
    ("xmark", "✘"),
    ("xmark.circle", "✘"),
    ("exclamationmark.triangle", "⚠"),
    ("info.circle", "ℹ"),
    ("heart", "♥"),
    ("heart.fill", "♥"),
    ("star", "★"),
    ("star.fill", "★"),
    ("trash", "⌫"),
    ("bell", "♪"),
    ("music.note", "♫"),
];

/// Returns the glyph for an icon identifier.
pub fn glyph(name: &str) -> &str {
    if let Some((_, glyph)) = ICONS.iter().find(|(known, _)| *known == name) {
        return glyph;
    }
    let width = Span::raw(name).width();
    if (1..=2).contains(&width) {
        name
    } else {
        FALLBACK_GLYPH
    }
}
