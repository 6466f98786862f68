//! List rendering for the track library and the queue.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, StatefulWidget, Widget},
};

use super::colors;
use super::empty::draw_empty_state;
use super::HostView;

fn titled_block<'a>(count: usize, noun: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .border_set(symbols::border::ROUNDED)
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(count.to_string(), Style::default().fg(colors::SECONDARY).bold()),
            Span::styled(format!(" {noun} "), Style::default().fg(Color::White)),
        ]))
        .padding(Padding::horizontal(1))
}

/// Draws the track library.
pub fn draw_tracks_list(area: Rect, buf: &mut Buffer, view: &HostView) {
    let selected = view.tracks_state.selected();

    let items: Vec<ListItem> = view
        .tracks
        .iter()
        .enumerate()
        .map(|(idx, track)| {
            let is_selected = selected == Some(idx);
            let style = if is_selected {
                Style::default()
                    .bg(colors::SELECTION)
                    .fg(colors::SELECTION_TEXT)
            } else {
                Style::default()
            };

            let content = Line::from(vec![
                Span::styled(format!("{:>3}", idx + 1), Style::default().fg(colors::ACCENT)),
                Span::styled("  ", style),
                Span::styled(track.title, style.add_modifier(Modifier::BOLD)),
                Span::styled("  ", style),
                Span::styled(
                    track.artist,
                    style.fg(if is_selected {
                        colors::SELECTION_TEXT
                    } else {
                        colors::MUTED
                    }),
                ),
            ]);

            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(titled_block(view.tracks.len(), "tracks"))
        .highlight_style(Style::default()) // We handle highlighting in items
        .highlight_symbol("");

    StatefulWidget::render(list, area, buf, &mut view.tracks_state.clone());
}

/// Draws the play queue.
pub fn draw_queue(area: Rect, buf: &mut Buffer, view: &HostView) {
    let block = titled_block(view.queue.len(), "queued");

    if view.queue.is_empty() {
        draw_empty_state(area, buf, block, "Queue is empty", "Press Enter to add a track");
        return;
    }

    let items: Vec<ListItem> = view
        .queue
        .iter()
        .filter_map(|&idx| view.tracks.get(idx))
        .enumerate()
        .map(|(position, track)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2}. ", position + 1), Style::default().fg(colors::ACCENT)),
                Span::styled(track.title, Style::default().fg(Color::White)),
            ]))
        })
        .collect();

    Widget::render(List::new(items).block(block), area, buf);
}
