//! UI rendering module.
//!
//! The demo's own screen is a single widget, [`HostView`], which is handed
//! to the overlay unmodified. Each part of it is drawn by a submodule.

mod colors;
mod empty;
mod header;
mod help;
mod lists;
mod status;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{ListState, Widget},
    Frame,
};
use toplevel::{attach_overlay, constants::host, SafeArea, ToastConfig};

use crate::app::{App, Track};

use header::draw_header;
use help::draw_help_overlay;
use lists::{draw_queue, draw_tracks_list};
use status::draw_commands_bar;

/// Main draw function - renders the host view through the overlay.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let view = HostView {
        tracks: &app.tracks,
        tracks_state: &app.tracks_state,
        queue: &app.queue,
        show_help: app.show_help,
        config: app.top_level.config(),
    };
    let overlay = attach_overlay(view, &app.top_level).safe_area(SafeArea::new(
        host::HEADER_HEIGHT,
        host::COMMANDS_BAR_HEIGHT,
    ));
    frame.render_stateful_widget(overlay, frame.area(), &mut app.overlay_state);
}

/// The demo screen: header, track list, queue and commands bar.
///
/// Borrows the host fields it shows, leaving the overlay state free to be
/// borrowed mutably in the same frame.
pub struct HostView<'a> {
    pub tracks: &'a [Track],
    pub tracks_state: &'a ListState,
    pub queue: &'a [usize],
    pub show_help: bool,
    pub config: &'a ToastConfig,
}

impl Widget for HostView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header, content, commands] = Layout::vertical([
            Constraint::Length(host::HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(host::COMMANDS_BAR_HEIGHT),
        ])
        .areas(area);

        let [tracks, queue] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(content);

        draw_header(header, buf, &self);
        draw_tracks_list(tracks, buf, &self);
        draw_queue(queue, buf, &self);
        draw_commands_bar(commands, buf);

        if self.show_help {
            draw_help_overlay(area, buf);
        }
    }
}
