//! Demo application state and logic.
//!
//! A small track library with a play queue. Every toast and alert entry
//! point of [`TopLevel`] is reachable from a key.

use std::time::Duration;

use ratatui::widgets::ListState;
use toplevel::{OverlayState, ToastConfig, TopLevel};

use crate::event::Action;

/// Step used by the `+`/`-` duration keys.
const DURATION_STEP: Duration = Duration::from_millis(500);

/// How long the "liked" toast stays up, overriding the default.
const LIKE_TOAST_DURATION: Duration = Duration::from_secs(3);

/// A track in the demo library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: &'static str,
    pub artist: &'static str,
}

const LIBRARY: &[Track] = &[
    Track { title: "Blue in Green", artist: "Miles Davis" },
    Track { title: "Windowlicker", artist: "Aphex Twin" },
    Track { title: "Teardrop", artist: "Massive Attack" },
    Track { title: "Hyperballad", artist: "Björk" },
    Track { title: "Roygbiv", artist: "Boards of Canada" },
    Track { title: "Archangel", artist: "Burial" },
    Track { title: "Svefn-g-englar", artist: "Sigur Rós" },
];

/// Main application state.
pub struct App {
    /// Toast and alert controller
    pub top_level: TopLevel,
    /// Geometry cache for the overlay
    pub overlay_state: OverlayState,
    /// Tracks available to queue
    pub tracks: Vec<Track>,
    /// Selection state for the track list
    pub tracks_state: ListState,
    /// Indexes into `tracks`, in play order
    pub queue: Vec<usize>,
    /// Help visibility
    pub show_help: bool,
}

impl App {
    /// Creates the demo with the given toast configuration.
    pub fn new(config: ToastConfig) -> Self {
        let tracks = LIBRARY.to_vec();
        let mut tracks_state = ListState::default();
        if !tracks.is_empty() {
            tracks_state.select(Some(0));
        }
        Self {
            top_level: TopLevel::with_config(config),
            overlay_state: OverlayState::new(),
            tracks,
            tracks_state,
            queue: Vec::new(),
            show_help: false,
        }
    }

    /// Handles an action and returns true if the app should quit.
    pub fn handle_event(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Resize => {
                self.overlay_state.invalidate_geometry();
                return false;
            }
            Action::DismissAlert => {
                self.top_level.dismiss_alert();
                return false;
            }
            Action::Help => {
                self.show_help = !self.show_help;
                return false;
            }
            _ => {}
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return false;
        }

        match action {
            Action::Up => self.select_previous_track(),
            Action::Down => self.select_next_track(),
            Action::Top => self.select_first_track(),
            Action::Bottom => self.select_last_track(),
            Action::Enqueue => self.enqueue_selected(),
            Action::Like => self.like_selected(),
            Action::Dequeue => self.dequeue_last(),
            Action::About => self.show_about(),
            Action::CyclePosition => self.cycle_position(),
            Action::LongerToasts => self.adjust_duration(true),
            Action::ShorterToasts => self.adjust_duration(false),
            _ => {}
        }
        false
    }

    /// Returns the currently selected track.
    pub fn selected_track(&self) -> Option<&Track> {
        self.tracks_state.selected().and_then(|idx| self.tracks.get(idx))
    }

    // --- Navigation helpers ---

    fn select_previous_track(&mut self) {
        let len = self.tracks.len();
        if len == 0 {
            return;
        }
        let current = self.tracks_state.selected().unwrap_or(0);
        let new = if current == 0 { len - 1 } else { current - 1 };
        self.tracks_state.select(Some(new));
    }

    fn select_next_track(&mut self) {
        let len = self.tracks.len();
        if len == 0 {
            return;
        }
        let current = self.tracks_state.selected().unwrap_or(0);
        let new = if current >= len - 1 { 0 } else { current + 1 };
        self.tracks_state.select(Some(new));
    }

    fn select_first_track(&mut self) {
        if !self.tracks.is_empty() {
            self.tracks_state.select(Some(0));
        }
    }

    fn select_last_track(&mut self) {
        let len = self.tracks.len();
        if len > 0 {
            self.tracks_state.select(Some(len - 1));
        }
    }

    // --- Toasts and alerts ---

    fn enqueue_selected(&mut self) {
        let Some(idx) = self.tracks_state.selected() else {
            return;
        };
        let Some(track) = self.tracks.get(idx) else {
            return;
        };
        let text = format!("Added \"{}\" to queue", track.title);
        self.queue.push(idx);
        self.top_level.show("text.append", text, None);
    }

    fn like_selected(&mut self) {
        if let Some(track) = self.selected_track() {
            let text = format!("You liked {} by {}", track.title, track.artist);
            self.top_level.show("heart", text, Some(LIKE_TOAST_DURATION));
        }
    }

    fn dequeue_last(&mut self) {
        match self.queue.pop() {
            Some(idx) => {
                let title = self.tracks.get(idx).map_or("track", |track| track.title);
                let text = format!("Removed \"{title}\" from queue");
                self.top_level.show("trash", text, None);
            }
            None => self.top_level.show_alert(
                "Queue is empty",
                "There is nothing to remove.\nPress Enter on a track to queue it.",
                "OK",
            ),
        }
    }

    fn show_about(&mut self) {
        self.top_level.show_alert(
            "About",
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION")
            ),
            "Close",
        );
    }

    fn cycle_position(&mut self) {
        let config = *self.top_level.config();
        let position = config.position.next();
        self.top_level
            .configure(config.duration, config.opacity, config.shadow_radius, position);
        self.top_level
            .show("info.circle", format!("Toasts now appear at the {position}"), None);
    }

    fn adjust_duration(&mut self, longer: bool) {
        let config = *self.top_level.config();
        let duration = if longer {
            config.duration.saturating_add(DURATION_STEP)
        } else {
            config.duration.saturating_sub(DURATION_STEP).max(DURATION_STEP)
        };
        self.top_level
            .configure(duration, config.opacity, config.shadow_radius, config.position);
        self.top_level.show(
            "bell",
            format!("Toasts now last {:.1}s", duration.as_secs_f64()),
            None,
        );
    }
}
