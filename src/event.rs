//! Event handling module.
//!
//! This module handles keyboard and terminal events using crossterm.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Represents the different actions a user can take in the demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Move selection up
    Up,
    /// Move selection down
    Down,
    /// Move to the top of the list
    Top,
    /// Move to the bottom of the list
    Bottom,
    /// Add the selected track to the queue
    Enqueue,
    /// Like the selected track
    Like,
    /// Remove the last track from the queue
    Dequeue,
    /// Show the about alert
    About,
    /// Move toasts to the next position
    CyclePosition,
    /// Lengthen the default toast duration
    LongerToasts,
    /// Shorten the default toast duration
    ShorterToasts,
    /// Show help
    Help,
    /// Press the alert's dismiss button
    DismissAlert,
    /// The terminal was resized
    Resize,
}

/// Handles terminal events and converts them to application actions.
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for the next event and converts it to an Action.
    ///
    /// While `alert_open` is set, key presses are routed to the alert only.
    /// Returns Ok(None) if nothing actionable arrived within the timeout.
    pub fn next(&self, timeout: Duration, alert_open: bool) -> io::Result<Option<Action>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            // Only process key press events (not releases)
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                if alert_open {
                    Ok(self.key_to_alert_action(key_event))
                } else {
                    Ok(self.key_to_action(key_event))
                }
            }
            Event::Resize(_, _) => Ok(Some(Action::Resize)),
            _ => Ok(None),
        }
    }

    /// Converts a key event to an action while the modal alert is open.
    pub(crate) fn key_to_alert_action(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::DismissAlert),
            _ => None,
        }
    }

    /// Converts a key event to an application action.
    pub(crate) fn key_to_action(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C first (quit)
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            // Navigation
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::Top),
            KeyCode::End | KeyCode::Char('G') => Some(Action::Bottom),

            // Actions
            KeyCode::Enter => Some(Action::Enqueue),
            KeyCode::Char('l') => Some(Action::Like),
            KeyCode::Backspace | KeyCode::Char('d') => Some(Action::Dequeue),
            KeyCode::Char('a') => Some(Action::About),
            KeyCode::Char('p') => Some(Action::CyclePosition),
            KeyCode::Char('+') => Some(Action::LongerToasts),
            KeyCode::Char('-') => Some(Action::ShorterToasts),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Action::Help),
            KeyCode::Char('q') => Some(Action::Quit),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn make_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_ctrl_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_vim_navigation_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('j'))),
            Some(Action::Down)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('k'))),
            Some(Action::Up)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('g'))),
            Some(Action::Top)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('G'))),
            Some(Action::Bottom)
        );
    }

    #[test]
    fn test_toast_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Enter)),
            Some(Action::Enqueue)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('l'))),
            Some(Action::Like)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('p'))),
            Some(Action::CyclePosition)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('+'))),
            Some(Action::LongerToasts)
        );
    }

    #[test]
    fn test_quit_actions() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            handler.key_to_action(make_ctrl_key_event(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_alert_captures_keys() {
        let handler = EventHandler::new();

        for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Char(' ')] {
            assert_eq!(
                handler.key_to_alert_action(make_key_event(code)),
                Some(Action::DismissAlert)
            );
        }
        // Keys meant for the content underneath are swallowed
        assert_eq!(handler.key_to_alert_action(make_key_event(KeyCode::Char('j'))), None);
        assert_eq!(handler.key_to_alert_action(make_key_event(KeyCode::Char('q'))), None);
    }

    #[test]
    fn test_alert_ctrl_c_quits() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_alert_action(make_ctrl_key_event(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_unknown_key_returns_none() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('z'))),
            None
        );
        assert_eq!(handler.key_to_action(make_key_event(KeyCode::F(12))), None);
    }
}
