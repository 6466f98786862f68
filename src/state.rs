//! Observable toast and alert state.
//!
//! Both structs are plain data. Only [`crate::TopLevel`] mutates them, so
//! every change goes through its revision counter.

use crate::constants::defaults;

/// The toast bubble payload and visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastState {
    /// Whether the bubble is currently shown.
    pub display: bool,
    /// Icon identifier drawn before the text.
    pub image: String,
    /// Message body.
    pub text: String,
}

impl Default for ToastState {
    fn default() -> Self {
        Self {
            display: false,
            image: defaults::TOAST_IMAGE.to_string(),
            text: defaults::TOAST_TEXT.to_string(),
        }
    }
}

/// The modal alert payload and visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertState {
    /// Whether the alert is currently shown.
    pub display: bool,
    /// Bold heading line.
    pub title: String,
    /// Body text, wrapped to the dialog width.
    pub message: String,
    /// Label of the single dismiss button.
    pub dismiss_button_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_defaults() {
        let state = ToastState::default();
        assert!(!state.display);
        assert_eq!(state.image, "text.append");
        assert_eq!(state.text, "Added to queue");
    }

    #[test]
    fn test_alert_defaults_are_empty() {
        let state = AlertState::default();
        assert!(!state.display);
        assert!(state.title.is_empty());
        assert!(state.message.is_empty());
        assert!(state.dismiss_button_text.is_empty());
    }
}
