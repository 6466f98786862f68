//! The toast and alert controller.
//!
//! `TopLevel` is the context object the host owns and hands to the overlay.
//! All mutation happens on the host's event loop, so no locking is needed.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info};

use crate::config::{ToastConfig, ToastPosition};
use crate::constants::layout;
use crate::state::{AlertState, ToastState};
use crate::timer::DismissTimer;
use crate::transition::Transition;

/// Toast and alert state plus the configuration that drives them.
#[derive(Debug)]
pub struct TopLevel {
    toast: ToastState,
    alert: AlertState,
    config: ToastConfig,
    timer: DismissTimer,
    transition: Transition,
    revision: u64,
}

impl TopLevel {
    /// Creates a controller with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ToastConfig::default())
    }

    /// Creates a controller with the given configuration.
    pub fn with_config(config: ToastConfig) -> Self {
        Self {
            toast: ToastState::default(),
            alert: AlertState::default(),
            config,
            timer: DismissTimer::new(),
            transition: Transition::new(layout::TRANSITION),
            revision: 0,
        }
    }

    /// Overwrites all four configuration fields.
    ///
    /// A dismiss that is already scheduled keeps its original deadline.
    pub fn configure(
        &mut self,
        duration: Duration,
        opacity: f64,
        shadow_radius: f64,
        position: ToastPosition,
    ) {
        self.config = ToastConfig::new(duration, opacity, shadow_radius, position);
        info!(
            duration_ms = duration.as_millis() as u64,
            opacity,
            shadow_radius,
            %position,
            "toast defaults configured"
        );
        self.touch();
    }

    /// Restores the default configuration.
    pub fn set_defaults(&mut self) {
        let defaults = ToastConfig::default();
        self.configure(
            defaults.duration,
            defaults.opacity,
            defaults.shadow_radius,
            defaults.position,
        );
    }

    /// Shows a toast now. See [`TopLevel::show_at`].
    pub fn show(&mut self, image: impl Into<String>, text: impl Into<String>, duration: Option<Duration>) {
        self.show_at(Instant::now(), image, text, duration);
    }

    /// Shows a toast with `image` and `text`, replacing any toast already
    /// on screen, and schedules it to hide after `duration` (or the
    /// configured default) counted from `now`.
    pub fn show_at(
        &mut self,
        now: Instant,
        image: impl Into<String>,
        text: impl Into<String>,
        duration: Option<Duration>,
    ) {
        let delay = duration.unwrap_or(self.config.duration);

        self.toast.text = text.into();
        self.toast.image = image.into();

        self.toast.display = true;
        self.transition.set(true, now);

        self.timer.reschedule(now, delay);

        debug!(
            image = %self.toast.image,
            text = %self.toast.text,
            delay_ms = delay.as_millis() as u64,
            "toast shown"
        );
        self.touch();
    }

    /// Shows the modal alert. It stays up until [`TopLevel::dismiss_alert`].
    pub fn show_alert(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        dismiss_button_text: impl Into<String>,
    ) {
        self.alert.title = title.into();
        self.alert.message = message.into();
        self.alert.dismiss_button_text = dismiss_button_text.into();

        self.alert.display = true;

        debug!(title = %self.alert.title, "alert shown");
        self.touch();
    }

    /// Dismiss-button handler for the alert.
    ///
    /// Returns true if an alert was actually on screen.
    pub fn dismiss_alert(&mut self) -> bool {
        if !self.alert.display {
            return false;
        }
        self.alert.display = false;
        debug!(title = %self.alert.title, "alert dismissed");
        self.touch();
        true
    }

    /// Runs the pending dismiss if its deadline has passed.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Runs the pending dismiss if `now` has reached its deadline.
    ///
    /// Returns true if the toast was hidden by this call.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        if !self.timer.fire(now) {
            return false;
        }
        self.toast.display = false;
        self.transition.set(false, now);
        debug!(text = %self.toast.text, "toast dismissed");
        self.touch();
        true
    }

    /// Deadline of the pending dismiss, for sizing the event poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Returns true while the toast appear/disappear animation is running.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition.is_animating(now)
    }

    /// Eased toast visibility at `now`.
    pub fn toast_visibility(&self, now: Instant) -> f64 {
        self.transition.progress(now)
    }

    pub fn toast(&self) -> &ToastState {
        &self.toast
    }

    pub fn alert(&self) -> &AlertState {
        &self.alert
    }

    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Counter bumped on every state or configuration change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for TopLevel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_show_sets_payload_and_display() {
        let mut top = TopLevel::new();
        top.show_at(Instant::now(), "checkmark", "Saved", None);

        assert!(top.toast().display);
        assert_eq!(top.toast().image, "checkmark");
        assert_eq!(top.toast().text, "Saved");
    }

    #[test]
    fn test_configured_duration_controls_dismiss() {
        let start = Instant::now();
        let mut top = TopLevel::new();
        top.configure(Duration::from_secs(2), 0.9, 3.0, ToastPosition::Bottom);
        top.show_at(start, "icon1", "hello", None);

        assert!(!top.tick_at(start + ms(1900)));
        assert!(top.toast().display);
        assert_eq!(top.toast().text, "hello");

        assert!(top.tick_at(start + ms(2100)));
        assert!(!top.toast().display);
    }

    #[test]
    fn test_later_show_cancels_earlier_timer() {
        let start = Instant::now();
        let mut top = TopLevel::new();
        top.show_at(start, "i1", "first", Some(Duration::from_secs(5)));
        top.show_at(start + ms(200), "i2", "second", None);

        assert!(!top.tick_at(start + ms(1000)));
        assert!(top.toast().display);
        assert_eq!(top.toast().text, "second");
        assert_eq!(top.toast().image, "i2");

        assert!(top.tick_at(start + ms(1800)));
        assert!(!top.toast().display);

        // The cancelled five second dismiss never fires.
        assert!(!top.tick_at(start + Duration::from_secs(5)));
    }

    #[test]
    fn test_reshow_while_visible_does_not_flicker() {
        let start = Instant::now();
        let mut top = TopLevel::new();
        top.show_at(start, "a", "one", None);
        let settled = start + layout::TRANSITION;
        assert_eq!(top.toast_visibility(settled), 1.0);

        top.show_at(settled, "b", "two", None);
        assert!(top.toast().display);
        assert_eq!(top.toast_visibility(settled), 1.0);
        assert!(!top.is_animating(settled));
    }

    #[test]
    fn test_configure_does_not_move_scheduled_dismiss() {
        let start = Instant::now();
        let mut top = TopLevel::new();
        top.show_at(start, "a", "one", None);
        top.configure(Duration::from_secs(10), 0.8, 5.0, ToastPosition::Top);

        assert_eq!(top.next_deadline(), Some(start + ms(1500)));
        assert!(top.tick_at(start + ms(1500)));

        top.show_at(start + Duration::from_secs(2), "b", "two", None);
        assert_eq!(top.next_deadline(), Some(start + Duration::from_secs(12)));
    }

    #[test]
    fn test_alert_persists_until_dismissed() {
        let start = Instant::now();
        let mut top = TopLevel::new();
        top.show_alert("T", "M", "OK");

        assert!(top.alert().display);
        assert_eq!(top.alert().title, "T");
        assert_eq!(top.alert().message, "M");
        assert_eq!(top.alert().dismiss_button_text, "OK");
        assert_eq!(top.next_deadline(), None);
        assert!(!top.tick_at(start + Duration::from_secs(60)));
        assert!(top.alert().display);

        assert!(top.dismiss_alert());
        assert!(!top.alert().display);
        assert!(!top.dismiss_alert());
    }

    #[test]
    fn test_alert_dismiss_leaves_toast_alone() {
        let start = Instant::now();
        let mut top = TopLevel::new();
        top.show_at(start, "bell", "Ping", None);
        top.show_alert("T", "M", "OK");
        top.dismiss_alert();

        assert!(top.toast().display);
        assert_eq!(top.next_deadline(), Some(start + ms(1500)));
    }

    #[test]
    fn test_zero_duration_hides_on_next_tick() {
        let start = Instant::now();
        let mut top = TopLevel::new();
        top.show_at(start, "a", "b", Some(Duration::ZERO));
        assert!(top.toast().display);
        assert!(top.tick_at(start));
        assert!(!top.toast().display);
    }

    #[test]
    fn test_huge_duration_keeps_toast_up() {
        let start = Instant::now();
        let mut top = TopLevel::new();
        top.show_at(start, "a", "first", None);
        top.show_at(start, "b", "forever", Some(Duration::MAX));

        assert!(top.toast().display);
        assert_eq!(top.toast().text, "forever");
        assert_eq!(top.next_deadline(), None);
        assert!(!top.tick_at(start + Duration::from_secs(3600)));
        assert!(top.toast().display);

        top.show_at(start + Duration::from_secs(10), "c", "short", None);
        assert!(top.tick_at(start + Duration::from_secs(12)));
    }

    #[test]
    fn test_short_toast_fades_from_partial_visibility() {
        let start = Instant::now();
        let mut top = TopLevel::new();
        top.show_at(start, "a", "blink", Some(ms(50)));

        let dismiss_at = start + ms(50);
        let before = top.toast_visibility(dismiss_at);
        assert!(before > 0.0 && before < 0.5);

        assert!(top.tick_at(dismiss_at));
        assert!((top.toast_visibility(dismiss_at) - before).abs() < 1e-9);
        assert!(top.toast_visibility(dismiss_at + ms(10)) < before);
        assert_eq!(top.toast_visibility(dismiss_at + layout::TRANSITION), 0.0);
    }

    #[test]
    fn test_set_defaults_restores_configuration() {
        let mut top = TopLevel::new();
        top.configure(Duration::from_secs(9), 0.1, 0.0, ToastPosition::Middle);
        top.set_defaults();
        assert_eq!(*top.config(), ToastConfig::default());
    }

    #[test]
    fn test_revision_tracks_mutations() {
        let start = Instant::now();
        let mut top = TopLevel::new();
        let initial = top.revision();

        top.show_at(start, "a", "b", None);
        let after_show = top.revision();
        assert!(after_show > initial);

        assert!(!top.tick_at(start));
        assert_eq!(top.revision(), after_show);

        assert!(top.tick_at(start + Duration::from_secs(2)));
        assert!(top.revision() > after_show);
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_uses_wall_clock() {
        let mut top = TopLevel::new();
        top.show("heart", "Liked", None);

        tokio::time::advance(ms(1400)).await;
        assert!(!top.tick());
        assert!(top.toast().display);

        tokio::time::advance(ms(200)).await;
        assert!(top.tick());
        assert!(!top.toast().display);
    }
}
