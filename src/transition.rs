//! Ease-in/ease-out visibility transition for the toast.

use std::time::Duration;

use tokio::time::Instant;

/// Tracks the animated visibility of something that is shown or hidden by a
/// boolean flag.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    visible: bool,
    changed_at: Option<Instant>,
    /// Visibility at `changed_at`, where the animation picks up from.
    from: f64,
    length: Duration,
}

impl Transition {
    /// Creates a hidden transition with the given animation length.
    pub fn new(length: Duration) -> Self {
        Self {
            visible: false,
            changed_at: None,
            from: 0.0,
            length,
        }
    }

    /// Records the target visibility. Only a change of target restarts the
    /// animation, and it restarts from the visibility reached so far.
    pub fn set(&mut self, visible: bool, now: Instant) {
        if self.visible != visible {
            self.from = self.progress(now);
            self.visible = visible;
            self.changed_at = Some(now);
        }
    }

    /// Eased visibility in `0.0..=1.0` at `now`.
    pub fn progress(&self, now: Instant) -> f64 {
        let target = if self.visible { 1.0 } else { 0.0 };
        let Some(changed_at) = self.changed_at else {
            return target;
        };
        if self.length.is_zero() {
            return target;
        }

        let elapsed = now.saturating_duration_since(changed_at);
        let t = elapsed.as_secs_f64() / self.length.as_secs_f64();
        if t >= 1.0 {
            return target;
        }
        let eased = ease_in_out(t);

        if self.visible {
            self.from + (1.0 - self.from) * eased
        } else {
            self.from * (1.0 - eased)
        }
    }

    /// Returns true while the animation has not settled.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.changed_at
            .is_some_and(|changed_at| now.saturating_duration_since(changed_at) < self.length)
    }
}

/// Cubic ease-in-out curve.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
