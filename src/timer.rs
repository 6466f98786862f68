//! Single cancellable dismiss deadline.
//!
//! The event loop owns the clock. A pending dismiss is just a deadline that
//! the loop checks on every pass, so cancelling is dropping the deadline.

use std::time::Duration;

use tokio::time::Instant;

/// At most one outstanding dismiss action.
#[derive(Debug, Default)]
pub struct DismissTimer {
    deadline: Option<Instant>,
}

impl DismissTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the pending dismiss, if any, and schedules a new one `delay`
    /// after `now`.
    ///
    /// A delay past the end of the clock's range never fires.
    pub fn reschedule(&mut self, now: Instant, delay: Duration) {
        self.cancel();
        self.deadline = now.checked_add(delay);
    }

    /// Drops the pending dismiss. Does nothing when none is pending.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns the pending deadline.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true once, when `now` has reached the pending deadline.
    ///
    /// A fired timer is cleared, so later calls return false until the next
    /// `reschedule`.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
