//! Single-shot timer slot for hiding the control overlay.

use std::time::Duration;

/// Holds at most one pending deadline.
///
/// Arming always replaces the previous deadline, so there is never more
/// than one hide scheduled. The slot is polled rather than driven by an OS
/// timer; dropping it is enough to cancel.
#[derive(Debug, Default)]
pub struct HideTimer {
    deadline: Option<Duration>,
    armed_count: u64,
}

impl HideTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a deadline is outstanding.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The outstanding deadline, if any.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Number of times the timer has been armed since creation.
    pub fn armed_count(&self) -> u64 {
        self.armed_count
    }

    /// Schedule a hide `delay` after `now`, cancelling any pending one.
    pub fn arm(&mut self, now: Duration, delay: Duration) {
        self.cancel();
        self.deadline = Some(now + delay);
        self.armed_count += 1;
    }

    /// Drop the pending deadline. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Consume the deadline if it has passed.
    ///
    /// Returns `true` exactly once per armed deadline.
    pub fn fire_if_due(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
