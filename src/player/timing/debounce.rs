//! Trailing rate limiter for bursty media notifications.

use std::time::Duration;

/// Last-event-wins debouncer.
///
/// Each `push` replaces the pending value and restarts the quiet window.
/// `poll` hands the value out once the window has passed without a new
/// push, so a burst collapses into a single delivery.
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(Duration, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record an event at `now`.
    pub fn push(&mut self, now: Duration, value: T) {
        self.pending = Some((now + self.window, value));
    }

    /// Take the pending value if its window has elapsed.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match &self.pending {
            Some((due, _)) if now >= *due => self.pending.take().map(|(_, value)| value),
            _ => None,
        }
    }

    /// Discard any pending value.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
