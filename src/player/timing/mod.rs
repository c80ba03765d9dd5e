//! Deterministic timing primitives used by the player widget.
//!
//! Nothing here spawns threads or OS timers: deadlines are stored and
//! polled from the widget's `tick`, with time supplied by a [`Clock`].

mod clock;
mod debounce;
mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use debounce::Debouncer;
pub use timer::HideTimer;
