//! A clock-driven stand-in for a native media element.
//!
//! Decoding is not part of this crate; the terminal front end plays a
//! simulated stream that behaves like a `<video>` element as far as the
//! controls can tell: data loads after a delay, the position advances while
//! playing, and the usual notifications are raised.

use std::sync::Arc;
use std::time::Duration;

use super::media::{MediaElement, MediaError, MediaEvent};
use super::timing::Clock;

/// How often a playing element raises `TimeUpdate`.
pub const TIME_UPDATE_INTERVAL: Duration = Duration::from_millis(250);

pub struct SimulatedMedia {
    clock: Arc<dyn Clock>,
    duration: f64,
    load_at: Duration,
    loaded: bool,
    loop_playback: bool,
    /// Position at `anchor` (or the frozen position while paused)
    base: f64,
    /// Clock time the position last started advancing from
    anchor: Option<Duration>,
    playing: bool,
    muted: bool,
    last_time_update: Duration,
    events: Vec<MediaEvent>,
}

impl SimulatedMedia {
    /// A stream of `duration` seconds whose data loads `load_delay` from now.
    pub fn new(clock: Arc<dyn Clock>, duration: f64, load_delay: Duration) -> Self {
        let load_at = clock.now() + load_delay;
        Self {
            clock,
            duration: duration.max(0.0),
            load_at,
            loaded: false,
            loop_playback: false,
            base: 0.0,
            anchor: None,
            playing: false,
            muted: false,
            last_time_update: Duration::ZERO,
            events: Vec::new(),
        }
    }

    /// Restart from the beginning instead of ending.
    pub fn with_loop(mut self, loop_playback: bool) -> Self {
        self.loop_playback = loop_playback;
        self
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn raw_position(&self, now: Duration) -> f64 {
        match self.anchor {
            Some(anchor) => self.base + now.saturating_sub(anchor).as_secs_f64(),
            None => self.base,
        }
    }

    fn advance(&mut self) {
        let now = self.clock.now();

        if !self.loaded && now >= self.load_at {
            self.loaded = true;
            self.events.push(MediaEvent::LoadedData);
            if self.playing {
                self.anchor = Some(now);
                self.last_time_update = now;
            }
        }

        if self.anchor.is_none() {
            return;
        }

        let position = self.raw_position(now);
        if position >= self.duration {
            if self.loop_playback && self.duration > 0.0 {
                self.base = position % self.duration;
                self.anchor = Some(now);
                self.last_time_update = now;
                self.events.push(MediaEvent::TimeUpdate);
            } else {
                self.base = self.duration;
                self.anchor = None;
                self.playing = false;
                self.events.push(MediaEvent::TimeUpdate);
                self.events.push(MediaEvent::Ended);
            }
        } else if now.saturating_sub(self.last_time_update) >= TIME_UPDATE_INTERVAL {
            self.last_time_update = now;
            self.events.push(MediaEvent::TimeUpdate);
        }
    }
}

impl MediaElement for SimulatedMedia {
    fn current_time(&self) -> f64 {
        self.raw_position(self.clock.now()).min(self.duration)
    }

    fn duration(&self) -> f64 {
        if self.loaded {
            self.duration
        } else {
            f64::NAN
        }
    }

    fn seek(&mut self, time: f64) {
        let upper = if self.loaded { self.duration } else { 0.0 };
        self.base = if time.is_nan() { 0.0 } else { time.clamp(0.0, upper) };
        if self.anchor.is_some() {
            self.anchor = Some(self.clock.now());
        }
        self.events.push(MediaEvent::TimeUpdate);
    }

    fn play(&mut self) -> Result<(), MediaError> {
        if self.playing {
            return Ok(());
        }
        if self.loaded && self.base >= self.duration {
            self.base = 0.0;
        }
        self.playing = true;
        if self.loaded {
            let now = self.clock.now();
            self.anchor = Some(now);
            self.last_time_update = now;
        }
        Ok(())
    }

    fn pause(&mut self) {
        self.base = self.current_time();
        self.anchor = None;
        self.playing = false;
    }

    fn muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn take_events(&mut self) -> Vec<MediaEvent> {
        self.advance();
        std::mem::take(&mut self.events)
    }
}
