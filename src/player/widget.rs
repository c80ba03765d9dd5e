//! The player widget.
//!
//! `Player` owns the control state, one hide-controls timer and one
//! time-update rate limiter. It holds the media element and fullscreen
//! controller on behalf of the host and is the only thing that drives
//! them. Every operation follows the same shape: commit the state change,
//! re-evaluate the auto-hide rule, then perform the side effect on the
//! media element.

use std::sync::Arc;
use std::time::Duration;

use super::error::ConfigError;
use super::format::{percent_to_time, remaining_seconds, time_to_percent};
use super::media::{MediaElement, MediaEvent};
use super::props::PlayerProps;
use super::render::PlayerView;
use super::state::PlayerState;
use super::timing::{Clock, Debouncer, HideTimer, SystemClock};
use crate::fullscreen::FullscreenController;

/// Lowest value the scrub bar reports.
pub const SCRUB_MIN: f64 = 1.0;
/// Highest value the scrub bar reports; scrubbing here pauses.
pub const SCRUB_MAX: f64 = 100.0;

pub struct Player<M: MediaElement, F: FullscreenController> {
    props: PlayerProps,
    media: M,
    fullscreen: F,
    clock: Arc<dyn Clock>,
    state: PlayerState,
    hide_timer: HideTimer,
    time_updates: Debouncer<()>,
    mounted: bool,
}

impl<M: MediaElement, F: FullscreenController> Player<M, F> {
    /// Build a player on the system clock.
    pub fn new(props: PlayerProps, media: M, fullscreen: F) -> Result<Self, ConfigError> {
        Self::with_clock(props, media, fullscreen, Arc::new(SystemClock::new()))
    }

    /// Build a player on a specific clock.
    ///
    /// Props are validated first; invalid props never produce a player.
    pub fn with_clock(
        props: PlayerProps,
        media: M,
        fullscreen: F,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        props.validate()?;

        let state = PlayerState::new(&props, fullscreen.is_active());
        let time_updates = Debouncer::new(props.time_update_debounce);
        tracing::debug!(
            sources = props.sources.len(),
            autoplay = props.autoplay,
            muted = props.muted,
            "Created player"
        );

        Ok(Self {
            props,
            media,
            fullscreen,
            clock,
            state,
            hide_timer: HideTimer::new(),
            time_updates,
            mounted: false,
        })
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn props(&self) -> &PlayerProps {
        &self.props
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub fn fullscreen_controller(&self) -> &F {
        &self.fullscreen
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Current time on the player's clock.
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Whether a hide-controls deadline is outstanding.
    pub fn hide_pending(&self) -> bool {
        self.hide_timer.is_pending()
    }

    /// When the pending hide fires, as clock time.
    pub fn hide_deadline(&self) -> Option<Duration> {
        self.hide_timer.deadline()
    }

    /// Logical rendering of the current state.
    pub fn view(&self) -> PlayerView {
        PlayerView::new(&self.state, &self.props)
    }

    // === Lifecycle ===

    /// Attach to the page: start receiving media notifications.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        // Drop anything raised before we were listening
        self.media.take_events();
        self.media.set_muted(self.state.muted);
        tracing::info!(root = %self.props.root_id, "Player mounted");

        if self.state.is_playing {
            self.start_media();
        }
    }

    /// Detach from the page. Cancels the hide timer and any pending time
    /// update; neither is rescheduled afterwards.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.teardown();
        tracing::info!(root = %self.props.root_id, "Player unmounted");
    }

    fn teardown(&mut self) {
        if self.hide_timer.cancel() {
            tracing::debug!("Cancelled pending hide-controls timer");
        }
        self.time_updates.cancel();
    }

    // === Playback ===

    /// Start playback, optionally seeking to `time` seconds first.
    pub fn play(&mut self, time: Option<f64>) {
        self.update(|s| s.is_playing = true);
        if let Some(time) = time {
            self.media.seek(time);
        }
        self.start_media();
    }

    pub fn pause(&mut self) {
        self.update(|s| s.is_playing = false);
        self.media.pause();
    }

    pub fn toggle_play(&mut self) {
        if self.state.is_playing {
            self.pause();
        } else {
            self.play(None);
        }
    }

    fn start_media(&mut self) {
        if let Err(e) = self.media.play() {
            tracing::warn!("{}", e);
            self.update(|s| {
                s.is_playing = false;
                s.show_controls = true;
            });
        }
    }

    // === Pointer ===

    pub fn on_mouse_enter(&mut self) {
        self.update(|s| s.mouse_over = true);
    }

    pub fn on_mouse_leave(&mut self) {
        self.update(|s| s.mouse_over = false);
    }

    // === Scrub bar ===

    /// The scrub bar moved to `value` percent.
    ///
    /// Values are clamped to `SCRUB_MIN..=SCRUB_MAX`. Scrubbing to the end
    /// pauses; anywhere else plays from the matching position.
    pub fn on_scrub_change(&mut self, value: f64) {
        let value = if value.is_nan() {
            SCRUB_MIN
        } else {
            value.clamp(SCRUB_MIN, SCRUB_MAX)
        };
        let duration = self.media.duration();
        let target = percent_to_time(value, duration);
        let ended = value >= SCRUB_MAX;

        tracing::debug!(value, target, "Scrubbed");
        self.update(|s| {
            s.is_playing = !ended;
            s.progress = value;
            s.remaining_time = remaining_seconds(target, duration);
        });

        if ended {
            self.pause();
        } else if target.is_finite() {
            self.play(Some(target));
        } else {
            // Duration unknown, nothing to seek to yet
            self.play(None);
        }
    }

    // === Media notifications ===

    /// Route a notification from the media element.
    ///
    /// Time updates are rate limited; the others apply immediately.
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::TimeUpdate => self.time_updates.push(self.clock.now(), ()),
            MediaEvent::Ended => self.on_ended(),
            MediaEvent::LoadedData => self.on_loaded_data(),
        }
    }

    /// Refresh progress and remaining time from the media position.
    pub fn on_time_progress(&mut self) {
        let current = self.media.current_time();
        let duration = self.media.duration();
        self.update(|s| {
            if let Some(progress) = time_to_percent(current, duration) {
                s.progress = progress;
            }
            s.remaining_time = remaining_seconds(current, duration);
        });
    }

    pub fn on_ended(&mut self) {
        let remaining = self.remaining();
        tracing::debug!("Playback ended");
        self.update(|s| {
            s.is_playing = false;
            s.remaining_time = remaining;
            s.show_controls = true;
        });
    }

    pub fn on_loaded_data(&mut self) {
        let remaining = self.remaining();
        tracing::debug!(duration = self.media.duration(), "Media data loaded");
        self.update(|s| s.remaining_time = remaining);
    }

    fn remaining(&self) -> u64 {
        remaining_seconds(self.media.current_time(), self.media.duration())
    }

    // === Sound ===

    pub fn mute(&mut self) {
        self.update(|s| s.muted = true);
        self.media.set_muted(true);
    }

    pub fn unmute(&mut self) {
        self.update(|s| s.muted = false);
        self.media.set_muted(false);
    }

    pub fn toggle_mute(&mut self) {
        if self.state.muted {
            self.unmute();
        } else {
            self.mute();
        }
    }

    // === Fullscreen ===

    /// Put the root container into fullscreen.
    ///
    /// The state only changes when the platform accepts the request.
    pub fn enter_fullscreen(&mut self) {
        if self.fullscreen.request(&self.props.root_id) {
            self.update(|s| s.fullscreen = true);
        }
    }

    pub fn exit_fullscreen(&mut self) {
        if self.fullscreen.exit() {
            self.update(|s| s.fullscreen = false);
        }
    }

    pub fn toggle_fullscreen(&mut self) {
        if self.state.fullscreen {
            self.exit_fullscreen();
        } else {
            self.enter_fullscreen();
        }
    }

    // === Event loop ===

    /// Advance time-driven behaviour.
    ///
    /// Delivers media notifications (while mounted), a due rate-limited
    /// time update, a due hide-controls timer, and picks up fullscreen
    /// changes made outside the widget.
    pub fn tick(&mut self) {
        let events = self.media.take_events();
        if self.mounted {
            for event in events {
                self.handle_media_event(event);
            }
        }

        let now = self.clock.now();
        if self.time_updates.poll(now).is_some() {
            self.on_time_progress();
        }

        if self.hide_timer.fire_if_due(now) && self.state.is_playing {
            tracing::debug!("Hiding idle controls");
            self.update(|s| s.show_controls = false);
        }

        let active = self.fullscreen.is_active();
        if active != self.state.fullscreen {
            self.update(|s| s.fullscreen = active);
        }
    }

    // === State commits ===

    fn update(&mut self, change: impl FnOnce(&mut PlayerState)) {
        let prev = self.state.clone();
        change(&mut self.state);
        if self.state != prev {
            self.reconcile(prev);
        }
    }

    /// Re-evaluate the auto-hide rule until the state settles.
    fn reconcile(&mut self, mut prev: PlayerState) {
        loop {
            let before = self.state.clone();

            // Pointer over hidden controls reveals them, and so does pausing
            if !self.state.show_controls && (self.state.mouse_over || !self.state.is_playing) {
                self.state.show_controls = true;
            }

            // Pointer left while playing: hide after the idle delay
            let left = prev.mouse_over && !self.state.mouse_over;
            if self.state.show_controls
                && self.state.is_playing
                && left
                && !self.hide_timer.is_pending()
            {
                self.hide_timer
                    .arm(self.clock.now(), self.props.autohide_controls_delay);
                tracing::debug!(
                    delay_ms = self.props.autohide_controls_delay.as_millis() as u64,
                    "Scheduled hide-controls timer"
                );
            }

            if self.state == before {
                break;
            }
            prev = before;
        }
    }
}

impl<M: MediaElement, F: FullscreenController> Drop for Player<M, F> {
    fn drop(&mut self) {
        self.teardown();
    }
}
