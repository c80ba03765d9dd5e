//! Video player control surface
//!
//! A headless widget that drives a media element and mirrors its state in
//! a custom control overlay: play/pause, a scrub bar, remaining time, mute
//! and fullscreen, with controls that hide while playback is idle.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `props`: validated construction inputs (sources, media attributes)
//! - `state`: the `PlayerState` record and `InputResult`
//! - `widget`: `Player`, the state machine driving media and fullscreen
//! - `timing`: clocks, the hide-controls timer and the time-update rate limiter
//! - `media`: the `MediaElement` seam; `simulated` implements it on a clock
//! - `format`: time/percentage conversions and time labels
//! - `render/`: logical view plus terminal layout and drawing
//! - `input/`: keyboard and mouse input handling
//! - `native`: the terminal front end loop
//!
//! # Usage
//!
//! ```no_run
//! use vidctl::fullscreen::Fullscreen;
//! use vidctl::player::{Player, PlayerProps, SimulatedMedia, SourceDescriptor, SystemClock};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let clock = Arc::new(SystemClock::new());
//! let media = SimulatedMedia::new(clock.clone(), 60.0, Duration::ZERO);
//! let props = PlayerProps::new(vec![SourceDescriptor::new("intro.mp4", "video/mp4")]);
//! let mut player = Player::with_clock(props, media, Fullscreen::new(), clock).unwrap();
//!
//! player.mount();
//! player.play(None);
//! player.tick();
//! println!("{}", player.view().root_classes());
//! ```

pub mod error;
pub mod format;
pub mod input;
pub mod media;
mod native;
pub mod props;
pub mod render;
pub mod simulated;
pub mod state;
pub mod timing;
pub mod widget;

pub use error::ConfigError;
pub use media::{MediaElement, MediaError, MediaEvent};
pub use native::{play_sources, FRAME_INTERVAL};
pub use props::{MediaAttributes, PlayerProps, Preload, SourceDescriptor};
pub use render::{ControlTarget, PlayerView};
pub use simulated::SimulatedMedia;
pub use state::{InputResult, PlayerState};
pub use timing::{Clock, ManualClock, SystemClock};
pub use widget::{Player, SCRUB_MAX, SCRUB_MIN};
