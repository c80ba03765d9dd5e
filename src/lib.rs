//! vidctl - video player control surface
//!
//! A headless player widget with a custom control overlay (play/pause,
//! scrub bar, remaining time, mute, fullscreen and auto-hiding controls),
//! plus a terminal front end that drives it.

pub mod cli;
pub mod config;
pub mod fullscreen;
pub mod logging;
pub mod player;
pub mod tui;

pub use config::Config;
pub use player::{Player, PlayerProps, PlayerState, SourceDescriptor};
