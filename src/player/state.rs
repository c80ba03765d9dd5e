//! Player state management
//!
//! Contains the `PlayerState` record owned by the widget, and the
//! `InputResult` returned by input handlers to the front end loop.

use serde::Serialize;

use super::props::PlayerProps;

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player
    Quit,
}

/// Everything the control surface reflects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerState {
    /// Whether the media is (or is about to be) playing
    pub is_playing: bool,
    /// Scrub position as a percentage of the duration
    pub progress: f64,
    /// Whole seconds until the end of the stream
    pub remaining_time: u64,
    /// Whether the pointer is inside the player
    pub mouse_over: bool,
    /// Whether the control overlay is visible
    pub show_controls: bool,
    /// Whether audio is muted
    pub muted: bool,
    /// Whether the player occupies the whole screen
    pub fullscreen: bool,
}

impl PlayerState {
    /// Initial state for the given props.
    ///
    /// `fullscreen` is the platform's fullscreen status at construction.
    pub fn new(props: &PlayerProps, fullscreen: bool) -> Self {
        Self {
            is_playing: props.autoplay,
            progress: 0.0,
            remaining_time: 0,
            mouse_over: false,
            show_controls: !props.autoplay,
            muted: props.muted,
            fullscreen,
        }
    }
}
