//! Logical view of the control surface.
//!
//! Describes what is on screen in terms of class-identified elements, so
//! the terminal renderer, the `inspect` command and automation all agree
//! on names like `.video-state` or `player--controls-hidden`.

use serde::Serialize;

use crate::player::format::format_time;
use crate::player::props::{PlayerProps, SourceDescriptor};
use crate::player::state::PlayerState;
use crate::player::widget::{SCRUB_MAX, SCRUB_MIN};

/// Step of the scrub bar input.
pub const SCRUB_STEP: f64 = 0.01;

/// Root class of the player container.
pub const ROOT_CLASS: &str = "player";
/// Modifier present while fullscreen.
pub const FULLSCREEN_MODIFIER: &str = "player--fullscreen";
/// Modifier present while the control overlay is hidden.
pub const CONTROLS_HIDDEN_MODIFIER: &str = "player--controls-hidden";

/// Addressable parts of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlTarget {
    /// The media surface (click toggles play, double-click fullscreen)
    Surface,
    /// The control bar container
    Controls,
    /// Play/pause toggle
    PlayToggle,
    /// Scrub bar range input
    Scrubber,
    /// Remaining time label
    RemainingTime,
    /// Mute toggle
    Sound,
    /// Fullscreen toggle
    Fullscreen,
}

impl ControlTarget {
    /// CSS-style selector identifying this element.
    pub fn selector(&self) -> &'static str {
        match self {
            Self::Surface => "video",
            Self::Controls => ".player__controls",
            Self::PlayToggle => ".video-state",
            Self::Scrubber => ".progress-bar__range",
            Self::RemainingTime => ".remain-time",
            Self::Sound => ".sound",
            Self::Fullscreen => ".fullscreen",
        }
    }

    /// Look an element up by selector.
    pub fn from_selector(selector: &str) -> Option<Self> {
        [
            Self::Surface,
            Self::Controls,
            Self::PlayToggle,
            Self::Scrubber,
            Self::RemainingTime,
            Self::Sound,
            Self::Fullscreen,
        ]
        .into_iter()
        .find(|target| target.selector() == selector)
    }
}

/// Icons shown on the control buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Play,
    Pause,
    VolumeUp,
    VolumeOff,
    Expand,
}

impl Icon {
    /// Icon font classes.
    pub fn classes(&self) -> &'static str {
        match self {
            Self::Play => "fa fa-play",
            Self::Pause => "fa fa-pause",
            Self::VolumeUp => "fa fa-volume-up",
            Self::VolumeOff => "fa fa-volume-off",
            Self::Expand => "fa fa-expand",
        }
    }

    /// Single-cell glyph for terminal rendering.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Play => "▶",
            Self::Pause => "‖",
            Self::VolumeUp => "♪",
            Self::VolumeOff => "×",
            Self::Expand => "□",
        }
    }
}

/// The scrub bar's range input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeView {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
}

impl RangeView {
    /// Position of the thumb along the track, 0.0 to 1.0.
    pub fn fraction(&self) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        ((self.value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Value at `fraction` along the track, snapped to the step.
    pub fn value_at(&self, fraction: f64) -> f64 {
        let raw = self.min + fraction.clamp(0.0, 1.0) * (self.max - self.min);
        ((raw / self.step).round() * self.step).clamp(self.min, self.max)
    }
}

/// Snapshot of everything the control surface shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub root_id: String,
    pub fullscreen: bool,
    pub controls_hidden: bool,
    pub sources: Vec<SourceDescriptor>,
    pub media_attributes: Vec<(&'static str, String)>,
    pub play_icon: Icon,
    pub range: RangeView,
    pub remaining_label: String,
    pub sound_icon: Icon,
    pub fullscreen_icon: Icon,
}

impl PlayerView {
    pub fn new(state: &PlayerState, props: &PlayerProps) -> Self {
        Self {
            root_id: props.root_id.clone(),
            fullscreen: state.fullscreen,
            controls_hidden: !state.show_controls,
            sources: props.sources.clone(),
            media_attributes: props.attributes.rendered(),
            play_icon: if state.is_playing {
                Icon::Pause
            } else {
                Icon::Play
            },
            range: RangeView {
                min: SCRUB_MIN,
                max: SCRUB_MAX,
                step: SCRUB_STEP,
                value: state.progress,
            },
            remaining_label: format_time(state.remaining_time as f64),
            sound_icon: if state.muted {
                Icon::VolumeOff
            } else {
                Icon::VolumeUp
            },
            fullscreen_icon: Icon::Expand,
        }
    }

    /// Class list of the root container.
    pub fn root_classes(&self) -> String {
        let mut classes = vec![ROOT_CLASS];
        if self.fullscreen {
            classes.push(FULLSCREEN_MODIFIER);
        }
        if self.controls_hidden {
            classes.push(CONTROLS_HIDDEN_MODIFIER);
        }
        classes.join(" ")
    }
}
