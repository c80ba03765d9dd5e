//! Rendering components for the player.
//!
//! - `view`: logical, class-identified description of the control surface
//! - `progress`: scrub bar glyphs
//! - `controls`: terminal layout, hit testing and drawing

mod controls;
mod progress;
mod view;

pub use controls::{render_player, ControlLayout, ControlRects, KEY_HINTS};
pub use progress::{build_scrub_bar_chars, fraction_for_cell, scrub_bar_line};
pub use view::{
    ControlTarget, Icon, PlayerView, RangeView, CONTROLS_HIDDEN_MODIFIER, FULLSCREEN_MODIFIER,
    ROOT_CLASS, SCRUB_STEP,
};
