//! Keyboard input handling for the terminal player.
//!
//! Keys map onto the same operations the on-screen controls trigger, so a
//! key press and a click on the matching control are indistinguishable to
//! the widget.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::fullscreen::FullscreenController;
use crate::player::media::MediaElement;
use crate::player::state::InputResult;
use crate::player::widget::{Player, SCRUB_MAX, SCRUB_MIN};

/// Scrub bar distance covered by one arrow key press, in percent.
pub const SEEK_STEP: f64 = 5.0;

/// Handle a keyboard event.
pub fn handle_key_event<M: MediaElement, F: FullscreenController>(
    key: KeyEvent,
    player: &mut Player<M, F>,
) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,
        KeyCode::Esc => {
            if player.state().fullscreen {
                player.exit_fullscreen();
                InputResult::Continue
            } else {
                InputResult::Quit
            }
        }

        // === Controls ===
        KeyCode::Char(' ') | KeyCode::Char('k') => {
            player.toggle_play();
            InputResult::Continue
        }
        KeyCode::Char('m') => {
            player.toggle_mute();
            InputResult::Continue
        }
        KeyCode::Char('f') => {
            player.toggle_fullscreen();
            InputResult::Continue
        }

        // === Scrubbing ===
        KeyCode::Left => {
            let target = player.state().progress - SEEK_STEP;
            player.on_scrub_change(target.max(SCRUB_MIN));
            InputResult::Continue
        }
        KeyCode::Right => {
            let target = player.state().progress + SEEK_STEP;
            player.on_scrub_change(target.min(SCRUB_MAX));
            InputResult::Continue
        }
        KeyCode::Home => {
            player.on_scrub_change(SCRUB_MIN);
            InputResult::Continue
        }
        KeyCode::End => {
            player.on_scrub_change(SCRUB_MAX);
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}
