//! Input handling for the terminal player.
//!
//! Maps keyboard, mouse and focus events onto player operations and
//! returns control flow signals to the front end loop.

mod keyboard;
mod mouse;

pub use keyboard::{handle_key_event, SEEK_STEP};
pub use mouse::{handle_mouse_event, PointerTracker, DOUBLE_CLICK_WINDOW};

use crossterm::event::Event;

use crate::fullscreen::FullscreenController;
use crate::player::media::MediaElement;
use crate::player::render::ControlLayout;
use crate::player::state::InputResult;
use crate::player::widget::Player;

/// Handle any input event, dispatching to the appropriate handler.
///
/// # Arguments
/// * `event` - The crossterm event to handle
/// * `player` - The player the event is aimed at
/// * `layout` - Layout of the last drawn frame, for hit testing
/// * `pointer` - Pointer tracking across events
///
/// # Returns
/// `InputResult` indicating whether to continue or quit
pub fn handle_event<M: MediaElement, F: FullscreenController>(
    event: Event,
    player: &mut Player<M, F>,
    layout: &ControlLayout,
    pointer: &mut PointerTracker,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, player),
        Event::Mouse(mouse) => handle_mouse_event(mouse, player, layout, pointer),
        Event::FocusLost => {
            pointer.leave(player);
            InputResult::Continue
        }
        _ => InputResult::Continue, // Resize is picked up by the next draw
    }
}
