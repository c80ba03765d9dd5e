//! Mouse input handling for the terminal player.
//!
//! Pointer motion is turned into enter/leave notifications, clicks are hit
//! tested against the layout of the last drawn frame.

use std::time::Duration;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::fullscreen::FullscreenController;
use crate::player::media::MediaElement;
use crate::player::render::{ControlLayout, ControlTarget};
use crate::player::state::InputResult;
use crate::player::widget::Player;

/// Two surface clicks closer than this are a double click.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

/// Tracks whether the pointer is inside the player and recent surface
/// clicks, across mouse events.
#[derive(Debug, Default)]
pub struct PointerTracker {
    inside: bool,
    last_surface_click: Option<Duration>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Pointer moved into the player.
    pub fn enter<M: MediaElement, F: FullscreenController>(&mut self, player: &mut Player<M, F>) {
        if !self.inside {
            self.inside = true;
            player.on_mouse_enter();
        }
    }

    /// Pointer moved out of the player, or the terminal lost focus.
    pub fn leave<M: MediaElement, F: FullscreenController>(&mut self, player: &mut Player<M, F>) {
        if self.inside {
            self.inside = false;
            player.on_mouse_leave();
        }
    }

    /// Record a surface click at `now`; true when it completes a double click.
    fn register_surface_click(&mut self, now: Duration) -> bool {
        match self.last_surface_click.take() {
            Some(previous) if now.saturating_sub(previous) <= DOUBLE_CLICK_WINDOW => true,
            _ => {
                self.last_surface_click = Some(now);
                false
            }
        }
    }
}

/// Handle a mouse event.
pub fn handle_mouse_event<M: MediaElement, F: FullscreenController>(
    mouse: MouseEvent,
    player: &mut Player<M, F>,
    layout: &ControlLayout,
    pointer: &mut PointerTracker,
) -> InputResult {
    let (col, row) = (mouse.column, mouse.row);
    if layout.is_over_player(col, row) {
        pointer.enter(player);
    } else {
        pointer.leave(player);
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(col, row, player, layout, pointer),
        MouseEventKind::Drag(MouseButton::Left) => {
            if layout.hit_test(col, row) == Some(ControlTarget::Scrubber) {
                scrub_to(col, player, layout);
            }
        }
        _ => {}
    }

    InputResult::Continue
}

fn handle_click<M: MediaElement, F: FullscreenController>(
    col: u16,
    row: u16,
    player: &mut Player<M, F>,
    layout: &ControlLayout,
    pointer: &mut PointerTracker,
) {
    let Some(target) = layout.hit_test(col, row) else {
        return;
    };
    tracing::trace!(selector = target.selector(), "Click");

    if target != ControlTarget::Surface {
        pointer.last_surface_click = None;
    }

    match target {
        ControlTarget::Surface => {
            player.toggle_play();
            if pointer.register_surface_click(player.now()) {
                player.toggle_fullscreen();
            }
        }
        ControlTarget::PlayToggle => player.toggle_play(),
        ControlTarget::Scrubber => scrub_to(col, player, layout),
        ControlTarget::Sound => player.toggle_mute(),
        ControlTarget::Fullscreen => player.toggle_fullscreen(),
        ControlTarget::Controls | ControlTarget::RemainingTime => {}
    }
}

fn scrub_to<M: MediaElement, F: FullscreenController>(
    col: u16,
    player: &mut Player<M, F>,
    layout: &ControlLayout,
) {
    if let Some(value) = layout.scrub_value_at(col, &player.view()) {
        player.on_scrub_change(value);
    }
}
