//! Platform-specific fullscreen backends.

mod terminal;

pub use terminal::TerminalFullscreen;

use super::backend::FullscreenBackend;

/// Get the platform-appropriate backends in priority order.
pub fn platform_backends() -> Vec<Box<dyn FullscreenBackend>> {
    vec![Box::new(TerminalFullscreen::new())]
}
