//! Terminal fullscreen backend.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::fullscreen::api::FullscreenApi;
use crate::fullscreen::backend::FullscreenBackend;
use crate::fullscreen::error::BackendError;

/// Fullscreen inside a terminal.
///
/// The player normally renders in a centred, titled box; in fullscreen it
/// takes the whole frame. The backend only tracks the flag, the renderer
/// reads the widget state.
#[derive(Debug, Default)]
pub struct TerminalFullscreen {
    active: AtomicBool,
}

impl TerminalFullscreen {
    /// Create a new TerminalFullscreen backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FullscreenBackend for TerminalFullscreen {
    fn api(&self) -> FullscreenApi {
        FullscreenApi::Terminal
    }

    fn is_available(&self) -> bool {
        true
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    fn request(&self, target: &str) -> Result<(), BackendError> {
        tracing::trace!(root = target, "Expanding player to the full terminal frame");
        self.active.store(true, Ordering::Relaxed);
        Ok(())
    }

    fn exit(&self) -> Result<(), BackendError> {
        self.active.store(false, Ordering::Relaxed);
        Ok(())
    }
}
