//! Fullscreen capability provider used by the player widget.

use super::backend::FullscreenBackend;
use super::backends::platform_backends;

/// What the player widget needs from the platform's fullscreen support.
pub trait FullscreenController {
    /// Whether something is currently fullscreen.
    fn is_active(&self) -> bool;

    /// Ask for `target` to go fullscreen.
    ///
    /// Returns `true` if a platform call was issued and accepted, `false`
    /// when no entry point exists or every one refused.
    fn request(&mut self, target: &str) -> bool;

    /// Leave fullscreen. Same return contract as [`request`](Self::request).
    fn exit(&mut self) -> bool;
}

/// Orchestrates fullscreen calls over the available backends.
///
/// Backends are tried in [`FullscreenApi`](super::FullscreenApi) preference
/// order; the first available one that accepts the call wins. With no
/// usable backend every call is a silent no-op.
pub struct Fullscreen {
    backends: Vec<Box<dyn FullscreenBackend>>,
}

impl Fullscreen {
    /// Create with platform-appropriate backends.
    pub fn new() -> Self {
        Self::with_backends(platform_backends())
    }

    /// Create with specific backends (for testing or embedding).
    pub fn with_backends(mut backends: Vec<Box<dyn FullscreenBackend>>) -> Self {
        backends.sort_by_key(|backend| backend.api());
        Self { backends }
    }

    /// Get a reference to the backends, in preference order.
    pub fn backends(&self) -> &[Box<dyn FullscreenBackend>] {
        &self.backends
    }
}

impl Default for Fullscreen {
    fn default() -> Self {
        Self::new()
    }
}

impl FullscreenController for Fullscreen {
    fn is_active(&self) -> bool {
        self.backends
            .iter()
            .any(|backend| backend.is_available() && backend.is_active())
    }

    fn request(&mut self, target: &str) -> bool {
        for backend in self.backends.iter().filter(|b| b.is_available()) {
            let api = backend.api();
            match backend.request(target) {
                Ok(()) => {
                    tracing::debug!(method = api.request_method(), root = target, "Entered fullscreen");
                    return true;
                }
                Err(e) => {
                    tracing::warn!(method = api.request_method(), "Fullscreen request failed: {}", e);
                }
            }
        }
        tracing::debug!(root = target, "No fullscreen backend accepted the request");
        false
    }

    fn exit(&mut self) -> bool {
        for backend in self.backends.iter().filter(|b| b.is_available()) {
            let api = backend.api();
            match backend.exit() {
                Ok(()) => {
                    tracing::debug!(method = api.exit_method(), "Exited fullscreen");
                    return true;
                }
                Err(e) => {
                    tracing::warn!(method = api.exit_method(), "Fullscreen exit failed: {}", e);
                }
            }
        }
        tracing::debug!("No fullscreen backend accepted the exit");
        false
    }
}
