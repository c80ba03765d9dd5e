//! FullscreenBackend trait.

use super::api::FullscreenApi;
use super::error::BackendError;

/// One concrete way of putting a node into fullscreen.
///
/// Each implementation wraps a single entry point (the standard API, a
/// vendor-prefixed variant, or the terminal frame).
pub trait FullscreenBackend: Send + Sync {
    /// The API this backend drives.
    fn api(&self) -> FullscreenApi;

    /// Whether the entry point exists on this platform.
    ///
    /// Should be cheap; it is checked before every request.
    fn is_available(&self) -> bool;

    /// Whether this backend currently has a node in fullscreen.
    fn is_active(&self) -> bool;

    /// Put the node identified by `target` into fullscreen.
    fn request(&self, target: &str) -> Result<(), BackendError>;

    /// Leave fullscreen.
    fn exit(&self) -> Result<(), BackendError>;
}
