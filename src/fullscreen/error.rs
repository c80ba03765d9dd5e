//! Fullscreen backend errors.

/// Error from a single fullscreen backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The platform does not expose this entry point
    #[error("{api} is not supported on this platform")]
    NotSupported { api: &'static str },

    /// The platform refused the request (e.g. no user gesture)
    #[error("{api} request was denied: {reason}")]
    Denied { api: &'static str, reason: String },
}
