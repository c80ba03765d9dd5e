//! Fullscreen support.
//!
//! The player widget talks to a [`FullscreenController`]. The default
//! implementation, [`Fullscreen`], walks an ordered list of
//! [`FullscreenBackend`]s (standard API, vendor-prefixed variants,
//! terminal) and uses the first one that works.

mod api;
mod backend;
pub mod backends;
mod controller;
mod error;

pub use api::FullscreenApi;
pub use backend::FullscreenBackend;
pub use backends::TerminalFullscreen;
pub use controller::{Fullscreen, FullscreenController};
pub use error::BackendError;
