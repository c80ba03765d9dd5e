//! TUI (Text User Interface) support for vidctl
//!
//! Shared theme and layout helpers used by the terminal player and by
//! colored CLI output.

pub mod theme;
pub mod ui;

pub use theme::Theme;
