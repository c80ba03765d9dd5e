//! The media element the widget drives.
//!
//! The element is owned by the host; the widget only calls into it and
//! receives its notifications.

/// Notifications a media element delivers to its subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Playback position moved (`timeupdate`)
    TimeUpdate,
    /// Playback reached the end of the stream (`ended`)
    Ended,
    /// Enough data is loaded for the duration to be known (`loadeddata`)
    LoadedData,
}

/// Failures reported by a media element.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    #[error("Playback was rejected: {0}")]
    PlayRejected(String),
}

/// A native media element.
pub trait MediaElement {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Stream duration in seconds; NaN until data has loaded.
    fn duration(&self) -> f64;

    /// Move the playback position.
    fn seek(&mut self, time: f64);

    /// Start or resume playback.
    fn play(&mut self) -> Result<(), MediaError>;

    fn pause(&mut self);

    fn muted(&self) -> bool;

    fn set_muted(&mut self, muted: bool);

    /// Drain notifications raised since the last call.
    fn take_events(&mut self) -> Vec<MediaEvent>;
}
