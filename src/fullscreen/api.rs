//! Identifiers for the known fullscreen entry points.

/// Which fullscreen API a backend drives.
///
/// The declaration order is the preference order: the standard API first,
/// then the vendor-prefixed variants, then the terminal fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FullscreenApi {
    /// `requestFullscreen` / `exitFullscreen`
    Standard,
    /// `webkitRequestFullscreen` / `webkitExitFullscreen`
    Webkit,
    /// `mozRequestFullScreen` / `mozCancelFullScreen`
    Moz,
    /// `msRequestFullscreen` / `msExitFullscreen`
    Ms,
    /// Player fills the whole terminal frame
    Terminal,
}

impl FullscreenApi {
    /// Every variant, in preference order.
    pub const PREFERENCE: [FullscreenApi; 5] = [
        Self::Standard,
        Self::Webkit,
        Self::Moz,
        Self::Ms,
        Self::Terminal,
    ];

    /// Name of the request entry point.
    pub fn request_method(&self) -> &'static str {
        match self {
            Self::Standard => "requestFullscreen",
            Self::Webkit => "webkitRequestFullscreen",
            Self::Moz => "mozRequestFullScreen",
            Self::Ms => "msRequestFullscreen",
            Self::Terminal => "terminal.enter",
        }
    }

    /// Name of the exit entry point.
    pub fn exit_method(&self) -> &'static str {
        match self {
            Self::Standard => "exitFullscreen",
            Self::Webkit => "webkitExitFullscreen",
            Self::Moz => "mozCancelFullScreen",
            Self::Ms => "msExitFullscreen",
            Self::Terminal => "terminal.exit",
        }
    }

    /// Name of the "is fullscreen active" query.
    pub fn state_query(&self) -> &'static str {
        match self {
            Self::Standard => "fullscreenElement",
            Self::Webkit => "webkitIsFullScreen",
            Self::Moz => "mozFullScreen",
            Self::Ms => "msFullscreenElement",
            Self::Terminal => "terminal.active",
        }
    }
}
