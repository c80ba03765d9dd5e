//! Construction-time configuration of the player widget.
//!
//! Props are validated before a widget is built: a player never exists with
//! a malformed source list or an unknown media attribute.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default delay before the control overlay hides while playing.
pub const DEFAULT_AUTOHIDE_DELAY: Duration = Duration::from_millis(3000);

/// Default quiet window for time-progress notifications.
pub const DEFAULT_TIME_UPDATE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Default id of the root container (the fullscreen target).
pub const DEFAULT_ROOT_ID: &str = "player";

const MEDIA_TOP_LEVEL_TYPES: &[&str] = &["video", "audio", "application"];

/// A playable media resource: url plus mime type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    pub url: String,
    pub mime_type: String,
}

impl SourceDescriptor {
    pub fn new(url: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Check that this descriptor describes something playable.
    ///
    /// `index` is only used to point at the offending entry in the error.
    pub fn validate(&self, index: usize) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::EmptyUrl { index });
        }
        if !is_media_type(&self.mime_type) {
            return Err(ConfigError::InvalidMimeType {
                index,
                url: self.url.clone(),
                mime_type: self.mime_type.clone(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for SourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.url, self.mime_type)
    }
}

/// Parses `URL[#MIME]`. Without an explicit type, the extension decides.
impl FromStr for SourceDescriptor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((url, mime)) = s.rsplit_once('#') {
            if mime.contains('/') {
                return Ok(Self::new(url, mime));
            }
        }
        match infer_mime_type(s) {
            Some(mime) => Ok(Self::new(s, mime)),
            None => Err(ConfigError::UnknownMimeType { url: s.to_string() }),
        }
    }
}

/// `type/subtype` with a media top-level type.
fn is_media_type(mime: &str) -> bool {
    let Some((top, sub)) = mime.split_once('/') else {
        return false;
    };
    MEDIA_TOP_LEVEL_TYPES.contains(&top)
        && !sub.is_empty()
        && !sub.contains('/')
        && !mime.chars().any(char::is_whitespace)
}

/// Guess a mime type from the url's file extension.
pub fn infer_mime_type(url: &str) -> Option<&'static str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let ext = path.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "mp4" | "m4v" => Some("video/mp4"),
        "webm" => Some("video/webm"),
        "ogv" | "ogg" => Some("video/ogg"),
        "mov" => Some("video/quicktime"),
        "m3u8" => Some("application/x-mpegURL"),
        "mpd" => Some("application/dash+xml"),
        "mp3" => Some("audio/mpeg"),
        _ => None,
    }
}

/// How much of the media the element should fetch up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preload {
    None,
    Metadata,
    #[default]
    Auto,
}

impl FromStr for Preload {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "metadata" => Ok(Self::Metadata),
            "auto" | "" => Ok(Self::Auto),
            _ => Err(()),
        }
    }
}

impl Preload {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Metadata => "metadata",
            Self::Auto => "auto",
        }
    }
}

/// Attributes forwarded to the media element.
///
/// This is an allow-list: anything not named here is rejected. Native
/// controls are not configurable, the widget always turns them off.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MediaAttributes {
    pub loop_playback: bool,
    pub poster: Option<String>,
    pub preload: Preload,
    pub plays_inline: bool,
    pub class_name: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl MediaAttributes {
    /// Apply a single `key`/`value` pair using the element's attribute names.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidAttributeValue {
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "loop" => self.loop_playback = parse_flag(value).ok_or_else(invalid)?,
            "playsinline" => self.plays_inline = parse_flag(value).ok_or_else(invalid)?,
            "poster" => self.poster = Some(value.to_string()),
            "class" | "className" => self.class_name = Some(value.to_string()),
            "preload" => self.preload = value.parse().map_err(|_| invalid())?,
            "width" => self.width = Some(value.parse().map_err(|_| invalid())?),
            "height" => self.height = Some(value.parse().map_err(|_| invalid())?),
            "controls" => {
                tracing::debug!("Ignoring 'controls' attribute, native controls are always off");
            }
            _ => {
                return Err(ConfigError::UnknownAttribute {
                    key: key.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Parse and apply a `KEY=VALUE` string. A bare `KEY` means `KEY=true`.
    pub fn set_pair(&mut self, pair: &str) -> Result<(), ConfigError> {
        match pair.split_once('=') {
            Some((key, _)) if key.trim().is_empty() => {
                Err(ConfigError::MalformedAttribute(pair.to_string()))
            }
            Some((key, value)) => self.set(key.trim(), value.trim()),
            None if !pair.trim().is_empty() => self.set(pair.trim(), "true"),
            None => Err(ConfigError::MalformedAttribute(pair.to_string())),
        }
    }

    /// The attribute list as rendered on the media element.
    ///
    /// Always ends with `controls=false`.
    pub fn rendered(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();
        if let Some(class_name) = &self.class_name {
            attrs.push(("class", class_name.clone()));
        }
        if self.loop_playback {
            attrs.push(("loop", "true".to_string()));
        }
        if self.plays_inline {
            attrs.push(("playsinline", "true".to_string()));
        }
        if let Some(poster) = &self.poster {
            attrs.push(("poster", poster.clone()));
        }
        attrs.push(("preload", self.preload.as_str().to_string()));
        if let Some(width) = self.width {
            attrs.push(("width", width.to_string()));
        }
        if let Some(height) = self.height {
            attrs.push(("height", height.to_string()));
        }
        attrs.push(("controls", "false".to_string()));
        attrs
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "" | "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Everything the player widget is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProps {
    pub sources: Vec<SourceDescriptor>,
    pub autoplay: bool,
    pub muted: bool,
    pub autohide_controls_delay: Duration,
    pub time_update_debounce: Duration,
    pub root_id: String,
    pub attributes: MediaAttributes,
}

impl PlayerProps {
    /// Create props with default settings for the given sources.
    pub fn new(sources: Vec<SourceDescriptor>) -> Self {
        Self {
            sources,
            autoplay: false,
            muted: false,
            autohide_controls_delay: DEFAULT_AUTOHIDE_DELAY,
            time_update_debounce: DEFAULT_TIME_UPDATE_DEBOUNCE,
            root_id: DEFAULT_ROOT_ID.to_string(),
            attributes: MediaAttributes::default(),
        }
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    pub fn with_autohide_delay(mut self, delay: Duration) -> Self {
        self.autohide_controls_delay = delay;
        self
    }

    pub fn with_time_update_debounce(mut self, window: Duration) -> Self {
        self.time_update_debounce = window;
        self
    }

    pub fn with_root_id(mut self, root_id: impl Into<String>) -> Self {
        self.root_id = root_id.into();
        self
    }

    pub fn with_attributes(mut self, attributes: MediaAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Reject props the widget cannot render.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sources.is_empty() {
            return Err(ConfigError::NoSources);
        }
        for (index, source) in self.sources.iter().enumerate() {
            source.validate(index)?;
        }
        Ok(())
    }
}
