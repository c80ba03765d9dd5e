//! Player configuration errors.

/// Errors raised while validating player properties.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("At least one source is required")]
    NoSources,

    #[error("Invalid source #{index}: url is empty")]
    EmptyUrl { index: usize },

    #[error("Invalid source #{index} ({url}): '{mime_type}' is not a playable media type")]
    InvalidMimeType {
        index: usize,
        url: String,
        mime_type: String,
    },

    #[error("Cannot infer media type for '{url}'; append '#type/subtype'")]
    UnknownMimeType { url: String },

    #[error("Unknown media attribute '{key}'")]
    UnknownAttribute { key: String },

    #[error("Invalid value '{value}' for media attribute '{key}'")]
    InvalidAttributeValue { key: String, value: String },

    #[error("Media attribute must be KEY=VALUE, got '{0}'")]
    MalformedAttribute(String),
}
