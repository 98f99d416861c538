//! Error types for the galaxy visualizer

use thiserror::Error;

/// The main error type for galaxy operations
#[derive(Debug, Error)]
pub enum GalaxyError {
    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    #[error("Animation error: {0}")]
    AnimationError(String),

    #[error("Scene error: {0}")]
    SceneError(String),

    #[error("Render error: {0}")]
    RenderError(String),
}

/// Result type alias for galaxy operations
pub type Result<T> = std::result::Result<T, GalaxyError>;

impl From<toml::de::Error> for GalaxyError {
    fn from(err: toml::de::Error) -> Self {
        GalaxyError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for GalaxyError {
    fn from(err: toml::ser::Error) -> Self {
        GalaxyError::TomlSerError(err.to_string())
    }
}
