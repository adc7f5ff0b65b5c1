//! Error types for rendering

use qbloch_core::BlochError;
use thiserror::Error;

/// Errors that can occur while building or writing a scene
#[derive(Debug, Error)]
pub enum RenderError {
    /// One color is required per plotted coordinate
    #[error("Got {colors} colors for {coords} coordinates")]
    ColorCountMismatch { colors: usize, coords: usize },

    /// Unrecognised color specification
    #[error("Invalid color '{0}'")]
    InvalidColor(String),

    /// Configuration out of range
    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),

    /// Drawing backend failure
    #[error("Drawing backend error: {0}")]
    Backend(String),

    /// GIF encoding failure
    #[error("GIF encoding error: {0}")]
    Gif(#[from] gif::EncodingError),

    /// File system failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the coordinate layer
    #[error(transparent)]
    Core(#[from] BlochError),
}

impl RenderError {
    /// Create a color count mismatch error
    pub fn color_count(colors: usize, coords: usize) -> Self {
        Self::ColorCountMismatch { colors, coords }
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;
