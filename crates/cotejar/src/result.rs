//! Result and error types for Cotejar.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for Cotejar operations
pub type CotejarResult<T> = Result<T, CotejarError>;

/// Errors that can occur in Cotejar
///
/// Two categories matter to callers: environment failures (capture, codec,
/// filesystem) that mean the comparison could not run at all, and
/// [`CotejarError::MismatchExceeded`], the assertion-style failure produced
/// when a comparison ran and the images differ beyond tolerance. Use
/// [`CotejarError::is_mismatch`] to tell them apart in reporting layers.
#[derive(Debug, Error)]
pub enum CotejarError {
    /// Render target could not produce a screenshot
    #[error("Screenshot capture failed: {message}")]
    Capture {
        /// Error message
        message: String,
    },

    /// Image bytes could not be decoded
    #[error("Failed to decode image: {message}")]
    ImageDecode {
        /// Error message
        message: String,
    },

    /// Image could not be encoded to PNG
    #[error("Failed to encode image: {message}")]
    ImageEncode {
        /// Error message
        message: String,
    },

    /// Screenshot name is empty or would escape the artifact directories
    #[error("Invalid screenshot name {name:?}: {message}")]
    InvalidName {
        /// Offending name
        name: String,
        /// Error message
        message: String,
    },

    /// Ignore region argument could not be parsed
    #[error("Invalid ignore region {input:?}: {message}")]
    InvalidRegion {
        /// Offending input
        input: String,
        /// Error message
        message: String,
    },

    /// Visual mismatch above the configured threshold
    #[error(
        "Visual mismatch for {name:?}: {mismatch_percent:.2}% of pixels differ, \
         threshold is {threshold_percent:.2}% (diff image: {})",
        .diff_path.display()
    )]
    MismatchExceeded {
        /// Screenshot name
        name: String,
        /// Measured mismatch percentage (0.0-100.0)
        mismatch_percent: f64,
        /// Configured threshold percentage (0.0-100.0)
        threshold_percent: f64,
        /// Location of the rendered diff image
        diff_path: PathBuf,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CotejarError {
    /// Create a capture error
    #[must_use]
    pub fn capture(message: impl Into<String>) -> Self {
        Self::Capture {
            message: message.into(),
        }
    }

    /// Create a decode error
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::ImageDecode {
            message: message.into(),
        }
    }

    /// Create an encode error
    #[must_use]
    pub fn encode(message: impl Into<String>) -> Self {
        Self::ImageEncode {
            message: message.into(),
        }
    }

    /// Whether this is a visual mismatch (assertion failure) rather than an
    /// environment or I/O error
    #[must_use]
    pub const fn is_mismatch(&self) -> bool {
        matches!(self, Self::MismatchExceeded { .. })
    }
}
