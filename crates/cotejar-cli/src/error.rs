//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// Offline comparison exceeded the threshold
    #[error(
        "Comparison failed: {mismatch_percent:.2}% of pixels differ, \
         threshold is {threshold_percent:.2}%"
    )]
    ComparisonFailed {
        /// Measured mismatch percentage
        mismatch_percent: f64,
        /// Configured threshold percentage
        threshold_percent: f64,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Cotejar library error
    #[error("Cotejar error: {0}")]
    Cotejar(#[from] cotejar::CotejarError),
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
