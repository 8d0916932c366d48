//! Error types for the locnav-core crate.
//!
//! This module provides [`FetchError`] for data-service failures and
//! [`ConfigError`] for configuration loading and validation errors.

use camino::Utf8PathBuf;

/// Errors returned by the data service (the fetch collaborator).
///
/// A fetch failure never propagates past the screen controller: the
/// controller captures it into its error state and the rendering layer
/// shows a banner while the last-good rows are preserved.
///
/// # Examples
///
/// ```
/// use locnav_core::FetchError;
///
/// let error = FetchError::backend(404, "no such location");
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The backend rejected or failed the listing request.
    #[error("backend error (status {status}): {message}")]
    Backend {
        /// Status code reported by the backend.
        status: u16,
        /// Human-readable failure description.
        message: String,
    },

    /// The requested entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// An I/O error occurred while reaching the data source.
    #[error("data source I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The response payload could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Creates a new backend error.
    #[must_use]
    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: message.into(),
        }
    }

    /// Creates a new not-found error.
    #[must_use]
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A required file does not exist.
    #[error("missing required file: {0}")]
    MissingFile(Utf8PathBuf),

    /// A configuration option has an invalid value.
    #[error("invalid configuration option '{option}': {reason}")]
    InvalidOption {
        /// The name of the invalid option.
        option: String,
        /// Explanation of why the option is invalid.
        reason: String,
    },

    /// An I/O error occurred while reading configuration.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
