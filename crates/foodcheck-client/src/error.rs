//! Error types for the food API client.

use thiserror::Error;

/// Errors that can occur while talking to the food service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The configured base URL is unusable.
    #[error("invalid service URL: {0}")]
    InvalidUrl(String),

    /// Network request failed or timed out.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("food service returned HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body, or the body itself.
        message: String,
    },

    /// Failed to parse JSON response.
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl ClientError {
    /// Returns a user-friendly error message suitable for display.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::InvalidUrl(_) => "The food service address is not a valid URL.",
            Self::Network(_) => {
                "Could not reach the food service. Please check that it is running."
            }
            Self::Status { status, .. } if *status >= 500 => {
                "The food service failed to answer. Please try again later."
            }
            Self::Status { .. } => "The food service rejected the request.",
            Self::JsonParse(_) => "The food service sent an unreadable response.",
        }
    }

    /// Returns whether this error is potentially recoverable with a retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            Self::InvalidUrl(_) | Self::JsonParse(_) => false,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
