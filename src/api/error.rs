//! Error types for the profile API client.
//!
//! The `Display` text of each variant is what ends up in a
//! `Resource::Error`, so it is kept short and user facing.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the profile API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The configured base URL cannot be joined with an endpoint path.
    #[error("Invalid URL '{url}'")]
    InvalidUrl { url: String },

    /// The request did not complete within the transport's limits.
    #[error("timeout")]
    Timeout,

    /// Connection refused, reset, TLS failure and similar transport errors.
    #[error("{message}")]
    Connection { message: String },

    /// The server answered with a non-success status.
    #[error("HTTP {status}")]
    Status { status: StatusCode },

    /// The body was present but not the JSON we expected.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return ApiError::Timeout;
        }
        ApiError::Connection {
            message: err.to_string(),
        }
    }
}

impl ApiError {
    /// Stable name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Build(_) => "build",
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::Timeout => "timeout",
            ApiError::Connection { .. } => "connection",
            ApiError::Status { .. } => "status",
            ApiError::Decode(_) => "decode",
        }
    }
}
