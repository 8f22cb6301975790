//! API error handling
//!
//! Typed errors for talking to the Pinboard API. Service-reported failures
//! keep the response body as their message so it reaches the user verbatim.

use std::num::ParseIntError;
use thiserror::Error;

/// Errors that can occur during API operations
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection, DNS, TLS or body-read failure
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The service answered with something other than 200 OK
    #[error("{body}")]
    Status { status: u16, body: String },

    /// Response body is not the JSON shape we expect
    #[error("Malformed response")]
    Json(#[from] serde_json::Error),

    /// A use count in the tag listing is not a non-negative integer
    #[error("Invalid use count '{value}' for tag '{tag}'")]
    UseCount {
        tag: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// The configured API base URL cannot be parsed
    #[error("Invalid API URL '{url}': {details}")]
    InvalidUrl { url: String, details: String },
}

impl ApiError {
    /// HTTP status reported by the service, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
