//! Error types for foodie-client

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// API client errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True when the server rejected the request as invalid (HTTP 400).
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Api { status: 400, .. })
    }
}
