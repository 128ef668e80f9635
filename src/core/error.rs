//! Custom error types for the application.
//!
//! Two categories, matching how each is surfaced:
//!
//! - [`ParamError`] - missing query parameters; fatal, the app never mounts
//! - [`FetchError`] - network/decode failures for a listing; rendered inline

use thiserror::Error;

/// Required query parameter missing from the page URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// `username` absent or empty
    #[error("missing 'username' query parameter")]
    MissingUsername,
    /// `repo` absent or empty
    #[error("missing 'repo' query parameter")]
    MissingRepo,
    /// Browser location not available
    #[error("page location not available")]
    NoLocation,
}

/// Network/fetch-related errors for listing requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, DNS, offline, ...)
    #[error("Network error: {0}")]
    Network(String),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}
