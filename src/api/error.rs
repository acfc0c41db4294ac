//! API error types for the TikTok data client.

use thiserror::Error;

/// Error type for the TikTok data client.
///
/// Non-200 responses are not errors: they come back as
/// [`ApiResponse::Failure`](crate::api::ApiResponse::Failure). Errors are
/// reserved for requests that cannot be issued and for success bodies that
/// do not have the expected shape.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP/network error from reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport failure reported by a non-reqwest transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// A 200 response whose body is not valid JSON
    #[error("Invalid response body from {url}: {source}")]
    InvalidBody {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A 200 response whose JSON body has no top-level `data` field
    #[error("Response from {url} has no `data` field")]
    MissingData { url: String },

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
