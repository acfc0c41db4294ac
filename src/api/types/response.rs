//! Response types returned by the request dispatcher.

use serde_json::Value;

use crate::api::error::ApiError;

/// An HTTP response as received, before any interpretation of its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Final request URL, query string included
    pub url: String,
    /// Response headers in arrival order
    pub headers: Vec<(String, String)>,
    /// Response body as text
    pub body: String,
}

impl RawResponse {
    /// Whether the status is exactly 200.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Parse the body as JSON.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Look up a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Why the last attempt of a request did not succeed.
#[derive(Debug)]
pub enum Failure {
    /// The server answered with a status other than 200.
    Response(RawResponse),
    /// No response was received.
    Transport(ApiError),
}

impl Failure {
    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Failure::Response(response) => Some(response.status),
            Failure::Transport(_) => None,
        }
    }

    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            Failure::Response(response) => Some(response),
            Failure::Transport(_) => None,
        }
    }
}

/// Outcome of a dispatched request.
#[derive(Debug)]
pub enum ApiResponse {
    /// The value of the `data` field of a 200 response.
    Success(Value),
    /// Every attempt failed; holds the last one.
    Failure(Failure),
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    /// Borrow the `data` payload of a successful response.
    pub fn data(&self) -> Option<&Value> {
        match self {
            ApiResponse::Success(data) => Some(data),
            ApiResponse::Failure(_) => None,
        }
    }

    /// Take the `data` payload of a successful response.
    pub fn into_data(self) -> Option<Value> {
        match self {
            ApiResponse::Success(data) => Some(data),
            ApiResponse::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            ApiResponse::Success(_) => None,
            ApiResponse::Failure(failure) => Some(failure),
        }
    }

    /// Split into `(data, success)`. `data` is `Value::Null` on failure.
    pub fn into_parts(self) -> (Value, bool) {
        match self {
            ApiResponse::Success(data) => (data, true),
            ApiResponse::Failure(_) => (Value::Null, false),
        }
    }
}
