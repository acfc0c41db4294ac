//! Authenticated request dispatcher.
//!
//! [`RequestDispatcher`] owns the base URL, the API token and a
//! [`Transport`]. It issues GET requests with a bounded number of attempts
//! and turns the outcome into an [`ApiResponse`].
//!
//! # Example
//!
//! ```rust,ignore
//! use tiktok_data_sdk::api::{Endpoint, Payload, RequestDispatcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dispatcher = RequestDispatcher::builder("my-token")
//!         .base_url("https://www.influencerhunters.com/apis")
//!         .build()?;
//!
//!     let url = dispatcher.url_for(Endpoint::UserInfo);
//!     let payload = Payload::new().with("username", "someone").with("token", "my-token");
//!     let response = dispatcher.send_request(&url, &payload, 2).await?;
//!     println!("success: {}", response.is_success());
//!
//!     Ok(())
//! }
//! ```

use std::fmt;

use serde_json::Value;

use crate::api::endpoints::{Endpoint, Request};
use crate::api::error::{ApiError, ApiResult};
use crate::api::transport::{ReqwestTransport, Transport, REDACTED};
use crate::api::types::{ApiResponse, Failure, Payload, RawResponse};
use crate::network::DEFAULT_IH_API_URL;

/// Number of attempts made by [`RequestDispatcher::execute`].
pub const DEFAULT_ATTEMPTS: u32 = 2;

/// Builder for configuring [`RequestDispatcher`].
#[derive(Clone)]
pub struct RequestDispatcherBuilder {
    base_url: String,
    token: String,
}

impl RequestDispatcherBuilder {
    /// Create a new builder for the given token, pointing at the IH server.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_IH_API_URL.to_string(),
            token: token.into(),
        }
    }

    /// Set the API base URL. A trailing slash is removed.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build a dispatcher using the default reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn build(self) -> ApiResult<RequestDispatcher> {
        let transport = ReqwestTransport::new()?;
        Ok(self.build_with_transport(transport))
    }

    /// Build a dispatcher around a caller-supplied transport.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> RequestDispatcher<T> {
        RequestDispatcher {
            base_url: self.base_url,
            token: self.token,
            transport,
        }
    }
}

impl fmt::Debug for RequestDispatcherBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestDispatcherBuilder")
            .field("base_url", &self.base_url)
            .field("token", &REDACTED)
            .finish()
    }
}

/// Sends authenticated GET requests with a bounded number of attempts.
///
/// Base URL and token are fixed at construction. The dispatcher holds no
/// other state, so it is as thread-safe as its transport.
pub struct RequestDispatcher<T = ReqwestTransport> {
    base_url: String,
    /// API token. Never logged or printed.
    token: String,
    transport: T,
}

impl RequestDispatcher<ReqwestTransport> {
    /// Create a dispatcher for `token` against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> ApiResult<Self> {
        RequestDispatcherBuilder::new(token).base_url(base_url).build()
    }

    /// Create a new builder for custom configuration.
    pub fn builder(token: impl Into<String>) -> RequestDispatcherBuilder {
        RequestDispatcherBuilder::new(token)
    }
}

impl<T: Transport> RequestDispatcher<T> {
    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Full URL of `endpoint` on this dispatcher's server.
    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Dispatch an endpoint descriptor.
    ///
    /// Appends the token as the last query parameter and sends the request
    /// with [`DEFAULT_ATTEMPTS`] attempts.
    pub async fn execute(&self, request: Request) -> ApiResult<ApiResponse> {
        let url = self.url_for(request.endpoint);
        let payload = request.payload.with("token", self.token.as_str());
        self.send_request(&url, &payload, DEFAULT_ATTEMPTS).await
    }

    /// GET `endpoint` with `payload` as query parameters, up to `attempts`
    /// times, stopping at the first 200.
    ///
    /// On a 200 the `data` field of the JSON body is returned as
    /// [`ApiResponse::Success`]. If no attempt returns 200 the last failure
    /// is returned as [`ApiResponse::Failure`]; non-200 statuses and
    /// transport errors are treated alike. Attempts are not delayed.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidParameter`] if `attempts` is 0
    /// - [`ApiError::InvalidBody`] if a 200 body is not JSON
    /// - [`ApiError::MissingData`] if a 200 body has no `data` field
    pub async fn send_request(
        &self,
        endpoint: &str,
        payload: &Payload,
        attempts: u32,
    ) -> ApiResult<ApiResponse> {
        if attempts == 0 {
            return Err(ApiError::InvalidParameter(
                "attempts must be at least 1".to_string(),
            ));
        }

        let mut attempt = 1;

        loop {
            let failure = match self.transport.get(endpoint, payload).await {
                Ok(response) if response.is_ok() => {
                    return Self::extract_data(endpoint, response).map(ApiResponse::Success);
                }
                Ok(response) => {
                    tracing::debug!(
                        attempt,
                        attempts,
                        status = response.status,
                        endpoint,
                        "Request returned non-200 status"
                    );
                    Failure::Response(response)
                }
                Err(e) => {
                    tracing::debug!(
                        attempt,
                        attempts,
                        error = %e,
                        endpoint,
                        "Request failed without a response"
                    );
                    Failure::Transport(e)
                }
            };

            if attempt >= attempts {
                tracing::warn!(attempts, status = ?failure.status(), endpoint, "All attempts failed");
                return Ok(ApiResponse::Failure(failure));
            }

            attempt += 1;
        }
    }

    /// Pull the `data` field out of a 200 body.
    fn extract_data(endpoint: &str, response: RawResponse) -> ApiResult<Value> {
        let body = response.json().map_err(|e| {
            tracing::warn!(endpoint, error = %e, "Success response is not valid JSON");
            ApiError::InvalidBody {
                url: endpoint.to_string(),
                source: e,
            }
        })?;

        let data = match body {
            Value::Object(mut fields) => fields.remove("data"),
            _ => None,
        };

        data.ok_or_else(|| {
            tracing::warn!(endpoint, "Success response has no `data` field");
            ApiError::MissingData {
                url: endpoint.to_string(),
            }
        })
    }
}

impl<T> fmt::Debug for RequestDispatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestDispatcher")
            .field("base_url", &self.base_url)
            .field("token", &REDACTED)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::testing::ScriptedTransport;
    use crate::api::types::ParamValue;
    use serde_json::json;

    const URL: &str = "https://api.test/tt/user/info";

    fn dispatcher(transport: ScriptedTransport) -> RequestDispatcher<ScriptedTransport> {
        RequestDispatcher::builder("T")
            .base_url("https://api.test/")
            .build_with_transport(transport)
    }

    fn payload() -> Payload {
        Payload::new().with("username", "x").with("token", "T")
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let d = dispatcher(ScriptedTransport::new());
        assert_eq!(d.base_url(), "https://api.test");
        assert_eq!(d.url_for(Endpoint::UserPosts), "https://api.test/tt/user/posts");
    }

    #[test]
    fn test_builder_defaults_to_ih_server() {
        let d = RequestDispatcher::builder("T").build_with_transport(ScriptedTransport::new());
        assert_eq!(d.base_url(), DEFAULT_IH_API_URL);
    }

    #[test]
    fn test_client_creation() {
        let d = RequestDispatcher::new("https://api.test", "T").unwrap();
        assert_eq!(d.base_url(), "https://api.test");
    }

    #[test]
    fn test_debug_redacts_token() {
        let d = RequestDispatcher::builder("super-secret").build_with_transport(ScriptedTransport::new());
        let printed = format!("{:?}", d);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));

        let builder = RequestDispatcher::builder("super-secret");
        assert!(!format!("{:?}", builder).contains("super-secret"));
    }

    #[tokio::test]
    async fn test_first_success_returns_data() {
        let transport = ScriptedTransport::new().respond(200, r#"{"data": [1, 2, 3]}"#);
        let d = dispatcher(transport.clone());

        let response = d.send_request(URL, &payload(), 2).await.unwrap();

        assert_eq!(response.into_parts(), (json!([1, 2, 3]), true));
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_retry_then_success() {
        let transport = ScriptedTransport::new()
            .respond(500, "internal error")
            .respond(200, r#"{"data": {}}"#);
        let d = dispatcher(transport.clone());

        let response = d.send_request(URL, &payload(), 2).await.unwrap();

        assert_eq!(response.into_parts(), (json!({}), true));
        assert_eq!(transport.call_count(), 2);
    }

    #[tokio::test]
    async fn test_exhausted_attempts_return_last_response() {
        let transport = ScriptedTransport::new()
            .respond(404, "first")
            .respond(404, "second");
        let d = dispatcher(transport.clone());

        let response = d.send_request(URL, &payload(), 2).await.unwrap();

        match response {
            ApiResponse::Failure(Failure::Response(raw)) => {
                assert_eq!(raw.status, 404);
                assert_eq!(raw.body, "second");
            }
            other => panic!("expected failed response, got {:?}", other),
        }
        assert_eq!(transport.call_count(), 2);
    }

    #[tokio::test]
    async fn test_single_attempt_makes_one_call() {
        let transport = ScriptedTransport::new().respond(503, "").respond(200, r#"{"data": 1}"#);
        let d = dispatcher(transport.clone());

        let response = d.send_request(URL, &payload(), 1).await.unwrap();

        assert!(!response.is_success());
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_attempts_are_bounded() {
        let transport = ScriptedTransport::new();
        let d = dispatcher(transport.clone());

        let response = d.send_request(URL, &payload(), 5).await.unwrap();

        assert_eq!(response.failure().and_then(Failure::status), Some(500));
        assert_eq!(transport.call_count(), 5);
    }

    #[tokio::test]
    async fn test_zero_attempts_rejected() {
        let transport = ScriptedTransport::new();
        let d = dispatcher(transport.clone());

        let result = d.send_request(URL, &payload(), 0).await;

        assert!(matches!(result, Err(ApiError::InvalidParameter(_))));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_transport_error_is_retried() {
        let transport = ScriptedTransport::new()
            .fail("connection reset")
            .respond(200, r#"{"data": "ok"}"#);
        let d = dispatcher(transport.clone());

        let response = d.send_request(URL, &payload(), 2).await.unwrap();

        assert_eq!(response.data(), Some(&json!("ok")));
        assert_eq!(transport.call_count(), 2);
    }

    #[tokio::test]
    async fn test_transport_error_on_last_attempt() {
        let transport = ScriptedTransport::new().respond(502, "").fail("timed out");
        let d = dispatcher(transport.clone());

        let response = d.send_request(URL, &payload(), 2).await.unwrap();

        assert!(matches!(
            response,
            ApiResponse::Failure(Failure::Transport(ApiError::Transport(_)))
        ));
    }

    #[tokio::test]
    async fn test_missing_data_is_an_error() {
        let transport = ScriptedTransport::new()
            .respond(200, r#"{"result": []}"#)
            .respond(200, r#"{"data": []}"#);
        let d = dispatcher(transport.clone());

        let result = d.send_request(URL, &payload(), 2).await;

        assert!(matches!(result, Err(ApiError::MissingData { .. })));
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_non_object_body_is_missing_data() {
        let transport = ScriptedTransport::new().respond(200, "[1, 2]");
        let d = dispatcher(transport);

        let result = d.send_request(URL, &payload(), 2).await;

        assert!(matches!(result, Err(ApiError::MissingData { .. })));
    }

    #[tokio::test]
    async fn test_invalid_json_body_is_an_error() {
        let transport = ScriptedTransport::new().respond(200, "<html>oops</html>");
        let d = dispatcher(transport.clone());

        let result = d.send_request(URL, &payload(), 2).await;

        assert!(matches!(result, Err(ApiError::InvalidBody { .. })));
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_null_data_is_success() {
        let transport = ScriptedTransport::new().respond(200, r#"{"data": null}"#);
        let d = dispatcher(transport);

        let response = d.send_request(URL, &payload(), 2).await.unwrap();

        assert_eq!(response.into_parts(), (Value::Null, true));
    }

    #[tokio::test]
    async fn test_execute_appends_token_last() {
        let transport = ScriptedTransport::new().respond(200, r#"{"data": {}}"#);
        let d = dispatcher(transport.clone());

        d.execute(Request::user_posts("x", 2)).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        let (url, sent) = &calls[0];
        assert_eq!(url, "https://api.test/tt/user/posts");
        assert_eq!(sent.keys().collect::<Vec<_>>(), vec!["username", "depth", "token"]);
        assert_eq!(sent.get("token"), Some(&ParamValue::from("T")));
    }

    #[tokio::test]
    async fn test_execute_uses_default_attempts() {
        let transport = ScriptedTransport::new();
        let d = dispatcher(transport.clone());

        let response = d.execute(Request::user_info("x")).await.unwrap();

        assert!(!response.is_success());
        assert_eq!(transport.call_count(), DEFAULT_ATTEMPTS as usize);
    }
}
