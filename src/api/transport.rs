//! HTTP transport seam.
//!
//! The dispatcher only needs "GET this URL with these query parameters and
//! hand me back whatever came back". [`ReqwestTransport`] is the production
//! implementation; tests substitute their own.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::{Payload, RawResponse};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Query parameters whose values are masked before a URL is stored.
const SECRET_PARAMS: &[&str] = &["token"];

/// Placeholder written over secret query values.
pub(crate) const REDACTED: &str = "<redacted>";

/// Performs a single GET request.
///
/// Any received response is `Ok`, whatever its status. `Err` means no
/// response was received.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, payload: &Payload) -> ApiResult<RawResponse>;
}

/// [`Transport`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    /// Create a transport with a 30 second timeout and connection pooling.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new() -> ApiResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .pool_max_idle_per_host(10)
            .build()?;
        Ok(Self { http_client })
    }

    /// Wrap an already configured client.
    pub fn from_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, payload: &Payload) -> ApiResult<RawResponse> {
        let response = self
            .http_client
            .get(url)
            .query(payload)
            .send()
            .await
            .map_err(|e| ApiError::Http(e.without_url()))?;

        let status = response.status().as_u16();
        let final_url = redact_url(response.url());
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Http(e.without_url()))?;

        Ok(RawResponse {
            status,
            url: final_url,
            headers,
            body,
        })
    }
}

/// Render `url` with the values of secret query parameters replaced by
/// [`REDACTED`].
pub(crate) fn redact_url(url: &Url) -> String {
    let has_secret = url
        .query_pairs()
        .any(|(key, _)| SECRET_PARAMS.contains(&key.as_ref()));
    if !has_secret {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if SECRET_PARAMS.contains(&key.as_ref()) {
                REDACTED.to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}


#[cfg(test)]
pub(crate) mod testing {
    //! Scripted transport for unit tests.

    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Replays queued outcomes in order and records every call.
    ///
    /// Once the script runs dry every further call gets a 500.
    #[derive(Clone, Default)]
    pub(crate) struct ScriptedTransport {
        script: Arc<Mutex<VecDeque<ApiResult<RawResponse>>>>,
        calls: Arc<Mutex<Vec<(String, Payload)>>>,
    }

    impl ScriptedTransport {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn respond(self, status: u16, body: &str) -> Self {
            self.script.lock().unwrap().push_back(Ok(RawResponse {
                status,
                url: String::new(),
                headers: Vec::new(),
                body: body.to_string(),
            }));
            self
        }

        pub(crate) fn fail(self, message: &str) -> Self {
            self.script
                .lock()
                .unwrap()
                .push_back(Err(ApiError::Transport(message.to_string())));
            self
        }

        pub(crate) fn calls(&self) -> Vec<(String, Payload)> {
            self.calls.lock().unwrap().clone()
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn get(&self, url: &str, payload: &Payload) -> ApiResult<RawResponse> {
            self.calls
                .lock()
                .unwrap()
                .push((url.to_string(), payload.clone()));
            self.script.lock().unwrap().pop_front().unwrap_or_else(|| {
                Ok(RawResponse {
                    status: 500,
                    url: url.to_string(),
                    headers: Vec::new(),
                    body: String::new(),
                })
            })
        }
    }
}
