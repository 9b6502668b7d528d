//! HTTP client for tracker API requests.
//!
//! This module provides a low-level HTTP client wrapper for making
//! requests to the issue tracker backend and turning failed responses
//! into typed errors carrying the server's `error` message when present.

use super::error::ApiError;
use reqwest::Response;

/// Makes requests to the tracker backend and checks responses for
/// success before they are handed to callers.
///
pub struct Client {
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created. This should never
    /// happen in practice as reqwest::Client::builder().build() only
    /// fails on invalid configuration, which we don't use.
    pub fn new(base_url: &str) -> Self {
        Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client - this should never happen"),
        }
    }

    /// Make a GET request and return the checked response.
    ///
    pub(crate) async fn get(&self, path: &str) -> Result<Response, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.http_client.get(&url).send().await?;
        Self::require_success(response).await
    }

    /// Make a POST request with a JSON body and return the checked
    /// response.
    ///
    pub(crate) async fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<Response, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.http_client.post(&url).json(&body).send().await?;
        Self::require_success(response).await
    }

    /// Pass 2xx responses through unchanged. For anything else, read the
    /// body and extract an `error` string from it when the body parses as
    /// JSON; an unreadable or unparsable body yields no message.
    ///
    async fn require_success(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.text().await {
            Ok(body) => serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|value| {
                    value
                        .get("error")
                        .and_then(|error| error.as_str())
                        .map(str::to_owned)
                }),
            Err(e) => {
                log::warn!("Unable to read error response body: {}", e);
                None
            }
        };

        log::error!(
            "API request failed with status {}: {}",
            status,
            message.as_deref().unwrap_or("no error message in body")
        );
        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
