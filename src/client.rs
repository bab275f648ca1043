use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::constants::{NOMINATIM_API_BASE, NWS_API_BASE, REQUEST_TIMEOUT, USER_AGENT};
use crate::error::RequestError;

/// Base URLs of the upstream services.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub nominatim: String,
    pub nws: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            nominatim: NOMINATIM_API_BASE.to_string(),
            nws: NWS_API_BASE.to_string(),
        }
    }
}

impl Endpoints {
    /// Points both services at one host, e.g. a local mock server.
    pub fn single_host(base: &str) -> Self {
        let base = base.trim_end_matches('/').to_string();
        Self {
            nominatim: base.clone(),
            nws: base,
        }
    }
}

/// HTTP client shared by both tools: fixed user agent and timeout.
#[derive(Clone)]
pub struct ApiClient {
    client: Arc<Client>,
}

impl ApiClient {
    /// Creates a client with the crate user agent and request timeout
    pub fn new() -> Result<Self, RequestError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Makes an HTTP GET request and deserializes the JSON response.
    ///
    /// The body is read fully before decoding so that a shape mismatch is
    /// reported as [`RequestError::Decode`] rather than a transport error.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RequestError> {
        tracing::debug!(url, ?query, "GET");

        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, %status, "request failed");
            return Err(RequestError::Status {
                status,
                url: response.url().to_string(),
            });
        }

        let body = response.bytes().await?;
        let data = serde_json::from_slice::<T>(&body)?;
        Ok(data)
    }
}
