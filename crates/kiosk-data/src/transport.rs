//! Transport trait and the reqwest-backed implementation.

use crate::{FetchError, Response};
use async_trait::async_trait;
use tracing::debug;

/// The two HTTP verbs the storefront needs, behind a trait so services can
/// be exercised against an in-memory transport in tests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET request.
    async fn get(&self, url: &str) -> Result<Response, FetchError>;

    /// Issue a POST request with a JSON body.
    async fn post_json(&self, url: &str, body: &[u8]) -> Result<Response, FetchError>;
}

/// Transport backed by a shared [`reqwest::Client`].
///
/// Relies on the client's default timeout behavior; there is no per-request
/// timeout override and no retry.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a new transport with a fresh client.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Response, FetchError> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        read_response(response).await
    }

    async fn post_json(&self, url: &str, body: &[u8]) -> Result<Response, FetchError> {
        debug!(url, "POST");
        let response = self
            .client
            .post(url)
            .header("content-type", "application/json")
            .body(body.to_vec())
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        read_response(response).await
    }
}

async fn read_response(response: reqwest::Response) -> Result<Response, FetchError> {
    let status = response.status().as_u16();
    let body = response
        .bytes()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?
        .to_vec();
    Ok(Response::new(status, body))
}
