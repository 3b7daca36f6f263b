//! HTTP transport for the vPIC client
//!
//! The decoder talks to the network only through [`HttpTransport`], so tests
//! can swap in a stub and count calls.

use async_trait::async_trait;

use crate::error::DecodeError;

/// A raw HTTP response: status code and body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues a single GET request
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Fetch `url`. Only connection-level failures are errors; any status
    /// code comes back as a response.
    async fn get(&self, url: &str) -> Result<HttpResponse, DecodeError>;
}

/// reqwest-backed transport with the client's default timeouts
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, DecodeError> {
        let response = self
            .http_client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        Ok(HttpResponse { status, body })
    }
}

fn transport_error(err: reqwest::Error) -> DecodeError {
    DecodeError::Transport {
        message: err.to_string(),
    }
}
