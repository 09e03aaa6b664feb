//! Fetch capability: given a URL, return a raw JRD payload or an error.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use thiserror::Error;
use url::Url;

use crate::config::ClientConfig;
use crate::error::WebFingerError;

/// Media types accepted for JRD documents.
pub const JRD_ACCEPT: &str = "application/jrd+json, application/json";

// ============================================================================
// Fetcher — pluggable transport
// ============================================================================

/// Transport used by the client to retrieve discovery documents.
///
/// Implementations must report network failures and non-2xx responses as
/// errors, never as an empty payload. Timeouts are the implementation's
/// business.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError>;
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected HTTP status {status}")]
    Status { status: u16 },
}

#[async_trait]
impl<F: Fetcher + ?Sized> Fetcher for Arc<F> {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(url).await
    }
}

// ============================================================================
// HttpFetcher — reqwest transport
// ============================================================================

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher using the user agent and timeout from `config`.
    ///
    /// # Errors
    /// Returns `WebFingerError::HttpClient` if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &ClientConfig) -> Result<Self, WebFingerError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WebFingerError::HttpClient(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        let res = self
            .client
            .get(url.clone())
            .header(ACCEPT, HeaderValue::from_static(JRD_ACCEPT))
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = res
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(body.to_vec())
    }
}
