//! HTTP fetcher implementation
//!
//! This module handles the single outbound request made for each target:
//! - Building one shared HTTP client from configuration
//! - Issuing a GET against the target's request URL
//! - Classifying failures as transport, status, body, or URL errors
//!
//! There is no retry; each call performs at most one request.

use crate::config::FetcherConfig;
use crate::target::Target;
use crate::{FetchError, UrlHashError};
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Retrieves the raw content behind a target
///
/// Implementations must be safe to share between workers.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Performs one retrieval and returns the complete body
    async fn fetch(&self, target: &Target) -> Result<Vec<u8>, FetchError>;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetcher configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use urlhash::config::FetcherConfig;
/// use urlhash::pipeline::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    let redirect = if config.max_redirects == 0 {
        Policy::none()
    } else {
        Policy::limited(config.max_redirects)
    };

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .redirect(redirect)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetcher backed by a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Wraps an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds the client from configuration and wraps it
    ///
    /// Fails with [`UrlHashError::Client`] when the configuration cannot
    /// produce a client, e.g. a user agent that is not a valid header value.
    pub fn from_config(config: &FetcherConfig) -> Result<Self, UrlHashError> {
        Ok(Self::new(build_http_client(config)?))
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, target: &Target) -> Result<Vec<u8>, FetchError> {
        fetch_body(&self.client, target).await
    }
}

/// Fetches the body behind `target`
///
/// # Request Flow
///
/// | Condition | Result |
/// |-----------|--------|
/// | Request URL does not parse | `InvalidUrl` |
/// | DNS, connect, timeout, redirect limit | `Transport` |
/// | Final status other than 200 | `Status` |
/// | Body read interrupted | `Body` (partial bytes dropped) |
/// | 200 with complete body | body bytes |
pub async fn fetch_body(client: &Client, target: &Target) -> Result<Vec<u8>, FetchError> {
    let url = Url::parse(target.request_url())
        .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", target.request_url(), e)))?;

    tracing::debug!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::Status(status));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| FetchError::Body(e.to_string()))?;

    tracing::trace!("{} returned {} bytes", target, body.len());

    Ok(body.to_vec())
}
