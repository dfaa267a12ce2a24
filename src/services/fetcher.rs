//! Image fetcher - downloads the source image over HTTP
//!
//! The client is built once with a bounded timeout; a hung origin fails
//! the request instead of stalling it indefinitely. All failure modes
//! surface as `FetchFailed` with a diagnostic reason.

use crate::error::{AppError, Result};
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// HTTP client for retrieving source images
#[derive(Clone)]
pub struct ImageFetcher {
    http_client: Client,
}

impl ImageFetcher {
    /// Create a fetcher with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http_client })
    }

    /// Download the full response body for the given URL
    pub async fn fetch(&self, url: &Url) -> Result<Bytes> {
        debug!(url = %url, "Fetching source image");

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::FetchFailed(format!("request to {url} timed out"))
                } else {
                    AppError::FetchFailed(format!("request to {url} failed: {e}"))
                }
            })?;

        if !response.status().is_success() {
            return Err(AppError::FetchFailed(format!(
                "source returned status {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::FetchFailed(format!("failed to read response body: {e}")))?;

        debug!(url = %url, size = bytes.len(), "Fetched source image");
        Ok(bytes)
    }
}
