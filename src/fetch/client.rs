//! HTTP client for fetching source image bytes.

use std::time::Duration;

use futures_util::StreamExt;

use super::retry::{calculate_backoff, is_transient_network_error, BACKOFF_BASE, BACKOFF_MAX};

/// Default timeout for the whole request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default cap on the downloaded body size (16 MiB). Remote images are
/// decoded fully in memory, so an unbounded download would let one URL
/// exhaust the process.
pub const DEFAULT_MAX_BYTES: u64 = 16 * 1024 * 1024;

/// Errors that can occur while fetching image bytes.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("unsupported URL (expected http:// or https://): {url}")]
    UnsupportedScheme { url: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server responded with status {status}")]
    Status { status: reqwest::StatusCode },

    #[error("response body exceeds the {limit}-byte download cap")]
    TooLarge { limit: u64 },

    #[error("network error: {message} (after {attempts} attempts)")]
    Network { message: String, attempts: u32 },
}

/// Client for downloading source image bytes over HTTP.
///
/// Owns the request timeouts, the download size cap, and a bounded retry
/// policy for transient network failures. The render pipeline itself never
/// retries anything; whatever retry behavior the upstream fetch needs lives
/// here.
pub struct FetchClient {
    client: reqwest::Client,
    max_bytes: u64,
    retries: u32,
}

impl FetchClient {
    /// Create a client with the default timeouts, size cap, and retries.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_limits(DEFAULT_TIMEOUT, DEFAULT_MAX_BYTES, super::retry::DEFAULT_RETRIES)
    }

    /// Create a client with explicit limits.
    pub fn with_limits(
        timeout: Duration,
        max_bytes: u64,
        retries: u32,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            max_bytes,
            retries,
        })
    }

    /// Download the body at `url`, retrying transient failures with
    /// exponential backoff up to the configured attempt budget.
    ///
    /// Connection errors, timeouts, interrupted bodies, and gateway-side
    /// 5xx statuses are retried; everything else fails immediately.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(FetchError::UnsupportedScheme {
                url: url.to_string(),
            });
        }

        let mut attempt = 0u32;
        loop {
            let err = match self.fetch_once(url).await {
                Ok(bytes) => return Ok(bytes),
                Err(e) => e,
            };

            let retriable = match &err {
                FetchError::Http(e) => is_transient_network_error(e),
                FetchError::Status { status } => matches!(status.as_u16(), 502 | 503 | 504),
                _ => false,
            };
            if !retriable {
                return Err(err);
            }

            attempt += 1;
            if attempt > self.retries {
                return Err(FetchError::Network {
                    message: err.to_string(),
                    attempts: attempt,
                });
            }

            let delay = calculate_backoff(attempt, BACKOFF_BASE, BACKOFF_MAX);
            log::warn!(
                "transient error fetching {} (attempt {}/{}): {}; retrying in {:?}",
                url,
                attempt,
                self.retries,
                err,
                delay
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Single download attempt: check the status, then stream the body while
    /// enforcing the size cap.
    async fn fetch_once(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        // Reject oversized bodies before downloading when the server
        // announces the length; the streaming loop still guards against
        // missing or dishonest Content-Length headers.
        if let Some(length) = response.content_length() {
            if length > self.max_bytes {
                return Err(FetchError::TooLarge {
                    limit: self.max_bytes,
                });
            }
        }

        let mut bytes: Vec<u8> = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            if bytes.len() as u64 + chunk.len() as u64 > self.max_bytes {
                return Err(FetchError::TooLarge {
                    limit: self.max_bytes,
                });
            }
            bytes.extend_from_slice(&chunk);
        }

        log::debug!("fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes)
    }
}
