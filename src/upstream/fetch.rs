//! Upstream subscription fetching.
//!
//! # Responsibilities
//! - Issue a single GET per conversion
//! - Enforce connect and total deadlines
//! - Reject non-success statuses and oversized bodies
//!
//! # Design Decisions
//! - No internal retries; the caller decides whether to try again
//! - Timeouts are distinct from other errors
//! - Dropping the future abandons the request (client disconnects)
//! - Bodies are decoded as UTF-8 leniently; invalid bytes become U+FFFD

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use crate::config::UpstreamConfig;

/// Error type for upstream fetches.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Request(#[source] reqwest::Error),

    #[error("upstream returned {status} for url ({url})")]
    Status { status: StatusCode, url: String },

    #[error("subscription body exceeds {limit} bytes")]
    TooLarge { limit: usize },
}

/// HTTP client for subscription documents.
#[derive(Debug, Clone)]
pub struct SubscriptionFetcher {
    client: Client,
    timeout: Duration,
    max_body_bytes: usize,
}

impl SubscriptionFetcher {
    /// Build a fetcher from upstream settings.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let mut builder = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            client: builder.build()?,
            timeout,
            max_body_bytes: config.max_body_bytes,
        })
    }

    /// Fetch the subscription text at `url`.
    pub async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let mut response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        if response
            .content_length()
            .is_some_and(|len| len > self.max_body_bytes as u64)
        {
            return Err(FetchError::TooLarge {
                limit: self.max_body_bytes,
            });
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(|e| self.classify(e))? {
            if body.len() + chunk.len() > self.max_body_bytes {
                return Err(FetchError::TooLarge {
                    limit: self.max_body_bytes,
                });
            }
            body.extend_from_slice(&chunk);
        }

        tracing::debug!(status = %status, bytes = body.len(), "Subscription fetched");
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    fn classify(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else {
            FetchError::Request(error)
        }
    }
}
