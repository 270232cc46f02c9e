//! HTTP client for listing image fetches.

use std::time::Duration;

use prism_core::AppConfig;
use reqwest::Client;

use crate::error::ListingError;
use crate::retry::retry_with_backoff;

/// Thin reqwest wrapper with the timeout, User-Agent, and retry policy the
/// pipeline is configured with.
pub(crate) struct ImageClient {
    client: Client,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl ImageClient {
    /// Creates an `ImageClient` from the application config.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub(crate) fn new(config: &AppConfig) -> Result<Self, ListingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            max_retries: config.max_retries,
            backoff_base_secs: config.retry_backoff_base_secs,
        })
    }

    /// Fetches the raw bytes behind `url`, retrying transient failures
    /// according to the configured budget.
    ///
    /// # Errors
    ///
    /// - [`ListingError::UnexpectedStatus`] — any non-2xx status (5xx and
    ///   429 retried, other 4xx not).
    /// - [`ListingError::Http`] — network or TLS failure after all retries
    ///   are exhausted.
    pub(crate) async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ListingError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.to_owned();
            async move {
                let response = self.client.get(&url).send().await?;
                let status = response.status();

                if !status.is_success() {
                    return Err(ListingError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                let bytes = response.bytes().await?;
                Ok(bytes.to_vec())
            }
        })
        .await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
