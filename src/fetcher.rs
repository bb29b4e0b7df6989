//! Document loader
//!
//! Fetches raw HTML for a URL with a browser-like identity and a bounded
//! timeout. No retries: a failed fetch surfaces immediately so the caller
//! can decide whether to retry at a higher layer.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::FetchError;

/// Default fetch timeout, seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Browser-identifying user agent. Many storefronts serve stripped-down
/// markup to obvious bots.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// HTTP document loader shared across requests.
pub struct Fetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    /// Create a loader with the default timeout and user agent.
    pub fn new() -> Self {
        Self::with_settings(
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            DEFAULT_USER_AGENT,
        )
    }

    /// Create a loader with an explicit timeout and user agent.
    pub fn with_settings(timeout: Duration, user_agent: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            user_agent: user_agent.into(),
        }
    }

    /// Fetch the HTML body for `url`.
    ///
    /// Non-success statuses and non-HTML content types are failures; a
    /// missing `Content-Type` header is treated as HTML, since small
    /// shops frequently omit it.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url = %url, "fetching page");

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "fetch failed");
                FetchError::Request(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "non-success response");
            return Err(FetchError::Status(status));
        }

        if let Some(content_type) = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
        {
            let content_type = content_type.to_lowercase();
            if !content_type.contains("html") && !content_type.starts_with("text/") {
                return Err(FetchError::NotHtml(content_type));
            }
        }

        Ok(response.text().await?)
    }
}
