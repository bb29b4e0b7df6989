//! Document loading errors

use thiserror::Error;

/// Why a page could not be retrieved. Every variant surfaces to the
/// caller as the `error` string of a load-failure record; extraction
/// itself never raises.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure: DNS, connect, timeout, invalid URL.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP status {0}")]
    Status(reqwest::StatusCode),

    /// The response body is not an HTML document.
    #[error("unsupported content type: {0}")]
    NotHtml(String),
}
