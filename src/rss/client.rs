//! HTTP client creation and request handling for RSS feeds.

use anyhow::{Context, Result};
use reqwest::header;
use tokio::time::timeout;
use tracing::debug;

use super::types::{FEED_ACCEPT, REQUEST_TIMEOUT, USER_AGENT};
use crate::TARGET_WEB_REQUEST;

/// Create the client used for feed requests
pub fn create_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .gzip(true)
        .redirect(reqwest::redirect::Policy::default())
        .build()
        .context("Failed to build HTTP client")
}

/// Fetch the feed body with a single request.
///
/// Timeouts, transport errors and non-success statuses are all returned as errors.
pub async fn fetch_feed(url: &str) -> Result<String> {
    let client = create_http_client()?;

    debug!(target: TARGET_WEB_REQUEST, "Requesting feed from {}", url);
    let response = timeout(
        REQUEST_TIMEOUT,
        client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::ACCEPT, FEED_ACCEPT)
            .send(),
    )
    .await
    .with_context(|| {
        format!(
            "Request to {} timed out after {} seconds",
            url,
            REQUEST_TIMEOUT.as_secs()
        )
    })?
    .with_context(|| format!("Request to {} failed", url))?;

    let status = response.status();
    debug!(target: TARGET_WEB_REQUEST, "Request to {} returned status {}", url, status);
    if !status.is_success() {
        anyhow::bail!("Non-success status {} from {}", status, url);
    }

    let body = response
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))?;

    debug!(target: TARGET_WEB_REQUEST, "First 500 characters of response body: {}", &body.chars().take(500).collect::<String>());

    Ok(body)
}
