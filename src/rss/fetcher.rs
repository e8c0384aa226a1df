//! Loads a feed URL into an ordered list of entries.

use anyhow::{Context, Result};
use tracing::info;

use super::client::fetch_feed;
use super::parser::parse_feed;
use super::types::FeedEntry;
use super::util::is_valid_url;
use crate::TARGET_WEB_REQUEST;

/// Fetch and parse a feed. Any failure is fatal to the caller.
pub async fn load_feed(url: &str) -> Result<Vec<FeedEntry>> {
    if !is_valid_url(url) {
        anyhow::bail!("Invalid feed URL: {}", url);
    }

    info!(target: TARGET_WEB_REQUEST, "Loading RSS feed from {}", url);
    let body = fetch_feed(url).await?;
    let entries = parse_feed(&body).with_context(|| format!("Failed to parse feed from {}", url))?;
    info!(target: TARGET_WEB_REQUEST, "Loaded {} entries from {}", entries.len(), url);

    Ok(entries)
}
