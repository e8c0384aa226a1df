//! Type definitions for the RSS module.

use tokio::time::Duration;

/// One item from a feed, reduced to the fields the classifier reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    /// Empty when the feed item carries no summary.
    pub summary: String,
}

impl FeedEntry {
    pub fn new(title: impl Into<String>, summary: Option<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.unwrap_or_default(),
        }
    }
}

// Constants
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const FEED_ACCEPT: &str = "application/feed+json, application/json, application/rss+xml, application/atom+xml, application/xml, text/xml, */*;q=0.9";
