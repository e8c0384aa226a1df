//! RSS feed loading for rss-triage.
//!
//! This module handles fetching a feed and reducing its items to `FeedEntry` values.

mod client;
mod fetcher;
mod parser;
mod types;
mod util;

pub use self::types::*;

pub use self::client::{create_http_client, fetch_feed};
pub use self::fetcher::load_feed;
pub use self::parser::parse_feed;
pub use self::util::*;
