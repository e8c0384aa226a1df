//! Feed parsing logic for RSS, Atom, and JSON formats.

use anyhow::{anyhow, Result};
use feed_rs::model::{Entry, Feed};
use feed_rs::parser;
use std::io::Cursor;
use tracing::{debug, warn};

use super::types::FeedEntry;
use super::util::cleanup_xml;
use crate::TARGET_WEB_REQUEST;

/// Parse a feed body into entries, preserving feed order.
///
/// A body that fails to parse but looks like RSS or Atom gets one more attempt after
/// `cleanup_xml`.
pub fn parse_feed(body: &str) -> Result<Vec<FeedEntry>> {
    let feed = match parser::parse(Cursor::new(body)) {
        Ok(feed) => feed,
        Err(first_err) => {
            let cleaned_xml = cleanup_xml(body);

            if !(cleaned_xml.contains("<rss") || cleaned_xml.contains("<feed")) {
                let preview = if body
                    .chars()
                    .all(|c| c.is_ascii_graphic() || c.is_whitespace())
                {
                    body.chars().take(100).collect::<String>()
                } else {
                    "[binary data]".to_string()
                };
                return Err(anyhow!(
                    "Content is not an RSS or Atom feed ({}). Content preview: {}",
                    first_err,
                    preview
                ));
            }

            warn!(target: TARGET_WEB_REQUEST, "Feed failed to parse ({}), retrying after XML cleanup", first_err);
            parser::parse(Cursor::new(cleaned_xml)).map_err(|second_err| {
                anyhow!(
                    "Failed to parse feed even after cleanup. First error: {}. Second error: {}",
                    first_err,
                    second_err
                )
            })?
        }
    };

    entries_from_feed(feed)
}

fn entries_from_feed(feed: Feed) -> Result<Vec<FeedEntry>> {
    debug!(target: TARGET_WEB_REQUEST, "Parsed feed with {} entries", feed.entries.len());

    feed.entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| feed_entry(index, entry))
        .collect()
}

fn feed_entry(index: usize, entry: Entry) -> Result<FeedEntry> {
    let title = entry
        .title
        .map(|t| t.content)
        .ok_or_else(|| anyhow!("Feed entry {} ({}) has no title", index, entry.id))?;
    let summary = entry.summary.map(|s| s.content);

    if summary.is_none() {
        debug!(target: TARGET_WEB_REQUEST, "Entry '{}' has no summary", title);
    }

    Ok(FeedEntry::new(title, summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Cyber Security News</title>
    <link>https://cybersecuritynews.com</link>
    <description>Security news</description>
    <item>
      <title>CVE-2024-3400 Exploited in the Wild</title>
      <link>https://cybersecuritynews.com/cve-2024-3400/</link>
      <description>Attackers are exploiting a command injection flaw in PAN-OS.</description>
    </item>
    <item>
      <title>CVE-2024-XXXX Advisory</title>
      <link>https://cybersecuritynews.com/advisory/</link>
    </item>
    <item>
      <title>Save 40% on Endpoint Protection</title>
      <link>https://cybersecuritynews.com/deal/</link>
      <description>Limited time offer.</description>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_rss_preserves_order() {
        let entries = parse_feed(RSS_FEED).unwrap();
        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "CVE-2024-3400 Exploited in the Wild",
                "CVE-2024-XXXX Advisory",
                "Save 40% on Endpoint Protection",
            ]
        );
        assert_eq!(
            entries[0].summary,
            "Attackers are exploiting a command injection flaw in PAN-OS."
        );
    }

    #[test]
    fn test_missing_summary_becomes_empty() {
        let entries = parse_feed(RSS_FEED).unwrap();
        assert_eq!(entries[1].title, "CVE-2024-XXXX Advisory");
        assert_eq!(entries[1].summary, "");
    }

    #[test]
    fn test_parse_atom() {
        let atom = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Advisories</title>
  <id>urn:uuid:60a76c80-d399-11d9-b93C-0003939e0af6</id>
  <updated>2024-04-12T18:30:02Z</updated>
  <entry>
    <title>Linux Kernel Privilege Escalation</title>
    <id>urn:uuid:1225c695-cfb8-4ebb-aaaa-80da344efa6a</id>
    <updated>2024-04-12T18:30:02Z</updated>
    <summary>A use-after-free in netfilter allows local root.</summary>
  </entry>
</feed>"#;

        let entries = parse_feed(atom).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Linux Kernel Privilege Escalation");
        assert_eq!(
            entries[0].summary,
            "A use-after-free in netfilter allows local root."
        );
    }

    #[test]
    fn test_parse_with_leading_junk() {
        let body = format!("\u{FEFF}\n\n{}", RSS_FEED.trim_start_matches("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        let entries = parse_feed(&body).unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_missing_title_is_an_error() {
        let rss = r#"<?xml version="1.0"?>
<rss version="2.0">
  <channel>
    <title>Feed</title>
    <link>https://example.com</link>
    <description>x</description>
    <item>
      <link>https://example.com/untitled</link>
      <description>No title here.</description>
    </item>
  </channel>
</rss>"#;

        let err = parse_feed(rss).unwrap_err();
        assert!(err.to_string().contains("has no title"));
    }

    #[test]
    fn test_not_a_feed() {
        let err = parse_feed("hello world").unwrap_err();
        assert!(err.to_string().contains("not an RSS or Atom feed"));
    }

    #[test]
    fn test_empty_channel() {
        let rss = r#"<?xml version="1.0"?>
<rss version="2.0"><channel><title>Empty</title><link>https://example.com</link><description>x</description></channel></rss>"#;
        assert!(parse_feed(rss).unwrap().is_empty());
    }
}
