//! Utility functions for RSS feed processing.

/// Helper function to validate a URL
pub fn is_valid_url(url: &str) -> bool {
    if let Ok(parsed) = url::Url::parse(url) {
        parsed.scheme() == "http" || parsed.scheme() == "https"
    } else {
        false
    }
}

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Named HTML entities that feeds use but XML does not define, with numeric equivalents.
const HTML_ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", "&#160;"),
    ("&ndash;", "&#8211;"),
    ("&mdash;", "&#8212;"),
    ("&lsquo;", "&#8216;"),
    ("&rsquo;", "&#8217;"),
    ("&ldquo;", "&#8220;"),
    ("&rdquo;", "&#8221;"),
    ("&hellip;", "&#8230;"),
    ("&amp;amp;", "&amp;"),
];

/// Char ranges allowed by the XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

/// Start of the document proper, skipping anything a server put before it.
fn document_start(body: &str) -> &str {
    ["<?xml", "<rss", "<feed"]
        .iter()
        .find_map(|marker| body.find(marker))
        .map_or(body, |offset| &body[offset..])
}

/// Repair common defects in scraped RSS/Atom so feed-rs gets a second chance.
pub fn cleanup_xml(xml: &str) -> String {
    let body = document_start(xml.trim_start_matches('\u{FEFF}').trim());

    let repaired = HTML_ENTITIES
        .iter()
        .fold(body.to_string(), |text, (entity, numeric)| text.replace(entity, numeric));
    let repaired: String = repaired.chars().filter(|&c| is_xml_char(c)).collect();

    if repaired.starts_with("<?xml") {
        repaired
    } else {
        format!("{}\n{}", XML_DECLARATION, repaired)
    }
}
