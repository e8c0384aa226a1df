//! Per-entry classification: prompt, model call, and tolerant parsing of the reply.
//!
//! The model is untrusted. A reply that is not valid JSON is replaced by a fallback record
//! so that one bad answer never aborts the batch.

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::llm::CompletionBackend;
use crate::prompt;
use crate::rss::FeedEntry;
use crate::TARGET_LLM_REQUEST;

pub const UNKNOWN: &str = "Unknown";
pub const UNPARSEABLE_SUMMARY: &str = "Unable to parse response from LLM.";

/// The fixed record shape requested from the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRecord {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub framework: String,
    pub language: String,
    pub platform: String,
    pub summary: String,
}

impl AnalysisRecord {
    /// Sentinel record used when the model reply cannot be parsed.
    pub fn fallback(title: &str) -> Self {
        Self {
            title: title.to_string(),
            kind: UNKNOWN.to_string(),
            framework: UNKNOWN.to_string(),
            language: UNKNOWN.to_string(),
            platform: UNKNOWN.to_string(),
            summary: UNPARSEABLE_SUMMARY.to_string(),
        }
    }
}

/// Outcome of classifying one entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Analysis {
    /// Whatever valid JSON the model produced, emitted as-is.
    Parsed(Value),
    Fallback(AnalysisRecord),
}

impl Analysis {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Analysis::Fallback(_))
    }
}

/// Interpret a raw model reply for the entry titled `title`.
pub fn parse_response(title: &str, response: &str) -> Analysis {
    match serde_json::from_str::<Value>(response) {
        Ok(value) => Analysis::Parsed(value),
        Err(e) => {
            error!(target: TARGET_LLM_REQUEST, "JSON decode error for '{}': {}", title, e);
            error!(target: TARGET_LLM_REQUEST, "Problematic response: {}", response);
            Analysis::Fallback(AnalysisRecord::fallback(title))
        }
    }
}

/// Classify a single entry. Only provider errors are returned as `Err`.
pub async fn classify_entry<B: CompletionBackend>(entry: &FeedEntry, backend: &B) -> Result<Analysis> {
    let prompt = prompt::classification_prompt(&entry.title, &entry.summary);
    let response = backend.complete(&prompt).await?;
    Ok(parse_response(&entry.title, &response))
}

/// Classify every entry in order, one at a time.
pub async fn analyze_feed<B: CompletionBackend>(
    entries: &[FeedEntry],
    backend: &B,
) -> Result<Vec<Analysis>> {
    let mut analyzed_items = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        info!(target: TARGET_LLM_REQUEST, "Classifying entry {}/{}: {}", index + 1, entries.len(), entry.title);
        analyzed_items.push(classify_entry(entry, backend).await?);
    }

    let fallbacks = analyzed_items.iter().filter(|a| a.is_fallback()).count();
    info!(target: TARGET_LLM_REQUEST, "Classified {} entries ({} unparseable)", analyzed_items.len(), fallbacks);

    Ok(analyzed_items)
}
