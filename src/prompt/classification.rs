/// Keys the classification prompt asks the model to return.
pub const CLASSIFICATION_KEYS: [&str; 6] =
    ["title", "type", "framework", "language", "platform", "summary"];

/// Generate a prompt asking the model to classify a single feed entry as JSON
pub fn classification_prompt(title: &str, summary: &str) -> String {
    format!(
        r#"
You are a cybersecurity analyst tasked with classifying RSS feed entries.
Based on the following title and summary, determine:
1. Is this a security advisory/threat intelligence report, or an advertisement?
Answer with only "Security Advisory/Threat Intelligence Report" or "Advertisement".
2. If it's a Security Advisory, what security framework(s) would this information be relevant to? (e.g. MITRE ATT&CK, NIST, ISO 27001)
3. What level of technical language is used? (e.g. Highly technical, Technical, Accessible to IT professionals)
4. If applicable, what platform(s) does this threat target? (e.g. WordPress, Windows, Linux, Android, iOS, Cloud)
5. Summarize the key information in 1-2 sentences.

Here's the title: {title}
Here's the summary: {summary}

Output in JSON format with the following keys: {keys}.  Do not include any preamble or explanation.
"#,
        title = title,
        summary = summary,
        keys = CLASSIFICATION_KEYS
            .iter()
            .map(|key| format!("\"{}\"", key))
            .collect::<Vec<_>>()
            .join(", ")
    )
}
