use anyhow::{Context, Result};

use crate::analysis::Analysis;

/// Render the analyses as a pretty-printed JSON array (2-space indent), in input order.
pub fn render_report(analyses: &[Analysis]) -> Result<String> {
    serde_json::to_string_pretty(analyses).context("Failed to serialize analysis report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalysisRecord;
    use serde_json::{json, Value};

    #[test]
    fn test_report_round_trips_with_same_length() {
        let analyses = vec![
            Analysis::Parsed(json!({"title": "A", "type": "Advertisement"})),
            Analysis::Fallback(AnalysisRecord::fallback("B")),
            Analysis::Parsed(json!("just a string")),
        ];

        let report = render_report(&analyses).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&report).unwrap();

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0], json!({"title": "A", "type": "Advertisement"}));
        assert_eq!(parsed[1]["title"], "B");
        assert_eq!(parsed[1]["type"], "Unknown");
        assert_eq!(parsed[2], json!("just a string"));
    }

    #[test]
    fn test_report_uses_two_space_indent() {
        let report = render_report(&[Analysis::Fallback(AnalysisRecord::fallback("X"))]).unwrap();
        assert_eq!(
            report,
            "[\n  {\n    \"title\": \"X\",\n    \"type\": \"Unknown\",\n    \"framework\": \"Unknown\",\n    \"language\": \"Unknown\",\n    \"platform\": \"Unknown\",\n    \"summary\": \"Unable to parse response from LLM.\"\n  }\n]"
        );
    }

    #[test]
    fn test_parsed_reply_keeps_model_key_order() {
        let reply = r#"{"title": "CVE-2024-3400", "type": "Security Advisory/Threat Intelligence Report", "framework": "MITRE ATT&CK", "language": "Highly technical", "platform": "PAN-OS", "summary": "Command injection in GlobalProtect."}"#;
        let analysis = crate::analysis::parse_response("CVE-2024-3400", reply);

        assert_eq!(
            render_report(&[analysis]).unwrap(),
            "[\n  {\n    \"title\": \"CVE-2024-3400\",\n    \"type\": \"Security Advisory/Threat Intelligence Report\",\n    \"framework\": \"MITRE ATT&CK\",\n    \"language\": \"Highly technical\",\n    \"platform\": \"PAN-OS\",\n    \"summary\": \"Command injection in GlobalProtect.\"\n  }\n]"
        );
    }

    #[test]
    fn test_parsed_reply_keeps_large_numbers_exact() {
        let reply = r#"{"type": "Advertisement", "id": 123456789012345678901234567890, "score": 0.1}"#;
        let analysis = crate::analysis::parse_response("deal", reply);

        assert_eq!(
            render_report(&[analysis]).unwrap(),
            "[\n  {\n    \"type\": \"Advertisement\",\n    \"id\": 123456789012345678901234567890,\n    \"score\": 0.1\n  }\n]"
        );
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(render_report(&[]).unwrap(), "[]");
    }
}
