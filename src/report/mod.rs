// src/report/mod.rs
// =============================================================================
// Turning an AuditResult into text for people (markdown) or tools (JSON).
//
// Submodules:
// - markdown: the human-readable report
// =============================================================================

mod markdown;

pub use markdown::format_report;

use crate::audit::AuditResult;

/// Serializes the result as pretty-printed JSON.
///
/// The parsed document is skipped; everything else, including the page
/// snapshot, is included.
pub fn format_json(result: &AuditResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Auditor;

    #[tokio::test]
    async fn test_json_output() {
        let result = Auditor::default()
            .audit(r#"<a href="/about">About</a>"#, Some("https://example.com"))
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&format_json(&result).unwrap()).unwrap();

        assert_eq!(json["url"], "https://example.com");
        assert_eq!(json["stats"]["total"], result.issues.len());
        assert_eq!(json["page"]["links"][0]["href"], "/about");
        assert_eq!(json["page"]["links"][0]["external"], false);
        assert!(json["page"].get("document").is_none());
        assert!(json["timestamp"].is_string());
    }
}
