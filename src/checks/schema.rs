// src/checks/schema.rs
// =============================================================================
// Structured data checks.
//
// Looks at JSON-LD blocks (<script type="application/ld+json">) and
// microdata (itemscope/itemtype attributes):
//   no structured data at all ............... info
//   empty JSON-LD block ..................... warning
//   JSON-LD that is not valid JSON .......... critical
//   JSON-LD entity that is not an object .... warning
//   entity without @context ................. warning
//   entity without @type .................... warning
//   itemscope without itemtype .............. warning
//
// Arrays of entities and @graph containers are checked entity by entity;
// entities inside @graph inherit the container's @context.
// =============================================================================

use serde_json::Value;

use super::{Analyzer, Category, Issue};
use crate::error::AuditError;
use crate::page::PageData;

const CATEGORY: Category = Category::StructuredData;

pub struct SchemaAnalyzer;

impl Analyzer for SchemaAnalyzer {
    fn name(&self) -> &'static str {
        "schema"
    }

    fn category(&self) -> Category {
        CATEGORY
    }

    fn analyze(&self, page: &PageData) -> Result<Vec<Issue>, AuditError> {
        let mut issues = Vec::new();

        let blocks = page.select(r#"script[type="application/ld+json"]"#)?;
        let microdata = page.select("[itemscope]")?;

        if blocks.is_empty() && microdata.is_empty() {
            issues.push(
                Issue::info(CATEGORY, "missing-structured-data", "No structured data found on the page")
                    .with_recommendation(
                        "Add JSON-LD (schema.org) markup so search engines can show rich results",
                    ),
            );
            return Ok(issues);
        }

        for (index, block) in blocks.iter().enumerate() {
            let locator = format!("JSON-LD block #{}", index + 1);
            let raw: String = block.text().collect();
            let raw = raw.trim();

            if raw.is_empty() {
                issues.push(
                    Issue::warning(CATEGORY, "empty-json-ld", "JSON-LD block is empty")
                        .with_recommendation("Remove the empty script or fill it with schema.org data")
                        .with_element(locator),
                );
                continue;
            }

            match serde_json::from_str::<Value>(raw) {
                Ok(Value::Array(entities)) => {
                    for entity in &entities {
                        check_entity(entity, false, &locator, &mut issues);
                    }
                }
                Ok(entity) => check_entity(&entity, false, &locator, &mut issues),
                Err(e) => {
                    issues.push(
                        Issue::critical(
                            CATEGORY,
                            "invalid-json-ld",
                            format!("JSON-LD block is not valid JSON: {}", e),
                        )
                        .with_recommendation(
                            "Fix the syntax; search engines ignore structured data they cannot parse",
                        )
                        .with_element(locator),
                    );
                }
            }
        }

        let untyped = microdata
            .iter()
            .filter(|el| el.value().attr("itemtype").is_none())
            .count();
        if untyped > 0 {
            issues.push(
                Issue::warning(
                    CATEGORY,
                    "microdata-missing-type",
                    format!("{} microdata item(s) have itemscope but no itemtype", untyped),
                )
                .with_recommendation("Add itemtype=\"https://schema.org/...\" to every itemscope element"),
            );
        }

        Ok(issues)
    }
}

// Checks one JSON-LD entity, descending into @graph containers
//
// Parameters:
//   entity: the JSON value to check
//   inherited_context: true when a parent @graph container carries @context
//   locator: which block the entity came from
//   issues: where findings are collected
fn check_entity(entity: &Value, inherited_context: bool, locator: &str, issues: &mut Vec<Issue>) {
    let object = match entity.as_object() {
        Some(object) => object,
        None => {
            issues.push(
                Issue::warning(
                    CATEGORY,
                    "invalid-schema-entity",
                    "JSON-LD entity is not an object",
                )
                .with_element(locator.to_string()),
            );
            return;
        }
    };

    let has_context = inherited_context || object.contains_key("@context");
    if !has_context {
        issues.push(
            Issue::warning(CATEGORY, "missing-schema-context", "JSON-LD entity has no @context")
                .with_recommendation("Add \"@context\": \"https://schema.org\"")
                .with_element(locator.to_string()),
        );
    }

    if let Some(Value::Array(graph)) = object.get("@graph") {
        for item in graph {
            check_entity(item, true, locator, issues);
        }
        return;
    }

    if !object.contains_key("@type") {
        issues.push(
            Issue::warning(CATEGORY, "missing-schema-type", "JSON-LD entity has no @type")
                .with_recommendation("Declare the schema.org type, e.g. \"@type\": \"Article\"")
                .with_element(locator.to_string()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::Severity;
    use crate::page::extract;

    fn checks_for(html: &str) -> Vec<Issue> {
        SchemaAnalyzer.analyze(&extract(html, None)).unwrap()
    }

    fn json_ld(body: &str) -> String {
        format!(r#"<head><script type="application/ld+json">{}</script></head>"#, body)
    }

    #[test]
    fn test_no_structured_data() {
        let issues = checks_for("<p>plain page</p>");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].check, "missing-structured-data");
        assert_eq!(issues[0].severity, Severity::Info);
    }

    #[test]
    fn test_valid_json_ld_has_no_issues() {
        let html = json_ld(r#"{"@context": "https://schema.org", "@type": "Article", "headline": "Hi"}"#);
        assert!(checks_for(&html).is_empty());
    }

    #[test]
    fn test_invalid_json_is_critical() {
        let issues = checks_for(&json_ld(r#"{"@context": "https://schema.org", "@type": }"#));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].check, "invalid-json-ld");
        assert_eq!(issues[0].severity, Severity::Critical);
    }

    #[test]
    fn test_empty_block() {
        let issues = checks_for(&json_ld("   "));
        assert_eq!(issues[0].check, "empty-json-ld");
    }

    #[test]
    fn test_missing_context_and_type() {
        let issues = checks_for(&json_ld(r#"[{"name": "x"}]"#));
        let checks: Vec<&str> = issues.iter().map(|i| i.check.as_str()).collect();
        assert_eq!(checks, vec!["missing-schema-context", "missing-schema-type"]);
    }

    #[test]
    fn test_graph_entities_inherit_context() {
        let html = json_ld(
            r#"{"@context": "https://schema.org", "@graph": [{"@type": "WebSite"}, {"name": "untyped"}]}"#,
        );
        let issues = checks_for(&html);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].check, "missing-schema-type");
    }

    #[test]
    fn test_microdata_without_type() {
        let issues = checks_for(r#"<div itemscope><span itemprop="name">x</span></div>"#);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].check, "microdata-missing-type");
    }
}
