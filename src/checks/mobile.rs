// src/checks/mobile.rs
// =============================================================================
// Mobile-friendliness checks, based on the viewport meta tag.
//
// Rule table:
//   no viewport meta ........................ critical
//   more than one viewport meta ............. warning
//   width is not device-width ............... warning
//   zoom disabled ........................... warning
//   no initial-scale ........................ info
// =============================================================================

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use super::{Analyzer, Category, Issue};
use crate::config::MIN_MAXIMUM_SCALE;
use crate::error::AuditError;
use crate::page::PageData;

const CATEGORY: Category = Category::Mobile;

// key=value pairs separated by commas (some sites use semicolons)
const DIRECTIVE_PATTERN: &str = r"([A-Za-z-]+)\s*=\s*([^,;\s]+)";

static DIRECTIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DIRECTIVE_PATTERN).expect("Failed to compile viewport directive pattern - this is a bug")
});

pub struct MobileAnalyzer;

impl Analyzer for MobileAnalyzer {
    fn name(&self) -> &'static str {
        "mobile"
    }

    fn category(&self) -> Category {
        CATEGORY
    }

    fn analyze(&self, page: &PageData) -> Result<Vec<Issue>, AuditError> {
        let mut issues = Vec::new();

        let viewports = page.select(r#"meta[name="viewport"]"#)?;
        let viewport = match viewports.first() {
            Some(viewport) => viewport,
            None => {
                issues.push(
                    Issue::critical(CATEGORY, "missing-viewport", "Page has no viewport meta tag")
                        .with_recommendation(
                            "Add <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
                        ),
                );
                return Ok(issues);
            }
        };

        if viewports.len() > 1 {
            issues.push(
                Issue::warning(
                    CATEGORY,
                    "duplicate-viewport",
                    format!("Page has {} viewport meta tags", viewports.len()),
                )
                .with_recommendation("Keep a single viewport meta tag"),
            );
        }

        let content = viewport.value().attr("content").unwrap_or_default();
        let directives: HashMap<String, String> = DIRECTIVE_REGEX
            .captures_iter(content)
            .map(|caps| (caps[1].to_lowercase(), caps[2].to_lowercase()))
            .collect();

        if directives.get("width").map(String::as_str) != Some("device-width") {
            issues.push(
                Issue::warning(
                    CATEGORY,
                    "viewport-not-device-width",
                    "Viewport does not set width=device-width",
                )
                .with_recommendation("Use width=device-width so the layout adapts to the screen")
                .with_element(content.to_string()),
            );
        }

        let user_scalable_off = directives
            .get("user-scalable")
            .is_some_and(|v| v == "no" || v == "0");
        let maximum_scale_low = directives
            .get("maximum-scale")
            .and_then(|v| v.parse::<f64>().ok())
            .is_some_and(|scale| scale < MIN_MAXIMUM_SCALE);
        if user_scalable_off || maximum_scale_low {
            issues.push(
                Issue::warning(CATEGORY, "zoom-disabled", "Viewport prevents users from zooming")
                    .with_recommendation(
                        "Remove user-scalable=no and any maximum-scale below 2",
                    )
                    .with_element(content.to_string()),
            );
        }

        if !directives.contains_key("initial-scale") {
            issues.push(
                Issue::info(CATEGORY, "missing-initial-scale", "Viewport does not set initial-scale")
                    .with_recommendation("Add initial-scale=1 to the viewport content")
                    .with_element(content.to_string()),
            );
        }

        Ok(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::Severity;
    use crate::page::extract;

    fn checks_for(html: &str) -> Vec<String> {
        let issues = MobileAnalyzer.analyze(&extract(html, None)).unwrap();
        issues.into_iter().map(|i| i.check).collect()
    }

    fn viewport(content: &str) -> String {
        format!(r#"<head><meta name="viewport" content="{}"></head>"#, content)
    }

    #[test]
    fn test_directive_pattern_accepts_semicolons_and_spaces() {
        let pairs: Vec<(String, String)> = DIRECTIVE_REGEX
            .captures_iter("width = device-width; initial-scale=1")
            .map(|caps| (caps[1].to_string(), caps[2].to_string()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("width".to_string(), "device-width".to_string()),
                ("initial-scale".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_viewport_is_critical() {
        let page = extract("<html><head></head></html>", None);
        let issues = MobileAnalyzer.analyze(&page).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Critical);
    }

    #[test]
    fn test_good_viewport() {
        assert!(checks_for(&viewport("width=device-width, initial-scale=1")).is_empty());
    }

    #[test]
    fn test_fixed_width() {
        assert_eq!(
            checks_for(&viewport("width=1024, initial-scale=1")),
            vec!["viewport-not-device-width"]
        );
    }

    #[test]
    fn test_zoom_disabled() {
        assert_eq!(
            checks_for(&viewport("width=device-width, initial-scale=1, user-scalable=no")),
            vec!["zoom-disabled"]
        );
        assert_eq!(
            checks_for(&viewport("width=device-width; initial-scale=1; maximum-scale=1.0")),
            vec!["zoom-disabled"]
        );
        assert!(checks_for(&viewport("width=device-width, initial-scale=1, maximum-scale=5")).is_empty());
    }

    #[test]
    fn test_missing_initial_scale_and_duplicates() {
        let html = r#"<head>
            <meta name="viewport" content="width=device-width">
            <meta name="viewport" content="width=device-width, initial-scale=1">
        </head>"#;
        assert_eq!(
            checks_for(html),
            vec!["duplicate-viewport", "missing-initial-scale"]
        );
    }
}
