// src/checks/headings.rs
// =============================================================================
// Heading hierarchy checks.
//
// Rule table:
//   no <h1> .................................. critical
//   more than one <h1> ....................... warning
//   skipped level (h1 -> h3, or first is h2) . warning
//   empty heading ............................ warning
//   heading text too long .................... info
//   too many headings ........................ info
//
// Headings are read in document order, so "skipped level" means the page
// jumps deeper than one level relative to the heading right before it. The
// imaginary parent of the first heading is level 0, which makes a page that
// opens with <h2> a skip as well.
// =============================================================================

use super::{char_len, snippet, Analyzer, Category, Issue};
use crate::config::{HEADING_MAX_LENGTH, MAX_HEADINGS};
use crate::error::AuditError;
use crate::page::PageData;

const CATEGORY: Category = Category::Headings;

pub struct HeadingAnalyzer;

impl Analyzer for HeadingAnalyzer {
    fn name(&self) -> &'static str {
        "headings"
    }

    fn category(&self) -> Category {
        CATEGORY
    }

    fn analyze(&self, page: &PageData) -> Result<Vec<Issue>, AuditError> {
        let mut issues = Vec::new();
        let headings = &page.headings;

        let h1_count = headings.iter().filter(|h| h.level == 1).count();
        if h1_count == 0 {
            issues.push(
                Issue::critical(CATEGORY, "missing-h1", "Page has no <h1> heading")
                    .with_recommendation("Add one <h1> that describes the main topic of the page"),
            );
        } else if h1_count > 1 {
            issues.push(
                Issue::warning(
                    CATEGORY,
                    "multiple-h1",
                    format!("Page has {} <h1> headings", h1_count),
                )
                .with_recommendation("Use a single <h1> and demote the others to <h2>"),
            );
        }

        let mut previous_level = 0;
        for heading in headings {
            if heading.level > previous_level + 1 {
                let message = if previous_level == 0 {
                    format!("First heading is <h{}> instead of <h1>", heading.level)
                } else {
                    format!(
                        "Heading level skipped: <h{}> follows <h{}>",
                        heading.level, previous_level
                    )
                };
                issues.push(
                    Issue::warning(CATEGORY, "skipped-heading-level", message)
                        .with_recommendation("Nest headings one level at a time (h1 > h2 > h3)")
                        .with_element(format!("<h{}> {}", heading.level, snippet(&heading.text, 60))),
                );
            }
            previous_level = heading.level;

            if heading.text.is_empty() {
                issues.push(
                    Issue::warning(
                        CATEGORY,
                        "empty-heading",
                        format!("<h{}> heading has no text", heading.level),
                    )
                    .with_recommendation("Give every heading meaningful text or remove it"),
                );
            } else if char_len(&heading.text) > HEADING_MAX_LENGTH {
                issues.push(
                    Issue::info(
                        CATEGORY,
                        "heading-too-long",
                        format!(
                            "<h{}> heading is {} characters long",
                            heading.level,
                            char_len(&heading.text)
                        ),
                    )
                    .with_recommendation(format!(
                        "Keep headings under {} characters",
                        HEADING_MAX_LENGTH
                    ))
                    .with_element(snippet(&heading.text, 60)),
                );
            }
        }

        if headings.len() > MAX_HEADINGS {
            issues.push(
                Issue::info(
                    CATEGORY,
                    "too-many-headings",
                    format!("Page has {} headings", headings.len()),
                )
                .with_recommendation("Reserve headings for real sections of the content"),
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

    fn checks_for(html: &str) -> Vec<Issue> {
        HeadingAnalyzer.analyze(&extract(html, None)).unwrap()
    }

    #[test]
    fn test_good_hierarchy() {
        let issues = checks_for("<h1>Title</h1><h2>Part</h2><h3>Detail</h3><h2>Next</h2>");
        assert!(issues.is_empty());
    }

    #[test]
    fn test_missing_h1_is_critical() {
        let issues = checks_for("<p>no headings</p>");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].check, "missing-h1");
        assert_eq!(issues[0].severity, Severity::Critical);
    }

    #[test]
    fn test_h2_before_h1() {
        let issues = checks_for("<h2>Intro</h2><h1>Title</h1>");
        let skip = issues.iter().find(|i| i.check == "skipped-heading-level").unwrap();
        assert!(skip.message.contains("<h2>"));
        assert_eq!(skip.element.as_deref(), Some("<h2> Intro"));
    }

    #[test]
    fn test_skipped_level() {
        let issues = checks_for("<h1>Title</h1><h3>Deep</h3>");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Heading level skipped: <h3> follows <h1>");
    }

    #[test]
    fn test_multiple_h1_and_empty_heading() {
        let issues = checks_for("<h1>One</h1><h1>  </h1>");
        let checks: Vec<&str> = issues.iter().map(|i| i.check.as_str()).collect();
        assert_eq!(checks, vec!["multiple-h1", "empty-heading"]);
    }

    #[test]
    fn test_too_many_headings() {
        let mut html = String::from("<h1>Title</h1>");
        for i in 0..MAX_HEADINGS {
            html.push_str(&format!("<h2>Section {}</h2>", i));
        }
        let issues = checks_for(&html);
        assert!(issues.iter().any(|i| i.check == "too-many-headings"));
    }
}
