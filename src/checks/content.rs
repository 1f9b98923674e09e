// src/checks/content.rs
// =============================================================================
// Body content checks.
//
// Rule table:
//   no visible body text .................... critical
//   thin content (few words) ................ warning
//   one term dominates the text ............. warning (keyword stuffing)
//   <html> without lang ..................... info
//
// "Visible text" is the body text outside script/style/noscript/template.
// Keyword density ignores short words and common stop words and is only
// computed once the text is long enough for a ratio to mean anything.
// =============================================================================

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use super::{Analyzer, Category, Issue};
use crate::config::{
    KEYWORD_DENSITY_MAX, KEYWORD_DENSITY_MIN_WORDS, KEYWORD_MIN_LENGTH, STOP_WORDS,
    THIN_CONTENT_WORDS,
};
use crate::error::AuditError;
use crate::page::PageData;

const CATEGORY: Category = Category::Content;

// Letters/digits, allowing inner apostrophes and hyphens ("don't", "e-mail")
const WORD_PATTERN: &str = r"[\p{L}\p{N}]+(?:['’-][\p{L}\p{N}]+)*";

static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(WORD_PATTERN).expect("Failed to compile word pattern - this is a bug")
});

pub struct ContentAnalyzer;

impl Analyzer for ContentAnalyzer {
    fn name(&self) -> &'static str {
        "content"
    }

    fn category(&self) -> Category {
        CATEGORY
    }

    fn analyze(&self, page: &PageData) -> Result<Vec<Issue>, AuditError> {
        let mut issues = Vec::new();

        let text = page.body_text();
        let words: Vec<String> = WORD_REGEX
            .find_iter(&text)
            .map(|m| m.as_str().to_lowercase())
            .collect();

        if words.is_empty() {
            issues.push(
                Issue::critical(CATEGORY, "no-body-content", "Page body has no visible text")
                    .with_recommendation(
                        "Add crawlable text content; search engines cannot rank a page with nothing to read",
                    ),
            );
        } else if words.len() < THIN_CONTENT_WORDS {
            issues.push(
                Issue::warning(
                    CATEGORY,
                    "thin-content",
                    format!("Page has only {} words of body text", words.len()),
                )
                .with_recommendation(format!(
                    "Aim for at least {} words of useful, original content",
                    THIN_CONTENT_WORDS
                )),
            );
        }

        if words.len() >= KEYWORD_DENSITY_MIN_WORDS {
            if let Some((term, count)) = dominant_term(&words) {
                let density = count as f64 / words.len() as f64;
                if density > KEYWORD_DENSITY_MAX {
                    issues.push(
                        Issue::warning(
                            CATEGORY,
                            "keyword-stuffing",
                            format!(
                                "\"{}\" makes up {:.1}% of the text ({} of {} words)",
                                term,
                                density * 100.0,
                                count,
                                words.len()
                            ),
                        )
                        .with_recommendation(
                            "Write naturally and use synonyms instead of repeating the same keyword",
                        )
                        .with_element(term.to_string()),
                    );
                }
            }
        }

        let lang = page
            .select("html")?
            .first()
            .and_then(|html| html.value().attr("lang"))
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        if lang.is_empty() {
            issues.push(
                Issue::info(CATEGORY, "missing-lang", "The <html> element has no lang attribute")
                    .with_recommendation("Declare the page language, e.g. <html lang=\"en\">"),
            );
        }

        Ok(issues)
    }
}

// Finds the most frequent meaningful term
//
// Ties go to the alphabetically first term so results never depend on
// HashMap iteration order.
fn dominant_term(words: &[String]) -> Option<(&str, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in words {
        if word.chars().count() < KEYWORD_MIN_LENGTH || STOP_WORDS.contains(&word.as_str()) {
            continue;
        }
        *counts.entry(word.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
}
