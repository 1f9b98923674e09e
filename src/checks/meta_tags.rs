// src/checks/meta_tags.rs
// =============================================================================
// Meta tag checks: title, description, canonical URL, social cards and the
// robots directive.
//
// Rule table:
//   missing title ........................... critical
//   title too short / too long .............. warning
//   more than one <title> ................... warning
//   missing description ..................... warning
//   description too short ................... info
//   description too long .................... warning
//   more than one description ............... warning
//   missing canonical ....................... info
//   canonical not an absolute http(s) URL ... warning
//   missing Open Graph fields ............... info
//   missing Twitter card .................... info
//   unknown Twitter card type ............... warning
//   robots noindex .......................... critical
//   robots nofollow ......................... warning
//   contradicting robots directives ......... warning
// =============================================================================

use url::Url;

use super::{char_len, Analyzer, Category, Issue};
use crate::config::{
    DESCRIPTION_MAX_LENGTH, DESCRIPTION_MIN_LENGTH, TITLE_MAX_LENGTH, TITLE_MIN_LENGTH,
    TWITTER_CARD_TYPES,
};
use crate::error::AuditError;
use crate::page::PageData;

const CATEGORY: Category = Category::MetaTags;

pub struct MetaTagAnalyzer;

impl Analyzer for MetaTagAnalyzer {
    fn name(&self) -> &'static str {
        "meta-tags"
    }

    fn category(&self) -> Category {
        CATEGORY
    }

    fn analyze(&self, page: &PageData) -> Result<Vec<Issue>, AuditError> {
        let mut issues = Vec::new();

        check_title(page, &mut issues);
        check_description(page, &mut issues)?;
        check_canonical(page, &mut issues);
        check_social(page, &mut issues);
        check_robots(page, &mut issues);

        Ok(issues)
    }
}

fn check_title(page: &PageData, issues: &mut Vec<Issue>) {
    let length = char_len(&page.title);

    if page.title.is_empty() {
        issues.push(
            Issue::critical(CATEGORY, "missing-title", "Page has no <title> or the title is empty")
                .with_recommendation(format!(
                    "Add a unique, descriptive <title> of {}-{} characters",
                    TITLE_MIN_LENGTH, TITLE_MAX_LENGTH
                )),
        );
    } else if length < TITLE_MIN_LENGTH {
        issues.push(
            Issue::warning(
                CATEGORY,
                "title-too-short",
                format!("Title is only {} characters long", length),
            )
            .with_recommendation(format!(
                "Expand the title to at least {} characters with relevant keywords",
                TITLE_MIN_LENGTH
            ))
            .with_element(page.title.clone()),
        );
    } else if length > TITLE_MAX_LENGTH {
        issues.push(
            Issue::warning(
                CATEGORY,
                "title-too-long",
                format!(
                    "Title is {} characters long and will likely be truncated in search results",
                    length
                ),
            )
            .with_recommendation(format!("Keep the title under {} characters", TITLE_MAX_LENGTH))
            .with_element(page.title.clone()),
        );
    }

    let title_count = page.title_count();
    if title_count > 1 {
        issues.push(
            Issue::warning(
                CATEGORY,
                "duplicate-title",
                format!("Page has {} <title> elements", title_count),
            )
            .with_recommendation("Keep exactly one <title> in the <head>"),
        );
    }
}

fn check_description(page: &PageData, issues: &mut Vec<Issue>) -> Result<(), AuditError> {
    let description = page.meta.description.trim();
    let length = char_len(description);

    if description.is_empty() {
        issues.push(
            Issue::warning(CATEGORY, "missing-meta-description", "Page has no meta description")
                .with_recommendation(format!(
                    "Add <meta name=\"description\"> with a {}-{} character summary of the page",
                    DESCRIPTION_MIN_LENGTH, DESCRIPTION_MAX_LENGTH
                )),
        );
    } else if length < DESCRIPTION_MIN_LENGTH {
        issues.push(
            Issue::info(
                CATEGORY,
                "meta-description-too-short",
                format!("Meta description is only {} characters long", length),
            )
            .with_recommendation(format!(
                "Aim for {}-{} characters to use the full search snippet",
                DESCRIPTION_MIN_LENGTH, DESCRIPTION_MAX_LENGTH
            )),
        );
    } else if length > DESCRIPTION_MAX_LENGTH {
        issues.push(
            Issue::warning(
                CATEGORY,
                "meta-description-too-long",
                format!(
                    "Meta description is {} characters long and will likely be truncated",
                    length
                ),
            )
            .with_recommendation(format!(
                "Keep the description under {} characters",
                DESCRIPTION_MAX_LENGTH
            )),
        );
    }

    let description_count = page.count(r#"meta[name="description"]"#)?;
    if description_count > 1 {
        issues.push(
            Issue::warning(
                CATEGORY,
                "duplicate-meta-description",
                format!("Page has {} meta description tags", description_count),
            )
            .with_recommendation("Keep a single meta description; search engines may ignore duplicates"),
        );
    }

    Ok(())
}

fn check_canonical(page: &PageData, issues: &mut Vec<Issue>) {
    let canonical = page.meta.canonical.trim();

    if canonical.is_empty() {
        issues.push(
            Issue::info(CATEGORY, "missing-canonical", "Page has no canonical URL")
                .with_recommendation(
                    "Add <link rel=\"canonical\" href=\"...\"> to prevent duplicate content issues",
                ),
        );
        return;
    }

    let is_absolute_http = match Url::parse(canonical) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host().is_some(),
        Err(_) => false,
    };
    if !is_absolute_http {
        issues.push(
            Issue::warning(
                CATEGORY,
                "invalid-canonical",
                "Canonical URL is not an absolute http(s) URL",
            )
            .with_recommendation("Use a fully qualified URL such as https://example.com/page")
            .with_element(canonical.to_string()),
        );
    }
}

fn check_social(page: &PageData, issues: &mut Vec<Issue>) {
    let meta = &page.meta;

    let missing: Vec<&str> = [
        ("og:title", &meta.og_title),
        ("og:description", &meta.og_description),
        ("og:image", &meta.og_image),
    ]
    .iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| *name)
    .collect();

    if !missing.is_empty() {
        issues.push(
            Issue::info(
                CATEGORY,
                "missing-open-graph",
                format!("Missing Open Graph tags: {}", missing.join(", ")),
            )
            .with_recommendation("Add Open Graph tags so shared links render a rich preview"),
        );
    }

    let card = meta.twitter_card.trim();
    if card.is_empty() {
        issues.push(
            Issue::info(CATEGORY, "missing-twitter-card", "Page has no twitter:card meta tag")
                .with_recommendation("Add <meta name=\"twitter:card\" content=\"summary_large_image\">"),
        );
    } else if !TWITTER_CARD_TYPES.contains(&card) {
        issues.push(
            Issue::warning(
                CATEGORY,
                "invalid-twitter-card",
                format!("Unknown twitter:card type '{}'", card),
            )
            .with_recommendation(format!("Use one of: {}", TWITTER_CARD_TYPES.join(", "))),
        );
    }
}

fn check_robots(page: &PageData, issues: &mut Vec<Issue>) {
    let robots = page.meta.robots.to_lowercase();
    if robots.trim().is_empty() {
        return;
    }

    let directives: Vec<&str> = robots
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .collect();
    let has = |directive: &str| directives.iter().any(|d| *d == directive);

    if has("noindex") || has("none") {
        issues.push(
            Issue::critical(
                CATEGORY,
                "robots-noindex",
                "Robots meta tag prevents this page from being indexed",
            )
            .with_recommendation("Remove 'noindex' unless the page should stay out of search results")
            .with_element(page.meta.robots.clone()),
        );
    }

    // "none" is shorthand for "noindex, nofollow"
    if has("nofollow") || has("none") {
        issues.push(
            Issue::warning(
                CATEGORY,
                "robots-nofollow",
                "Robots meta tag tells crawlers not to follow links on this page",
            )
            .with_recommendation("Remove 'nofollow' so link equity flows to linked pages")
            .with_element(page.meta.robots.clone()),
        );
    }

    let conflicts = (has("index") && has("noindex")) || (has("follow") && has("nofollow"));
    if conflicts {
        issues.push(
            Issue::warning(
                CATEGORY,
                "robots-conflict",
                "Robots meta tag contains contradicting directives",
            )
            .with_recommendation("Keep only one of index/noindex and one of follow/nofollow")
            .with_element(page.meta.robots.clone()),
        );
    }
}
