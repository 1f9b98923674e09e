// src/checks/links.rs
// =============================================================================
// Link checks.
//
// This never makes network requests: a link is judged only by what the
// markup says about it.
//
// Rule table:
//   link with no text ....................... warning
//   placeholder href ("#", "javascript:") ... warning
//   absolute href that isn't a valid URL .... warning
//   non-descriptive text ("click here") ..... info
//   too many links .......................... info
//   too many external links ................. warning
//   insecure http:// links .................. info (one issue for all)
//
// A link whose only content is an image counts as having text when the
// image has alt text; aria-label and title attributes count too.
// =============================================================================

use url::Url;

use super::{snippet, Analyzer, Category, Issue};
use crate::config::{MAX_EXTERNAL_LINKS, MAX_LINKS, NON_DESCRIPTIVE_LINK_TEXT};
use crate::error::AuditError;
use crate::page::{selector, Link, PageData};

const CATEGORY: Category = Category::Links;

pub struct LinkAnalyzer;

impl Analyzer for LinkAnalyzer {
    fn name(&self) -> &'static str {
        "links"
    }

    fn category(&self) -> Category {
        CATEGORY
    }

    fn analyze(&self, page: &PageData) -> Result<Vec<Issue>, AuditError> {
        let mut issues = Vec::new();

        // Same selector the extractor uses, so anchors line up with page.links
        let anchors = page.select("a[href]")?;
        let image_with_alt = selector("img[alt]")?;

        for (index, link) in page.links.iter().enumerate() {
            let locator = locate(link, index);

            if link.text.is_empty() {
                let labelled = anchors.get(index).is_some_and(|anchor| {
                    let element = anchor.value();
                    let has_label = ["aria-label", "title"]
                        .iter()
                        .any(|attr| element.attr(attr).is_some_and(|v| !v.trim().is_empty()));
                    let has_image_alt = anchor
                        .select(&image_with_alt)
                        .any(|img| img.value().attr("alt").is_some_and(|alt| !alt.trim().is_empty()));
                    has_label || has_image_alt
                });

                if !labelled {
                    issues.push(
                        Issue::warning(CATEGORY, "empty-link-text", "Link has no text")
                            .with_recommendation("Give the link visible text that describes its target")
                            .with_element(locator.clone()),
                    );
                }
            } else if is_non_descriptive(&link.text) {
                issues.push(
                    Issue::info(
                        CATEGORY,
                        "non-descriptive-link-text",
                        format!("Link text \"{}\" does not describe the target", link.text),
                    )
                    .with_recommendation("Use anchor text that says where the link goes")
                    .with_element(locator.clone()),
                );
            }

            if is_placeholder(&link.href) {
                issues.push(
                    Issue::warning(
                        CATEGORY,
                        "placeholder-href",
                        "Link points nowhere (empty, \"#\" or javascript: href)",
                    )
                    .with_recommendation("Use a real URL, or a <button> for script-driven actions")
                    .with_element(locator.clone()),
                );
            } else if link.external && !is_valid_absolute(&link.href) {
                issues.push(
                    Issue::warning(CATEGORY, "malformed-url", "Link URL is malformed")
                        .with_recommendation("Fix the URL so it parses and includes a host name")
                        .with_element(locator.clone()),
                );
            }
        }

        if page.links.len() > MAX_LINKS {
            issues.push(
                Issue::info(
                    CATEGORY,
                    "too-many-links",
                    format!("Page has {} links", page.links.len()),
                )
                .with_recommendation(format!(
                    "Keep the number of links under {} so each one carries weight",
                    MAX_LINKS
                )),
            );
        }

        let external = page.links.iter().filter(|l| l.external).count();
        if external > MAX_EXTERNAL_LINKS {
            issues.push(
                Issue::warning(
                    CATEGORY,
                    "too-many-external-links",
                    format!("Page has {} external links", external),
                )
                .with_recommendation(format!(
                    "Reduce external links below {} or mark paid/untrusted ones rel=\"nofollow\"",
                    MAX_EXTERNAL_LINKS
                )),
            );
        }

        let insecure = page
            .links
            .iter()
            .filter(|l| l.href.starts_with("http://"))
            .count();
        if insecure > 0 {
            issues.push(
                Issue::info(
                    CATEGORY,
                    "insecure-links",
                    format!("{} link(s) use plain http://", insecure),
                )
                .with_recommendation("Link to https:// versions where available"),
            );
        }

        Ok(issues)
    }
}

fn is_placeholder(href: &str) -> bool {
    let href = href.trim().to_lowercase();
    href.is_empty() || href == "#" || href.starts_with("javascript:")
}

fn is_valid_absolute(href: &str) -> bool {
    match Url::parse(href.trim()) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}

fn is_non_descriptive(text: &str) -> bool {
    let normalized = text
        .trim()
        .trim_end_matches(|c: char| c.is_ascii_punctuation() || c == '…')
        .trim()
        .to_lowercase();
    NON_DESCRIPTIVE_LINK_TEXT.contains(&normalized.as_str())
}

// Location of a link: its href, or its position when the href is empty
fn locate(link: &Link, index: usize) -> String {
    if link.href.trim().is_empty() {
        format!("link #{}", index + 1)
    } else {
        snippet(&link.href, 80)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::extract;

    fn checks_for(html: &str) -> Vec<Issue> {
        LinkAnalyzer.analyze(&extract(html, None)).unwrap()
    }

    fn checks(issues: &[Issue]) -> Vec<&str> {
        issues.iter().map(|i| i.check.as_str()).collect()
    }

    #[test]
    fn test_good_links() {
        let issues = checks_for(r#"<a href="/about">About us</a><a href="https://rust-lang.org">Rust</a>"#);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_empty_text() {
        let issues = checks_for(r#"<a href="/about"></a>"#);
        assert_eq!(checks(&issues), vec!["empty-link-text"]);
        assert_eq!(issues[0].element.as_deref(), Some("/about"));
    }

    #[test]
    fn test_image_alt_and_aria_label_count_as_text() {
        let html = r#"
            <a href="/"><img src="logo.png" alt="Home"></a>
            <a href="/search" aria-label="Search"></a>
            <a href="/cart"><img src="cart.png" alt=""></a>
        "#;
        let issues = checks_for(html);
        assert_eq!(checks(&issues), vec!["empty-link-text"]);
        assert_eq!(issues[0].element.as_deref(), Some("/cart"));
    }

    #[test]
    fn test_placeholders() {
        let issues = checks_for(
            r##"<a href="#">Menu</a><a href="javascript:void(0)">Open</a><a href="">Nothing</a>"##,
        );
        assert_eq!(
            checks(&issues),
            vec!["placeholder-href", "placeholder-href", "placeholder-href"]
        );
        assert_eq!(issues[2].element.as_deref(), Some("link #3"));
    }

    #[test]
    fn test_malformed_external() {
        let issues = checks_for(r#"<a href="https://">Broken</a><a href="http://exa mple.com">Space</a>"#);
        let malformed = issues.iter().filter(|i| i.check == "malformed-url").count();
        assert_eq!(malformed, 2);
    }

    #[test]
    fn test_non_descriptive_text() {
        let issues = checks_for(r#"<a href="/docs">Click here!</a><a href="/blog">Read more...</a>"#);
        assert_eq!(
            checks(&issues),
            vec!["non-descriptive-link-text", "non-descriptive-link-text"]
        );
    }

    #[test]
    fn test_external_link_limit_and_insecure() {
        let mut html = String::new();
        for i in 0..=MAX_EXTERNAL_LINKS {
            html.push_str(&format!(r#"<a href="http://site{}.example.com">Site {}</a>"#, i, i));
        }
        let issues = checks_for(&html);
        assert!(issues.iter().any(|i| i.check == "too-many-external-links"));
        let insecure = issues.iter().find(|i| i.check == "insecure-links").unwrap();
        assert!(insecure.message.starts_with(&format!("{} link(s)", MAX_EXTERNAL_LINKS + 1)));
    }
}
