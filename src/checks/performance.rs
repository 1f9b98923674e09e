// src/checks/performance.rs
// =============================================================================
// Performance checks.
//
// Nothing is downloaded, so these are proxy signals read from the markup:
//   too many scripts ........................ warning
//   too many stylesheets .................... warning
//   render-blocking scripts in <head> ....... warning
//   many inline <style> blocks .............. info
//   heavy HTML document ..................... warning
//   many images without lazy loading ........ info
// =============================================================================

use super::{snippet, Analyzer, Category, Issue};
use crate::config::{
    MAX_EAGER_IMAGES, MAX_HTML_BYTES, MAX_INLINE_STYLE_BLOCKS, MAX_SCRIPTS, MAX_STYLESHEETS,
};
use crate::error::AuditError;
use crate::page::PageData;

const CATEGORY: Category = Category::Performance;

pub struct PerformanceAnalyzer;

impl Analyzer for PerformanceAnalyzer {
    fn name(&self) -> &'static str {
        "performance"
    }

    fn category(&self) -> Category {
        CATEGORY
    }

    fn analyze(&self, page: &PageData) -> Result<Vec<Issue>, AuditError> {
        let mut issues = Vec::new();

        if page.scripts > MAX_SCRIPTS {
            issues.push(
                Issue::warning(
                    CATEGORY,
                    "too-many-scripts",
                    format!("Page loads {} scripts", page.scripts),
                )
                .with_recommendation(format!(
                    "Bundle or remove scripts to stay under {}",
                    MAX_SCRIPTS
                )),
            );
        }

        if page.styles > MAX_STYLESHEETS {
            issues.push(
                Issue::warning(
                    CATEGORY,
                    "too-many-stylesheets",
                    format!("Page loads {} stylesheets", page.styles),
                )
                .with_recommendation(format!(
                    "Combine stylesheets to stay under {}",
                    MAX_STYLESHEETS
                )),
            );
        }

        // External scripts in <head> block rendering unless deferred
        let blocking: Vec<String> = page
            .select("head script[src]")?
            .iter()
            .filter(|script| {
                let element = script.value();
                element.attr("async").is_none()
                    && element.attr("defer").is_none()
                    && element.attr("type").map(str::trim) != Some("module")
            })
            .map(|script| snippet(script.value().attr("src").unwrap_or_default(), 60))
            .collect();
        if !blocking.is_empty() {
            issues.push(
                Issue::warning(
                    CATEGORY,
                    "render-blocking-scripts",
                    format!("{} script(s) in <head> block rendering", blocking.len()),
                )
                .with_recommendation("Add defer or async, or move the scripts to the end of <body>")
                .with_element(blocking.join(", ")),
            );
        }

        let inline_styles = page.count("style")?;
        if inline_styles > MAX_INLINE_STYLE_BLOCKS {
            issues.push(
                Issue::info(
                    CATEGORY,
                    "many-inline-styles",
                    format!("Page has {} inline <style> blocks", inline_styles),
                )
                .with_recommendation("Move shared CSS into a cached external stylesheet"),
            );
        }

        if page.html_bytes > MAX_HTML_BYTES {
            issues.push(
                Issue::warning(
                    CATEGORY,
                    "large-html",
                    format!("HTML document is {} KiB", page.html_bytes / 1024),
                )
                .with_recommendation(format!(
                    "Trim markup, inline data and comments to stay under {} KiB",
                    MAX_HTML_BYTES / 1024
                )),
            );
        }

        let eager_images = page
            .images
            .iter()
            .filter(|image| !image.loading.trim().eq_ignore_ascii_case("lazy"))
            .count();
        if eager_images > MAX_EAGER_IMAGES {
            issues.push(
                Issue::info(
                    CATEGORY,
                    "images-not-lazy-loaded",
                    format!("{} images load eagerly", eager_images),
                )
                .with_recommendation("Add loading=\"lazy\" to images below the fold"),
            );
        }

        Ok(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::extract;

    fn checks_for(html: &str) -> Vec<String> {
        let issues = PerformanceAnalyzer.analyze(&extract(html, None)).unwrap();
        issues.into_iter().map(|i| i.check).collect()
    }

    #[test]
    fn test_lean_page() {
        let html = r#"<head><script src="/app.js" defer></script><link rel="stylesheet" href="/a.css"></head>"#;
        assert!(checks_for(html).is_empty());
    }

    #[test]
    fn test_render_blocking_scripts() {
        let html = r#"<head>
            <script src="/blocking.js"></script>
            <script src="/async.js" async></script>
            <script src="/module.js" type="module"></script>
            <script>inline()</script>
        </head>"#;
        let issues = PerformanceAnalyzer.analyze(&extract(html, None)).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].check, "render-blocking-scripts");
        assert_eq!(issues[0].element.as_deref(), Some("/blocking.js"));
    }

    #[test]
    fn test_counts() {
        let mut html = String::from("<head>");
        for i in 0..=MAX_STYLESHEETS {
            html.push_str(&format!(r#"<link rel="stylesheet" href="/{}.css">"#, i));
        }
        for _ in 0..=MAX_INLINE_STYLE_BLOCKS {
            html.push_str("<style>p{}</style>");
        }
        html.push_str("</head><body>");
        for i in 0..=MAX_SCRIPTS {
            html.push_str(&format!(r#"<script src="/{}.js"></script>"#, i));
        }
        html.push_str("</body>");

        assert_eq!(
            checks_for(&html),
            vec!["too-many-scripts", "too-many-stylesheets", "many-inline-styles"]
        );
    }

    #[test]
    fn test_large_html_and_eager_images() {
        let mut html = String::from("<body>");
        for i in 0..=MAX_EAGER_IMAGES {
            html.push_str(&format!(r#"<img src="/{}.png" alt="Image {}">"#, i, i));
        }
        html.push_str(&format!("<p>{}</p></body>", "x".repeat(MAX_HTML_BYTES)));

        assert_eq!(checks_for(&html), vec!["large-html", "images-not-lazy-loaded"]);
    }
}
