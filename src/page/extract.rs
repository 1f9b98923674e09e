// src/page/extract.rs
// =============================================================================
// This module extracts the structural snapshot (PageData) from HTML.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser), so malformed markup is
//   repaired the same way a browser would repair it
//
// Extraction never fails. Anything missing from the page shows up as an
// empty string, an empty list or a zero count, and the analyzers report
// those gaps as findings.
//
// Rust concepts:
// - Iterators: For processing collections
// - Closures: Anonymous functions (|x| ...)
// - Option combinators: map / unwrap_or_default instead of null checks
// =============================================================================

use log::{debug, error};
use scraper::{ElementRef, Html, Selector};

use super::model::{document_titles, Heading, Image, Link, MetaTags, PageData};
use crate::config::UNKNOWN_URL;

// Extracts a PageData snapshot from HTML content
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//   url: optional label for the page, kept as-is ("unknown" when None)
//
// Returns: PageData with every field filled in (possibly with defaults)
//
// Example:
//   html = "<title>Home</title><h1>Welcome</h1>"
//   result.title = "Home", result.headings = [{level: 1, text: "Welcome"}]
pub fn extract(html: &str, url: Option<&str>) -> PageData {
    // Parse the HTML into a document
    let document = Html::parse_document(html);

    // SVG icons may carry their own <title>; only the document's own counts
    let title = document_titles(&document)
        .first()
        .map(element_text)
        .unwrap_or_default();

    let meta = MetaTags {
        description: first_attr(&document, r#"meta[name="description"]"#, "content"),
        og_title: first_attr(&document, r#"meta[property="og:title"]"#, "content"),
        og_description: first_attr(&document, r#"meta[property="og:description"]"#, "content"),
        og_image: first_attr(&document, r#"meta[property="og:image"]"#, "content"),
        twitter_card: first_attr(&document, r#"meta[name="twitter:card"]"#, "content"),
        canonical: first_attr(&document, r#"link[rel~="canonical"]"#, "href"),
        robots: first_attr(&document, r#"meta[name="robots"]"#, "content"),
    };

    let headings = extract_headings(&document);
    let images = extract_images(&document);
    let links = extract_links(&document);
    let scripts = select_all(&document, "script").len();
    let styles = select_all(&document, r#"link[rel~="stylesheet"]"#).len();

    debug!(
        "Extracted page '{}': {} heading(s), {} image(s), {} link(s), {} script(s), {} stylesheet(s)",
        url.unwrap_or(UNKNOWN_URL),
        headings.len(),
        images.len(),
        links.len(),
        scripts,
        styles
    );

    PageData {
        url: url.unwrap_or(UNKNOWN_URL).to_string(),
        title,
        meta,
        headings,
        images,
        links,
        scripts,
        styles,
        html_bytes: html.len(),
        document,
    }
}

// Collects headings h1..h6 in document order
//
// One combined selector keeps the order of the page itself; selecting each
// level separately would group all h1s before all h2s.
fn extract_headings(document: &Html) -> Vec<Heading> {
    select_all(document, "h1, h2, h3, h4, h5, h6")
        .into_iter()
        .filter_map(|el| {
            let level = match el.value().name() {
                "h1" => 1,
                "h2" => 2,
                "h3" => 3,
                "h4" => 4,
                "h5" => 5,
                "h6" => 6,
                _ => return None,
            };
            Some(Heading {
                level,
                text: element_text(&el),
            })
        })
        .collect()
}

// Collects every <img>, even ones without src or alt
fn extract_images(document: &Html) -> Vec<Image> {
    select_all(document, "img")
        .into_iter()
        .map(|el| {
            let element = el.value();
            Image {
                src: element.attr("src").unwrap_or_default().to_string(),
                alt: element.attr("alt").unwrap_or_default().to_string(),
                has_alt: element.attr("alt").is_some(),
                width: element.attr("width").and_then(parse_dimension),
                height: element.attr("height").and_then(parse_dimension),
                loading: element.attr("loading").unwrap_or_default().to_string(),
            }
        })
        .collect()
}

// Collects every <a> that has an href attribute
fn extract_links(document: &Html) -> Vec<Link> {
    select_all(document, "a[href]")
        .into_iter()
        .map(|el| {
            let href = el.value().attr("href").unwrap_or_default().to_string();
            let external = Link::is_external_href(&href);
            Link {
                href,
                text: element_text(&el),
                external,
            }
        })
        .collect()
}

// Parses a width/height attribute like "640" or "640px"
//
// Percentages and other units can't be turned into pixels, so they yield None.
fn parse_dimension(value: &str) -> Option<u32> {
    value.trim().trim_end_matches("px").trim().parse().ok()
}

// Text content of an element with surrounding whitespace trimmed
fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

// Value of `attr` on the first element matching `css`, or "" if none
fn first_attr(document: &Html, css: &str, attr: &str) -> String {
    select_all(document, css)
        .first()
        .and_then(|el| el.value().attr(attr))
        .unwrap_or_default()
        .to_string()
}

// Selects all elements matching a constant selector
//
// Our selectors are constants, so a parse failure is a programming error.
// We log it and treat the selector as matching nothing rather than abort:
// extraction must always produce a PageData.
fn select_all<'a>(document: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => document.select(&selector).collect(),
        Err(e) => {
            error!("Failed to parse CSS selector '{}' during extraction: {}", css, e);
            Vec::new()
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why unwrap_or_default() on attributes?
//    - attr() returns Option<&str> because the attribute may be missing
//    - unwrap_or_default() gives "" for None, so every image and link still
//      produces an entry
//
// 2. What does .text() return?
//    - An iterator over all text nodes inside the element
//    - collect::<String>() glues them together, so <h1>Hi <b>there</b></h1>
//      becomes "Hi there"
//
// 3. Why is the document moved into PageData?
//    - Analyzers sometimes need to run their own selectors
//    - Keeping the parsed tree avoids parsing the same HTML twice
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_defaults_to_unknown() {
        let page = extract("<p>hi</p>", None);
        assert_eq!(page.url, "unknown");

        let page = extract("<p>hi</p>", Some("https://example.com/"));
        assert_eq!(page.url, "https://example.com/");
    }

    #[test]
    fn test_empty_markup_yields_defaults() {
        let page = extract("", None);
        assert_eq!(page.title, "");
        assert_eq!(page.meta, MetaTags::default());
        assert!(page.headings.is_empty());
        assert!(page.images.is_empty());
        assert!(page.links.is_empty());
        assert_eq!(page.scripts, 0);
        assert_eq!(page.styles, 0);
    }

    #[test]
    fn test_meta_tags() {
        let html = r#"<html><head>
            <title>  Rust Guide  </title>
            <meta name="description" content="All about Rust">
            <meta property="og:title" content="OG Rust">
            <meta property="og:image" content="https://example.com/rust.png">
            <meta name="twitter:card" content="summary">
            <meta name="robots" content="index, follow">
            <link rel="canonical" href="https://example.com/rust">
            <link rel="stylesheet" href="/main.css">
            <link rel="stylesheet" href="/print.css" media="print">
        </head><body></body></html>"#;
        let page = extract(html, None);

        assert_eq!(page.title, "Rust Guide");
        assert_eq!(page.meta.description, "All about Rust");
        assert_eq!(page.meta.og_title, "OG Rust");
        assert_eq!(page.meta.og_description, "");
        assert_eq!(page.meta.og_image, "https://example.com/rust.png");
        assert_eq!(page.meta.twitter_card, "summary");
        assert_eq!(page.meta.robots, "index, follow");
        assert_eq!(page.meta.canonical, "https://example.com/rust");
        assert_eq!(page.styles, 2);
    }

    #[test]
    fn test_headings_keep_document_order() {
        let html = "<h2> Intro </h2><h1>Title</h1><h3>Detail</h3><h2>Outro</h2>";
        let page = extract(html, None);
        let levels: Vec<u8> = page.headings.iter().map(|h| h.level).collect();
        assert_eq!(levels, vec![2, 1, 3, 2]);
        assert_eq!(page.headings[0].text, "Intro");
    }

    #[test]
    fn test_every_image_is_extracted() {
        let html = r#"<img src="a.png"><img alt="b"><img><img src="d.png" alt="" width="640px" height="50%">"#;
        let page = extract(html, None);
        assert_eq!(page.images.len(), 4);
        assert_eq!(page.images[0].src, "a.png");
        assert_eq!(page.images[0].alt, "");
        assert!(!page.images[0].has_alt);
        assert_eq!(page.images[1].src, "");
        assert!(page.images[1].has_alt);
        assert!(page.images[3].has_alt);
        assert_eq!(page.images[3].width, Some(640));
        assert_eq!(page.images[3].height, None);
    }

    #[test]
    fn test_links_and_external_flag() {
        let html = r#"
            <a href="/about">About</a>
            <a href="https://x.com">X</a>
            <a href="//cdn.example.com">CDN</a>
            <a href="">  </a>
            <a name="anchor-without-href">skipped</a>
        "#;
        let page = extract(html, None);
        assert_eq!(page.links.len(), 4);
        assert!(!page.links[0].external);
        assert_eq!(page.links[0].text, "About");
        assert!(page.links[1].external);
        assert!(!page.links[2].external);
        assert_eq!(page.links[3].href, "");
        assert_eq!(page.links[3].text, "");
    }

    #[test]
    fn test_svg_title_is_not_the_page_title() {
        let html = r#"<html><head></head><body>
            <button><svg><title>Menu</title><path d="M0 0h10"/></svg></button>
        </body></html>"#;
        assert_eq!(extract(html, None).title, "");

        let html = r#"<html><head><title>Docs</title></head><body>
            <svg><title>Menu</title></svg>
        </body></html>"#;
        assert_eq!(extract(html, None).title, "Docs");
    }

    #[test]
    fn test_malformed_markup_does_not_fail() {
        let html = "<html><head><title>Broken<body><h1>Unclosed <p>text <img src=x.png";
        let page = extract(html, None);
        assert_eq!(page.html_bytes, html.len());
        assert!(page.images.len() <= 1);
    }

    #[test]
    fn test_script_count() {
        let html = r#"<script src="a.js"></script><script>inline()</script>"#;
        let page = extract(html, None);
        assert_eq!(page.scripts, 2);
    }
}
