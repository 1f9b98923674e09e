// src/page/model.rs
// =============================================================================
// The structural snapshot of one HTML document.
//
// PageData is built once by the extractor and then only ever handed out as
// a shared reference (&PageData), so no analyzer can change it. Besides the
// flat fields it keeps the parsed document itself, for analyzers that need
// to ask more specific questions than the flat fields answer.
//
// Rust concepts:
// - Visibility: `document` is pub(super) so only the page module can set it
// - Lifetimes: ElementRef<'_> borrows from the document it came from
// =============================================================================

use scraper::{ElementRef, Html};
use serde::Serialize;

use super::selector;
use crate::error::AuditError;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// The `<title>` elements that title the document itself, in document order.
///
/// Inline SVG can carry its own `<title>` as the name of a graphic. The
/// parser places those in the SVG namespace, so they are left out here.
pub(crate) fn document_titles(document: &Html) -> Vec<ElementRef<'_>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "title" && &*el.value().name.ns == HTML_NAMESPACE)
        .collect()
}

/// Meta information from the document head.
///
/// Every field is an empty string when the tag is absent, never missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetaTags {
    pub description: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub twitter_card: String,
    pub canonical: String,
    pub robots: String,
}

/// One `<h1>`..`<h6>` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// 1 for h1 up to 6 for h6
    pub level: u8,
    /// Text content with surrounding whitespace trimmed
    pub text: String,
}

/// One `<img>` element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
    /// Whether the alt attribute exists at all (alt="" is a valid choice
    /// for decorative images, a missing attribute is not)
    pub has_alt: bool,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Value of the `loading` attribute, empty when absent
    pub loading: String,
}

/// One `<a href>` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    pub text: String,
    /// True only for hrefs with an explicit http:// or https:// scheme
    pub external: bool,
}

impl Link {
    /// Classifies an href. Relative and protocol-relative ("//host") links
    /// count as internal.
    pub fn is_external_href(href: &str) -> bool {
        href.starts_with("http://") || href.starts_with("https://")
    }
}

/// Immutable snapshot of one document at audit time
#[derive(Debug, Clone, Serialize)]
pub struct PageData {
    /// Opaque label supplied by the caller ("unknown" if none)
    pub url: String,
    pub title: String,
    pub meta: MetaTags,
    /// In document order, across all levels
    pub headings: Vec<Heading>,
    pub images: Vec<Image>,
    pub links: Vec<Link>,
    /// Number of `<script>` elements
    pub scripts: usize,
    /// Number of stylesheet `<link>` elements
    pub styles: usize,
    /// Size of the raw markup in bytes
    pub html_bytes: usize,
    #[serde(skip)]
    pub(super) document: Html,
}

impl PageData {
    /// The parsed document, for structural queries the flat fields don't cover
    pub fn document(&self) -> &Html {
        &self.document
    }

    /// Runs a CSS selector against the document and collects the matches.
    ///
    /// Fails only if the selector itself is invalid.
    pub fn select(&self, css: &str) -> Result<Vec<ElementRef<'_>>, AuditError> {
        let selector = selector(css)?;
        Ok(self.document.select(&selector).collect())
    }

    /// Counts the elements matching a CSS selector
    pub fn count(&self, css: &str) -> Result<usize, AuditError> {
        let selector = selector(css)?;
        Ok(self.document.select(&selector).count())
    }

    /// Number of document `<title>` elements (SVG titles excluded)
    pub fn title_count(&self) -> usize {
        document_titles(&self.document).len()
    }

    /// Visible text of the `<body>`.
    ///
    /// Text inside script, style, noscript and template elements is skipped,
    /// and text nodes are joined with single spaces.
    pub fn body_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();

        for node in self.document.root_element().descendants() {
            let text = match node.value().as_text() {
                Some(text) => text.trim(),
                None => continue,
            };
            if text.is_empty() {
                continue;
            }

            let mut in_body = false;
            let mut hidden = false;
            for ancestor in node.ancestors() {
                if let Some(element) = ancestor.value().as_element() {
                    match element.name() {
                        "body" => in_body = true,
                        "script" | "style" | "noscript" | "template" => hidden = true,
                        _ => {}
                    }
                }
            }

            if in_body && !hidden {
                parts.push(text);
            }
        }

        parts.join(" ")
    }
}
