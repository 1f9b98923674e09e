// src/checks/mod.rs
// =============================================================================
// This module contains all SEO rule checks.
//
// Submodules (one analyzer each):
// - meta_tags: title, description, canonical, Open Graph, Twitter, robots
// - schema: JSON-LD / microdata structured data
// - headings: H1 presence and heading hierarchy
// - images: alt text, src, declared dimensions
// - links: anchor text and href sanity
// - content: body text volume and keyword stuffing
// - mobile: viewport configuration
// - performance: script/style counts and render-blocking resources
//
// Every analyzer implements the same Analyzer trait. Analyzers only read the
// PageData they are given, share no state and don't care in which order
// they run, which is what lets the audit run them all at once.
//
// Rust concepts:
// - Traits: A shared interface that different types implement
// - Trait objects: Box<dyn Analyzer> lets one Vec hold different analyzers
// =============================================================================

mod content;
mod headings;
mod images;
mod issue;
mod links;
mod meta_tags;
mod mobile;
mod performance;
mod schema;

pub use content::ContentAnalyzer;
pub use headings::HeadingAnalyzer;
pub use images::ImageAnalyzer;
pub use issue::{Category, Issue, Severity};
pub use links::LinkAnalyzer;
pub use meta_tags::MetaTagAnalyzer;
pub use mobile::MobileAnalyzer;
pub use performance::PerformanceAnalyzer;
pub use schema::SchemaAnalyzer;

use crate::error::AuditError;
use crate::page::PageData;

/// Trait implemented by all analyzers
pub trait Analyzer: Send + Sync {
    /// Short identifier used in logs and error messages
    fn name(&self) -> &'static str;

    /// The rule domain this analyzer reports under
    fn category(&self) -> Category;

    /// Checks the page and returns findings (possibly none).
    ///
    /// A page that merely lacks things is never an error; missing pieces
    /// are reported as issues. Errors are reserved for faults inside the
    /// analyzer itself, and they abort the whole audit.
    fn analyze(&self, page: &PageData) -> Result<Vec<Issue>, AuditError>;
}

/// The built-in analyzers, in registration order
pub fn default_analyzers() -> Vec<Box<dyn Analyzer>> {
    vec![
        Box::new(MetaTagAnalyzer),
        Box::new(SchemaAnalyzer),
        Box::new(HeadingAnalyzer),
        Box::new(ImageAnalyzer),
        Box::new(LinkAnalyzer),
        Box::new(ContentAnalyzer),
        Box::new(MobileAnalyzer),
        Box::new(PerformanceAnalyzer),
    ]
}

// Character count (not byte length), so non-ASCII titles are measured fairly
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

// Shortens long text for use as an issue location
pub(crate) fn snippet(text: &str, max_chars: usize) -> String {
    if char_len(text) <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}
