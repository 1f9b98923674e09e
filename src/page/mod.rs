// src/page/mod.rs
// =============================================================================
// This module turns raw HTML into the structural snapshot every analyzer
// reads.
//
// Submodules:
// - model: the PageData snapshot and its parts (headings, images, links)
// - extract: parsing HTML and filling in PageData
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod extract;
mod model;

pub use extract::extract;
pub use model::{Heading, Image, Link, MetaTags, PageData};

use crate::error::AuditError;
use scraper::Selector;

/// Compiles a CSS selector, turning a parse failure into an AuditError
/// instead of a panic.
pub fn selector(css: &str) -> Result<Selector, AuditError> {
    Selector::parse(css).map_err(|e| AuditError::InvalidSelector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}
