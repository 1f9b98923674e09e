// src/lib.rs
// =============================================================================
// seo-audit: audits a single HTML page for SEO problems.
//
// The pipeline:
// 1. page::extract parses the HTML into a read-only PageData snapshot
// 2. every analyzer in `checks` inspects the snapshot independently
// 3. audit::Auditor runs them together, merges and ranks their issues
// 4. report renders the AuditResult as markdown or JSON
//
// The library does no network I/O: callers hand it the HTML.
// =============================================================================

pub mod audit;
pub mod checks;
pub mod config;
pub mod error;
pub mod logging;
pub mod page;
pub mod report;

pub use audit::{AuditResult, Auditor, Stats};
pub use checks::{Analyzer, Category, Issue, Severity};
pub use error::AuditError;
pub use page::PageData;

/// Audits one HTML document with the built-in analyzers.
///
/// `url` is only used as a label in the result ("unknown" when `None`).
pub async fn audit_page(html: &str, url: Option<&str>) -> Result<AuditResult, AuditError> {
    Auditor::default().audit(html, url).await
}

/// Audits one HTML document and renders the markdown report in one call.
pub async fn audit_page_and_format(html: &str, url: Option<&str>) -> Result<String, AuditError> {
    let result = audit_page(html, url).await?;
    Ok(report::format_report(&result))
}
