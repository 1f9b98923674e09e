// src/error.rs
// =============================================================================
// Error types for the audit library.
//
// Malformed HTML is never an error (it just produces a sparse page), so the
// only thing that can go wrong during an audit is an analyzer fault. When
// that happens the whole audit fails: a report that silently skipped a
// check category would misrepresent what was checked.
//
// Rust concepts:
// - thiserror: derive std::error::Error and Display from attributes
// - Enums: one variant per kind of failure
// =============================================================================

use thiserror::Error;

/// Everything that can abort an audit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuditError {
    /// A CSS selector used by an analyzer failed to compile.
    #[error("invalid CSS selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// An analyzer hit a condition it could not handle.
    #[error("analyzer '{analyzer}' failed: {message}")]
    AnalyzerFault { analyzer: String, message: String },
}

impl AuditError {
    /// Shorthand used by analyzers to report a fault under their own name
    pub fn fault(analyzer: &str, message: impl Into<String>) -> Self {
        AuditError::AnalyzerFault {
            analyzer: analyzer.to_string(),
            message: message.into(),
        }
    }
}
