// src/checks/issue.rs
// =============================================================================
// The finding type every analyzer produces.
//
// Key pieces:
// - Severity: critical / warning / info, ordered so that sorting puts the
//   most urgent findings first
// - Category: which rule domain produced the finding
// - Issue: one finding with a message and optional recommendation/location
//
// Rust concepts:
// - Derive macros: Ord on an enum orders variants by declaration order
// - Builder methods: with_* methods that take and return self
// =============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// How urgent a finding is.
///
/// Variants are declared in rank order, so the derived `Ord` sorts
/// critical before warning before info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Actively hurts indexing or ranking, fix first
    Critical,
    /// Should be addressed
    Warning,
    /// Worth knowing, low impact
    Info,
}

impl Severity {
    /// All severities in rank order
    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::Warning, Severity::Info];

    /// Sort rank: critical = 0, warning = 1, info = 2
    pub fn rank(self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::Warning => 1,
            Severity::Info => 2,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// The rule domain a finding belongs to (one per analyzer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    MetaTags,
    StructuredData,
    Headings,
    Images,
    Links,
    Content,
    Mobile,
    Performance,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::MetaTags => "Meta Tags",
            Category::StructuredData => "Structured Data",
            Category::Headings => "Headings",
            Category::Images => "Images",
            Category::Links => "Links",
            Category::Content => "Content",
            Category::Mobile => "Mobile",
            Category::Performance => "Performance",
        };
        write!(f, "{}", label)
    }
}

/// One finding reported by an analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub category: Category,
    /// Stable kebab-case rule id, e.g. "missing-title"
    pub check: String,
    /// What is wrong, in plain words
    pub message: String,
    /// How to fix it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    /// Where on the page (a heading's text, an image src, a link href...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
}

impl Issue {
    pub fn new(
        severity: Severity,
        category: Category,
        check: &str,
        message: impl Into<String>,
    ) -> Self {
        Issue {
            severity,
            category,
            check: check.to_string(),
            message: message.into(),
            recommendation: None,
            element: None,
        }
    }

    pub fn critical(category: Category, check: &str, message: impl Into<String>) -> Self {
        Issue::new(Severity::Critical, category, check, message)
    }

    pub fn warning(category: Category, check: &str, message: impl Into<String>) -> Self {
        Issue::new(Severity::Warning, category, check, message)
    }

    pub fn info(category: Category, check: &str, message: impl Into<String>) -> Self {
        Issue::new(Severity::Info, category, check, message)
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }

    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }
}
