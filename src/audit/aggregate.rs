// src/audit/aggregate.rs
// =============================================================================
// This module runs the analyzers and merges their findings.
//
// Key functionality:
// - Runs every registered analyzer concurrently against one PageData
// - Waits for all of them; the first failure aborts the whole audit
// - Concatenates issues in registration order, then stable-sorts by
//   severity so critical issues come first
// - Counts issues per severity and stamps the finish time
//
// Rust concepts:
// - async/await: each analyzer call becomes a future
// - try_join_all: like Promise.all() that stops at the first error
// - Trait objects: Box<dyn Analyzer> lets one Vec hold different analyzers
// =============================================================================

use chrono::Utc;
use futures::future::try_join_all;
use log::{debug, error, info};

use super::result::{AuditResult, Stats};
use crate::checks::{default_analyzers, Analyzer, Issue};
use crate::error::AuditError;
use crate::page::{extract, PageData};

/// Runs a fixed set of analyzers over pages.
///
/// `Auditor::default()` carries the eight built-in analyzers.
pub struct Auditor {
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl Default for Auditor {
    fn default() -> Self {
        Auditor::with_analyzers(default_analyzers())
    }
}

impl Auditor {
    /// Builds an auditor from an explicit analyzer list.
    ///
    /// The list order is the registration order, which decides how issues of
    /// equal severity are ordered in the result.
    pub fn with_analyzers(analyzers: Vec<Box<dyn Analyzer>>) -> Self {
        Auditor { analyzers }
    }

    /// Names of the registered analyzers, in registration order
    pub fn analyzer_names(&self) -> Vec<&'static str> {
        self.analyzers.iter().map(|a| a.name()).collect()
    }

    // Extracts the page and audits it
    //
    // Parameters:
    //   html: raw markup (may be empty or malformed)
    //   url: optional label for the page
    pub async fn audit(&self, html: &str, url: Option<&str>) -> Result<AuditResult, AuditError> {
        let page = extract(html, url);
        self.aggregate(page).await
    }

    // Runs all analyzers over an already extracted page
    //
    // Returns: the complete AuditResult, or the first analyzer fault.
    // A partial result is never returned.
    pub async fn aggregate(&self, page: PageData) -> Result<AuditResult, AuditError> {
        // One future per analyzer, all borrowing the same read-only page
        let runs = self
            .analyzers
            .iter()
            .map(|analyzer| run_analyzer(analyzer.as_ref(), &page));

        // try_join_all keeps the input order in its output, which gives us
        // registration order for free
        let per_analyzer = try_join_all(runs).await?;

        let mut issues: Vec<Issue> = per_analyzer.into_iter().flatten().collect();

        // sort_by_key is stable: equal severities keep their merged order
        issues.sort_by_key(|issue| issue.severity.rank());

        let stats = Stats::from_issues(&issues);

        info!(
            "Audited '{}': {} issue(s) ({} critical, {} warning, {} info)",
            page.url, stats.total, stats.critical, stats.warning, stats.info
        );

        Ok(AuditResult {
            url: page.url.clone(),
            timestamp: Utc::now(),
            issues,
            stats,
            page,
        })
    }
}

// Runs a single analyzer and logs the outcome
async fn run_analyzer(analyzer: &dyn Analyzer, page: &PageData) -> Result<Vec<Issue>, AuditError> {
    match analyzer.analyze(page) {
        Ok(issues) => {
            debug!("Analyzer '{}' reported {} issue(s)", analyzer.name(), issues.len());
            Ok(issues)
        }
        Err(e) => {
            error!("Analyzer '{}' failed: {}", analyzer.name(), e);
            Err(e)
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why are the analyzers async if they do no I/O?
//    - Wrapping each one in a future lets one join primitive run them all
//      and collect "all results or the first error"
//    - If an analyzer ever needs to await something, nothing else changes
//
// 2. Why not tokio::spawn?
//    - spawn needs 'static + Send futures, but the parsed document inside
//      PageData is neither, and copying it eight times would be wasteful
//    - try_join_all polls the futures on the current task instead
//
// 3. What does flatten() do here?
//    - per_analyzer is Vec<Vec<Issue>>
//    - flatten() walks the inner Vecs one after another, giving a single
//      stream of issues in analyzer order
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{Category, Severity};

    // Analyzer that always emits a fixed list of issues
    struct Fixed {
        name: &'static str,
        issues: Vec<Issue>,
    }

    impl Analyzer for Fixed {
        fn name(&self) -> &'static str {
            self.name
        }

        fn category(&self) -> Category {
            Category::Content
        }

        fn analyze(&self, _page: &PageData) -> Result<Vec<Issue>, AuditError> {
            Ok(self.issues.clone())
        }
    }

    // Analyzer that always faults
    struct Failing;

    impl Analyzer for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn category(&self) -> Category {
            Category::Links
        }

        fn analyze(&self, _page: &PageData) -> Result<Vec<Issue>, AuditError> {
            Err(AuditError::fault(self.name(), "unexpected document structure"))
        }
    }

    fn issue(severity: Severity, check: &str) -> Issue {
        Issue::new(severity, Category::Content, check, check)
    }

    #[tokio::test]
    async fn test_stable_sort_across_analyzers() {
        let auditor = Auditor::with_analyzers(vec![
            Box::new(Fixed {
                name: "first",
                issues: vec![
                    issue(Severity::Info, "a-info"),
                    issue(Severity::Critical, "a-critical"),
                    issue(Severity::Warning, "a-warning-1"),
                    issue(Severity::Warning, "a-warning-2"),
                ],
            }),
            Box::new(Fixed {
                name: "second",
                issues: vec![
                    issue(Severity::Warning, "b-warning"),
                    issue(Severity::Critical, "b-critical"),
                ],
            }),
        ]);

        let result = auditor.audit("", None).await.unwrap();
        let order: Vec<&str> = result.issues.iter().map(|i| i.check.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "a-critical",
                "b-critical",
                "a-warning-1",
                "a-warning-2",
                "b-warning",
                "a-info"
            ]
        );
        assert_eq!(
            result.stats,
            Stats {
                total: 6,
                critical: 2,
                warning: 3,
                info: 1
            }
        );
    }

    #[tokio::test]
    async fn test_failure_aborts_audit() {
        let auditor = Auditor::with_analyzers(vec![
            Box::new(Fixed {
                name: "ok",
                issues: vec![issue(Severity::Info, "fine")],
            }),
            Box::new(Failing),
        ]);

        let err = auditor.audit("<p>hi</p>", None).await.unwrap_err();
        assert_eq!(
            err,
            AuditError::fault("failing", "unexpected document structure")
        );
    }

    #[tokio::test]
    async fn test_no_analyzers_means_no_issues() {
        let auditor = Auditor::with_analyzers(Vec::new());
        let result = auditor.audit("<title>x</title>", Some("https://example.com")).await.unwrap();
        assert!(result.issues.is_empty());
        assert_eq!(result.stats, Stats::default());
        assert_eq!(result.url, "https://example.com");
        assert!(result.passed());
    }

    #[tokio::test]
    async fn test_timestamp_is_stamped_at_completion() {
        let before = Utc::now();
        let result = Auditor::default().audit("<p>hi</p>", None).await.unwrap();
        assert!(result.timestamp >= before);
        assert!(result.timestamp <= Utc::now());
    }

    #[test]
    fn test_default_registration_order() {
        let names = Auditor::default().analyzer_names();
        assert_eq!(
            names,
            vec![
                "meta-tags",
                "schema",
                "headings",
                "images",
                "links",
                "content",
                "mobile",
                "performance"
            ]
        );
    }
}
