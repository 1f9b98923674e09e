// src/audit/result.rs
// =============================================================================
// The output of one audit run.
//
// AuditResult bundles the ranked issue list, the per-severity counts and
// the page snapshot the issues were computed from. The counts are always
// derived from the issue list itself (see Stats::from_issues), so the two
// can never disagree.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::checks::{Issue, Severity};
use crate::page::PageData;

/// Issue counts per severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
}

impl Stats {
    /// Partitions the issues by severity and counts each group
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut stats = Stats {
            total: issues.len(),
            ..Stats::default()
        };
        for issue in issues {
            match issue.severity {
                Severity::Critical => stats.critical += 1,
                Severity::Warning => stats.warning += 1,
                Severity::Info => stats.info += 1,
            }
        }
        stats
    }

    /// Count for one severity
    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
        }
    }
}

/// The result of auditing one page
#[derive(Debug, Clone, Serialize)]
pub struct AuditResult {
    /// Label of the audited page ("unknown" if none was given)
    pub url: String,
    /// When the audit finished
    pub timestamp: DateTime<Utc>,
    /// Critical first, then warnings, then info
    pub issues: Vec<Issue>,
    pub stats: Stats,
    /// The snapshot the issues were computed from
    pub page: PageData,
}

impl AuditResult {
    /// Issues of one severity, in ranked order
    pub fn issues_with(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }

    /// True when nothing critical was found
    pub fn passed(&self) -> bool {
        self.stats.critical == 0
    }
}
