// src/report/markdown.rs
// =============================================================================
// Renders an AuditResult as a markdown report.
//
// Layout:
//   # SEO Audit Report
//   URL / time / summary counts
//   ## one section per severity that has issues, in ranked order
//   ### one entry per issue with location and recommendation
//
// No decisions are made here: the issue order is the one the audit already
// established.
// =============================================================================

use std::fmt::Write;

use crate::audit::AuditResult;
use crate::checks::{Issue, Severity};

// Builds the full markdown report
//
// Parameters:
//   result: the finished audit (borrowed, nothing is consumed)
//
// Returns: the report text, ending with a newline
pub fn format_report(result: &AuditResult) -> String {
    let mut out = String::new();
    let stats = &result.stats;

    out.push_str("# SEO Audit Report\n\n");
    out.push_str(&format!("**URL:** {}  \n", escape(&result.url)));
    out.push_str(&format!(
        "**Audited:** {}\n\n",
        result.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!(
        "**Summary:** {} issue{} ({} critical, {} warning{}, {} info)\n",
        stats.total,
        plural(stats.total),
        stats.critical,
        stats.warning,
        plural(stats.warning),
        stats.info
    ));

    if result.issues.is_empty() {
        out.push_str("\n✅ No issues found. The page passed every check.\n");
        return out;
    }

    // Running number across sections so every issue has a unique index
    let mut number = 0;
    for severity in Severity::ALL {
        let count = stats.count(severity);
        if count == 0 {
            continue;
        }

        out.push_str(&format!("\n## {} ({})\n", section_title(severity), count));
        for issue in result.issues_with(severity) {
            number += 1;
            write_issue(&mut out, number, issue);
        }
    }

    out
}

// Appends one issue entry
fn write_issue(out: &mut String, number: usize, issue: &Issue) {
    // Writing to a String cannot fail, so the fmt::Result is ignored
    let _ = writeln!(
        out,
        "\n### {}. [{}] {}\n",
        number,
        issue.category,
        escape(&issue.message)
    );
    let _ = writeln!(out, "- **Severity:** {}", severity_label(issue.severity));
    let _ = writeln!(out, "- **Check:** `{}`", issue.check);
    if let Some(element) = &issue.element {
        let _ = writeln!(out, "- **Location:** {}", code_span(element));
    }
    if let Some(recommendation) = &issue.recommendation {
        let _ = writeln!(out, "- **Recommendation:** {}", escape(recommendation));
    }
}

// Formats the severity with an emoji marker for quick scanning
fn severity_label(severity: Severity) -> String {
    match severity {
        Severity::Critical => "🔴 CRITICAL".to_string(),
        Severity::Warning => "🟡 WARNING".to_string(),
        Severity::Info => "🔵 INFO".to_string(),
    }
}

fn section_title(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "🔴 Critical Issues",
        Severity::Warning => "🟡 Warnings",
        Severity::Info => "🔵 Info",
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

// Escapes characters that markdown would otherwise read as markup.
// Messages mention tags like <title>, which would render as raw HTML.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '`' | '*' | '_' | '<' | '>' | '[' | ']' | '#') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

// Wraps text in a code span
//
// The fence is one backtick longer than the longest backtick run inside the
// text, so the text can never close the span early. When backticks are
// present the content is padded with a space; the parser strips it again.
fn code_span(text: &str) -> String {
    let text = text.replace('\n', " ");
    let longest_run = text
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);
    if longest_run == 0 {
        format!("{}{}{}", fence, text, fence)
    } else {
        format!("{} {} {}", fence, text, fence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Auditor;
    use pulldown_cmark::{Event, HeadingLevel, Parser, Tag};

    // Counts headings of one level in rendered markdown
    fn heading_count(markdown: &str, level: HeadingLevel) -> usize {
        Parser::new(markdown)
            .filter(|event| matches!(event, Event::Start(Tag::Heading(l, _, _)) if *l == level))
            .count()
    }

    #[tokio::test]
    async fn test_report_structure() {
        let result = Auditor::default()
            .audit(r#"<html><head></head><body><img src="a.png"></body></html>"#, Some("https://example.com/"))
            .await
            .unwrap();
        let report = format_report(&result);

        assert!(report.starts_with("# SEO Audit Report"));
        assert!(report.contains("**URL:** https://example.com/"));
        assert!(report.contains(&format!("**Summary:** {} issues", result.stats.total)));

        assert_eq!(heading_count(&report, HeadingLevel::H1), 1);
        let sections = Severity::ALL
            .iter()
            .filter(|s| result.stats.count(**s) > 0)
            .count();
        assert_eq!(heading_count(&report, HeadingLevel::H2), sections);
        assert_eq!(heading_count(&report, HeadingLevel::H3), result.stats.total);

        // Critical section comes first
        let critical = report.find("Critical Issues").unwrap();
        let info = report.find("🔵 Info").unwrap();
        assert!(critical < info);
    }

    #[tokio::test]
    async fn test_messages_do_not_leak_html() {
        let result = Auditor::default().audit("", None).await.unwrap();
        let report = format_report(&result);
        let html_events = Parser::new(&report)
            .filter(|event| matches!(event, Event::Html(_)))
            .count();
        assert_eq!(html_events, 0);
        assert!(report.contains("\\<title\\>"));
    }

    #[tokio::test]
    async fn test_clean_report() {
        let result = Auditor::with_analyzers(Vec::new())
            .audit("<p>hi</p>", None)
            .await
            .unwrap();
        let report = format_report(&result);
        assert!(report.contains("**Summary:** 0 issues (0 critical, 0 warnings, 0 info)"));
        assert!(report.contains("No issues found"));
    }

    #[test]
    fn test_escape_and_code_span() {
        assert_eq!(escape("<h1> *bold*"), "\\<h1\\> \\*bold\\*");
        assert_eq!(code_span("a.png"), "`a.png`");
        assert_eq!(code_span("a`b"), "`` a`b ``");
        assert_eq!(code_span("a``b`"), "``` a``b` ```");
    }

    #[test]
    fn test_code_span_survives_backtick_runs() {
        for text in ["plain", "a`b", "x``y", "```fenced```", "`edge`"] {
            let markdown = format!("Location: {}", code_span(text));
            let code: Vec<String> = Parser::new(&markdown)
                .filter_map(|event| match event {
                    Event::Code(code) => Some(code.to_string()),
                    _ => None,
                })
                .collect();
            assert_eq!(code, vec![text.to_string()], "markdown: {}", markdown);
        }
    }
}
