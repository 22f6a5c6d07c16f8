//! Headline insights.
//!
//! Heuristics over the whole finding set, emitted in a fixed order.

use super::types::{Insight, InsightKind, Severity, SeverityBuckets};
use crate::config::{HIGH_ISSUE_INSIGHT_THRESHOLD, SLOW_LOAD_SECS, THIN_CONTENT_WORDS};
use crate::metrics::PageMetrics;

/// Derives insights from the findings and metrics.
///
/// The HTTPS and viewport insights fire when no passed finding mentions
/// "HTTPS" or "Viewport", so their wording is tied to the passed messages of
/// the security and mobile checks.
pub fn derive_insights(findings: &SeverityBuckets, metrics: &PageMetrics) -> Vec<Insight> {
    let mut insights = Vec::new();

    let critical = findings.count(Severity::Critical);
    if critical > 0 {
        insights.push(Insight {
            kind: InsightKind::Critical,
            title: "Critical Issues Require Immediate Attention".to_string(),
            message: format!(
                "Found {critical} critical issue(s) that are severely impacting your SEO performance. Address these first."
            ),
            action: "Start with the critical issues".to_string(),
        });
    }

    let high = findings.count(Severity::High);
    if high > HIGH_ISSUE_INSIGHT_THRESHOLD {
        insights.push(Insight {
            kind: InsightKind::Warning,
            title: "Multiple High-Priority Issues Detected".to_string(),
            message: format!(
                "You have {high} high-priority issues. Fixing these will significantly improve your SEO."
            ),
            action: "Review the high-priority issues".to_string(),
        });
    }

    if metrics.word_count < THIN_CONTENT_WORDS {
        insights.push(Insight {
            kind: InsightKind::Suggestion,
            title: "Content Length Opportunity".to_string(),
            message: format!(
                "Your page has only {} words. Pages with 1000+ words tend to rank better.",
                metrics.word_count
            ),
            action: "Add comprehensive content covering user questions".to_string(),
        });
    }

    if !passed_mentions(findings, "HTTPS") {
        insights.push(Insight {
            kind: InsightKind::Critical,
            title: "Security Alert".to_string(),
            message: "Your site is not using HTTPS. This is a major ranking factor and security concern."
                .to_string(),
            action: "Obtain and install an SSL certificate immediately".to_string(),
        });
    }

    if !passed_mentions(findings, "Viewport") {
        insights.push(Insight {
            kind: InsightKind::Critical,
            title: "Mobile Optimization Missing".to_string(),
            message: "Page is not optimized for mobile devices. Mobile-first indexing makes this critical."
                .to_string(),
            action: "Add a viewport meta tag and ensure responsive design".to_string(),
        });
    }

    if metrics.load_time_secs > SLOW_LOAD_SECS {
        insights.push(Insight {
            kind: InsightKind::Warning,
            title: "Performance Optimization Needed".to_string(),
            message: format!(
                "Page loads in {:.1}s. Users expect < 3 seconds. Slow sites lose visitors and rankings.",
                metrics.load_time_secs
            ),
            action: "Optimize images, enable caching, use a CDN".to_string(),
        });
    }

    insights
}

fn passed_mentions(findings: &SeverityBuckets, needle: &str) -> bool {
    findings
        .get(Severity::Passed)
        .iter()
        .any(|finding| finding.message.contains(needle))
}
