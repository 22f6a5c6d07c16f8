//! Audit results and their aggregation.
//!
//! This module provides:
//! - The report data model (`Finding`, `SeverityBuckets`, `Report`, ...)
//! - The proportional overall score and per-category scores
//! - Insight derivation and the phased action plan
//!
//! `assemble` is a pure fold: the same findings and metrics always produce
//! the same report (apart from the timestamp).

mod action_plan;
mod insights;
mod scoring;
mod types;

pub use action_plan::build_action_plan;
pub use insights::derive_insights;
pub use scoring::{category_scores, overall_score};
pub use types::{
    ActionPhase, AuditStatus, Category, Finding, FindingDetails, Insight, InsightKind, Report,
    ScoreRating, Severity, SeverityBuckets,
};

use crate::metrics::PageMetrics;
use crate::parse::WordPressInfo;

/// Timestamp format used in reports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time in `TIMESTAMP_FORMAT`.
pub fn timestamp_now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Folds check output into a completed report.
///
/// Findings keep their input order within each severity bucket.
pub fn assemble<I>(
    url: &str,
    findings: I,
    metrics: PageMetrics,
    wordpress: Option<WordPressInfo>,
) -> Report
where
    I: IntoIterator<Item = Finding>,
{
    let findings: SeverityBuckets = findings.into_iter().collect();

    Report {
        url: url.to_string(),
        timestamp: timestamp_now(),
        status: AuditStatus::Completed,
        overall_score: overall_score(&findings),
        category_scores: category_scores(&findings),
        insights: derive_insights(&findings, &metrics),
        action_plan: build_action_plan(&findings),
        findings,
        metrics,
        wordpress,
        suggestions: None,
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
