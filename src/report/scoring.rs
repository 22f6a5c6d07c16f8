//! Overall and per-category scores.

use std::collections::BTreeMap;

use super::types::{Category, Severity, SeverityBuckets};

/// Weight of each bucket in the overall score. Passed findings earn a point,
/// issues cost a fraction of one.
const PASSED_WEIGHT: f64 = 1.0;
const LOW_PENALTY: f64 = 0.1;
const MEDIUM_PENALTY: f64 = 0.3;
const HIGH_PENALTY: f64 = 0.6;
const CRITICAL_PENALTY: f64 = 1.0;

/// Proportional overall score in `0..=100`.
///
/// `achieved = passed - 0.1*low - 0.3*medium - 0.6*high - 1.0*critical`,
/// divided by the total number of findings, floored and clamped at 0.
/// No findings at all scores 0.
pub fn overall_score(findings: &SeverityBuckets) -> u8 {
    let total = findings.total();
    if total == 0 {
        return 0;
    }

    let achieved = findings.count(Severity::Passed) as f64 * PASSED_WEIGHT
        - findings.count(Severity::Low) as f64 * LOW_PENALTY
        - findings.count(Severity::Medium) as f64 * MEDIUM_PENALTY
        - findings.count(Severity::High) as f64 * HIGH_PENALTY
        - findings.count(Severity::Critical) as f64 * CRITICAL_PENALTY;

    let score = (achieved / total as f64 * 100.0).floor();
    score.clamp(0.0, 100.0) as u8
}

/// Score per scored category in `0..=100`.
///
/// `passed / (passed + critical + high + medium)` for the category, floored.
/// Low findings do not count against a category. A category with no counted
/// findings scores 100.
pub fn category_scores(findings: &SeverityBuckets) -> BTreeMap<Category, u8> {
    Category::SCORED
        .iter()
        .map(|&category| {
            let in_category = |severity: Severity| {
                findings
                    .get(severity)
                    .iter()
                    .filter(|finding| finding.category == category)
                    .count()
            };
            let passed = in_category(Severity::Passed);
            let issues = in_category(Severity::Critical)
                + in_category(Severity::High)
                + in_category(Severity::Medium);
            let total = passed + issues;
            let score = if total == 0 {
                100
            } else {
                (passed * 100 / total) as u8
            };
            (category, score)
        })
        .collect()
}
