//! Phased remediation plan.

use super::types::{ActionPhase, Severity, SeverityBuckets};
use crate::config::MAX_TASKS_PER_PHASE;

struct PhaseTemplate {
    severity: Severity,
    priority: u8,
    phase: &'static str,
    title: &'static str,
    impact: &'static str,
    effort: &'static str,
    roi: u8,
}

const ISSUE_PHASES: [PhaseTemplate; 3] = [
    PhaseTemplate {
        severity: Severity::Critical,
        priority: 1,
        phase: "Immediate (This Week)",
        title: "Fix Critical Issues",
        impact: "High",
        effort: "Medium",
        roi: 5,
    },
    PhaseTemplate {
        severity: Severity::High,
        priority: 2,
        phase: "Short Term (This Month)",
        title: "Address High Priority Items",
        impact: "Medium-High",
        effort: "Medium",
        roi: 4,
    },
    PhaseTemplate {
        severity: Severity::Medium,
        priority: 3,
        phase: "Medium Term (Next 2-3 Months)",
        title: "Improve Medium Priority Areas",
        impact: "Medium",
        effort: "Low-Medium",
        roi: 3,
    },
];

const ONGOING_TASKS: [&str; 5] = [
    "Expand content to 1000+ words",
    "Add relevant keywords naturally",
    "Improve readability",
    "Add more internal links",
    "Update content regularly",
];

/// Builds the action plan.
///
/// One phase per non-empty critical/high/medium bucket, each listing up to
/// five finding messages, then the ongoing content phase, which is always
/// present.
pub fn build_action_plan(findings: &SeverityBuckets) -> Vec<ActionPhase> {
    let mut plan: Vec<ActionPhase> = ISSUE_PHASES
        .iter()
        .filter(|template| findings.count(template.severity) > 0)
        .map(|template| ActionPhase {
            priority: template.priority,
            phase: template.phase.to_string(),
            title: template.title.to_string(),
            tasks: findings
                .get(template.severity)
                .iter()
                .take(MAX_TASKS_PER_PHASE)
                .map(|finding| finding.message.clone())
                .collect(),
            impact: template.impact.to_string(),
            effort: template.effort.to_string(),
            roi: template.roi,
        })
        .collect();

    plan.push(ActionPhase {
        priority: 4,
        phase: "Ongoing".to_string(),
        title: "Content Optimization".to_string(),
        tasks: ONGOING_TASKS.iter().map(|task| task.to_string()).collect(),
        impact: "High (Long-term)".to_string(),
        effort: "High".to_string(),
        roi: 4,
    });

    plan
}
