//! Plain-text report rendering.

use std::fmt::Write;

use crate::report::{Report, Severity};

const RULE_WIDTH: usize = 80;

/// Renders the full report as plain text.
///
/// Every finding is listed under its severity, passed checks included, with
/// the remediation details that were kept on it.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &Report) -> std::fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "SEO AUDIT REPORT")?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;
    writeln!(out, "URL: {}", report.url)?;
    writeln!(out, "Audit Date: {}", report.timestamp)?;

    if let Some(error) = report.error() {
        writeln!(out, "Status: FAILED")?;
        writeln!(out, "Error: {error}")?;
        writeln!(out)?;
        writeln!(out, "{rule}")?;
        return Ok(());
    }

    let rating = report.rating();
    writeln!(
        out,
        "Overall Score: {}/100 ({})",
        report.overall_score,
        rating.label()
    )?;
    writeln!(out, "{}", rating.summary())?;
    writeln!(out)?;

    writeln!(out, "SUMMARY:")?;
    writeln!(out, "- Critical Issues: {}", report.findings.critical.len())?;
    writeln!(out, "- High Priority: {}", report.findings.high.len())?;
    writeln!(out, "- Medium Priority: {}", report.findings.medium.len())?;
    writeln!(out, "- Low Priority: {}", report.findings.low.len())?;
    writeln!(out, "- Passed Checks: {}", report.findings.passed.len())?;
    writeln!(out)?;

    writeln!(out, "CATEGORY SCORES:")?;
    for (category, score) in &report.category_scores {
        writeln!(out, "- {category}: {score}/100")?;
    }
    writeln!(out)?;

    for (severity, heading) in [
        (Severity::Critical, "CRITICAL ISSUES"),
        (Severity::High, "HIGH PRIORITY"),
        (Severity::Medium, "MEDIUM PRIORITY"),
        (Severity::Low, "LOW PRIORITY"),
        (Severity::Passed, "PASSED CHECKS"),
    ] {
        let findings = report.findings.get(severity);
        writeln!(out, "{heading} ({}):", findings.len())?;
        for finding in findings {
            writeln!(out, "- [{}] {}", finding.category, finding.message)?;
            let details = &finding.details;
            if let Some(current) = &details.current {
                writeln!(out, "    Current: {current}")?;
            }
            if let Some(recommendation) = &details.recommendation {
                writeln!(out, "    Recommendation: {recommendation}")?;
            }
            if let Some(impact) = &details.impact {
                writeln!(out, "    Impact: {impact}")?;
            }
            if let Some(fix) = &details.fix {
                writeln!(out, "    Fix: {fix}")?;
            }
            if let Some(example) = &details.example {
                writeln!(out, "    Example: {example}")?;
            }
            for item in &details.items {
                writeln!(out, "    * {item}")?;
            }
            for (index, step) in details.steps.iter().enumerate() {
                writeln!(out, "    {}. {step}", index + 1)?;
            }
        }
        writeln!(out)?;
    }

    if !report.insights.is_empty() {
        writeln!(out, "KEY INSIGHTS:")?;
        for insight in &report.insights {
            writeln!(out, "- {}: {}", insight.title, insight.message)?;
            writeln!(out, "    Action: {}", insight.action)?;
        }
        writeln!(out)?;
    }

    let metrics = &report.metrics;
    writeln!(out, "CONTENT METRICS:")?;
    writeln!(out, "- Word Count: {}", metrics.word_count)?;
    writeln!(out, "- Paragraphs: {}", metrics.paragraph_count)?;
    writeln!(out, "- Images: {}", metrics.image_count)?;
    writeln!(out, "- Internal Links: {}", metrics.internal_links)?;
    if !metrics.top_keywords.is_empty() {
        let keywords: Vec<String> = metrics
            .top_keywords
            .iter()
            .map(|keyword| format!("{} ({:.1}%)", keyword.keyword, keyword.density * 100.0))
            .collect();
        writeln!(out, "- Top Keywords: {}", keywords.join(", "))?;
    }
    writeln!(out)?;

    writeln!(out, "PERFORMANCE:")?;
    writeln!(out, "- Load Time: {:.2} seconds", metrics.load_time_secs)?;
    writeln!(out, "- Page Size: {:.0} KB", metrics.page_size_kb())?;
    writeln!(out, "- Redirects: {}", metrics.redirect_count)?;
    writeln!(out)?;

    if let Some(wordpress) = &report.wordpress {
        writeln!(out, "WORDPRESS:")?;
        writeln!(
            out,
            "- Version: {}",
            wordpress.version.as_deref().unwrap_or("unknown")
        )?;
        writeln!(
            out,
            "- Theme: {}",
            wordpress.theme.as_deref().unwrap_or("unknown")
        )?;
        if !wordpress.plugins.is_empty() {
            writeln!(out, "- Plugins: {}", wordpress.plugins.join(", "))?;
        }
        writeln!(out)?;
    }

    if let Some(suggestions) = &report.suggestions {
        writeln!(out, "SUGGESTIONS ({:?}):", suggestions.source)?;
        writeln!(out, "- Title: {}", suggestions.title)?;
        writeln!(out, "- Description: {}", suggestions.description)?;
        if !suggestions.keywords.is_empty() {
            writeln!(out, "- Keywords: {}", suggestions.keywords.join(", "))?;
        }
        writeln!(out, "- Content Score: {}/100", suggestions.content_score)?;
        for improvement in &suggestions.content_improvements {
            writeln!(out, "    * {improvement}")?;
        }
        writeln!(out)?;
    }

    writeln!(out, "ACTION PLAN:")?;
    for (index, phase) in report.action_plan.iter().enumerate() {
        writeln!(out, "{}. {} ({})", index + 1, phase.title, phase.phase)?;
        for task in &phase.tasks {
            writeln!(out, "    - {task}")?;
        }
    }
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    Ok(())
}
