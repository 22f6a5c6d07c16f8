//! Link checks.

use crate::config::MIN_INTERNAL_LINKS;
use crate::metrics::PageMetrics;
use crate::report::{Category, Finding};
use crate::snapshot::PageSnapshot;

/// Internal link count and followed external links.
pub fn check_links(_snapshot: &PageSnapshot, metrics: &PageMetrics) -> Vec<Finding> {
    let mut findings = Vec::new();
    let internal = metrics.internal_links;

    if internal == 0 {
        findings.push(
            Finding::high(Category::InternalLinking, "No internal links found")
                .with_impact("Internal links spread page authority and help search engines discover content")
                .with_recommendation("Add 3-5 contextual links to related pages"),
        );
    } else if internal < MIN_INTERNAL_LINKS {
        findings.push(
            Finding::medium(
                Category::InternalLinking,
                format!("Few internal links ({internal})"),
            )
            .with_recommendation("Add more contextual internal links (aim for 3-5 per page)"),
        );
    } else {
        findings.push(Finding::passed(
            Category::InternalLinking,
            format!("Internal Links: {internal} internal links found"),
        ));
    }

    if metrics.external_followed_links > 0 {
        findings.push(Finding::passed(
            Category::ExternalLinking,
            format!(
                "External Links: {} external links ({} follow)",
                metrics.external_links, metrics.external_followed_links
            ),
        ));
    }

    findings
}
