//! Transport security checks.

use crate::config::SECURITY_HEADERS;
use crate::metrics::PageMetrics;
use crate::report::{Category, Finding};
use crate::snapshot::PageSnapshot;

/// HTTPS and the recommended security headers.
pub fn check_https(snapshot: &PageSnapshot, _metrics: &PageMetrics) -> Vec<Finding> {
    let mut findings = Vec::new();

    if snapshot.is_https() {
        findings.push(Finding::passed(Category::Security, "HTTPS: Enabled"));
    } else {
        findings.push(
            Finding::critical(Category::Security, "Site not using HTTPS")
                .with_impact("Google uses HTTPS as a ranking signal and browsers flag HTTP pages as not secure")
                .with_steps([
                    "Obtain an SSL certificate",
                    "Install it on the server",
                    "Redirect all HTTP traffic to HTTPS with 301 redirects",
                    "Update internal links to HTTPS",
                ])
                .with_recommendation("Free SSL certificates are available from Let's Encrypt"),
        );
    }

    let missing: Vec<String> = SECURITY_HEADERS
        .iter()
        .filter(|(header, _)| !snapshot.headers.contains(header))
        .map(|(header, description)| format!("{header} ({description})"))
        .collect();

    if !missing.is_empty() {
        findings.push(
            Finding::low(
                Category::Security,
                format!("Missing security headers: {}", missing.len()),
            )
            .with_items(missing)
            .with_recommendation("Add the security headers in the server configuration"),
        );
    }

    findings
}
