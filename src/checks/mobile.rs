//! Mobile checks: viewport and legacy plugins.

use crate::metrics::PageMetrics;
use crate::parse::{count_flash_elements, extract_viewport};
use crate::report::{Category, Finding};
use crate::snapshot::PageSnapshot;

/// Viewport tag presence and width, plus Flash embeds.
pub fn check_mobile(snapshot: &PageSnapshot, _metrics: &PageMetrics) -> Vec<Finding> {
    let mut findings = Vec::new();

    match extract_viewport(&snapshot.document) {
        None => findings.push(
            Finding::critical(Category::MobileOptimization, "Missing viewport meta tag")
                .with_impact("The page will not display properly on mobile devices, hurting mobile rankings")
                .with_fix(r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#)
                .with_steps([
                    "Add the viewport tag inside <head>",
                    "Test the page on several mobile devices",
                    "Check the layout with a mobile-friendly testing tool",
                ]),
        ),
        Some(content) => {
            let compact = content.replace(' ', "").to_lowercase();
            findings.push(
                Finding::passed(Category::MobileOptimization, "Viewport Meta Tag: Present")
                    .with_current(content.as_str()),
            );
            if !compact.contains("width=device-width") {
                findings.push(
                    Finding::high(Category::MobileOptimization, "Viewport not set to device width")
                        .with_current(content)
                        .with_fix(r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#),
                );
            }
        }
    }

    let flash = count_flash_elements(&snapshot.document);
    if flash > 0 {
        findings.push(
            Finding::high(
                Category::MobileOptimization,
                format!("Flash content detected ({flash} elements)"),
            )
            .with_impact("Flash is not supported on mobile devices or modern browsers")
            .with_recommendation("Replace Flash content with HTML5 alternatives"),
        );
    }

    findings
}
