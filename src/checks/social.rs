//! Social sharing checks.

use crate::metrics::PageMetrics;
use crate::parse::{missing_open_graph_tags, missing_twitter_card_tags};
use crate::report::{Category, Finding};
use crate::snapshot::PageSnapshot;

/// Open Graph and Twitter Card coverage.
pub fn check_social(snapshot: &PageSnapshot, _metrics: &PageMetrics) -> Vec<Finding> {
    let mut findings = Vec::new();

    let missing_og = missing_open_graph_tags(&snapshot.document);
    if missing_og.is_empty() {
        findings.push(Finding::passed(
            Category::SocialMedia,
            "Open Graph Tags: All essential tags present",
        ));
    } else {
        findings.push(
            Finding::medium(
                Category::SocialMedia,
                format!("Missing Open Graph tags: {}", missing_og.join(", ")),
            )
            .with_items(missing_og.iter().copied())
            .with_impact("Shared links on Facebook and LinkedIn will look unprofessional")
            .with_fix(
                r#"<meta property="og:title" content="Your Page Title">
<meta property="og:description" content="Your description">
<meta property="og:image" content="https://yoursite.com/image.jpg">
<meta property="og:url" content="https://yoursite.com/page">
<meta property="og:type" content="website">"#,
            ),
        );
    }

    let missing_twitter = missing_twitter_card_tags(&snapshot.document);
    if missing_twitter.is_empty() {
        findings.push(Finding::passed(
            Category::SocialMedia,
            "Twitter Card Tags: All essential tags present",
        ));
    } else {
        findings.push(
            Finding::low(
                Category::SocialMedia,
                format!("Missing Twitter Card tags: {}", missing_twitter.join(", ")),
            )
            .with_items(missing_twitter.iter().copied())
            .with_recommendation("Add Twitter Card tags for better Twitter/X sharing"),
        );
    }

    findings
}
