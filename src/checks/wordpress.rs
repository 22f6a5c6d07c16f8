//! WordPress-specific checks and remediation.
//!
//! Runs only when WordPress detection is enabled. The oversized-image check
//! applies to any page; the remediation pass only when WordPress was
//! actually detected.

use crate::config::OVERSIZED_IMAGE_PIXELS;
use crate::metrics::PageMetrics;
use crate::parse::{extract_images, ImageTag, WordPressInfo};
use crate::report::{Category, Finding};
use crate::snapshot::PageSnapshot;

use super::images::listed_sources;

/// WordPress admin steps, keyed by a fragment of the finding message.
const REMEDIATION: &[(&str, &[&str])] = &[
    (
        "<title>",
        &[
            "In WordPress, set the SEO title in your SEO plugin (Yoast SEO or Rank Math) under the post's SEO settings",
            "Check Settings > General for the site title used in the title template",
        ],
    ),
    (
        "Title too",
        &["Edit the SEO title in your SEO plugin; its snippet preview shows the length"],
    ),
    (
        "meta description",
        &[
            "Install an SEO plugin such as Yoast SEO or Rank Math if none is active",
            "Edit the page and fill in the Meta Description field in the plugin's panel",
        ],
    ),
    (
        "Missing canonical URL",
        &["Yoast SEO and Rank Math output canonical tags automatically once active"],
    ),
    (
        "No schema markup found",
        &["Enable schema output in your SEO plugin or add a dedicated schema plugin"],
    ),
    (
        "Missing Open Graph tags",
        &["Enable the social (Open Graph) settings of your SEO plugin"],
    ),
    (
        "alt ",
        &["Open Media > Library, select each image and fill in Alternative Text"],
    ),
    (
        "non-optimized formats",
        &["Install an image optimization plugin (Smush, ShortPixel or EWWW) to serve WebP"],
    ),
    (
        "oversized",
        &["Set a maximum upload size in your image optimization plugin and regenerate thumbnails"],
    ),
    (
        "GZIP compression",
        &["Enable compression in a caching plugin (WP Rocket, W3 Total Cache) or ask your host"],
    ),
    (
        "page load time",
        &["Install a caching plugin and remove plugins the site no longer uses"],
    ),
];

/// Images whose declared `width * height` exceeds the pixel budget.
pub fn check_oversized_images(snapshot: &PageSnapshot, _metrics: &PageMetrics) -> Vec<Finding> {
    let images = extract_images(&snapshot.document);
    let oversized: Vec<&ImageTag> = images
        .iter()
        .filter(|image| {
            image
                .declared_area()
                .is_some_and(|area| area > OVERSIZED_IMAGE_PIXELS)
        })
        .collect();

    if oversized.is_empty() {
        return Vec::new();
    }

    vec![Finding::high(
        Category::ImagesMedia,
        format!("{} oversized images detected", oversized.len()),
    )
    .with_items(listed_sources(&oversized))
    .with_impact("Large images slow down the page, especially on mobile connections")
    .with_recommendation("Resize images to the dimensions they are displayed at")]
}

/// Appends WordPress admin steps to the non-passed findings they fix.
pub fn apply_wordpress_remediation(findings: &mut [Finding], info: &WordPressInfo) {
    for finding in findings.iter_mut() {
        if finding.severity == crate::report::Severity::Passed {
            continue;
        }
        let message = finding.message.to_lowercase();
        for (fragment, steps) in REMEDIATION {
            if message.contains(&fragment.to_lowercase()) {
                finding.details.steps.extend(steps.iter().map(|s| s.to_string()));
            }
        }
    }

    if let Some(theme) = &info.theme {
        log::debug!("WordPress theme '{}' detected, remediation steps added", theme);
    }
}
