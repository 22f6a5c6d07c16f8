//! Image checks: alt text and formats.

use crate::config::{IMAGE_SRC_MAX_CHARS, MAX_LISTED_IMAGES};
use crate::metrics::PageMetrics;
use crate::parse::{extract_images, ImageTag};
use crate::report::{Category, Finding};
use crate::snapshot::PageSnapshot;
use crate::utils::text::truncate_chars;

/// Alt attributes and image formats.
pub fn check_images(snapshot: &PageSnapshot, _metrics: &PageMetrics) -> Vec<Finding> {
    let images = extract_images(&snapshot.document);

    if images.is_empty() {
        return vec![Finding::low(Category::ImagesMedia, "No images found")
            .with_recommendation("Consider adding relevant images to improve engagement")];
    }

    let mut findings = Vec::new();
    let missing_alt: Vec<&ImageTag> = images.iter().filter(|image| image.alt.is_none()).collect();
    let blank_alt: Vec<&ImageTag> = images.iter().filter(|image| image.has_blank_alt()).collect();
    let legacy: Vec<&ImageTag> = images.iter().filter(|image| image.uses_legacy_format()).collect();

    if !missing_alt.is_empty() {
        findings.push(
            Finding::critical(
                Category::ImagesMedia,
                format!("{} images missing alt attribute", missing_alt.len()),
            )
            .with_items(listed_sources(&missing_alt))
            .with_impact("Accessibility issues and missed image search traffic")
            .with_fix(r#"<img src="image.jpg" alt="Descriptive text with keywords">"#)
            .with_recommendation("Add descriptive alt text to every image (describe what the image shows)"),
        );
    }

    if !blank_alt.is_empty() {
        findings.push(
            Finding::high(
                Category::ImagesMedia,
                format!("{} images with empty alt text", blank_alt.len()),
            )
            .with_items(listed_sources(&blank_alt))
            .with_fix("Replace alt=\"\" with a description (empty alt is only for purely decorative images)"),
        );
    }

    if !legacy.is_empty() {
        findings.push(
            Finding::medium(
                Category::ImagesMedia,
                format!("{} images using non-optimized formats", legacy.len()),
            )
            .with_items(listed_sources(&legacy))
            .with_recommendation("Convert images to WebP or AVIF")
            .with_impact("Can reduce file size by 25-50%"),
        );
    }

    if missing_alt.is_empty() && blank_alt.is_empty() {
        findings.push(Finding::passed(
            Category::ImagesMedia,
            format!("Image Alt Text: All {} images have alt text", images.len()),
        ));
    }

    findings
}

/// First `MAX_LISTED_IMAGES` sources, clipped for display.
pub(crate) fn listed_sources(images: &[&ImageTag]) -> Vec<String> {
    images
        .iter()
        .take(MAX_LISTED_IMAGES)
        .map(|image| truncate_chars(&image.src, IMAGE_SRC_MAX_CHARS))
        .collect()
}
