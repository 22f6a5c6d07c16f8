//! Image inventory.

use scraper::Selector;
use std::sync::LazyLock;

use crate::snapshot::PageDocument;

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("img", "IMG_SELECTOR"));

/// Formats that count as already optimized.
const MODERN_FORMATS: &[&str] = &[".webp", ".avif"];
/// Formats that should be converted.
const LEGACY_FORMATS: &[&str] = &[".jpg", ".jpeg", ".png"];

/// One `<img>` element's SEO-relevant attributes.
///
/// `alt` distinguishes a missing attribute (`None`) from an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTag {
    /// The `src` attribute, empty when absent
    pub src: String,
    /// The `alt` attribute
    pub alt: Option<String>,
    /// The raw `width` attribute
    pub width: Option<String>,
    /// The raw `height` attribute
    pub height: Option<String>,
}

impl ImageTag {
    /// Returns true when the `alt` attribute is present but blank.
    pub fn has_blank_alt(&self) -> bool {
        self.alt.as_deref().is_some_and(|alt| alt.trim().is_empty())
    }

    /// Declared pixel area, when both dimensions are plain integers.
    pub fn declared_area(&self) -> Option<u64> {
        let width = self.width.as_deref()?.trim();
        let height = self.height.as_deref()?.trim();
        match (width.parse::<u64>(), height.parse::<u64>()) {
            (Ok(w), Ok(h)) => Some(w.saturating_mul(h)),
            _ => {
                log::debug!(
                    "Skipping size check for image {} with non-integer dimensions {}x{}",
                    self.src,
                    width,
                    height
                );
                None
            }
        }
    }

    /// Returns true when the source is a JPEG/PNG rather than WebP/AVIF.
    pub fn uses_legacy_format(&self) -> bool {
        let src = self.src.to_lowercase();
        !src.is_empty()
            && !MODERN_FORMATS.iter().any(|format| src.contains(format))
            && LEGACY_FORMATS.iter().any(|format| src.contains(format))
    }
}

/// Lists every `<img>` in document order.
pub fn extract_images(document: &PageDocument) -> Vec<ImageTag> {
    document
        .select(&IMG_SELECTOR)
        .map(|element| {
            let attr = |name: &str| element.value().attr(name).map(str::to_string);
            ImageTag {
                src: attr("src").unwrap_or_default(),
                alt: attr("alt"),
                width: attr("width"),
                height: attr("height"),
            }
        })
        .collect()
}
