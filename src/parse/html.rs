//! Head and meta extraction.
//!
//! This module extracts the document-level tags the technical checks inspect:
//! - Page title
//! - Meta description (with the Open Graph fallback)
//! - Viewport, robots and generator meta tags
//! - Canonical link
//! - Flash embeds

use scraper::Selector;
use std::sync::LazyLock;

use crate::snapshot::{element_text, PageDocument};

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const LINK_REL_SELECTOR_STR: &str = "link[rel]";
const FLASH_SELECTOR_STR: &str = "embed, object";

const FLASH_MIME_TYPE: &str = "application/x-shockwave-flash";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));

static LINK_REL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(LINK_REL_SELECTOR_STR, "LINK_REL_SELECTOR")
});

static FLASH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(FLASH_SELECTOR_STR, "FLASH_SELECTOR"));

/// Extracts the page title.
///
/// Returns `None` when the document has no `<title>` element and
/// `Some("")` when it has one with no text, so callers can tell a missing
/// tag from an empty one.
pub fn extract_title(document: &PageDocument) -> Option<String> {
    let title = document.first(&TITLE_SELECTOR).map(|element| element_text(&element));
    match &title {
        Some(text) => log::debug!("Extracted title '{}' ({} chars)", text, text.chars().count()),
        None => log::debug!("No title element found in document"),
    }
    title
}

/// Extracts the meta description.
///
/// Looks for `<meta name="description">` first and falls back to
/// `<meta property="og:description">`. The element's `content` is trimmed;
/// a tag without `content` yields `Some("")`.
pub fn extract_meta_description(document: &PageDocument) -> Option<String> {
    document
        .meta_element("name", "description")
        .or_else(|| document.meta_element("property", "og:description"))
        .map(|element| {
            element
                .value()
                .attr("content")
                .unwrap_or_default()
                .trim()
                .to_string()
        })
}

/// Returns the `content` of `<meta name=...>`, `Some("")` when the tag has none.
pub fn extract_named_meta(document: &PageDocument, name: &str) -> Option<String> {
    document.meta_element("name", name).map(|element| {
        element
            .value()
            .attr("content")
            .unwrap_or_default()
            .trim()
            .to_string()
    })
}

/// Extracts the viewport meta content.
pub fn extract_viewport(document: &PageDocument) -> Option<String> {
    extract_named_meta(document, "viewport")
}

/// Extracts the robots meta content, lowercased.
pub fn extract_robots(document: &PageDocument) -> Option<String> {
    extract_named_meta(document, "robots").map(|content| content.to_lowercase())
}

/// Extracts the generator meta content (e.g. "WordPress 6.4.2").
pub fn extract_generator(document: &PageDocument) -> Option<String> {
    extract_named_meta(document, "generator")
}

/// Extracts the canonical link target.
///
/// Matches any `<link>` whose `rel` token list contains `canonical`.
/// Returns the raw `href` (possibly relative), `Some("")` when it is missing.
pub fn extract_canonical(document: &PageDocument) -> Option<String> {
    document
        .select(&LINK_REL_SELECTOR)
        .find(|element| {
            element.value().attr("rel").is_some_and(|rel| {
                rel.split_whitespace()
                    .any(|token| token.eq_ignore_ascii_case("canonical"))
            })
        })
        .map(|element| {
            element
                .value()
                .attr("href")
                .unwrap_or_default()
                .trim()
                .to_string()
        })
}

/// Counts `<embed>`/`<object>` elements carrying Flash content.
pub fn count_flash_elements(document: &PageDocument) -> usize {
    document
        .select(&FLASH_SELECTOR)
        .filter(|element| {
            element
                .value()
                .attr("type")
                .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FLASH_MIME_TYPE))
        })
        .count()
}
