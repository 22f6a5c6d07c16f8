//! Heading extraction.

use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::config::HEADING_TEXT_MAX_CHARS;
use crate::snapshot::{element_text, PageDocument};
use crate::utils::text::truncate_chars;

/// Heading texts kept per level in the summary.
const SUMMARY_TEXTS_PER_LEVEL: usize = 5;

static HEADING_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    (1..=6)
        .map(|level| crate::utils::parse_selector_unsafe(&format!("h{level}"), "HEADING_SELECTORS"))
        .collect()
});

/// Summary of one heading level present on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingLevel {
    /// 1 for `<h1>` through 6 for `<h6>`
    pub level: u8,
    /// Number of headings at this level
    pub count: usize,
    /// The first few heading texts, each clipped to 100 characters
    pub texts: Vec<String>,
}

/// Summarizes headings by level. Levels with no headings are omitted.
pub fn extract_headings(document: &PageDocument) -> Vec<HeadingLevel> {
    HEADING_SELECTORS
        .iter()
        .zip(1u8..)
        .filter_map(|(selector, level)| {
            let texts: Vec<String> = document
                .select(selector)
                .map(|element| truncate_chars(&element_text(&element), HEADING_TEXT_MAX_CHARS))
                .collect();
            if texts.is_empty() {
                return None;
            }
            Some(HeadingLevel {
                level,
                count: texts.len(),
                texts: texts.into_iter().take(SUMMARY_TEXTS_PER_LEVEL).collect(),
            })
        })
        .collect()
}

/// Every `<h1>` text in document order, unclipped.
pub fn extract_h1_texts(document: &PageDocument) -> Vec<String> {
    document
        .select(&HEADING_SELECTORS[0])
        .map(|element| element_text(&element))
        .collect()
}

/// Returns true when `headings` contains the given level.
pub fn has_level(headings: &[HeadingLevel], level: u8) -> bool {
    headings.iter().any(|heading| heading.level == level)
}
