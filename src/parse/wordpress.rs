//! WordPress detection.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::parse::html::extract_generator;
use crate::snapshot::PageDocument;

const THEME_PATH_PATTERN: &str = r#"/wp-content/themes/([^/"'?#\s]+)/"#;
const PLUGIN_PATH_PATTERN: &str = r#"/wp-content/plugins/([^/"'?#\s]+)/"#;
const GENERATOR_VERSION_PATTERN: &str = r"(?i)wordpress\s+([0-9]+(?:\.[0-9]+)*)";

/// Markup fragments that only WordPress sites serve.
const WORDPRESS_PATH_MARKERS: &[&str] = &["wp-content", "wp-includes"];

fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static THEME_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(THEME_PATH_PATTERN, "THEME_RE"));
static PLUGIN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(PLUGIN_PATH_PATTERN, "PLUGIN_RE"));
static GENERATOR_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(GENERATOR_VERSION_PATTERN, "GENERATOR_VERSION_RE"));

/// What could be learned about a WordPress install from one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPressInfo {
    /// Core version from the generator tag, when advertised
    pub version: Option<String>,
    /// Active theme slug
    pub theme: Option<String>,
    /// Plugin slugs in first-seen order, deduplicated
    pub plugins: Vec<String>,
}

/// Detects WordPress from the generator tag and asset paths.
///
/// Returns `None` when neither the `generator` meta mentions WordPress nor
/// the markup references `wp-content`/`wp-includes`.
pub fn detect_wordpress(document: &PageDocument, html: &str) -> Option<WordPressInfo> {
    let generator = extract_generator(document).filter(|g| g.to_lowercase().contains("wordpress"));
    let has_paths = WORDPRESS_PATH_MARKERS
        .iter()
        .any(|marker| html.contains(marker));

    if generator.is_none() && !has_paths {
        return None;
    }

    let version = generator.as_deref().and_then(|g| {
        GENERATOR_VERSION_RE
            .captures(g)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    });
    let theme = THEME_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    let mut plugins: Vec<String> = Vec::new();
    for caps in PLUGIN_RE.captures_iter(html) {
        if let Some(slug) = caps.get(1).map(|m| m.as_str()) {
            if !plugins.iter().any(|known| known == slug) {
                plugins.push(slug.to_string());
            }
        }
    }

    log::debug!(
        "WordPress detected (version {:?}, theme {:?}, {} plugins)",
        version,
        theme,
        plugins.len()
    );

    Some(WordPressInfo {
        version,
        theme,
        plugins,
    })
}
