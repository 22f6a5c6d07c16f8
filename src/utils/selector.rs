//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses a CSS selector that must succeed.
///
/// Used for the `LazyLock<Selector>` statics, whose selector strings are
/// compile-time constants.
///
/// # Panics
///
/// Panics if the selector cannot be parsed (indicates a programming error).
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_valid_selector_matches() {
        let selector = parse_selector_unsafe("h1", "test");
        let document = Html::parse_document("<html><body><h1>Title</h1></body></html>");
        assert_eq!(document.select(&selector).count(), 1);
    }

    #[test]
    #[should_panic(expected = "programming error")]
    fn test_unsafe_selector_panics_on_invalid_input() {
        parse_selector_unsafe("<<<", "test");
    }
}
