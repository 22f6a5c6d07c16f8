//! Structured data extraction.
//!
//! This module finds schema.org markup in both encodings:
//! - JSON-LD (`<script type="application/ld+json">`)
//! - Microdata (`itemtype` attributes)

use scraper::Selector;
use std::sync::LazyLock;

use crate::snapshot::PageDocument;

const JSON_LD_SELECTOR_STR: &str = "script[type]";
const MICRODATA_SELECTOR_STR: &str = "[itemtype]";
const JSON_LD_MIME_TYPE: &str = "application/ld+json";

static JSON_LD_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(JSON_LD_SELECTOR_STR, "JSON_LD_SELECTOR")
});

static MICRODATA_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(MICRODATA_SELECTOR_STR, "MICRODATA_SELECTOR")
});

/// Schema markup found on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaMarkup {
    /// Number of JSON-LD script blocks, parseable or not
    pub json_ld_blocks: usize,
    /// Number of elements carrying `itemtype`
    pub microdata_items: usize,
    /// Labels such as "JSON-LD: Organization" or "Microdata: Product"
    pub types: Vec<String>,
}

impl SchemaMarkup {
    /// Returns true when any JSON-LD block or microdata item exists.
    ///
    /// A block that fails to parse still counts as present markup.
    pub fn is_present(&self) -> bool {
        self.json_ld_blocks > 0 || self.microdata_items > 0
    }
}

/// Extracts schema markup from a document.
///
/// JSON-LD blocks contribute one label per top-level object (arrays and
/// `@graph` containers are flattened). Blocks that are not valid JSON are
/// skipped with a debug log. Microdata labels use the last path segment of
/// `itemtype`.
pub fn extract_schema_markup(document: &PageDocument) -> SchemaMarkup {
    let mut markup = SchemaMarkup::default();

    for script in document.select(&JSON_LD_SELECTOR).filter(|script| {
        script
            .value()
            .attr("type")
            .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(JSON_LD_MIME_TYPE))
    }) {
        markup.json_ld_blocks += 1;
        let raw: String = script.text().collect();
        match serde_json::from_str::<serde_json::Value>(raw.trim()) {
            Ok(value) => {
                let mut names = Vec::new();
                collect_json_ld_types(&value, &mut names);
                markup
                    .types
                    .extend(names.into_iter().map(|name| format!("JSON-LD: {name}")));
            }
            Err(e) => log::debug!("Skipping invalid JSON-LD block: {}", e),
        }
    }

    for item in document.select(&MICRODATA_SELECTOR) {
        markup.microdata_items += 1;
        let itemtype = item.value().attr("itemtype").unwrap_or_default().trim();
        let name = itemtype
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .unwrap_or("Unknown");
        markup.types.push(format!("Microdata: {name}"));
    }

    markup
}

fn collect_json_ld_types(value: &serde_json::Value, names: &mut Vec<String>) {
    match value {
        serde_json::Value::Array(items) => {
            for item in items {
                collect_json_ld_types(item, names);
            }
        }
        serde_json::Value::Object(object) => {
            if let Some(graph) = object.get("@graph") {
                collect_json_ld_types(graph, names);
                if !object.contains_key("@type") {
                    return;
                }
            }
            let name = match object.get("@type") {
                Some(serde_json::Value::String(name)) => name.clone(),
                Some(serde_json::Value::Array(types)) => types
                    .iter()
                    .filter_map(|t| t.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                _ => String::new(),
            };
            names.push(if name.is_empty() {
                "Unknown".to_string()
            } else {
                name
            });
        }
        _ => {}
    }
}
