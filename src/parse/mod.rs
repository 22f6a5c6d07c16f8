//! HTML parsing and data extraction.
//!
//! This module extracts what the checks inspect from a parsed page:
//! - Title, meta description, viewport, robots, canonical and generator tags
//! - Heading outline
//! - Image inventory
//! - Structured data (JSON-LD, microdata)
//! - Open Graph and Twitter Card presence
//! - Classified links
//! - Text statistics and keywords
//! - WordPress fingerprints
//!
//! All lookups go through `PageDocument` and CSS selectors via `scraper`.

mod content;
mod headings;
mod html;
mod images;
mod links;
mod social;
mod structured;
mod wordpress;

// Re-export public API
pub use content::{count_sentences, count_words, extract_keywords, Keyword};
pub use headings::{extract_h1_texts, extract_headings, has_level, HeadingLevel};
pub use html::{
    count_flash_elements, extract_canonical, extract_generator, extract_meta_description,
    extract_named_meta, extract_robots, extract_title, extract_viewport,
};
pub use images::{extract_images, ImageTag};
pub use links::{classify_href, count_links, extract_links, LinkCounts, LinkKind, PageLink};
pub use social::{missing_open_graph_tags, missing_twitter_card_tags};
pub use structured::{extract_schema_markup, SchemaMarkup};
pub use wordpress::{detect_wordpress, WordPressInfo};
