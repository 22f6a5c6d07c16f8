//! Configuration constants.
//!
//! This module defines the constants used throughout the audit: network
//! timeouts and limits, plus the severity thresholds each check applies.
//! The thresholds are part of the audit contract; changing one changes how
//! findings are classified.

use std::time::Duration;

// Network limits
/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
/// Maximum number of redirect hops to follow before giving up on the chain.
pub const MAX_REDIRECT_HOPS: usize = 10;
/// Maximum decoded body size in bytes (10MB). Larger bodies are truncated.
pub const MAX_RESPONSE_BODY_SIZE: usize = 10 * 1024 * 1024;
/// Timeout for the optional suggestion service call.
pub const SUGGESTION_TIMEOUT: Duration = Duration::from_secs(20);

/// Default User-Agent string for the page fetch.
///
/// A current desktop Chrome string. Some sites serve stripped-down markup to
/// unknown agents, which would skew every content check.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Title tag
/// Titles shorter than this are too short (HIGH).
pub const TITLE_MIN_CHARS: usize = 30;
/// Titles longer than this risk truncation in results (MEDIUM).
pub const TITLE_MAX_CHARS: usize = 60;
/// Length the title recommendation aims for.
pub const TITLE_TARGET_CHARS: usize = 50;

// Meta description
/// Meta descriptions shorter than this are too short (HIGH).
pub const DESCRIPTION_MIN_CHARS: usize = 120;
/// Meta descriptions longer than this get truncated (MEDIUM).
pub const DESCRIPTION_MAX_CHARS: usize = 160;
/// Length the description recommendation aims for.
pub const DESCRIPTION_TARGET_CHARS: usize = 150;
/// Words that count as a call-to-action in a meta description.
pub const CTA_WORDS: &[&str] = &[
    "learn", "discover", "get", "find", "explore", "book", "buy", "start", "try", "contact",
];

// Headings
/// A single H1 shorter than this is flagged as too short.
pub const H1_MIN_CHARS: usize = 20;
/// Heading texts are clipped to this many characters when reported.
pub const HEADING_TEXT_MAX_CHARS: usize = 100;

// Images
/// Maximum number of affected images listed in a single finding.
pub const MAX_LISTED_IMAGES: usize = 10;
/// Image sources are clipped to this many characters when reported.
pub const IMAGE_SRC_MAX_CHARS: usize = 100;
/// Declared `width * height` above which an image counts as oversized.
pub const OVERSIZED_IMAGE_PIXELS: u64 = 1_000_000;

// Content
/// Pages with fewer content words are thin (HIGH).
pub const THIN_CONTENT_WORDS: usize = 300;
/// Word count from which content is rated excellent.
pub const RICH_CONTENT_WORDS: usize = 1000;
/// Average sentence length above which readability suffers.
pub const MAX_AVG_WORDS_PER_SENTENCE: f64 = 25.0;
/// Number of keywords kept by keyword extraction.
pub const TOP_KEYWORDS: usize = 10;
/// Shortest token (in characters) that keyword extraction considers.
pub const KEYWORD_MIN_LENGTH: usize = 3;
/// Tokens ignored by keyword extraction.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "is",
    "was", "are", "were", "been", "be", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "can", "this", "that", "these", "those", "i",
    "you", "he", "she", "it", "we", "they", "their", "them",
];
/// Elements whose text never counts as page content.
pub const NON_CONTENT_TAGS: &[&str] = &["script", "style", "nav", "footer", "header", "aside"];

// Internal linking
/// Internal links needed for a passing internal-linking check.
pub const MIN_INTERNAL_LINKS: usize = 3;
/// Link targets skipped by link classification.
pub const SKIPPED_LINK_PREFIXES: &[&str] = &["#", "javascript:", "mailto:", "tel:"];

// Social tags
/// Open Graph properties every page should declare.
pub const OPEN_GRAPH_TAGS: &[&str] = &["og:title", "og:description", "og:image", "og:url", "og:type"];
/// Twitter Card names every page should declare.
pub const TWITTER_CARD_TAGS: &[&str] = &[
    "twitter:card",
    "twitter:title",
    "twitter:description",
    "twitter:image",
];

// Performance
/// Load time in seconds above which the page is slow (HIGH).
pub const SLOW_LOAD_SECS: f64 = 3.0;
/// Load time in seconds below which the page is fast.
pub const ACCEPTABLE_LOAD_SECS: f64 = 2.0;
/// Body size above which the page is too large (HIGH).
pub const LARGE_PAGE_BYTES: usize = 2 * 1024 * 1024;
/// Body size below which the page size is good.
pub const ACCEPTABLE_PAGE_BYTES: usize = 1024 * 1024;

// Aggregation
/// Maximum number of tasks listed per action plan phase.
pub const MAX_TASKS_PER_PHASE: usize = 5;
/// High-priority count above which an insight is raised.
pub const HIGH_ISSUE_INSIGHT_THRESHOLD: usize = 3;
