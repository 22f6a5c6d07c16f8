//! Derived page facts.
//!
//! `PageMetrics` is computed once from the snapshot, before any check runs.
//! Checks and the aggregator read it; nothing writes to it afterwards.

use serde::{Deserialize, Serialize};

use crate::config::{NON_CONTENT_TAGS, TOP_KEYWORDS};
use crate::parse::{
    count_links, count_sentences, count_words, extract_headings, extract_images, extract_keywords,
    extract_links, extract_meta_description, extract_schema_markup, extract_title, HeadingLevel,
    Keyword,
};
use crate::snapshot::PageSnapshot;

static PARAGRAPH_SELECTOR: std::sync::LazyLock<scraper::Selector> =
    std::sync::LazyLock::new(|| crate::utils::parse_selector_unsafe("p", "PARAGRAPH_SELECTOR"));

/// Measured facts about one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMetrics {
    /// Page title, when a `<title>` element exists
    pub title: Option<String>,
    /// Meta description, when a description tag exists
    pub meta_description: Option<String>,
    /// Words in the main content text
    pub word_count: usize,
    /// Sentences in the main content text
    pub sentence_count: usize,
    /// `<p>` elements outside navigation and page chrome
    pub paragraph_count: usize,
    /// `word_count / sentence_count`, 0 when there are no sentences
    pub avg_words_per_sentence: f64,
    /// `word_count / paragraph_count`, 0 when there are no paragraphs
    pub avg_words_per_paragraph: f64,
    /// Number of `<img>` elements
    pub image_count: usize,
    /// Images without an `alt` attribute
    pub images_missing_alt: usize,
    /// Links to the page's own host
    pub internal_links: usize,
    /// Links to other hosts
    pub external_links: usize,
    /// External links without `rel="nofollow"`
    pub external_followed_links: usize,
    /// Fetch time in seconds
    pub load_time_secs: f64,
    /// Decoded body size in bytes
    pub page_size_bytes: usize,
    /// HTTP status of the final response
    pub status_code: u16,
    /// Redirect hops before the final response
    pub redirect_count: usize,
    /// Heading outline
    pub headings: Vec<HeadingLevel>,
    /// Schema markup labels ("JSON-LD: Organization", ...)
    pub schema_types: Vec<String>,
    /// Most frequent content terms
    pub top_keywords: Vec<Keyword>,
}

impl PageMetrics {
    /// Computes every metric from a snapshot.
    pub fn from_snapshot(snapshot: &PageSnapshot) -> Self {
        let document = &snapshot.document;

        let content = document.content_text(NON_CONTENT_TAGS);
        let word_count = count_words(&content);
        let sentence_count = count_sentences(&content);
        let paragraph_count = document.count_outside(&PARAGRAPH_SELECTOR, NON_CONTENT_TAGS);

        let images = extract_images(document);
        let links = extract_links(document, &snapshot.url, &snapshot.domain);
        let link_counts = count_links(&links);

        Self {
            title: extract_title(document),
            meta_description: extract_meta_description(document),
            word_count,
            sentence_count,
            paragraph_count,
            avg_words_per_sentence: ratio(word_count, sentence_count),
            avg_words_per_paragraph: ratio(word_count, paragraph_count),
            image_count: images.len(),
            images_missing_alt: images.iter().filter(|image| image.alt.is_none()).count(),
            internal_links: link_counts.internal,
            external_links: link_counts.external,
            external_followed_links: link_counts.external_followed,
            load_time_secs: snapshot.elapsed.as_secs_f64(),
            page_size_bytes: snapshot.body_bytes,
            status_code: snapshot.status_code,
            redirect_count: snapshot.redirect_count,
            headings: extract_headings(document),
            schema_types: extract_schema_markup(document).types,
            top_keywords: extract_keywords(&content, word_count, TOP_KEYWORDS),
        }
    }

    /// Page size in kilobytes (1 KB = 1024 bytes).
    pub fn page_size_kb(&self) -> f64 {
        self.page_size_bytes as f64 / 1024.0
    }

    /// Page size in megabytes (1 MB = 1024 KB).
    pub fn page_size_mb(&self) -> f64 {
        self.page_size_kb() / 1024.0
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchResult;
    use std::time::Duration;

    fn snapshot(html: &str) -> PageSnapshot {
        PageSnapshot::new(
            "https://example.com/",
            FetchResult {
                final_url: "https://example.com/".to_string(),
                status_code: 200,
                elapsed: Duration::from_millis(1500),
                headers: Default::default(),
                redirect_count: 0,
                body: html.as_bytes().to_vec(),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_word_count_ignores_navigation_text() {
        let nav_words = "menu ".repeat(1000);
        let article_words = "story ".repeat(50);
        let html = format!(
            "<html><body><nav>{nav_words}</nav><article>{article_words}</article></body></html>"
        );
        let metrics = PageMetrics::from_snapshot(&snapshot(&html));
        assert_eq!(metrics.word_count, 50);
    }

    #[test]
    fn test_word_count_ignores_nav_inside_article() {
        let html = format!(
            "<html><body><article><nav>{}</nav><p>{}</p></article></body></html>",
            "link ".repeat(1000),
            "word ".repeat(50)
        );
        let metrics = PageMetrics::from_snapshot(&snapshot(&html));
        assert_eq!(metrics.word_count, 50);
    }

    #[test]
    fn test_basic_metrics() {
        let html = r#"<html><head><title>Hello</title></head><body>
            <h1>Heading</h1>
            <p>One two three. Four five six.</p>
            <p>Seven eight.</p>
            <footer><p>Footer text</p></footer>
            <img src="a.png" alt="A"><img src="b.png">
            <a href="/x">X</a><a href="https://other.org">O</a>
        </body></html>"#;
        let metrics = PageMetrics::from_snapshot(&snapshot(html));
        assert_eq!(metrics.title.as_deref(), Some("Hello"));
        assert_eq!(metrics.paragraph_count, 2);
        assert_eq!(metrics.image_count, 2);
        assert_eq!(metrics.images_missing_alt, 1);
        assert_eq!(metrics.internal_links, 1);
        assert_eq!(metrics.external_links, 1);
        assert_eq!(metrics.external_followed_links, 1);
        assert!((metrics.load_time_secs - 1.5).abs() < 1e-9);
        assert_eq!(metrics.headings.len(), 1);
    }

    #[test]
    fn test_averages_without_sentences_are_zero() {
        let metrics = PageMetrics::from_snapshot(&snapshot("<html><body><div>...</div></body></html>"));
        assert_eq!(metrics.sentence_count, 0);
        assert_eq!(metrics.avg_words_per_sentence, 0.0);
        assert_eq!(metrics.avg_words_per_paragraph, 0.0);
    }

    #[test]
    fn test_page_size_units() {
        let metrics = PageMetrics {
            page_size_bytes: 2 * 1024 * 1024,
            ..Default::default()
        };
        assert_eq!(metrics.page_size_kb(), 2048.0);
        assert_eq!(metrics.page_size_mb(), 2.0);
    }
}
