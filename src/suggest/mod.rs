//! Title, description and content suggestions.
//!
//! An optional extra: a `Suggester` (by default the OpenAI-compatible chat
//! client) is asked for improved metadata. When no service is configured or
//! the call fails, suggestions are derived from the page's own keywords
//! instead, so an audit run with suggestions enabled always carries some.
//!
//! # Environment Variables
//!
//! - `OPENAI_API_KEY`: API key for the suggestion service
//! - `OPENAI_BASE_URL`: Optional. Alternative OpenAI-compatible endpoint
//! - `OPENAI_MODEL`: Optional. Model name

mod fallback;
mod openai;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error_handling::SuggestionError;
use crate::report::{Report, Severity};

pub use fallback::keyword_suggestions;
pub use openai::OpenAiSuggester;

/// Where a set of suggestions came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionSource {
    /// Produced by the suggestion service
    Generated,
    /// Derived locally from the page's keywords
    KeywordFallback,
}

/// Proposed metadata and content improvements for a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestions {
    /// Suggested `<title>` (at most 60 characters)
    pub title: String,
    /// Suggested meta description (at most 160 characters)
    pub description: String,
    /// Target keywords
    pub keywords: Vec<String>,
    /// Concrete content improvements
    pub content_improvements: Vec<String>,
    /// Content quality estimate, 0-100
    pub content_score: u8,
    /// Provenance
    pub source: SuggestionSource,
}

/// The slice of an audit a suggester gets to see.
///
/// Built from the finished report, so it is `Send` and can cross the
/// suggestion call's await point (the parsed page cannot).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageSummary {
    /// Audited URL
    pub url: String,
    /// Host of the audited URL, without `www.`
    pub site_name: String,
    /// Current title
    pub title: Option<String>,
    /// Current meta description
    pub meta_description: Option<String>,
    /// Words of main content
    pub word_count: usize,
    /// `<p>` elements in the content
    pub paragraph_count: usize,
    /// Average sentence length in words
    pub avg_words_per_sentence: f64,
    /// Internal link count
    pub internal_links: usize,
    /// Images without `alt`
    pub images_missing_alt: usize,
    /// Top content keywords, most frequent first
    pub keywords: Vec<String>,
    /// Critical and high-priority finding messages
    pub issues: Vec<String>,
}

impl PageSummary {
    /// Extracts the summary from a completed report.
    pub fn from_report(report: &Report) -> Self {
        let metrics = &report.metrics;
        let site_name = url::Url::parse(&report.url)
            .ok()
            .and_then(|url| url.host_str().map(|host| host.trim_start_matches("www.").to_string()))
            .unwrap_or_default();

        Self {
            url: report.url.clone(),
            site_name,
            title: metrics.title.clone(),
            meta_description: metrics.meta_description.clone(),
            word_count: metrics.word_count,
            paragraph_count: metrics.paragraph_count,
            avg_words_per_sentence: metrics.avg_words_per_sentence,
            internal_links: metrics.internal_links,
            images_missing_alt: metrics.images_missing_alt,
            keywords: metrics
                .top_keywords
                .iter()
                .map(|keyword| keyword.keyword.clone())
                .collect(),
            issues: report
                .findings
                .get(Severity::Critical)
                .iter()
                .chain(report.findings.get(Severity::High))
                .map(|finding| finding.message.clone())
                .collect(),
        }
    }
}

/// A source of suggestions.
///
/// Implementations may be slow or fail; the caller bounds the call with a
/// timeout and falls back to `keyword_suggestions` on any error.
pub trait Suggester {
    /// Produces suggestions for the summarized page.
    fn suggest(
        &self,
        summary: &PageSummary,
    ) -> impl Future<Output = Result<Suggestions, SuggestionError>> + Send;
}
