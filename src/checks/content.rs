//! Content quality checks.

use crate::config::{MAX_AVG_WORDS_PER_SENTENCE, RICH_CONTENT_WORDS, THIN_CONTENT_WORDS};
use crate::metrics::PageMetrics;
use crate::report::{Category, Finding};
use crate::snapshot::PageSnapshot;

/// Word count, sentence length and paragraph structure.
pub fn check_content(_snapshot: &PageSnapshot, metrics: &PageMetrics) -> Vec<Finding> {
    let mut findings = Vec::new();
    let words = metrics.word_count;

    if words < THIN_CONTENT_WORDS {
        findings.push(
            Finding::high(Category::ContentQuality, format!("Thin content ({words} words)"))
                .with_impact("Search engines favor comprehensive content; thin pages rank poorly")
                .with_recommendation(format!(
                    "Add {} more words. Target: 500-1000+ words",
                    THIN_CONTENT_WORDS - words
                ))
                .with_steps([
                    "Answer the questions visitors actually ask",
                    "Add examples and use cases",
                    "Include statistics or data",
                    "Add an FAQ section",
                ]),
        );
    } else if words >= RICH_CONTENT_WORDS {
        findings.push(Finding::passed(
            Category::ContentQuality,
            format!("Word Count: Excellent ({words} words)"),
        ));
    } else {
        findings.push(Finding::passed(
            Category::ContentQuality,
            format!("Word Count: Good ({words} words)"),
        ));
    }

    if metrics.avg_words_per_sentence > MAX_AVG_WORDS_PER_SENTENCE {
        findings.push(
            Finding::medium(
                Category::ContentQuality,
                format!(
                    "Long sentences (avg {:.1} words)",
                    metrics.avg_words_per_sentence
                ),
            )
            .with_recommendation("Break long sentences up; aim for 15-20 words per sentence"),
        );
    }

    if metrics.paragraph_count == 0 {
        findings.push(
            Finding::high(Category::ContentQuality, "No paragraph tags found")
                .with_recommendation("Structure the content with <p> tags for readability"),
        );
    }

    findings
}
