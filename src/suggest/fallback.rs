//! Keyword-derived suggestions.

use crate::config::{DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};
use crate::utils::text::{char_len, truncate_chars};

use super::{PageSummary, SuggestionSource, Suggestions};

const SUGGESTED_KEYWORDS: usize = 5;

/// Builds suggestions from the page's own keywords and metrics.
///
/// Deterministic: the same summary always yields the same suggestions.
pub fn keyword_suggestions(summary: &PageSummary) -> Suggestions {
    let topic = summary
        .keywords
        .first()
        .cloned()
        .unwrap_or_else(|| site_topic(&summary.site_name));
    let brand = if summary.site_name.is_empty() {
        "Your Brand".to_string()
    } else {
        summary.site_name.clone()
    };
    let topic_title = capitalize(&topic);

    let title = clip_words(
        &format!("{topic_title} Guide: Tips and Essentials | {brand}"),
        TITLE_MAX_CHARS,
    );
    let description = clip_words(
        &format!(
            "Discover everything about {topic}. Learn practical tips, answers to common questions and expert advice on {topic} from {brand}. Get started today."
        ),
        DESCRIPTION_MAX_CHARS,
    );

    Suggestions {
        title,
        description,
        keywords: summary.keywords.iter().take(SUGGESTED_KEYWORDS).cloned().collect(),
        content_improvements: content_improvements(summary, &topic),
        content_score: content_score(summary),
        source: SuggestionSource::KeywordFallback,
    }
}

fn content_improvements(summary: &PageSummary, topic: &str) -> Vec<String> {
    let mut improvements = Vec::new();
    if summary.word_count < 300 {
        improvements.push(format!(
            "Expand the page to at least 300 words (currently {})",
            summary.word_count
        ));
    } else if summary.word_count < 1000 {
        improvements.push("Deepen the content towards 1000+ words with examples and data".to_string());
    }
    if summary.paragraph_count == 0 {
        improvements.push("Break the content into <p> paragraphs".to_string());
    }
    if summary.avg_words_per_sentence > 25.0 {
        improvements.push("Shorten sentences to 15-20 words on average".to_string());
    }
    if summary.internal_links < 3 {
        improvements.push("Link to 3-5 related pages on the site".to_string());
    }
    if summary.images_missing_alt > 0 {
        improvements.push(format!(
            "Describe {} images with alt text mentioning {topic}",
            summary.images_missing_alt
        ));
    }
    improvements.push(format!("Add an FAQ section answering common questions about {topic}"));
    improvements
}

fn content_score(summary: &PageSummary) -> u8 {
    let mut score: i32 = 100;
    if summary.word_count < 300 {
        score -= 30;
    } else if summary.word_count < 1000 {
        score -= 10;
    }
    if summary.avg_words_per_sentence > 25.0 {
        score -= 15;
    }
    if summary.paragraph_count == 0 {
        score -= 15;
    }
    if summary.internal_links < 3 {
        score -= 10;
    }
    if summary.images_missing_alt > 0 {
        score -= 10;
    }
    score.clamp(0, 100) as u8
}

/// "shop.example.com" -> "shop"
fn site_topic(site_name: &str) -> String {
    site_name
        .split('.')
        .next()
        .filter(|label| !label.is_empty())
        .unwrap_or("this topic")
        .to_string()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Clips `text` to `max_chars`, cutting at a word boundary when possible.
fn clip_words(text: &str, max_chars: usize) -> String {
    if char_len(text) <= max_chars {
        return text.to_string();
    }
    let clipped = truncate_chars(text, max_chars);
    match clipped.rfind(' ') {
        Some(space) if space > 0 => clipped[..space].trim_end_matches([',', '.', '|', ':']).trim_end().to_string(),
        _ => clipped,
    }
}
