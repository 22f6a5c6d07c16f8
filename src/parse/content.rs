//! Text statistics and keyword extraction.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{KEYWORD_MIN_LENGTH, STOP_WORDS};

static SENTENCE_END_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.!?]+").unwrap_or_else(|e| {
        panic!("Failed to compile sentence regex: {e}. This is a programming error.")
    })
});

/// A frequent content term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// The lowercased term
    pub keyword: String,
    /// Occurrences in the content text
    pub count: usize,
    /// `count / word_count`, as a fraction (0.02 is 2%)
    pub density: f64,
}

/// Number of whitespace-separated words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of non-blank pieces between runs of `.`, `!` and `?`.
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_END_RE
        .split(text)
        .filter(|piece| !piece.trim().is_empty())
        .count()
}

/// Returns the `limit` most frequent keywords in `text`.
///
/// Tokens are whitespace-separated words with surrounding punctuation
/// stripped, lowercased. A token counts when it is purely alphabetic, at
/// least `KEYWORD_MIN_LENGTH` characters long and not a stop word. Ties keep
/// first-occurrence order. Density is relative to `word_count`.
pub fn extract_keywords(text: &str, word_count: usize, limit: usize) -> Vec<Keyword> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for raw in text.split_whitespace() {
        let token = raw
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if token.chars().count() < KEYWORD_MIN_LENGTH
            || !token.chars().all(char::is_alphabetic)
            || STOP_WORDS.contains(&token.as_str())
        {
            continue;
        }
        match index.get(&token) {
            Some(&position) => order[position].1 += 1,
            None => {
                index.insert(token.clone(), order.len());
                order.push((token, 1));
            }
        }
    }

    // Stable sort keeps first-occurrence order among equal counts
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
        .into_iter()
        .take(limit)
        .map(|(keyword, count)| Keyword {
            density: if word_count == 0 {
                0.0
            } else {
                count as f64 / word_count as f64
            },
            keyword,
            count,
        })
        .collect()
}
