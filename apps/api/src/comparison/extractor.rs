//! Frequency keyword extraction.
//!
//! Tokens shorter than `MIN_KEYWORD_CHARS` and stop words are dropped, the
//! rest are counted within the one document, and the `MAX_FREQUENCY_KEYWORDS`
//! most frequent are returned. Ties keep first-occurrence order.

use indexmap::IndexMap;
use serde::Serialize;

use crate::comparison::catalog::is_stop_word;
use crate::comparison::normalizer::normalize;

pub const MIN_KEYWORD_CHARS: usize = 3;
pub const MAX_FREQUENCY_KEYWORDS: usize = 50;

/// A ranked keyword with its occurrence count in the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordFrequency {
    pub keyword: String,
    pub count: u32,
}

/// Up to 50 keywords ordered by descending frequency.
pub fn extract_keywords(text: &str) -> Vec<String> {
    keyword_frequencies(text)
        .into_iter()
        .map(|kf| kf.keyword)
        .collect()
}

/// The ranking behind `extract_keywords`, with counts attached.
pub fn keyword_frequencies(text: &str) -> Vec<KeywordFrequency> {
    // IndexMap keeps first-occurrence order, which the stable sort below
    // preserves among equal counts.
    let mut counts: IndexMap<String, u32> = IndexMap::new();
    for token in normalize(text) {
        if !qualifies(&token) {
            continue;
        }
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut ranked: Vec<KeywordFrequency> = counts
        .into_iter()
        .map(|(keyword, count)| KeywordFrequency { keyword, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(MAX_FREQUENCY_KEYWORDS);
    ranked
}

fn qualifies(token: &str) -> bool {
    token.chars().count() >= MIN_KEYWORD_CHARS && !is_stop_word(token)
}
