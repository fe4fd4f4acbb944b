//! Whole-word, case-insensitive multi-term matching.
//!
//! Shared by the technical term catalog and the highlighter. All terms are
//! compiled into a single regex alternation, longest term first, so a scan is
//! one pass over the text no matter how many terms are loaded.
//!
//! A match must not touch a word character on either side. For terms that
//! begin or end with punctuation (`c++`, `c#`) the boundary is expressed as
//! `\B` so that `"C++,"` and `"C++"` at end of text both match while `"c++x"`
//! does not.

use indexmap::IndexSet;
use regex::{Regex, RegexBuilder};

/// One occurrence of a loaded term in a haystack. Offsets are byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermMatch {
    pub term_index: usize,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone)]
pub struct TermMatcher {
    regex: Regex,
    terms: Vec<String>,
}

impl TermMatcher {
    /// Builds a matcher over `terms`. Terms are trimmed, lower-cased and
    /// deduplicated; blank terms are ignored. Returns `None` when no usable
    /// term remains.
    pub fn new<I, S>(terms: I) -> Result<Option<Self>, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: IndexSet<String> = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        let mut unique: Vec<String> = unique.into_iter().collect();
        if unique.is_empty() {
            return Ok(None);
        }

        // Longest first: the alternation is leftmost-first, so at a given
        // start "javascript" must be tried before "java".
        unique.sort_by_key(|t| std::cmp::Reverse(t.chars().count()));

        let alternation = unique
            .iter()
            .map(|t| bounded_pattern(t))
            .collect::<Vec<_>>()
            .join("|");

        let regex = RegexBuilder::new(&format!("(?:{alternation})"))
            .case_insensitive(true)
            .build()?;

        Ok(Some(Self {
            regex,
            terms: unique,
        }))
    }

    /// Term text for a `TermMatch::term_index`.
    pub fn term(&self, index: usize) -> &str {
        &self.terms[index]
    }

    /// All non-overlapping whole-word matches, in text order.
    pub fn find_all(&self, text: &str) -> Vec<TermMatch> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let term_index = (1..caps.len()).find(|i| caps.get(*i).is_some())? - 1;
                Some(TermMatch {
                    term_index,
                    start: whole.start(),
                    end: whole.end(),
                })
            })
            .collect()
    }
}

fn bounded_pattern(term: &str) -> String {
    let lead = match term.chars().next() {
        Some(c) if is_word_char(c) => r"\b",
        _ => r"\B",
    };
    let trail = match term.chars().last() {
        Some(c) if is_word_char(c) => r"\b",
        _ => r"\B",
    };
    format!("{lead}({}){trail}", regex::escape(term))
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched_terms(matcher: &TermMatcher, text: &str) -> Vec<String> {
        matcher
            .find_all(text)
            .into_iter()
            .map(|m| matcher.term(m.term_index).to_string())
            .collect()
    }

    #[test]
    fn test_blank_terms_yield_no_matcher() {
        assert!(TermMatcher::new(["", "  "]).unwrap().is_none());
        assert!(TermMatcher::new(Vec::<String>::new()).unwrap().is_none());
    }

    #[test]
    fn test_prefix_terms_do_not_cross_match() {
        let matcher = TermMatcher::new(["java", "javascript"]).unwrap().unwrap();
        assert_eq!(matched_terms(&matcher, "javascript"), vec!["javascript"]);
        assert_eq!(matched_terms(&matcher, "java"), vec!["java"]);
        assert_eq!(
            matched_terms(&matcher, "Java and JavaScript"),
            vec!["java", "javascript"]
        );
    }

    #[test]
    fn test_embedded_occurrence_is_rejected() {
        let matcher = TermMatcher::new(["go", "rest"]).unwrap().unwrap();
        assert!(matched_terms(&matcher, "google restful ago").is_empty());
    }

    #[test]
    fn test_symbol_terms_match_at_end_and_before_punctuation() {
        let matcher = TermMatcher::new(["c++", "c#"]).unwrap().unwrap();
        assert_eq!(matched_terms(&matcher, "I know C++"), vec!["c++"]);
        assert_eq!(matched_terms(&matcher, "C++, C# and more"), vec!["c++", "c#"]);
        assert!(matched_terms(&matcher, "abc++ c++x").is_empty());
    }

    #[test]
    fn test_multi_word_phrase() {
        let matcher = TermMatcher::new(["ci/cd", "react native", "react"])
            .unwrap()
            .unwrap();
        assert_eq!(
            matched_terms(&matcher, "Built CI/CD for React Native and React."),
            vec!["ci/cd", "react native", "react"]
        );
    }

    #[test]
    fn test_longer_phrase_falls_back_to_shorter_term() {
        let matcher = TermMatcher::new(["react native", "react"]).unwrap().unwrap();
        assert_eq!(matched_terms(&matcher, "react nativescript"), vec!["react"]);
    }

    #[test]
    fn test_offsets_point_into_original_text() {
        let matcher = TermMatcher::new(["aws"]).unwrap().unwrap();
        let text = "Deployed on AWS.";
        let found = matcher.find_all(text);
        assert_eq!(found.len(), 1);
        assert_eq!(&text[found[0].start..found[0].end], "AWS");
    }

    #[test]
    fn test_terms_are_deduplicated_case_insensitively() {
        let matcher = TermMatcher::new(["Rust", "rust", " RUST "]).unwrap().unwrap();
        assert_eq!(matcher.terms, vec!["rust".to_string()]);
        assert_eq!(matched_terms(&matcher, "rust RUST"), vec!["rust", "rust"]);
    }

    #[test]
    fn test_large_term_lists_dedupe_in_first_seen_order() {
        let terms: Vec<String> = (0..1_000).map(|i| format!("kw{}", i % 500)).collect();
        let matcher = TermMatcher::new(&terms).unwrap().unwrap();
        assert_eq!(matcher.terms.len(), 500);
        assert_eq!(matched_terms(&matcher, "kw7 and kw499"), vec!["kw7", "kw499"]);
    }
}
