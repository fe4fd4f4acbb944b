//! Technical term recognition against the static catalog.
//!
//! Runs on the original text, not the normalized tokens, so symbol-bearing
//! terms such as `c++`, `ci/cd` and `next.js` survive.

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::comparison::catalog::{all_terms, category_of, TermCategory};
use crate::comparison::matcher::TermMatcher;

/// A catalog hit with its byte span in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechnicalMatch {
    pub term: String,
    pub category: TermCategory,
    pub start: usize,
    pub end: usize,
}

/// Matcher compiled once from `TECHNICAL_TERMS`.
pub struct TechnicalTermMatcher {
    inner: TermMatcher,
}

static CATALOG_MATCHER: Lazy<TechnicalTermMatcher> = Lazy::new(|| {
    let inner = TermMatcher::new(all_terms().map(|(_, term)| term))
        .expect("technical term catalog must compile")
        .expect("technical term catalog must not be empty");
    TechnicalTermMatcher { inner }
});

impl TechnicalTermMatcher {
    /// The process-wide catalog matcher.
    pub fn catalog() -> &'static TechnicalTermMatcher {
        &CATALOG_MATCHER
    }

    /// Every catalog occurrence in text order, including repeats.
    pub fn find_all(&self, text: &str) -> Vec<TechnicalMatch> {
        self.inner
            .find_all(text)
            .into_iter()
            .filter_map(|m| {
                let term = self.inner.term(m.term_index);
                let category = category_of(term)?;
                Some(TechnicalMatch {
                    term: term.to_string(),
                    category,
                    start: m.start,
                    end: m.end,
                })
            })
            .collect()
    }
}

/// Deduplicated lower-case catalog terms present in `text`, ordered by first
/// occurrence. Multiplicity is ignored.
pub fn extract_technical_keywords(text: &str) -> Vec<String> {
    let found: IndexSet<String> = TechnicalTermMatcher::catalog()
        .find_all(text)
        .into_iter()
        .map(|m| m.term)
        .collect();
    found.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_single_hit() {
        assert_eq!(
            extract_technical_keywords("I use REACT and react and React"),
            vec!["react"]
        );
    }

    #[test]
    fn test_javascript_does_not_report_java() {
        assert_eq!(extract_technical_keywords("javascript"), vec!["javascript"]);
        assert_eq!(extract_technical_keywords("java"), vec!["java"]);
    }

    #[test]
    fn test_symbol_terms_are_recognized() {
        let found = extract_technical_keywords("Strong C++ and C# skills. Shipped CI/CD on Next.js");
        assert_eq!(found, vec!["c++", "c#", "ci/cd", "next.js"]);
    }

    #[test]
    fn test_embedded_words_are_not_terms() {
        // "go" inside "google", "rest" inside "restaurant", "git" inside "digital"
        assert!(extract_technical_keywords("google restaurant digital").is_empty());
    }

    #[test]
    fn test_first_occurrence_order() {
        assert_eq!(
            extract_technical_keywords("Terraform on AWS, then Docker; AWS again"),
            vec!["terraform", "aws", "docker"]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_technical_keywords("").is_empty());
    }

    #[test]
    fn test_find_all_reports_categories_and_spans() {
        let text = "Postgres? No, PostgreSQL with Agile teams";
        let found = TechnicalTermMatcher::catalog().find_all(text);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].term, "postgresql");
        assert_eq!(found[0].category, TermCategory::Database);
        assert_eq!(&text[found[0].start..found[0].end], "PostgreSQL");
        assert_eq!(found[1].category, TermCategory::Methodology);
    }
}
