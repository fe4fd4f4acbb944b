//! Static vocabularies: the stop-word list and the technical term catalog.
//!
//! Both are compiled in and never mutated, so any number of requests can
//! read them without synchronization.

use serde::Serialize;

/// Common words dropped before frequency counting.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "will", "with", "we", "you", "your", "our",
    "their", "this", "these", "those",
];

/// Grouping for catalog terms. Only used for reporting; matching is flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TermCategory {
    Language,
    Framework,
    Tool,
    Database,
    Methodology,
}

/// A group of recognized terms. Terms are stored lower-case, spelled the way
/// they are reported back to callers (`c++`, `next.js`, `ci/cd`).
#[derive(Debug)]
pub struct TermGroup {
    pub category: TermCategory,
    pub terms: &'static [&'static str],
}

pub const TECHNICAL_TERMS: &[TermGroup] = &[
    TermGroup {
        category: TermCategory::Language,
        terms: &[
            "javascript",
            "typescript",
            "python",
            "java",
            "c++",
            "c#",
            "ruby",
            "go",
            "rust",
            "swift",
            "kotlin",
            "php",
        ],
    },
    TermGroup {
        category: TermCategory::Framework,
        terms: &[
            "react", "angular", "vue", "next.js", "express", "django", "flask", "spring", "rails",
            "laravel",
        ],
    },
    TermGroup {
        category: TermCategory::Tool,
        terms: &[
            "git",
            "docker",
            "kubernetes",
            "aws",
            "azure",
            "gcp",
            "jenkins",
            "terraform",
            "ansible",
        ],
    },
    TermGroup {
        category: TermCategory::Database,
        terms: &[
            "mongodb",
            "postgresql",
            "mysql",
            "redis",
            "elasticsearch",
            "dynamodb",
        ],
    },
    TermGroup {
        category: TermCategory::Methodology,
        terms: &[
            "agile",
            "scrum",
            "ci/cd",
            "tdd",
            "devops",
            "microservices",
            "rest",
            "graphql",
        ],
    },
];

/// Case-insensitive stop-word test.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.iter().any(|w| w.eq_ignore_ascii_case(token))
}

/// Every catalog term in category order, paired with its category.
pub fn all_terms() -> impl Iterator<Item = (TermCategory, &'static str)> {
    TECHNICAL_TERMS
        .iter()
        .flat_map(|group| group.terms.iter().map(move |t| (group.category, *t)))
}

pub fn category_of(term: &str) -> Option<TermCategory> {
    all_terms()
        .find(|(_, t)| t.eq_ignore_ascii_case(term))
        .map(|(category, _)| category)
}
