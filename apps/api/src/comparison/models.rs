use indexmap::IndexSet;
use serde::Serialize;
use tracing::trace;

use crate::comparison::extractor::extract_keywords;
use crate::comparison::technical::extract_technical_keywords;

/// Which side of the comparison a document sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentRole {
    Resume,
    JobDescription,
}

/// Free-form text in one of the two roles. No identity beyond its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub role: DocumentRole,
    pub text: String,
}

impl Document {
    pub fn resume(text: impl Into<String>) -> Self {
        Self {
            role: DocumentRole::Resume,
            text: text.into(),
        }
    }

    pub fn job_description(text: impl Into<String>) -> Self {
        Self {
            role: DocumentRole::JobDescription,
            text: text.into(),
        }
    }
}

/// Lower-case, deduplicated keywords of one document, in insertion order:
/// ranked frequency keywords first, then catalog terms not already present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordSet(IndexSet<String>);

impl KeywordSet {
    pub fn from_text(text: &str) -> Self {
        let mut set = IndexSet::new();
        set.extend(extract_keywords(text));
        set.extend(extract_technical_keywords(text));
        Self(set)
    }

    pub fn from_document(document: &Document) -> Self {
        let set = Self::from_text(&document.text);
        trace!(role = ?document.role, keywords = set.len(), "keyword set built");
        set
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.0.contains(keyword)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Membership of one keyword across the two documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMatch {
    pub keyword: String,
    pub in_resume: bool,
    pub in_job_description: bool,
}

/// Coarse band for a match percentage: strong ≥ 70, moderate ≥ 50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Strong,
    Moderate,
    Weak,
}

impl MatchTier {
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage >= 70 {
            MatchTier::Strong
        } else if percentage >= 50 {
            MatchTier::Moderate
        } else {
            MatchTier::Weak
        }
    }
}

/// Output of one comparison. Field names are camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub match_percentage: u8, // 0 – 100
    pub matching_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub extra_keywords: Vec<String>,
    pub suggestions: Vec<String>,
    pub tier: MatchTier,
    pub keyword_breakdown: Vec<KeywordMatch>,
}
