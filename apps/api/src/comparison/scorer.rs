//! Comparison scoring — pluggable, trait-based comparator over two documents.
//!
//! Default: `KeywordComparator` (keyword set overlap, deterministic).
//!
//! `AppState` holds an `Arc<dyn Comparator>`, swapped at startup.

use tracing::debug;

use crate::comparison::models::{
    ComparisonResult, Document, KeywordMatch, KeywordSet, MatchTier,
};

/// Missing keywords named in the "incorporate these terms" suggestion.
const SUGGESTED_MISSING_LIMIT: usize = 5;

const TAILOR_SUGGESTION: &str = "Your resume has significant gaps compared to the job description. Consider tailoring your resume more closely to this position.";
const ALIGNED_SUGGESTION: &str = "Your resume aligns well with the job description. Consider highlighting your relevant achievements more prominently.";
const EXPERIENCE_SUGGESTION: &str =
    "Make sure to clearly state your years of experience in relevant areas.";

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The comparator trait. Implement this to swap backends without touching
/// the handlers.
///
/// Comparison is a pure synchronous computation; implementations must not
/// keep state between calls.
pub trait Comparator: Send + Sync {
    fn compare(&self, resume: &Document, job_description: &Document) -> ComparisonResult;

    /// Short label reported alongside results.
    fn backend(&self) -> &'static str;
}

/// Keyword overlap comparator.
///
/// Algorithm:
/// 1. Build a keyword set per document (top-50 frequency keywords ∪ catalog terms)
/// 2. matching = job ∩ resume, missing = job − resume, extra = resume − job
/// 3. match_percentage = round(100 × |matching| / |job|), 0 for an empty job set
/// 4. Rule-based suggestions from the percentage and the missing keywords
pub struct KeywordComparator;

impl Comparator for KeywordComparator {
    fn compare(&self, resume: &Document, job_description: &Document) -> ComparisonResult {
        compare_keyword_sets(
            &KeywordSet::from_document(resume),
            &KeywordSet::from_document(job_description),
        )
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

/// End-to-end comparison of raw resume text against raw job description text.
/// Total over all inputs, including empty strings.
///
/// In-process entry point; the HTTP layer goes through `AppState::comparator`.
#[allow(dead_code)]
pub fn compare_resume_to_job(resume_text: &str, job_description_text: &str) -> ComparisonResult {
    KeywordComparator.compare(
        &Document::resume(resume_text),
        &Document::job_description(job_description_text),
    )
}

pub fn compare_keyword_sets(resume: &KeywordSet, job: &KeywordSet) -> ComparisonResult {
    if job.is_empty() {
        debug!("job description produced no keywords, match percentage is 0");
    }

    let mut matching_keywords = Vec::new();
    let mut missing_keywords = Vec::new();
    let mut keyword_breakdown = Vec::with_capacity(job.len() + resume.len());

    for keyword in job.iter() {
        let in_resume = resume.contains(keyword);
        if in_resume {
            matching_keywords.push(keyword.to_string());
        } else {
            missing_keywords.push(keyword.to_string());
        }
        keyword_breakdown.push(KeywordMatch {
            keyword: keyword.to_string(),
            in_resume,
            in_job_description: true,
        });
    }

    let extra_keywords: Vec<String> = resume
        .iter()
        .filter(|k| !job.contains(k))
        .map(str::to_string)
        .collect();
    keyword_breakdown.extend(extra_keywords.iter().map(|k| KeywordMatch {
        keyword: k.clone(),
        in_resume: true,
        in_job_description: false,
    }));

    let match_percentage = match_percentage(matching_keywords.len(), job.len());
    let suggestions = build_suggestions(match_percentage, &missing_keywords);

    debug!(
        resume_keywords = resume.len(),
        job_keywords = job.len(),
        matching = matching_keywords.len(),
        match_percentage,
        "keyword comparison complete"
    );

    ComparisonResult {
        match_percentage,
        matching_keywords,
        missing_keywords,
        extra_keywords,
        suggestions,
        tier: MatchTier::from_percentage(match_percentage),
        keyword_breakdown,
    }
}

/// round(100 × matching / job_total); an empty job set scores 0.
pub fn match_percentage(matching: usize, job_total: usize) -> u8 {
    if job_total == 0 {
        return 0;
    }
    let ratio = matching.min(job_total) as f64 / job_total as f64;
    (ratio * 100.0).round() as u8
}

/// Independent, additive rules, emitted in this order:
/// low score, missing terms, strong score, missing experience wording.
pub fn build_suggestions(match_percentage: u8, missing_keywords: &[String]) -> Vec<String> {
    let mut suggestions = Vec::new();

    if match_percentage < 50 {
        suggestions.push(TAILOR_SUGGESTION.to_string());
    }

    if !missing_keywords.is_empty() {
        let top_missing: Vec<&str> = missing_keywords
            .iter()
            .take(SUGGESTED_MISSING_LIMIT)
            .map(String::as_str)
            .collect();
        suggestions.push(format!(
            "Consider incorporating these key terms: {}",
            top_missing.join(", ")
        ));
    }

    if match_percentage >= 70 {
        suggestions.push(ALIGNED_SUGGESTION.to_string());
    }

    if missing_keywords
        .iter()
        .any(|k| k.contains("year") || k.contains("experience"))
    {
        suggestions.push(EXPERIENCE_SUGGESTION.to_string());
    }

    suggestions
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
