//! Axum route handlers for the Comparison API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::comparison::extractor::{keyword_frequencies, KeywordFrequency};
use crate::comparison::highlight::{find_highlights, render_html, HighlightSpan};
use crate::comparison::intake::{extract_text, ExtractedText};
use crate::comparison::models::{ComparisonResult, Document, DocumentRole};
use crate::comparison::technical::{
    extract_technical_keywords, TechnicalMatch, TechnicalTermMatcher,
};
use crate::errors::AppError;
use crate::state::AppState;

const DEFAULT_HIGHLIGHT_CLASS: &str = "highlight";

/// Upper bound on keywords per highlight request. A full comparison yields
/// well under this (two sets of at most 50 frequency keywords plus catalog terms).
pub const MAX_HIGHLIGHT_KEYWORDS: usize = 500;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub resume_text: String,
    pub job_description_text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    #[serde(flatten)]
    pub result: ComparisonResult,
    pub comparator_backend: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
    pub technical_keywords: Vec<String>,
    /// Every catalog occurrence with its category and byte span.
    pub technical_matches: Vec<TechnicalMatch>,
    pub frequencies: Vec<KeywordFrequency>,
}

#[derive(Debug, Deserialize)]
pub struct HighlightRequest {
    pub text: String,
    pub keywords: Vec<String>,
    pub class: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HighlightResponse {
    pub spans: Vec<HighlightSpan>,
    pub html: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/compare
///
/// Compares resume text against a job description and returns the match
/// percentage, keyword overlap and suggestions.
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resumeText cannot be empty".to_string()));
    }
    if request.job_description_text.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescriptionText cannot be empty".to_string(),
        ));
    }

    let resume = Document::resume(request.resume_text);
    let job = Document::job_description(request.job_description_text);
    let result = state.comparator.compare(&resume, &job);

    info!(
        match_percentage = result.match_percentage,
        missing = result.missing_keywords.len(),
        "comparison served"
    );

    Ok(Json(CompareResponse {
        result,
        comparator_backend: state.comparator.backend(),
    }))
}

/// POST /api/v1/keywords
///
/// Returns the frequency keywords (with counts) and catalog terms of one text.
/// Empty text is not an error; every list is simply empty.
pub async fn handle_keywords(Json(request): Json<KeywordsRequest>) -> Json<KeywordsResponse> {
    let frequencies = keyword_frequencies(&request.text);
    Json(KeywordsResponse {
        keywords: frequencies.iter().map(|kf| kf.keyword.clone()).collect(),
        technical_keywords: extract_technical_keywords(&request.text),
        technical_matches: TechnicalTermMatcher::catalog().find_all(&request.text),
        frequencies,
    })
}

/// POST /api/v1/highlight
///
/// Marks whole-word keyword occurrences in the original text.
pub async fn handle_highlight(
    Json(request): Json<HighlightRequest>,
) -> Result<Json<HighlightResponse>, AppError> {
    if request.keywords.len() > MAX_HIGHLIGHT_KEYWORDS {
        return Err(AppError::Validation(format!(
            "at most {MAX_HIGHLIGHT_KEYWORDS} keywords can be highlighted, got {}",
            request.keywords.len()
        )));
    }

    let spans = find_highlights(&request.text, &request.keywords)
        .map_err(|e| AppError::Validation(format!("keywords could not be compiled: {e}")))?;
    let class = request
        .class
        .as_deref()
        .unwrap_or(DEFAULT_HIGHLIGHT_CLASS);
    let html = render_html(&request.text, &spans, class);

    Ok(Json(HighlightResponse { spans, html }))
}

/// POST /api/v1/documents/extract
///
/// Multipart upload: a `file` field holding a .txt document and an optional
/// `role` field (`resume` | `job_description`, default `resume`).
pub async fn handle_extract_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractedText>, AppError> {
    let mut role = DocumentRole::Resume;
    let mut upload: Option<(String, Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("role") => {
                let value = field.text().await.map_err(multipart_error)?;
                role = parse_role(&value)?;
            }
            Some("file") => {
                let file_name = field.file_name().unwrap_or("upload.txt").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(multipart_error)?;
                upload = Some((file_name, content_type, data.to_vec()));
            }
            _ => {}
        }
    }

    let (file_name, content_type, data) =
        upload.ok_or_else(|| AppError::Validation("multipart field 'file' is required".to_string()))?;

    let extracted = extract_text(
        role,
        &file_name,
        content_type.as_deref(),
        &data,
        state.config.max_upload_bytes,
    )
    .map_err(|e| {
        warn!(file_name = %file_name, error = %e, "document rejected");
        AppError::from(e)
    })?;

    info!(
        file_name = %extracted.file_name,
        chars = extracted.char_count,
        "document text extracted"
    );

    Ok(Json(extracted))
}

fn parse_role(value: &str) -> Result<DocumentRole, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "resume" => Ok(DocumentRole::Resume),
        "job_description" | "job-description" | "job" => Ok(DocumentRole::JobDescription),
        other => Err(AppError::Validation(format!("unknown document role '{other}'"))),
    }
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(e.body_text())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
