//! Text intake for uploaded documents.
//!
//! Only plain-text files are accepted. PDF and scanned documents are expected
//! to be converted by the caller before they reach the comparator.

use serde::Serialize;
use thiserror::Error;

use crate::comparison::models::DocumentRole;

/// Extracted text shorter than this is treated as an empty file.
pub const MIN_TEXT_CHARS: usize = 10;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Only .txt files are supported.")]
    UnsupportedType,

    #[error("File size ({:.2} MB) exceeds {} MB limit.", megabytes(.size), limit_label(.limit))]
    TooLarge { size: usize, limit: usize },

    #[error("The file is not valid UTF-8 text.")]
    InvalidEncoding,

    #[error("The file appears to be empty.")]
    Empty,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedText {
    pub role: DocumentRole,
    pub file_name: String,
    pub text: String,
    pub char_count: usize,
}

/// Validates an uploaded file and returns its text.
///
/// Checks run in order: type, size, encoding, minimum length.
pub fn extract_text(
    role: DocumentRole,
    file_name: &str,
    content_type: Option<&str>,
    bytes: &[u8],
    max_bytes: usize,
) -> Result<ExtractedText, IntakeError> {
    if !is_plain_text(file_name, content_type) {
        return Err(IntakeError::UnsupportedType);
    }

    if bytes.len() > max_bytes {
        return Err(IntakeError::TooLarge {
            size: bytes.len(),
            limit: max_bytes,
        });
    }

    let text = std::str::from_utf8(bytes).map_err(|_| IntakeError::InvalidEncoding)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let char_count = text.chars().count();
    if char_count < MIN_TEXT_CHARS {
        return Err(IntakeError::Empty);
    }

    Ok(ExtractedText {
        role,
        file_name: file_name.to_string(),
        text: text.to_string(),
        char_count,
    })
}

fn is_plain_text(file_name: &str, content_type: Option<&str>) -> bool {
    let type_is_text = content_type
        .map(|ct| ct.to_ascii_lowercase().contains("text"))
        .unwrap_or(false);
    type_is_text || file_name.to_ascii_lowercase().ends_with(".txt")
}

fn megabytes(bytes: &usize) -> f64 {
    *bytes as f64 / BYTES_PER_MB
}

/// Whole megabytes print without decimals ("5"), anything else with two ("0.95").
fn limit_label(bytes: &usize) -> String {
    let mb = megabytes(bytes);
    if mb.fract() == 0.0 {
        format!("{mb:.0}")
    } else {
        format!("{mb:.2}")
    }
}
