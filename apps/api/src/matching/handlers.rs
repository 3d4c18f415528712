//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::{
    compare_keywords, extract_keywords, ComparisonResult, EmptyPolicy, KeywordError,
    KeywordOptions, Stopwords,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractKeywordsRequest {
    pub text: String,
    /// Falls back to `KEYWORD_TOP_N`. Signed so that negative values reach
    /// validation instead of failing deserialization.
    pub top_n: Option<i64>,
    /// Replaces the configured stopword set; `[]` disables filtering.
    pub stopwords: Option<Vec<String>>,
    pub reference_corpus: Option<Vec<String>>,
    /// When true, text with no terms is rejected with 422.
    #[serde(default)]
    pub require_terms: bool,
}

#[derive(Debug, Serialize)]
pub struct ExtractKeywordsResponse {
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareKeywordsRequest {
    pub resume_keywords: Vec<String>,
    pub job_desc_keywords: Vec<String>,
}

/// Converts a client-supplied topN into the core's `usize`.
pub fn validate_top_n(top_n: i64) -> Result<usize, KeywordError> {
    usize::try_from(top_n)
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| {
            KeywordError::InvalidArgument(format!("topN must be greater than 0, got {top_n}"))
        })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/keywords
pub async fn handle_extract_keywords(
    State(state): State<AppState>,
    Json(request): Json<ExtractKeywordsRequest>,
) -> Result<Json<ExtractKeywordsResponse>, AppError> {
    let top_n = match request.top_n {
        Some(n) => validate_top_n(n)?,
        None => state.config.keyword_top_n,
    };

    let options = KeywordOptions {
        stopwords: request
            .stopwords
            .map(Stopwords::from_iter)
            .unwrap_or_else(|| state.config.stopwords.clone()),
        reference_corpus: request.reference_corpus,
        empty_policy: if request.require_terms {
            EmptyPolicy::Reject
        } else {
            EmptyPolicy::Allow
        },
    };

    let keywords = extract_keywords(&request.text, top_n, &options)?;
    info!(top_n, keywords = keywords.len(), "Extracted keywords");

    Ok(Json(ExtractKeywordsResponse { keywords }))
}

/// POST /api/v1/compare
pub async fn handle_compare_keywords(
    Json(request): Json<CompareKeywordsRequest>,
) -> Json<ComparisonResult> {
    let result = compare_keywords(&request.resume_keywords, &request.job_desc_keywords);
    info!(
        match_percentage = result.match_percentage,
        matched = result.matched_keywords.len(),
        missing = result.missing_keywords.len(),
        "Compared keyword sets"
    );
    Json(result)
}
