//! POST /upload — resume vs job description from two uploaded files.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::UnsupportedFormatPolicy;
use crate::errors::AppError;
use crate::extraction::{ExtractionError, UploadedFile};
use crate::matching::{compare_keywords, extract_keywords, ComparisonResult, KeywordOptions};
use crate::state::AppState;

pub const RESUME_FIELD: &str = "resume";
pub const JOB_DESCRIPTION_FIELD: &str = "jobDescription";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: String,
    pub resume_keywords: Vec<String>,
    pub job_desc_keywords: Vec<String>,
    pub feedback: ComparisonResult,
}

/// Uploads are read into memory and dropped with the request; nothing is
/// written to disk.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let request_id = Uuid::new_v4();
    let mut resume: Option<UploadedFile> = None;
    let mut job_description: Option<UploadedFile> = None;

    while let Some(field) = multipart.next_field().await? {
        let slot = match field.name() {
            Some(RESUME_FIELD) => &mut resume,
            Some(JOB_DESCRIPTION_FIELD) => &mut job_description,
            _ => continue,
        };
        let file_name = field.file_name().map(String::from);
        let content_type = field.content_type().map(String::from);
        let data = field.bytes().await?;
        *slot = Some(UploadedFile {
            file_name,
            content_type,
            data,
        });
    }

    let (Some(resume), Some(job_description)) = (resume, job_description) else {
        return Err(AppError::Validation(
            "Both resume and job description are required.".to_string(),
        ));
    };

    let resume_text = read_text(&state, &resume, request_id).await?;
    let job_text = read_text(&state, &job_description, request_id).await?;

    let options = KeywordOptions {
        stopwords: state.config.stopwords.clone(),
        ..Default::default()
    };
    let top_n = state.config.keyword_top_n;
    let resume_keywords = extract_keywords(&resume_text, top_n, &options)?;
    let job_desc_keywords = extract_keywords(&job_text, top_n, &options)?;

    let feedback = compare_keywords(&resume_keywords, &job_desc_keywords);
    info!(
        %request_id,
        resume_keywords = resume_keywords.len(),
        job_desc_keywords = job_desc_keywords.len(),
        match_percentage = feedback.match_percentage,
        "Generated keyword feedback"
    );

    Ok(Json(UploadResponse {
        message: "Files uploaded, parsed, and feedback generated successfully".to_string(),
        resume_keywords,
        job_desc_keywords,
        feedback,
    }))
}

/// Extracts text, applying the configured policy to unrecognized formats.
async fn read_text(
    state: &AppState,
    file: &UploadedFile,
    request_id: Uuid,
) -> Result<String, AppError> {
    match state.extractors.extract(file).await {
        Ok(text) => Ok(text),
        Err(ExtractionError::UnsupportedFormat(format))
            if state.config.unsupported_format_policy == UnsupportedFormatPolicy::TreatAsEmpty =>
        {
            warn!(%request_id, %format, "Unsupported upload format; scoring as empty text");
            Ok(String::new())
        }
        Err(e) => Err(e.into()),
    }
}
