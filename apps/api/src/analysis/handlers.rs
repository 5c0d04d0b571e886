//! Axum route handlers for the scan API.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::matcher::analyze_keywords;
use crate::analysis::report::ScanReport;
use crate::errors::AppError;
use crate::pdf::{extract_resume_text, is_pdf_upload};
use crate::state::AppState;

const MISSING_INPUT: &str = "Please upload a resume and provide a job description";
const NO_KEYWORDS: &str = "No keywords could be extracted from the job description";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct TextScanRequest {
    pub resume_text: String,
    pub job_description: String,
    #[serde(default)]
    pub resume_file_name: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/keywords
///
/// Returns the ranked keyword list for a job description without scoring anything.
pub async fn handle_extract_keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let extractor = state.extractor;
    let keywords = tokio::task::spawn_blocking(move || extractor.extract(&request.job_description))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in keyword extraction: {e}"))
        })?;

    Ok(Json(KeywordsResponse { keywords }))
}

/// POST /api/v1/scan/text
///
/// Scores résumé text that the client already extracted.
pub async fn handle_scan_text(
    State(state): State<AppState>,
    Json(request): Json<TextScanRequest>,
) -> Result<Json<ScanReport>, AppError> {
    if request.resume_text.trim().is_empty() || request.job_description.trim().is_empty() {
        return Err(AppError::Validation(MISSING_INPUT.to_string()));
    }

    let report = run_scan(
        &state,
        request.resume_file_name,
        request.resume_text,
        request.job_description,
    )
    .await?;

    Ok(Json(report))
}

/// POST /api/v1/scan
///
/// Multipart form with a `resume` PDF file and a `job_description` text field.
pub async fn handle_scan_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScanReport>, AppError> {
    let mut resume: Option<(Option<String>, Bytes)> = None;
    let mut job_description = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                if !is_pdf_upload(content_type.as_deref(), file_name.as_deref()) {
                    warn!(?file_name, ?content_type, "Rejected non-PDF upload");
                    return Err(AppError::UnsupportedMedia(
                        "Please upload a PDF file".to_string(),
                    ));
                }
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read resume: {e}")))?;
                resume = Some((file_name, bytes));
            }
            Some("job_description") => {
                job_description = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read job_description: {e}"))
                })?;
            }
            _ => {}
        }
    }

    let Some((file_name, bytes)) = resume.filter(|(_, bytes)| !bytes.is_empty()) else {
        return Err(AppError::Validation(MISSING_INPUT.to_string()));
    };
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(MISSING_INPUT.to_string()));
    }

    let resume_text = tokio::task::spawn_blocking(move || extract_resume_text(&bytes))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF extraction: {e}"))
        })??;

    let report = run_scan(&state, file_name, resume_text, job_description).await?;

    Ok(Json(report))
}

/// Extract, match and score on a blocking thread, then wrap the result in a report.
async fn run_scan(
    state: &AppState,
    file_name: Option<String>,
    resume_text: String,
    job_description: String,
) -> Result<ScanReport, AppError> {
    let extractor = state.extractor;
    let scorer = Arc::clone(&state.scorer);

    let report = tokio::task::spawn_blocking(move || {
        let keywords = extractor.extract(&job_description);
        if keywords.is_empty() {
            return Err(AppError::UnprocessableEntity(NO_KEYWORDS.to_string()));
        }
        let matches = analyze_keywords(&resume_text, &keywords);
        let scores = scorer.score(&matches, &resume_text, &job_description);
        Ok(ScanReport::new(
            file_name,
            keywords,
            matches,
            scores,
            scorer.backend(),
        ))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in scan: {e}")))??;

    info!(
        scan_id = %report.scan_id,
        ats_score = report.scores.ats_score,
        interview_probability = report.scores.interview_probability,
        "Scan complete: {}/{} keywords matched",
        report.scores.matched_keywords(report.top_keywords.len()),
        report.top_keywords.len()
    );

    Ok(report)
}
