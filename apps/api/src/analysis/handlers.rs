//! Axum route handlers for the Analysis API.

use std::time::Duration;

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::export::{render_plain_text, EXPORT_FILE_NAME};
use crate::analysis::grading::ScoreReport;
use crate::analysis::ingest::{decode_upload, validate_text};
use crate::analysis::pipeline::analyze;
use crate::errors::AppError;
use crate::models::analysis::{Analysis, OptimizedDraft};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: Analysis,
    pub optimized_draft: OptimizedDraft,
    pub grade: ScoreReport,
    pub analyzed_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Scores a pasted resume and returns the analysis with an optimized draft.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    run_analysis(&state, request.text).await.map(Json)
}

/// POST /api/v1/analyze/upload
///
/// Same as `/analyze`, reading the text from the multipart `file` field.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;

        info!(
            "Received upload {} ({} bytes)",
            file_name.as_deref().unwrap_or("<unnamed>"),
            bytes.len()
        );
        let text = decode_upload(file_name.as_deref(), &bytes)?;
        return run_analysis(&state, text).await.map(Json);
    }

    Err(AppError::UnprocessableEntity(
        "no analyzable text: multipart body has no 'file' field".to_string(),
    ))
}

/// POST /api/v1/drafts/export
///
/// Serializes an optimized draft to plain text as a downloadable attachment.
pub async fn handle_export_draft(Json(draft): Json<OptimizedDraft>) -> impl IntoResponse {
    let body = render_plain_text(&draft);
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        body,
    )
}

/// Validates the text, waits out the configured delay, then runs the
/// CPU-bound pipeline on the blocking pool.
async fn run_analysis(state: &AppState, text: String) -> Result<AnalyzeResponse, AppError> {
    validate_text(&text, state.config.max_input_chars)?;

    if state.config.analysis_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.config.analysis_delay_ms)).await;
    }

    let jitter = state.jitter.clone();
    let (analysis, optimized_draft) =
        tokio::task::spawn_blocking(move || analyze(&text, jitter.as_ref()))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in analysis: {e}")))?;

    Ok(AnalyzeResponse {
        grade: ScoreReport::from(&analysis.scores),
        analysis,
        optimized_draft,
        analyzed_at: Utc::now(),
    })
}
