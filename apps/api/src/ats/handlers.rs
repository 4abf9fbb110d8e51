//! Axum route handlers for the ATS API.

use anyhow::Context;
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::ats::{AtsAnalysis, ResumeAnalyzer, StructuredResume};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    #[serde(default)]
    pub target_role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeStructuredRequest {
    pub resume: StructuredResume,
    #[serde(default)]
    pub target_role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BatchAnalyzeRequest {
    pub resumes: Vec<AnalyzeRequest>,
}

/// Envelope around one analysis. Id and timestamp live here, never in the
/// analysis itself, so the analysis stays reproducible.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub scorer_backend: String,
    pub analysis: AtsAnalysis,
}

#[derive(Debug, Serialize)]
pub struct BatchAnalysisResponse {
    pub results: Vec<AnalysisResponse>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/analyze
///
/// Scores already-extracted resume text against an optional target role.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    validate_resume_text(&request.resume_text, state.config.max_resume_chars)?;

    let response = run_analysis(
        state.analyzer.as_ref(),
        &request.resume_text,
        request.target_role.as_deref(),
    )
    .await?;

    info!(
        analysis_id = %response.analysis_id,
        overall_score = response.analysis.overall_score,
        "resume analyzed"
    );
    Ok(Json(response))
}

/// POST /api/v1/ats/analyze/structured
///
/// Scores resume-parser output. Fields are rendered to text and go through
/// the same scorer as plain uploads.
pub async fn handle_analyze_structured(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeStructuredRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let text = request.resume.to_plain_text();
    if text.trim().is_empty() {
        return Err(AppError::Validation("resume contains no content to analyze".to_string()));
    }
    validate_resume_text(&text, state.config.max_resume_chars)?;

    let response = run_analysis(
        state.analyzer.as_ref(),
        &text,
        request.target_role.as_deref(),
    )
    .await?;

    info!(
        analysis_id = %response.analysis_id,
        overall_score = response.analysis.overall_score,
        "structured resume analyzed"
    );
    Ok(Json(response))
}

/// POST /api/v1/ats/analyze/batch
///
/// Scores several resumes concurrently. Results keep request order.
pub async fn handle_analyze_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchAnalyzeRequest>,
) -> Result<Json<BatchAnalysisResponse>, AppError> {
    if request.resumes.is_empty() {
        return Err(AppError::Validation("resumes cannot be empty".to_string()));
    }
    if request.resumes.len() > state.config.max_batch_size {
        return Err(AppError::Validation(format!(
            "batch of {} exceeds the limit of {} resumes",
            request.resumes.len(),
            state.config.max_batch_size
        )));
    }
    for (idx, item) in request.resumes.iter().enumerate() {
        validate_resume_text(&item.resume_text, state.config.max_resume_chars).map_err(|e| {
            warn!(index = idx, "rejecting batch: {e}");
            e
        })?;
    }

    let handles: Vec<_> = request
        .resumes
        .into_iter()
        .map(|item| {
            let analyzer = state.analyzer.clone();
            tokio::spawn(async move {
                run_analysis(
                    analyzer.as_ref(),
                    &item.resume_text,
                    item.target_role.as_deref(),
                )
                .await
            })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let response = handle.await.context("batch scoring task failed")??;
        results.push(response);
    }

    info!(count = results.len(), "resume batch analyzed");
    Ok(Json(BatchAnalysisResponse { results }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn validate_resume_text(text: &str, max_chars: usize) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    let chars = text.chars().count();
    if chars > max_chars {
        return Err(AppError::PayloadTooLarge(format!(
            "resume_text has {chars} characters; the limit is {max_chars}"
        )));
    }
    Ok(())
}

async fn run_analysis(
    analyzer: &dyn ResumeAnalyzer,
    resume_text: &str,
    target_role: Option<&str>,
) -> Result<AnalysisResponse, AppError> {
    let analysis = analyzer.analyze(resume_text, target_role).await?;
    Ok(AnalysisResponse {
        analysis_id: Uuid::new_v4(),
        analyzed_at: Utc::now(),
        scorer_backend: analyzer.backend().to_string(),
        analysis,
    })
}
