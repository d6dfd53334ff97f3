//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::analysis::analyzer::analyze_resume;
use crate::analysis::models::AnalysisResult;
use crate::analysis::upload::read_analyze_form;
use crate::charts::verdict::VerdictView;
use crate::charts::{MatchVerdict, ScoreGauge, SkillsChart};
use crate::errors::AppError;
use crate::extraction::{extract_text_blocking, looks_like_pdf};
use crate::notifier::{WebhookRecord, WebhookStatus};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub result: AnalysisResult,
    pub verdict: VerdictView,
    /// Plotly figure for the score gauge.
    pub gauge: Value,
    /// Plotly figure for matching vs missing skill counts.
    pub skills_chart: Value,
    pub webhook: WebhookStatus,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart form: `resume` (PDF) + `job_description` (text).
/// Extract → analyze → derive charts → notify webhook. The webhook is only
/// attempted after a successful analysis and its failure is not fatal.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = read_analyze_form(multipart).await?;

    let resume = form
        .resume
        .ok_or_else(|| AppError::Validation("Please upload a resume".to_string()))?;
    let job_description = form.job_description.unwrap_or_default();
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter job description".to_string(),
        ));
    }
    if !looks_like_pdf(
        resume.filename.as_deref(),
        resume.content_type.as_deref(),
        &resume.data,
    ) {
        return Err(AppError::Validation(
            "Resume must be a PDF file".to_string(),
        ));
    }

    let model = state.model.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable("GEMINI_API_KEY is not configured".to_string())
    })?;

    let analysis_id = Uuid::new_v4();
    info!(
        "Analysis {analysis_id}: resume {:?} ({} bytes)",
        resume.filename,
        resume.data.len()
    );

    let resume_text = extract_text_blocking(resume.data).await?;
    let result = analyze_resume(
        &resume_text,
        &job_description,
        model.as_ref(),
        state.config.identity_policy,
    )
    .await?;
    info!("Analysis {analysis_id}: score {}", result.score);

    let verdict = MatchVerdict::for_score(result.score).view();
    let gauge = ScoreGauge::for_score(result.score).figure();
    let skills_chart = SkillsChart::from_analysis(&result).figure();

    let outcome = state
        .notifier
        .send(&WebhookRecord::from_analysis(&result))
        .await;

    Ok(Json(AnalyzeResponse {
        analysis_id,
        analyzed_at: Utc::now(),
        result,
        verdict,
        gauge,
        skills_chart,
        webhook: outcome.status(),
    }))
}
