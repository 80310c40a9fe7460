//! Axum route handlers for the Scoring API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::scoring::report::{ScoreReport, ScoreStatus};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummaryResponse {
    pub percentage: u32,
    pub status: ScoreStatus,
    pub summary: String,
    pub suggestion_count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/score
///
/// Scores a resume snapshot and returns the full category breakdown.
pub async fn handle_score(
    State(state): State<AppState>,
    payload: Result<Json<Resume>, JsonRejection>,
) -> Result<Json<ScoreReport>, AppError> {
    let resume = accept_resume(payload)?;
    let report = state.scorer.score(&resume);

    info!(
        backend = state.scorer.backend(),
        percentage = report.percentage,
        "Resume scored"
    );

    Ok(Json(report))
}

/// POST /api/v1/resumes/score/summary
///
/// Headline figures only, for the collapsed score card.
pub async fn handle_score_summary(
    State(state): State<AppState>,
    payload: Result<Json<Resume>, JsonRejection>,
) -> Result<Json<ScoreSummaryResponse>, AppError> {
    let resume = accept_resume(payload)?;
    let report = state.scorer.score(&resume);

    Ok(Json(ScoreSummaryResponse {
        percentage: report.percentage,
        status: report.status,
        summary: report.summary(),
        suggestion_count: report.suggestion_count,
    }))
}

/// Unwraps the JSON body and applies boundary validation.
pub(crate) fn accept_resume(
    payload: Result<Json<Resume>, JsonRejection>,
) -> Result<Resume, AppError> {
    let Json(resume) = payload.map_err(rejection_to_error)?;
    resume.validate()?;
    Ok(resume)
}

/// Malformed JSON is a 422; anything else (size limit, content type)
/// keeps the status the extractor chose.
fn rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
            AppError::UnprocessableEntity(rejection.body_text())
        }
        other => {
            warn!(
                status = %other.status(),
                "Rejected resume body: {}",
                other.body_text()
            );
            AppError::Rejected {
                status: other.status(),
                message: other.body_text(),
            }
        }
    }
}
