//! Challenge run endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::challenge::{AnswerResult, ChallengeError, RunSnapshot};
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    /// Zero-based option index
    pub option: usize,
}

#[derive(Debug, Serialize)]
pub struct CompletedResponse {
    pub challenges: Vec<String>,
}

/// POST /api/challenges/:id/runs
pub async fn create_run(
    State(state): State<AppState>,
    Path(challenge_id): Path<String>,
) -> Result<(StatusCode, Json<RunSnapshot>), ApiError> {
    let challenge = state
        .catalog
        .challenge(&challenge_id)
        .ok_or(ChallengeError::ChallengeNotFound(challenge_id))?;

    let run = state.runs.create(challenge).await;
    Ok((StatusCode::CREATED, Json(run)))
}

/// GET /api/challenges/completed
pub async fn completed_challenges(State(state): State<AppState>) -> Json<CompletedResponse> {
    Json(CompletedResponse {
        challenges: state.runs.completed_challenges().await,
    })
}

/// GET /api/runs/:run_id
pub async fn get_run(
    State(state): State<AppState>,
    Path(run_id): Path<Uuid>,
) -> Result<Json<RunSnapshot>, ApiError> {
    Ok(Json(state.runs.get(run_id).await?))
}

/// POST /api/runs/:run_id/start
pub async fn start_run(
    State(state): State<AppState>,
    Path(run_id): Path<Uuid>,
) -> Result<Json<RunSnapshot>, ApiError> {
    Ok(Json(state.runs.start(run_id).await?))
}

/// POST /api/runs/:run_id/answer
pub async fn answer_run(
    State(state): State<AppState>,
    Path(run_id): Path<Uuid>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<AnswerResult>, ApiError> {
    Ok(Json(state.runs.answer(run_id, request.option).await?))
}

/// DELETE /api/runs/:run_id
pub async fn abandon_run(
    State(state): State<AppState>,
    Path(run_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.runs.abandon(run_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
