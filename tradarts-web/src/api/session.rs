//! Session endpoints
//!
//! Every endpoint answers with the resulting session state:
//! `{"status": "loggedIn", "user": {...}}` or `{"status": "loggedOut"}`.

use axum::{extract::State, Json};
use tradarts_common::models::ProfileUpdate;

use crate::error::ApiError;
use crate::session::{Credentials, Registration, SessionState};
use crate::AppState;

/// GET /api/session
pub async fn get_session(State(state): State<AppState>) -> Json<SessionState> {
    Json(state.session.state().await)
}

/// POST /api/session/login
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<SessionState>, ApiError> {
    let user = state.session.login(credentials).await?;
    Ok(Json(SessionState::LoggedIn(user)))
}

/// POST /api/session/register
pub async fn register(
    State(state): State<AppState>,
    Json(registration): Json<Registration>,
) -> Result<Json<SessionState>, ApiError> {
    let user = state.session.register(registration).await?;
    Ok(Json(SessionState::LoggedIn(user)))
}

/// POST /api/session/logout
pub async fn logout(State(state): State<AppState>) -> Result<Json<SessionState>, ApiError> {
    state.session.logout().await?;
    Ok(Json(SessionState::LoggedOut))
}

/// PUT /api/session/profile
pub async fn update_profile(
    State(state): State<AppState>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<SessionState>, ApiError> {
    let user = state.session.update_profile(update).await?;
    Ok(Json(SessionState::LoggedIn(user)))
}
