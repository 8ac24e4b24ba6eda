//! HTTP error responses
//!
//! Every failure is rendered as `{"error": "<message>"}` with a status code
//! chosen by the error's kind.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tradarts_common::models::ParseEnumError;
use tracing::error;

use crate::challenge::ChallengeError;
use crate::session::SessionError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

impl From<SessionError> for ApiError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::NotLoggedIn => ApiError::Unauthorized(e.to_string()),
            SessionError::Storage(_) => ApiError::Internal(e.to_string()),
            SessionError::MissingCredentials
            | SessionError::MissingFields
            | SessionError::PasswordTooShort
            | SessionError::InvalidEmail
            | SessionError::InvalidPhone => ApiError::BadRequest(e.to_string()),
        }
    }
}

impl From<ChallengeError> for ApiError {
    fn from(e: ChallengeError) -> Self {
        match e {
            ChallengeError::ChallengeNotFound(_) | ChallengeError::RunNotFound(_) => {
                ApiError::NotFound(e.to_string())
            }
            ChallengeError::InvalidOption(_) => ApiError::BadRequest(e.to_string()),
            ChallengeError::NotStarted
            | ChallengeError::AlreadyStarted
            | ChallengeError::AlreadyComplete
            | ChallengeError::TimeExpired => ApiError::Conflict(e.to_string()),
        }
    }
}

impl From<ParseEnumError> for ApiError {
    fn from(e: ParseEnumError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(SessionError::PasswordTooShort).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(SessionError::NotLoggedIn).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(ChallengeError::TimeExpired).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(ChallengeError::ChallengeNotFound("x".into())).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_message_passthrough() {
        let err = ApiError::from(SessionError::MissingCredentials);
        assert_eq!(err.to_string(), "Email and password are required");
    }
}
