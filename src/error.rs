/*
 * Responsibility
 * - Application-wide AppError definition
 * - IntoResponse impl (HTTP status / JSON {"detail": ...} body)
 * - Collapse repo errors into Internal
 *
 * Notes
 * - Authentication failures are deliberately a single variant: handlers and
 *   middleware never surface WHY a credential was rejected. The concrete
 *   cause goes to the log (tracing::warn!) at the point of failure.
 */
use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::repos::error::RepoError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// No valid identity could be established. Always rendered as the same
    /// 401 body regardless of cause (bad token, missing subject, no such user).
    #[error("could not validate credentials")]
    Unauthenticated,

    /// Valid identity, insufficient privilege (or inactive account).
    #[error("forbidden: {0}")]
    Forbidden(&'static str),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(ErrorResponse {
                    detail: "Could not validate credentials".to_string(),
                }),
            )
                .into_response(),
            AppError::Forbidden(reason) => (
                StatusCode::FORBIDDEN,
                Json(ErrorResponse {
                    detail: reason.to_string(),
                }),
            )
                .into_response(),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    detail: format!("{resource} not found"),
                }),
            )
                .into_response(),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: "Internal server error".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Db(_) => AppError::Internal,
        }
    }
}
