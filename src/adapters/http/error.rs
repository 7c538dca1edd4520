//! Error bodies and domain error mapping shared by all endpoints.
//!
//! Every failure is rendered as `{"error": {"code": ..., "message": ...}}`.

use std::fmt;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::pull_request::PullRequestError;
use crate::domain::team::TeamError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new("INVALID_REQUEST", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn internal() -> Self {
        Self::new("INTERNAL_ERROR", "internal server error")
    }
}

/// Renders an error body, logging server faults at `error` and client
/// faults at `debug`.
pub fn error_response(status: StatusCode, body: ErrorResponse) -> Response {
    if status.is_server_error() {
        tracing::error!(status = %status, code = %body.error.code, "request failed");
    } else {
        tracing::debug!(
            status = %status,
            code = %body.error.code,
            message = %body.error.message,
            "request rejected"
        );
    }
    (status, Json(body)).into_response()
}

/// 400 for malformed input, such as an empty identifier.
pub fn invalid_request(reason: impl fmt::Display) -> Response {
    error_response(
        StatusCode::BAD_REQUEST,
        ErrorResponse::invalid_request(reason.to_string()),
    )
}

pub fn json_rejection(rejection: JsonRejection) -> Response {
    invalid_request(rejection.body_text())
}

pub fn query_rejection(rejection: QueryRejection) -> Response {
    invalid_request(rejection.body_text())
}

/// 500 with a generic body; the detail goes to the log only.
fn internal_error(detail: &str) -> Response {
    let body = ErrorResponse::internal();
    tracing::error!(
        status = %StatusCode::INTERNAL_SERVER_ERROR,
        code = %body.error.code,
        error = %detail,
        "request failed"
    );
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

pub fn handle_team_error(error: TeamError) -> Response {
    match error {
        TeamError::AlreadyExists(_) => error_response(
            StatusCode::CONFLICT,
            ErrorResponse::new("TEAM_EXISTS", error.message()),
        ),
        TeamError::NotFound(_) | TeamError::UserNotFound(_) => error_response(
            StatusCode::NOT_FOUND,
            ErrorResponse::not_found(error.message()),
        ),
        TeamError::ValidationFailed { .. } => error_response(
            StatusCode::BAD_REQUEST,
            ErrorResponse::invalid_request(error.message()),
        ),
        TeamError::Infrastructure(msg) => internal_error(&msg),
    }
}

pub fn handle_pull_request_error(error: PullRequestError) -> Response {
    match error {
        PullRequestError::AuthorNotFound(_) | PullRequestError::NotFound(_) => error_response(
            StatusCode::NOT_FOUND,
            ErrorResponse::not_found(error.message()),
        ),
        PullRequestError::AlreadyExists(_) => error_response(
            StatusCode::CONFLICT,
            ErrorResponse::new("PR_EXISTS", error.message()),
        ),
        PullRequestError::Merged(_) => error_response(
            StatusCode::CONFLICT,
            ErrorResponse::new("PR_MERGED", error.message()),
        ),
        PullRequestError::ReviewerNotAssigned { .. } => error_response(
            StatusCode::CONFLICT,
            ErrorResponse::new("NOT_ASSIGNED", error.message()),
        ),
        PullRequestError::NoCandidates(_) => error_response(
            StatusCode::CONFLICT,
            ErrorResponse::new("NO_CANDIDATE", error.message()),
        ),
        PullRequestError::ValidationFailed { .. } => error_response(
            StatusCode::BAD_REQUEST,
            ErrorResponse::invalid_request(error.message()),
        ),
        PullRequestError::Infrastructure(msg) => internal_error(&msg),
    }
}
