// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Strava answered with a non-success status.
    #[error("Strava API error: HTTP {status}: {body}")]
    RemoteApi { status: u16, body: String },

    /// Strava answered 2xx but the body was not an activity array.
    #[error("Malformed Strava response: {0}")]
    MalformedResponse(String),

    #[error("Strava request failed: {0}")]
    Transport(String),

    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether the remote API rejected our bearer token.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, AppError::RemoteApi { status: 401 | 403, .. })
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::RemoteApi { status, body } => {
                if self.is_auth_error() {
                    tracing::warn!(
                        status,
                        "Strava rejected the access token; check STRAVA_ACCESS_TOKEN"
                    );
                }
                tracing::error!(status, body = %body, "Strava API error");
                (
                    StatusCode::BAD_GATEWAY,
                    "strava_error",
                    Some(format!("HTTP {}: {}", status, body)),
                )
            }
            AppError::MalformedResponse(msg) => {
                tracing::error!(error = %msg, "Malformed Strava response");
                (
                    StatusCode::BAD_GATEWAY,
                    "malformed_response",
                    Some(msg.clone()),
                )
            }
            AppError::Transport(msg) => {
                tracing::error!(error = %msg, "Strava request failed");
                (StatusCode::BAD_GATEWAY, "strava_unreachable", Some(msg.clone()))
            }
            AppError::Fixture(msg) => {
                tracing::error!(error = %msg, "Fixture error");
                (StatusCode::INTERNAL_SERVER_ERROR, "fixture_error", None)
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
