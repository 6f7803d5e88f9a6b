// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
///
/// Every failure is detected before any state mutation, so a non-success
/// response never leaves a partial write behind.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required field is missing or empty.
    #[error("{0}")]
    Validation(String),

    /// Age, height or weight failed to parse.
    #[error("Invalid numeric values")]
    InvalidNumeric,

    /// Username is already registered.
    #[error("Username already exists")]
    Conflict,

    /// Unknown username or wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Workout duration is unparseable or not positive.
    #[error("Duration must be a positive number")]
    InvalidDuration,

    /// Protected resource hit without a session.
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON failure body. `success` is always false here; handlers build their
/// own success payloads.
#[derive(Serialize)]
struct FailureResponse {
    success: bool,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_)
            | AppError::InvalidNumeric
            | AppError::Conflict
            | AppError::InvalidDuration => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            // Browser-driven flow: send the client to the login page
            // instead of answering with a JSON error.
            AppError::Unauthenticated => return Redirect::to("/login").into_response(),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = FailureResponse {
            success: false,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
