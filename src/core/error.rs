//! Error types and handling for the case tutor service.
//!
//! This module provides a unified error type [`AppError`] that wraps the
//! failure sources of a generation request and implements conversion to the
//! two wire-level error envelopes the API exposes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Main error type for the application.
///
/// All errors in the application should be converted to this type for
/// consistent handling.
#[derive(Error, Debug)]
pub enum AppError {
    /// Client sent a body without a usable prompt
    #[error("Prompt is required")]
    MissingPrompt,

    /// HTTP transport errors from the reqwest client (connect, timeout, TLS)
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Mistral API returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Provider output could not be coerced to the exercise schema
    #[error("invalid structured output: {0}")]
    MalformedOutput(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MissingPrompt => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Prompt is required" })),
            )
                .into_response(),
            // Everything else is a provider/model failure: one envelope, the
            // underlying message passed through verbatim as `details`.
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Mistral API error",
                    "details": other.to_string(),
                })),
            )
                .into_response(),
        }
    }
}

/// Convenience type alias for Results using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
