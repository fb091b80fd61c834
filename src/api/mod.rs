//! API layer for the case tutor service.
//!
//! This module contains the HTTP handlers, the request/response models, and
//! the router assembly.

pub mod handlers;
pub mod models;

// Re-export commonly used types
pub use handlers::{generate_exercise, health, AppState};
pub use models::{CaseOption, Exercise, ExerciseRequest, HealthResponse, RussianCase};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router.
///
/// Unmatched paths get axum's default 404 response.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/mistral", post(generate_exercise))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
