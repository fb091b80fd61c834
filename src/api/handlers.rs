//! HTTP request handlers for the case tutor API.

use crate::api::models::{Exercise, ExerciseRequest, HealthResponse};
use crate::core::config::AppConfig;
use crate::core::error::{AppError, Result};
use crate::core::logging::{generate_request_id, REQUEST_ID};
use crate::services::MistralClient;
use axum::{extract::State, Json};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
}

/// Handle exercise generation requests.
///
/// Validates that a prompt was supplied, then performs a single generation
/// call against the configured Mistral model. The client is constructed per
/// request; the service keeps no connection state between requests.
#[tracing::instrument(
    skip(state, payload),
    fields(model = %state.config.mistral.model)
)]
pub async fn generate_exercise(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ExerciseRequest>,
) -> Result<Json<Exercise>> {
    let request_id = generate_request_id();

    REQUEST_ID.scope(request_id.clone(), async move {
        let prompt = match payload.prompt {
            Some(prompt) if !prompt.is_empty() => prompt,
            _ => return Err(AppError::MissingPrompt),
        };

        tracing::debug!(
            request_id = %request_id,
            prompt_len = prompt.len(),
            "Processing exercise request"
        );

        let client = MistralClient::new(&state.config.mistral)?;
        let exercise = client.generate(&prompt).await?;

        tracing::debug!(
            request_id = %request_id,
            word = %exercise.word,
            "Exercise generated"
        );

        Ok(Json(exercise))
    })
    .await
}

/// Basic health check endpoint.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.config.mistral.model.clone(),
    })
}
