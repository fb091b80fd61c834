//! Mistral chat-completions client with schema-constrained output.
//!
//! Speaks the OpenAI-compatible wire format of `api.mistral.ai`. The exercise
//! schema is attached as a `json_schema` response format, so the provider
//! both generates and enforces the shape; the parsed output is validated
//! again on our side before it reaches the caller.

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use crate::api::models::Exercise;
use crate::core::config::{MistralConfig, SAMPLING_TEMPERATURE};
use crate::core::error::{AppError, Result};
use crate::core::logging::get_request_id;

/// Fixed tutoring instruction sent as the system message.
///
/// The embedded JSON example duplicates [`exercise_schema`] by hand; the
/// schema in the response format remains the authoritative constraint.
pub const SYSTEM_PROMPT: &str = r#"
You are a language tutor teaching Russian to French students. For any user input, generate a JSON object with the following structure:
{
  "sentence": "<a Russian sentence>",
  "word": "<the preposition in the sentence>",
  "question": "Pourquoi la préposition '<word>' demande-t-elle le prépositionnel ?",
  "options": [
    { "case": "prepositional", "label": "Règle grammaticale fixe" },
    { "case": "dative", "label": "Pour indiquer le destinataire" },
    { "case": "accusative", "label": "Pour indiquer l'objet" },
    { "case": "genitive", "label": "Pour exprimer la possession" }
  ],
  "correct": <index of the correct option>,
  "explanation": "<short explanation in French>"
}
The output must be valid JSON and match the structure above. Use a random Russian sentence and preposition for each input."#;

/// JSON Schema for the exercise, sent to the provider as the generation
/// constraint. Mirrors [`Exercise`].
pub fn exercise_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "sentence": {
                "type": "string",
                "description": "a Russian sentence"
            },
            "word": {
                "type": "string",
                "description": "the preposition in the sentence"
            },
            "question": {
                "type": "string",
                "description": "question why the preposition requires prepositional case"
            },
            "options": {
                "type": "array",
                "minItems": 4,
                "maxItems": 4,
                "items": {
                    "type": "object",
                    "properties": {
                        "case": {
                            "type": "string",
                            "enum": ["prepositional", "dative", "accusative", "genitive"]
                        },
                        "label": { "type": "string" }
                    },
                    "required": ["case", "label"],
                    "additionalProperties": false
                }
            },
            "correct": {
                "type": "integer",
                "minimum": 0,
                "maximum": 3
            },
            "explanation": {
                "type": "string",
                "description": "short explanation in French"
            }
        },
        "required": ["sentence", "word", "question", "options", "correct", "explanation"],
        "additionalProperties": false
    })
}

/// Non-streaming chat completion response, reduced to the fields we read.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,

    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Token usage statistics.
#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// Client for a single generation call.
///
/// Built per request; holds no state beyond the configured reqwest client.
pub struct MistralClient {
    http: Client,
    config: MistralConfig,
}

impl MistralClient {
    /// Build a client with the configured upstream timeout.
    pub fn new(config: &MistralConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    /// Generate one exercise from the user prompt.
    ///
    /// Sends the fixed system prompt plus the user prompt with the exercise
    /// schema as a strict `json_schema` response format, then parses and
    /// validates the first choice's content.
    pub async fn generate(&self, prompt: &str) -> Result<Exercise> {
        let url = format!("{}/chat/completions", self.config.api_base);

        let payload = json!({
            "model": self.config.model,
            "temperature": SAMPLING_TEMPERATURE,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt }
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": "russian_case_exercise",
                    "strict": true,
                    "schema": exercise_schema()
                }
            }
        });

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    request_id = %get_request_id(),
                    url = %url,
                    error = %e,
                    is_timeout = e.is_timeout(),
                    is_connect = e.is_connect(),
                    "HTTP request failed to provider"
                );
                AppError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                request_id = %get_request_id(),
                status = status.as_u16(),
                "Provider returned an error status"
            );
            return Err(AppError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;

        if let Some(usage) = &completion.usage {
            tracing::debug!(
                request_id = %get_request_id(),
                model = %self.config.model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Token usage recorded"
            );
        }

        let content = completion
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| {
                AppError::MalformedOutput("completion contained no choices".to_string())
            })?;

        parse_exercise(content)
    }
}

/// Deserialize and validate the model's structured output.
fn parse_exercise(content: &str) -> Result<Exercise> {
    let exercise: Exercise = serde_json::from_str(content).map_err(|e| {
        AppError::MalformedOutput(format!(
            "response is not a valid exercise: {}. Content: {}",
            e,
            content.chars().take(200).collect::<String>()
        ))
    })?;

    exercise.validate().map_err(AppError::MalformedOutput)?;

    Ok(exercise)
}
