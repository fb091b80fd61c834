//! Case Tutor - a Russian grammar exercise service backed by Mistral
//!
//! This library implements a small HTTP service that generates Russian
//! grammatical-case quiz exercises for French-speaking learners. Each inbound
//! request forwards the caller's prompt to the Mistral chat-completions API
//! with a schema-constrained response format and returns the validated
//! exercise JSON.
//!
//! # Architecture
//!
//! The codebase is organized into three layers:
//!
//! - [`core`]: configuration, error handling, request-scoped logging
//! - [`api`]: router, HTTP handlers, and request/response models
//! - [`services`]: the Mistral client and its structured-output contract
//!
//! # Configuration
//!
//! All settings are environment variables with defaults:
//! - `MISTRAL_API_KEY`: provider API key (empty by default; a missing key
//!   fails at call time, not at startup)
//! - `MISTRAL_API_BASE`: provider base URL (default: https://api.mistral.ai/v1)
//! - `MISTRAL_MODEL`: model identifier (default: mistral-small-2501)
//! - `HOST` / `PORT`: bind address (default: 0.0.0.0:8080)
//! - `REQUEST_TIMEOUT_SECS`: upstream timeout in seconds (default: 120)

pub mod api;
pub mod core;
pub mod services;

// Re-export commonly used types for convenience
pub use api::{router, AppState, Exercise};
pub use core::{AppConfig, AppError, Result};
pub use services::MistralClient;
