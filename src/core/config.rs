//! Configuration management for the case tutor service.
//!
//! All configuration comes from the process environment (with optional `.env`
//! support handled by the binary entrypoint). Every setting has a default, so
//! loading never fails. The Mistral API key is deliberately not validated at
//! startup: a missing key surfaces as an upstream authentication error when a
//! generation call is attempted.

use std::env;

/// Sampling temperature sent with every generation request. High on purpose:
/// exercises should vary between calls with the same prompt.
pub const SAMPLING_TEMPERATURE: f32 = 2.0;

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server configuration (host, port)
    pub server: ServerConfig,

    /// Upstream Mistral configuration
    pub mistral: MistralConfig,
}

/// Server-specific configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Configuration for the upstream Mistral API.
#[derive(Debug, Clone)]
pub struct MistralConfig {
    /// API key for authentication. Empty when `MISTRAL_API_KEY` is unset.
    pub api_key: String,

    /// Base URL for the provider's API
    pub api_base: String,

    /// Model identifier
    pub model: String,

    /// Request timeout in seconds for upstream calls
    pub request_timeout_secs: u64,
}

impl Default for MistralConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: default_api_base(),
            model: default_model(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_api_base() -> String {
    "https://api.mistral.ai/v1".to_string()
}

fn default_model() -> String {
    "mistral-small-2501".to_string()
}

fn default_request_timeout() -> u64 {
    120
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `HOST`, `PORT`, `MISTRAL_API_KEY`,
    /// `MISTRAL_API_BASE`, `MISTRAL_MODEL`, `REQUEST_TIMEOUT_SECS`.
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let server = ServerConfig {
            host: env::var("HOST").unwrap_or_else(|_| default_host()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or_else(default_port),
        };

        let mistral = MistralConfig {
            api_key: env::var("MISTRAL_API_KEY").unwrap_or_default(),
            api_base: env::var("MISTRAL_API_BASE").unwrap_or_else(|_| default_api_base()),
            model: env::var("MISTRAL_MODEL").unwrap_or_else(|_| default_model()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or_else(default_request_timeout),
        };

        Self { server, mistral }
    }
}
