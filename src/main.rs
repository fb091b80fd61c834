//! Case tutor service - main entry point.
//!
//! This binary reads configuration from the environment, initializes logging,
//! and runs the HTTP server.

use anyhow::Result;
use case_tutor::{api, AppConfig, AppState};
use chrono::Local;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Custom time formatter that uses local timezone (respects TZ environment variable)
struct LocalTime;

impl tracing_subscriber::fmt::time::FormatTime for LocalTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        let now = Local::now();
        write!(w, "{}", now.format("%Y-%m-%d %H:%M:%S"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before reading any environment variables)
    dotenvy::dotenv().ok();

    // Check if NO_COLOR is set (for file logging without ANSI codes)
    let no_color = std::env::var("NO_COLOR").is_ok();

    // Default filter: info for most crates, debug for this one. Noise
    // suppression for hyper/h2/reqwest is always appended so that a plain
    // RUST_LOG=debug does not flood the output with transfer-level logs.
    let base_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,case_tutor=debug".to_string());
    let filter_str = format!("{},hyper=warn,h2=warn,reqwest=warn", base_filter);
    let filter = tracing_subscriber::EnvFilter::new(filter_str);

    if no_color {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_timer(LocalTime)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_timer(LocalTime))
            .init();
    }

    let config = AppConfig::from_env();

    if config.mistral.api_key.is_empty() {
        tracing::warn!(
            "MISTRAL_API_KEY is not set; generation requests will fail at the provider"
        );
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let state = Arc::new(AppState { config });
    let app = api::router(state);

    tracing::info!("Starting case tutor service on {}", addr);
    tracing::info!("Exercise endpoint: POST /api/mistral");
    tracing::info!("Health endpoint: GET /health");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
