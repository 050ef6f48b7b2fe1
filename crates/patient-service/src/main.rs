//! Standalone patient registration server binary.
//!
//! ## Purpose
//! Runs the patient API on its own. The workspace's `demo-run` binary runs this together with
//! the product API.

use api_shared::config::{addr_from_env_value, DEFAULT_PATIENT_API_ADDR};
use patient_service::{
    api::routes::router, compose, infrastructure::repositories::InMemoryPatientRepository,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the patient API server
///
/// # Environment Variables
/// - `PATIENT_API_ADDR`: Server address (default: "0.0.0.0:5001")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the server address is invalid or cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("patient_service=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = addr_from_env_value(
        "PATIENT_API_ADDR",
        std::env::var("PATIENT_API_ADDR").ok(),
        DEFAULT_PATIENT_API_ADDR,
    )?;

    tracing::info!("-- Starting Patient API on {}", addr);

    let app = router(compose(Arc::new(InMemoryPatientRepository::new())));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
