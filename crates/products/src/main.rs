//! Standalone product catalog server binary.
//!
//! ## Purpose
//! Runs the product API on its own. The workspace's `demo-run` binary runs this together with
//! the patient API.

use api_shared::config::{addr_from_env_value, DEFAULT_PRODUCT_API_ADDR};
use products::{router, ProductsController};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the product API server
///
/// # Environment Variables
/// - `PRODUCT_API_ADDR`: Server address (default: "0.0.0.0:5000")
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
                .add_directive("products=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = addr_from_env_value(
        "PRODUCT_API_ADDR",
        std::env::var("PRODUCT_API_ADDR").ok(),
        DEFAULT_PRODUCT_API_ADDR,
    )?;

    tracing::info!("-- Starting Product API on {}", addr);

    let app = router(Arc::new(ProductsController::default()));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
