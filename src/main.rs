use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_shared::ServerConfig;
use patient_service::infrastructure::repositories::InMemoryPatientRepository;
use products::ProductsController;

/// Runs the product catalog and patient registration APIs side by side.
#[derive(Parser, Debug)]
#[command(name = "demo-run")]
#[command(about = "Product catalog and patient registration demo APIs")]
struct Cli {
    /// Bind address for the product API
    #[arg(long, env = "PRODUCT_API_ADDR")]
    product_addr: Option<String>,
    /// Bind address for the patient API
    #[arg(long, env = "PATIENT_API_ADDR")]
    patient_addr: Option<String>,
}

/// Main entry point for the demo application
///
/// Starts both HTTP servers concurrently:
/// - product API on port 5000 (configurable via `PRODUCT_API_ADDR` / `--product-addr`)
/// - patient API on port 5001 (configurable via `PATIENT_API_ADDR` / `--patient-addr`)
///
/// # Returns
/// * `Ok(())` - If servers start and run successfully
/// * `Err(anyhow::Error)` - If server startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("demo_run=info".parse()?)
                .add_directive("products=info".parse()?)
                .add_directive("patient_service=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let cfg = ServerConfig::from_values(cli.product_addr, cli.patient_addr)?;

    tracing::info!("++ Starting Product API on {}", cfg.product_addr());
    tracing::info!("++ Starting Patient API on {}", cfg.patient_addr());

    let product_app = products::router(Arc::new(ProductsController::default()));
    let patient_app = patient_service::api::routes::router(patient_service::compose(Arc::new(
        InMemoryPatientRepository::new(),
    )));

    let (product_result, patient_result) = tokio::join!(
        serve(cfg.product_addr(), product_app),
        serve(cfg.patient_addr(), patient_app),
    );
    product_result?;
    patient_result?;

    Ok(())
}

async fn serve(addr: SocketAddr, app: axum::Router) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
