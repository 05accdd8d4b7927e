// Initialize logging
// Load configuration
// Open storage (bootstraps on first start)
// Start the ingestion scheduler
// Start HTTP server

use portfolio_data_service::{
    api, config::Config, db::Storage, fetcher::PortfolioClient, ingest::Scheduler, state::AppState,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().compact().with_target(false))
        .init();

    info!("Starting portfolio-data-service");

    let config = Config::from_env()?;
    info!(
        listen_addr = %config.listen_addr(),
        poll_interval_secs = config.poll_interval.as_secs(),
        storage_path = %config.storage_path.display(),
        seed_wallets = config.seed_addresses.len(),
        failure_policy = %config.failure_policy,
        "Configuration loaded"
    );

    let storage = Storage::open(&config.storage_path, &config.seed_addresses).await?;
    info!("Storage ready");

    let fetcher = Arc::new(PortfolioClient::new(&config));
    let app_state = Arc::new(AppState::new(config.clone(), storage, fetcher));

    // Nothing cancels this token; the process runs until it is killed
    let shutdown = CancellationToken::new();
    let _scheduler = Scheduler::new(config.poll_interval).spawn(app_state.clone(), shutdown.clone());
    info!("Ingestion scheduler started");

    let app = api::create_router(app_state);
    let listener = TcpListener::bind(config.listen_addr()).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
