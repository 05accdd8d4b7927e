// Run a single ingestion sweep against the configured store
// and print the resulting report, one JSON object per wallet

use portfolio_data_service::{
    config::Config, db::Storage, fetcher::PortfolioClient, ingest::run_sweep,
};
use tracing::Level;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = Config::from_env()?;
    let storage = Storage::open(&config.storage_path, &config.seed_addresses).await?;
    let client = PortfolioClient::new(&config);

    let summary = run_sweep(&storage, &client).await?;
    eprintln!(
        "Stored {} records for {} wallets",
        summary.records, summary.wallets
    );

    for row in storage.latest_report().await? {
        println!("{}", serde_json::to_string(&row)?);
    }

    storage.close().await;
    Ok(())
}
