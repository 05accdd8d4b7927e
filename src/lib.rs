pub mod api;
pub mod config;
pub mod db;
pub mod fetcher;
pub mod ingest;
pub mod models;
pub mod policy;
pub mod state;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export specific items for convenience
pub use api::{create_router, ApiError};
pub use config::{Config, ConfigError};
pub use db::{Storage, StorageError};
pub use fetcher::{FetchError, Fetcher, PortfolioClient};
pub use ingest::{run_sweep, Scheduler, SchedulerHandle, SchedulerState, SweepError, SweepSummary};
pub use models::{IngestionRecord, ReportRow, Wallet};
pub use policy::FailurePolicy;
pub use state::AppState;
pub use validation::validate_wallet_address;
