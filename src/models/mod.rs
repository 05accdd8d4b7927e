// Wallet and ingestion record rows as stored
// Report rows returned by the latest-ingestion query

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wallet {
    pub id: i64,
    pub address: String,
}

/// One immutable snapshot of a fetched payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestionRecord {
    pub id: i64,
    pub wallet_id: i64,
    pub payload: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub address: String,
    pub latest_created_at: Option<DateTime<Utc>>,
}
