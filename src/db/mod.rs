pub mod address;
pub mod connection;
pub mod migration;
pub mod record;

pub use connection::Storage;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to open storage: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Schema bootstrap failed: {0}")]
    Bootstrap(#[source] sqlx::Error),

    #[error("Storage query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("Stored timestamp {0} is out of range")]
    InvalidTimestamp(i64),
}

pub const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS address (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        address TEXT NOT NULL UNIQUE CHECK (length(address) > 0)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS ingestion_record (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        payload TEXT NOT NULL,
        created_at INTEGER NOT NULL,
        address_id INTEGER NOT NULL,
        FOREIGN KEY (address_id) REFERENCES address(id)
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_ingestion_record_address_time
    ON ingestion_record(address_id, created_at)
    "#,
];
