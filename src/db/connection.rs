// SQLite handle for wallets and ingestion records
// First start (no database file yet) creates the file, schema and seed wallets
// A first start that fails part way removes the file again so the next open re-seeds

use crate::db::{migration, StorageError};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use sqlx::SqlitePool;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Shared storage handle. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct Storage {
    pub(crate) pool: SqlitePool,
}

impl Storage {
    /// Opens the store at `storage_path`, bootstrapping it if the file does not exist yet.
    /// `seeds` is only consulted on that first start.
    pub async fn open(storage_path: &Path, seeds: &[String]) -> Result<Self, StorageError> {
        let first_start = !storage_path.exists();
        if first_start {
            info!(path = %storage_path.display(), "No existing store found, creating one");
        }

        let options = SqliteConnectOptions::new()
            .filename(storage_path)
            .create_if_missing(first_start)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(StorageError::Connect)?;

        if !first_start {
            migration::run_migrations(&pool).await?;
            return Ok(Self { pool });
        }

        match bootstrap(&pool, seeds).await {
            Ok(seeded) => {
                info!(seeded, "Seed wallets inserted");
                Ok(Self { pool })
            }
            Err(e) => {
                pool.close().await;
                discard_store(storage_path);
                Err(e)
            }
        }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

async fn bootstrap(pool: &SqlitePool, seeds: &[String]) -> Result<u64, StorageError> {
    migration::run_migrations(pool).await?;
    migration::seed_wallets(pool, seeds).await
}

fn sidecar(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

fn discard_store(path: &Path) {
    for file in [path.to_path_buf(), sidecar(path, "-wal"), sidecar(path, "-shm")] {
        match std::fs::remove_file(&file) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %file.display(), error = %e, "Failed to remove half-bootstrapped store"),
        }
    }
}
