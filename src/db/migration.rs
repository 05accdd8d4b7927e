use crate::db::{StorageError, SCHEMA};
use sqlx::SqlitePool;
use tracing::{debug, info};

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    info!("Running database migrations...");

    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(StorageError::Bootstrap)?;
    }

    info!("Database migrations completed successfully");
    Ok(())
}

/// Inserts each seed address once. Returns how many rows were actually added.
pub async fn seed_wallets(pool: &SqlitePool, seeds: &[String]) -> Result<u64, StorageError> {
    let mut tx = pool.begin().await.map_err(StorageError::Bootstrap)?;
    let mut inserted = 0;

    for address in seeds {
        let result = sqlx::query("INSERT INTO address (address) VALUES (?) ON CONFLICT(address) DO NOTHING")
            .bind(address)
            .execute(&mut *tx)
            .await
            .map_err(StorageError::Bootstrap)?;

        if result.rows_affected() == 0 {
            debug!(address = %address, "Seed address already present, skipped");
        }
        inserted += result.rows_affected();
    }

    tx.commit().await.map_err(StorageError::Bootstrap)?;

    Ok(inserted)
}
