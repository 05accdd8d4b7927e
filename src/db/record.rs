// Append-only ingestion records and the latest-ingestion report
// created_at is stored as unix milliseconds

use crate::db::{Storage, StorageError};
use crate::models::{IngestionRecord, ReportRow};
use chrono::{DateTime, Utc};
use sqlx::Row;

fn from_millis(millis: i64) -> Result<DateTime<Utc>, StorageError> {
    DateTime::from_timestamp_millis(millis).ok_or(StorageError::InvalidTimestamp(millis))
}

impl Storage {
    /// Inserts one immutable record and returns its id.
    pub async fn append_record(
        &self,
        wallet_id: i64,
        payload: &str,
        created_at: DateTime<Utc>,
    ) -> Result<i64, StorageError> {
        let result = sqlx::query(
            "INSERT INTO ingestion_record (payload, created_at, address_id) VALUES (?, ?, ?)",
        )
        .bind(payload)
        .bind(created_at.timestamp_millis())
        .bind(wallet_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub(crate) async fn records_for(&self, wallet_id: i64) -> Result<Vec<IngestionRecord>, StorageError> {
        let rows = sqlx::query(
            "SELECT id, address_id, payload, created_at
             FROM ingestion_record
             WHERE address_id = ?
             ORDER BY id ASC",
        )
        .bind(wallet_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> Result<IngestionRecord, StorageError> {
                Ok(IngestionRecord {
                    id: row.get("id"),
                    wallet_id: row.get("address_id"),
                    payload: row.get("payload"),
                    created_at: from_millis(row.get("created_at"))?,
                })
            })
            .collect()
    }

    pub async fn count_records(&self) -> Result<i64, StorageError> {
        let count = sqlx::query("SELECT COUNT(*) FROM ingestion_record")
            .fetch_one(&self.pool)
            .await?
            .get::<i64, _>(0);

        Ok(count)
    }

    pub async fn count_records_for(&self, wallet_id: i64) -> Result<i64, StorageError> {
        let count = sqlx::query("SELECT COUNT(*) FROM ingestion_record WHERE address_id = ?")
            .bind(wallet_id)
            .fetch_one(&self.pool)
            .await?
            .get::<i64, _>(0);

        Ok(count)
    }

    /// One row per wallet with its newest record time, `None` if it has never been ingested.
    pub async fn latest_report(&self) -> Result<Vec<ReportRow>, StorageError> {
        let rows = sqlx::query(
            "SELECT a.address AS address, MAX(r.created_at) AS latest
             FROM address AS a
             LEFT JOIN ingestion_record AS r ON a.id = r.address_id
             GROUP BY a.id
             ORDER BY a.id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> Result<ReportRow, StorageError> {
                let latest: Option<i64> = row.get("latest");
                Ok(ReportRow {
                    address: row.get("address"),
                    latest_created_at: latest.map(from_millis).transpose()?,
                })
            })
            .collect()
    }
}
