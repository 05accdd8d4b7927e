use crate::db::{Storage, StorageError};
use crate::models::Wallet;
use sqlx::Row;

impl Storage {
    /// All wallets in insertion order.
    pub async fn list_wallets(&self) -> Result<Vec<Wallet>, StorageError> {
        let rows = sqlx::query("SELECT id, address FROM address ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| Wallet {
                id: row.get("id"),
                address: row.get("address"),
            })
            .collect())
    }

    /// Returns `None` when the address is already tracked; the existing row is left alone.
    pub async fn insert_wallet(&self, address: &str) -> Result<Option<Wallet>, StorageError> {
        let row = sqlx::query(
            "INSERT INTO address (address) VALUES (?)
             ON CONFLICT(address) DO NOTHING
             RETURNING id",
        )
        .bind(address)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| Wallet {
            id: row.get("id"),
            address: address.to_string(),
        }))
    }

    pub(crate) async fn find_wallet(&self, address: &str) -> Result<Option<Wallet>, StorageError> {
        let row = sqlx::query("SELECT id, address FROM address WHERE address = ?")
            .bind(address)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| Wallet {
            id: row.get("id"),
            address: row.get("address"),
        }))
    }
}
