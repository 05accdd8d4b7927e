use crate::db::{Storage, StorageError};
use crate::fetcher::{FetchError, Fetcher};
use chrono::{DateTime, Duration, SubsecRound, Utc};
use thiserror::Error;
use tracing::{debug, error, info};

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Fetch failed for {address}: {source}")]
    Fetch {
        address: String,
        #[source]
        source: FetchError,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepSummary {
    pub wallets: usize,
    pub records: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Stamp for the next record at storage (millisecond) precision: now, or one
/// millisecond past the previous stamp so times strictly increase within one sweep.
fn next_timestamp(previous: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let now = Utc::now().trunc_subsecs(3);
    match previous {
        Some(prev) if now <= prev => prev + Duration::milliseconds(1),
        _ => now,
    }
}

/// Fetches and stores one record for every known wallet, in `list_wallets` order.
///
/// Stops at the first failure; wallets after the failing one are not touched
/// in this sweep. Records already written stay written.
pub async fn run_sweep(storage: &Storage, fetcher: &dyn Fetcher) -> Result<SweepSummary, SweepError> {
    let started_at = Utc::now();
    let wallets = storage.list_wallets().await?;
    info!(wallets = wallets.len(), "Starting ingestion sweep");

    let mut records = 0;
    let mut last_stamp = None;

    for wallet in &wallets {
        let payload = fetcher.fetch(&wallet.address).await.map_err(|source| {
            error!(address = %wallet.address, error = %source, "Fetch failed, aborting sweep");
            SweepError::Fetch {
                address: wallet.address.clone(),
                source,
            }
        })?;

        let created_at = next_timestamp(last_stamp);
        storage.append_record(wallet.id, &payload, created_at).await?;
        last_stamp = Some(created_at);
        records += 1;

        debug!(
            address = %wallet.address,
            bytes = payload.len(),
            "Stored ingestion record"
        );
    }

    let finished_at = Utc::now();
    info!(
        wallets = wallets.len(),
        records,
        elapsed_ms = (finished_at - started_at).num_milliseconds(),
        "Ingestion sweep finished"
    );

    Ok(SweepSummary {
        wallets: wallets.len(),
        records,
        started_at,
        finished_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_strictly_increase() {
        let far_future = (Utc::now() + Duration::hours(1)).trunc_subsecs(3);
        let next = next_timestamp(Some(far_future));
        assert_eq!(next, far_future + Duration::milliseconds(1));

        let past = Utc::now() - Duration::hours(1);
        assert!(next_timestamp(Some(past)) > past);
    }
}
