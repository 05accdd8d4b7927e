//! Shared fixtures for the storage, sweep, scheduler and HTTP tests


use crate::{
    config::Config,
    db::Storage,
    fetcher::{FetchError, Fetcher},
    policy::FailurePolicy,
    state::AppState,
};
use async_trait::async_trait;
use std::{
    collections::HashSet,
    path::PathBuf,
    sync::{Arc, Mutex},
    time::{Duration, SystemTime, UNIX_EPOCH},
};

pub const WALLET_A: &str = "0xba8a8f39b2315d4bc725c026ce3898c2c7e74f57";
pub const WALLET_B: &str = "0x2bd4284509bf6626d5def7ef20d4ca38ce71792e";

/// Unique SQLite path under the system temp dir; the file does not exist yet.
pub fn temp_db_path(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut path = std::env::temp_dir();
    path.push(format!(
        "portfolio-data-{}-{}-{}.sqlite",
        tag,
        std::process::id(),
        nanos
    ));
    path
}

pub fn seeds(addresses: &[&str]) -> Vec<String> {
    addresses.iter().map(|a| a.to_string()).collect()
}

pub fn default_seeds() -> Vec<String> {
    Config::default().seed_addresses
}

pub async fn open_fresh(tag: &str, addresses: &[String]) -> Storage {
    Storage::open(&temp_db_path(tag), addresses)
        .await
        .expect("failed to open storage")
}

/// A real transport error, produced without touching the network.
pub fn transport_error() -> reqwest::Error {
    reqwest::Client::new()
        .get("not a url")
        .build()
        .expect_err("relative URL should not build")
}

/// Answers `{"id": "<address>"}` for every address, except the ones marked as failing.
#[derive(Default)]
pub struct ScriptedFetcher {
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(addresses: &[&str]) -> Self {
        Self {
            failing: addresses.iter().map(|a| a.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn payload_for(address: &str) -> String {
        format!(r#"{{"id":"{}"}}"#, address)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, address: &str) -> Result<String, FetchError> {
        self.calls.lock().unwrap().push(address.to_string());

        if self.failing.contains(address) {
            return Err(FetchError::Request {
                address: address.to_string(),
                source: transport_error(),
            });
        }

        Ok(Self::payload_for(address))
    }
}

/// Takes `delay` for every fetch, then answers like `ScriptedFetcher`.
pub struct SlowFetcher {
    delay: Duration,
}

impl SlowFetcher {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Fetcher for SlowFetcher {
    async fn fetch(&self, address: &str) -> Result<String, FetchError> {
        tokio::time::sleep(self.delay).await;
        Ok(ScriptedFetcher::payload_for(address))
    }
}

/// App state with the `continue` policy so failures come back as values.
pub fn test_state(storage: Storage, fetcher: Arc<dyn Fetcher>) -> Arc<AppState> {
    let config = Config {
        failure_policy: FailurePolicy::Continue,
        ..Config::default()
    };
    Arc::new(AppState::new(config, storage, fetcher))
}
