use crate::config::Config;
use crate::db::Storage;
use crate::fetcher::Fetcher;
use crate::policy::FailurePolicy;
use std::sync::Arc;

/// Everything the scheduler and the HTTP handlers share. Built once in `main`.
pub struct AppState {
    pub config: Config,
    pub storage: Storage,
    pub fetcher: Arc<dyn Fetcher>,
}

impl AppState {
    pub fn new(config: Config, storage: Storage, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            config,
            storage,
            fetcher,
        }
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.config.failure_policy
    }
}
