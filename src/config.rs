// Configuration for:
// - Server listening address/port
// - Scheduler poll interval
// - SQLite storage path
// - Portfolio API URL template
// - Seed wallet list and failure policy

use crate::policy::FailurePolicy;
use crate::validation::validate_wallet_address;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const ADDRESS_PLACEHOLDER: &str = "{address}";

pub const DEFAULT_PORTFOLIO_API_URL: &str =
    "https://openapi.debank.com/v1/user/token_list?id={address}&is_all=true";

pub const DEFAULT_SEED_ADDRESSES: [&str; 8] = [
    "0xba8a8f39b2315d4bc725c026ce3898c2c7e74f57",
    "0x2bd4284509bf6626d5def7ef20d4ca38ce71792e",
    "0x3ea91c76b176779d10cc2a27fd2687888886f0c2",
    "0xe8e94110e568fd45c8eb578bef0f36b5f154b794",
    "0x21bce0768110b9a8c50942be257637a843a7eac6",
    "0x9429614ccabfb2b24f444f33ede29d4575ebcdd1",
    "0x12244c23101f66741dae553c8836a9b2fd4e413a",
    "0x8c2753ee27ba890fbb60653d156d92e1c334f528",
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(var: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            var,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub poll_interval: Duration,
    pub storage_path: PathBuf,
    pub portfolio_api_url: String,
    pub seed_addresses: Vec<String>,
    pub failure_policy: FailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            poll_interval: Duration::from_secs(4 * 60 * 60),
            storage_path: PathBuf::from("store.db"),
            portfolio_api_url: DEFAULT_PORTFOLIO_API_URL.to_string(),
            seed_addresses: DEFAULT_SEED_ADDRESSES.iter().map(|a| a.to_string()).collect(),
            failure_policy: FailurePolicy::Exit,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("SERVER_HOST") {
            if host.trim().is_empty() {
                return Err(ConfigError::invalid("SERVER_HOST", "must not be empty"));
            }
            config.server_host = host.trim().to_string();
        }

        if let Some(port) = lookup("SERVER_PORT") {
            config.server_port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid("SERVER_PORT", format!("'{}' is not a port number", port)))?;
        }

        if let Some(secs) = lookup("POLL_INTERVAL_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid("POLL_INTERVAL_SECS", format!("'{}' is not a number", secs)))?;
            if secs == 0 {
                return Err(ConfigError::invalid("POLL_INTERVAL_SECS", "must be greater than zero"));
            }
            config.poll_interval = Duration::from_secs(secs);
        }

        if let Some(path) = lookup("STORAGE_PATH") {
            if path.trim().is_empty() {
                return Err(ConfigError::invalid("STORAGE_PATH", "must not be empty"));
            }
            config.storage_path = PathBuf::from(path.trim());
        }

        if let Some(url) = lookup("PORTFOLIO_API_URL") {
            if !url.contains(ADDRESS_PLACEHOLDER) {
                return Err(ConfigError::invalid(
                    "PORTFOLIO_API_URL",
                    format!("template must contain {}", ADDRESS_PLACEHOLDER),
                ));
            }
            config.portfolio_api_url = url.trim().to_string();
        }

        if let Some(list) = lookup("SEED_ADDRESSES") {
            config.seed_addresses = parse_seed_addresses(&list)?;
        }

        if let Some(policy) = lookup("FAILURE_POLICY") {
            config.failure_policy = policy
                .parse()
                .map_err(|reason: String| ConfigError::invalid("FAILURE_POLICY", reason))?;
        }

        Ok(config)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_seed_addresses(list: &str) -> Result<Vec<String>, ConfigError> {
    let mut addresses: Vec<String> = Vec::new();

    for raw in list.split(',').map(str::trim).filter(|a| !a.is_empty()) {
        validate_wallet_address(raw)
            .map_err(|e| ConfigError::invalid("SEED_ADDRESSES", e.to_string()))?;
        // First occurrence wins
        if !addresses.iter().any(|a| a == raw) {
            addresses.push(raw.to_string());
        }
    }

    if addresses.is_empty() {
        return Err(ConfigError::invalid("SEED_ADDRESSES", "at least one address is required"));
    }

    Ok(addresses)
}
