use crate::config::{Config, ADDRESS_PLACEHOLDER};
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request for {address} failed: {source}")]
    Request {
        address: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Response body for {address} could not be read: {source}")]
    Body {
        address: String,
        #[source]
        source: reqwest::Error,
    },
}

/// One opaque GET per wallet address, returning the raw response body.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, address: &str) -> Result<String, FetchError>;
}

pub struct PortfolioClient {
    http: reqwest::Client,
    url_template: String,
}

impl PortfolioClient {
    pub fn new(config: &Config) -> Self {
        Self::with_template(&config.portfolio_api_url)
    }

    /// No timeout and no retry: a hung endpoint blocks the caller.
    pub fn with_template(url_template: &str) -> Self {
        info!("Initializing portfolio client with endpoint template: {}", url_template);

        Self {
            http: reqwest::Client::new(),
            url_template: url_template.to_string(),
        }
    }

    pub fn url_for(&self, address: &str) -> String {
        self.url_template.replace(ADDRESS_PLACEHOLDER, address)
    }
}

#[async_trait]
impl Fetcher for PortfolioClient {
    async fn fetch(&self, address: &str) -> Result<String, FetchError> {
        let url = self.url_for(address);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                address: address.to_string(),
                source,
            })?;

        // Status is not interpreted, the body is stored whatever it says
        debug!(address, status = %response.status(), "Portfolio response received");

        response.text().await.map_err(|source| FetchError::Body {
            address: address.to_string(),
            source,
        })
    }
}
