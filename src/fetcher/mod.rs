pub mod client;

pub use client::{FetchError, Fetcher, PortfolioClient};
