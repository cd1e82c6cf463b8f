//! HTTP transport used by the resolver

mod http;

use async_trait::async_trait;
use thiserror::Error;

pub use http::HttpClient;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("Connection timeout")]
    Timeout,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Too many redirects")]
    TooManyRedirects,
}

pub type Result<T> = std::result::Result<T, TransportError>;

/// GET capability the resolver depends on
///
/// Implementations return the body of a successful response and map
/// network errors and non-2xx statuses to [`TransportError`].
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<String>;
}
