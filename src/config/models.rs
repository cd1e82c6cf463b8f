use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use crate::extractor::Strategy;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Outbound HTTP settings shared by both upstream requests
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Sent as `User-Agent` on the page and manifest requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            connect_timeout_ms: default_connect_timeout_ms(),
            request_timeout_ms: default_request_timeout_ms(),
            max_redirects: default_max_redirects(),
        }
    }
}

/// Key extraction settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractorConfig {
    /// Strategy order, highest priority first
    #[serde(default = "default_strategies")]
    pub strategies: Vec<Strategy>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            strategies: default_strategies(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_connect_timeout_ms() -> u64 {
    10_000
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

fn default_max_redirects() -> usize {
    10
}

fn default_strategies() -> Vec<Strategy> {
    Strategy::PRIORITY.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.http.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.http.connect_timeout_ms, 10_000);
        assert_eq!(config.http.request_timeout_ms, 30_000);
        assert_eq!(config.extractor.strategies, Strategy::PRIORITY.to_vec());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
[http]
request_timeout_ms = 5000

[extractor]
strategies = ["data_attribute", "meta_tag"]
            "#,
        )
        .unwrap();

        assert_eq!(config.http.request_timeout_ms, 5000);
        assert_eq!(config.http.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(
            config.extractor.strategies,
            vec![Strategy::DataAttribute, Strategy::MetaTag]
        );
    }
}
