use super::models::Config;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("User-Agent must not be empty")]
    EmptyUserAgent,

    #[error("Timeout must be positive: {field} = {value}")]
    InvalidTimeout { field: String, value: u64 },

    #[error("Extractor strategy chain is empty")]
    EmptyStrategyChain,

    #[error("Extractor strategy '{strategy}' listed more than once")]
    DuplicateStrategy { strategy: String },
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_http(config)?;
    validate_extractor(config)?;
    Ok(())
}

fn validate_http(config: &Config) -> Result<(), ValidationError> {
    if config.http.user_agent.trim().is_empty() {
        return Err(ValidationError::EmptyUserAgent);
    }

    let timeouts = [
        ("http.connect_timeout_ms", config.http.connect_timeout_ms),
        ("http.request_timeout_ms", config.http.request_timeout_ms),
    ];
    for (field, value) in timeouts {
        if value == 0 {
            return Err(ValidationError::InvalidTimeout {
                field: field.to_string(),
                value,
            });
        }
    }

    Ok(())
}

fn validate_extractor(config: &Config) -> Result<(), ValidationError> {
    let strategies = &config.extractor.strategies;
    if strategies.is_empty() {
        return Err(ValidationError::EmptyStrategyChain);
    }

    let mut seen = HashSet::new();
    for strategy in strategies {
        if !seen.insert(strategy) {
            return Err(ValidationError::DuplicateStrategy {
                strategy: strategy.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::Strategy;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_user_agent() {
        let mut config = Config::default();
        config.http.user_agent = "  ".to_string();
        assert!(matches!(
            validate(&config),
            Err(ValidationError::EmptyUserAgent)
        ));
    }

    #[test]
    fn test_zero_timeout() {
        let mut config = Config::default();
        config.http.request_timeout_ms = 0;
        match validate(&config) {
            Err(ValidationError::InvalidTimeout { field, value }) => {
                assert_eq!(field, "http.request_timeout_ms");
                assert_eq!(value, 0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_strategy_chain_rules() {
        let mut config = Config::default();
        config.extractor.strategies.clear();
        assert!(matches!(
            validate(&config),
            Err(ValidationError::EmptyStrategyChain)
        ));

        config.extractor.strategies = vec![Strategy::MetaTag, Strategy::MetaTag];
        match validate(&config) {
            Err(ValidationError::DuplicateStrategy { strategy }) => {
                assert_eq!(strategy, "meta_tag");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
