use thiserror::Error;

use super::models::SourcesQuery;
use crate::resolver::EmbedReference;

const MAX_URL_BYTES: usize = 2048;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("{0} exceeds {max} bytes", max = MAX_URL_BYTES)]
    TooLong(&'static str),
}

/// Check the query and turn it into a resolver input
///
/// Only size and presence are checked here. URL syntax is the resolver's
/// job so malformed embed URLs come back as a normal result error.
pub fn validate_query(query: SourcesQuery) -> Result<EmbedReference, QueryValidationError> {
    for (field, value) in [("embed_url", &query.embed_url), ("referer", &query.referer)] {
        if value.trim().is_empty() {
            return Err(QueryValidationError::Empty(field));
        }
        if value.len() > MAX_URL_BYTES {
            return Err(QueryValidationError::TooLong(field));
        }
    }

    Ok(EmbedReference::new(query.embed_url, query.referer))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(embed_url: &str, referer: &str) -> SourcesQuery {
        SourcesQuery {
            embed_url: embed_url.to_string(),
            referer: referer.to_string(),
        }
    }

    #[test]
    fn test_valid_query() {
        let reference =
            validate_query(query("https://example.com/e/1", "https://site.example/")).unwrap();
        assert_eq!(reference.embed_url, "https://example.com/e/1");
        assert_eq!(reference.referer, "https://site.example/");
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!(
            validate_query(query("", "https://site.example/")),
            Err(QueryValidationError::Empty("embed_url"))
        );
        assert_eq!(
            validate_query(query("https://example.com/e/1", " ")),
            Err(QueryValidationError::Empty("referer"))
        );
    }

    #[test]
    fn test_oversized_url() {
        let long = format!("https://example.com/{}", "a".repeat(MAX_URL_BYTES));
        assert_eq!(
            validate_query(query(&long, "https://site.example/")),
            Err(QueryValidationError::TooLong("embed_url"))
        );
    }

    #[test]
    fn test_malformed_url_passes_through() {
        assert!(validate_query(query("not a url", "x")).is_ok());
    }
}
