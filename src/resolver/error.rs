use thiserror::Error;

use crate::transport::TransportError;

/// Reasons a resolution fails
///
/// None of these escape [`SourceResolver::resolve`](super::SourceResolver::resolve);
/// the display text ends up in `ResolutionResult::error`.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid embed url: {0}")]
    InvalidEmbedUrl(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("could not find key to fetch sources")]
    KeyNotFound,

    #[error("unexpected manifest shape: {0}")]
    ManifestShape(String),
}

impl From<serde_json::Error> for ResolveError {
    fn from(value: serde_json::Error) -> Self {
        ResolveError::ManifestShape(value.to_string())
    }
}

impl From<url::ParseError> for ResolveError {
    fn from(value: url::ParseError) -> Self {
        ResolveError::InvalidEmbedUrl(value.to_string())
    }
}
