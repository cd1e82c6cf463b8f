use std::sync::Arc;

use tracing::{debug, info, warn};
use url::Url;

use super::error::ResolveError;
use super::types::{EmbedReference, ResolutionResult, SourceManifest};
use crate::config::{Config, DEFAULT_USER_AGENT};
use crate::extractor::{ExtractionKey, KeyExtractor};
use crate::observability::Metrics;
use crate::transport::{Fetcher, HttpClient, TransportError};

/// Path of the manifest endpoint, relative to the embed origin
pub const MANIFEST_PATH: &str = "/embed-1/v3/e-1/getSources";

/// Identifier and origin derived from an embed URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedTarget {
    /// Last path segment of the embed URL, percent-decoded
    pub id: String,
    /// `scheme://host[:port]`
    pub origin: String,
}

impl EmbedTarget {
    pub fn parse(embed_url: &str) -> Result<Self, ResolveError> {
        let url = Url::parse(embed_url)?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ResolveError::InvalidEmbedUrl(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }

        let segment = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|segment| !segment.is_empty())
            .ok_or_else(|| {
                ResolveError::InvalidEmbedUrl(format!("no embed id in '{}'", embed_url))
            })?;

        // Stored decoded; the manifest query encodes it once
        let id = urlencoding::decode(segment)
            .map_err(|e| {
                ResolveError::InvalidEmbedUrl(format!("embed id is not UTF-8: {}", e))
            })?
            .into_owned();

        Ok(Self {
            id,
            origin: url.origin().ascii_serialization(),
        })
    }

    /// `<origin>/embed-1/v3/e-1/getSources?id=<id>&_k=<key>`
    pub fn manifest_url(&self, key: &ExtractionKey) -> Result<Url, ResolveError> {
        let mut url = Url::parse(&format!("{}{}", self.origin, MANIFEST_PATH))?;
        url.query_pairs_mut()
            .append_pair("id", &self.id)
            .append_pair("_k", key.as_str());
        Ok(url)
    }
}

/// Two-stage source resolution: embed page, key, manifest
///
/// Holds no per-request state, so one instance serves any number of
/// concurrent resolutions.
pub struct SourceResolver {
    fetcher: Arc<dyn Fetcher>,
    extractor: KeyExtractor,
    user_agent: String,
    metrics: Arc<Metrics>,
}

impl SourceResolver {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            extractor: KeyExtractor::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// Resolver backed by a reqwest client built from `config`
    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        let client = HttpClient::new(&config.http)?;

        Ok(Self::new(Arc::new(client))
            .with_extractor(KeyExtractor::with_chain(
                config.extractor.strategies.clone(),
            ))
            .with_user_agent(config.http.user_agent.clone()))
    }

    pub fn with_extractor(mut self, extractor: KeyExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }

    /// Resolve the playable sources behind an embed page
    ///
    /// Never fails: any error is reported through
    /// [`ResolutionResult::error`] with empty collections.
    pub async fn resolve(&self, reference: &EmbedReference) -> ResolutionResult {
        match self.try_resolve(reference).await {
            Ok(result) => {
                self.metrics.resolution_succeeded();
                result
            }
            Err(e) => {
                if matches!(e, ResolveError::KeyNotFound) {
                    self.metrics.key_not_found();
                }
                self.metrics.resolution_failed();
                warn!(embed_url = %reference.embed_url, error = %e, "Source resolution failed");
                ResolutionResult::failed(e.to_string())
            }
        }
    }

    async fn try_resolve(
        &self,
        reference: &EmbedReference,
    ) -> Result<ResolutionResult, ResolveError> {
        let target = EmbedTarget::parse(&reference.embed_url)?;
        debug!(embed_id = %target.id, origin = %target.origin, "Fetching embed page");

        let page = self
            .fetcher
            .get(
                &reference.embed_url,
                &[
                    ("Referer", reference.referer.as_str()),
                    ("User-Agent", self.user_agent.as_str()),
                ],
            )
            .await?;

        let found = self.extractor.find(&page).ok_or(ResolveError::KeyNotFound)?;
        self.metrics.key_found(found.strategy);
        info!(embed_id = %target.id, strategy = %found.strategy, "Key found");

        let manifest_url = target.manifest_url(&found.key)?;
        let body = self
            .fetcher
            .get(
                manifest_url.as_str(),
                &[
                    ("X-Requested-With", "XMLHttpRequest"),
                    ("Referer", reference.embed_url.as_str()),
                    ("User-Agent", self.user_agent.as_str()),
                ],
            )
            .await?;

        let manifest: SourceManifest = serde_json::from_str(&body)?;
        let result = ResolutionResult::from(manifest);
        info!(
            embed_id = %target.id,
            sources = result.sources.len(),
            tracks = result.tracks.len(),
            "Sources resolved"
        );

        Ok(result)
    }
}
