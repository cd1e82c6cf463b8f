use super::page::EmbedPage;
use super::types::{ExtractionKey, KeyMatch, Strategy};

/// Ordered chain of key strategies with first-success semantics
///
/// The page is parsed once and each strategy is tried in chain order; the
/// first one yielding a key ends the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyExtractor {
    chain: Vec<Strategy>,
}

impl KeyExtractor {
    pub fn new() -> Self {
        Self::with_chain(Strategy::PRIORITY.to_vec())
    }

    /// Build an extractor with a custom order (or subset) of strategies
    pub fn with_chain(chain: Vec<Strategy>) -> Self {
        Self { chain }
    }

    pub fn chain(&self) -> &[Strategy] {
        &self.chain
    }

    /// Find the key and report which strategy produced it
    pub fn find(&self, markup: &str) -> Option<KeyMatch> {
        let page = EmbedPage::parse(markup);

        self.chain.iter().find_map(|strategy| {
            strategy
                .run(&page)
                .map(|key| KeyMatch { key, strategy: *strategy })
        })
    }

    pub fn extract_key(&self, markup: &str) -> Option<ExtractionKey> {
        self.find(markup).map(|found| found.key)
    }
}

impl Default for KeyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the key with the default strategy order
pub fn extract_key(markup: &str) -> Option<ExtractionKey> {
    KeyExtractor::default().extract_key(markup)
}
