use serde::{Deserialize, Serialize};
use std::fmt;

use super::page::EmbedPage;
use super::strategies;

/// Access key required by the manifest endpoint
///
/// Never empty: a strategy either produces a complete key or nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtractionKey(String);

impl ExtractionKey {
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        (!value.is_empty()).then_some(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ExtractionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Place in the embed page where a key may be hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// `<meta name="_gg_fb" content="...">`
    MetaTag,
    /// `<!-- _is_th:... -->`
    CommentMarker,
    /// `<div data-dpi="...">`
    DataAttribute,
    /// `window._xy_ws` or `window._lk_db` in an inline script
    InlineScript,
}

impl Strategy {
    /// Default chain, most stable location first
    pub const PRIORITY: [Strategy; 4] = [
        Strategy::MetaTag,
        Strategy::CommentMarker,
        Strategy::DataAttribute,
        Strategy::InlineScript,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::MetaTag => "meta_tag",
            Strategy::CommentMarker => "comment_marker",
            Strategy::DataAttribute => "data_attribute",
            Strategy::InlineScript => "inline_script",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Strategy::MetaTag => 0,
            Strategy::CommentMarker => 1,
            Strategy::DataAttribute => 2,
            Strategy::InlineScript => 3,
        }
    }

    /// Run this strategy over a parsed page
    pub fn run(&self, page: &EmbedPage) -> Option<ExtractionKey> {
        match self {
            Strategy::MetaTag => strategies::meta_tag(page),
            Strategy::CommentMarker => strategies::comment_marker(page),
            Strategy::DataAttribute => strategies::data_attribute(page),
            Strategy::InlineScript => strategies::inline_script(page),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key together with the strategy that found it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatch {
    pub key: ExtractionKey,
    pub strategy: Strategy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_rejected() {
        assert!(ExtractionKey::new("").is_none());
        assert_eq!(ExtractionKey::new("k").unwrap().as_str(), "k");
    }

    #[test]
    fn test_strategy_serde_names() {
        let parsed: Vec<Strategy> =
            serde_json::from_str(r#"["inline_script", "meta_tag"]"#).unwrap();
        assert_eq!(parsed, vec![Strategy::InlineScript, Strategy::MetaTag]);

        for strategy in Strategy::PRIORITY {
            let json = serde_json::to_string(&strategy).unwrap();
            assert_eq!(json, format!("\"{}\"", strategy.as_str()));
        }
    }
}
