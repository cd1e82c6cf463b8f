//! Key extraction engine
//!
//! The manifest endpoint needs a short-lived key that the embed page hides
//! in one of several places, depending on the page revision. This module
//! tries each location in a fixed priority order and returns the first key
//! found.
//!
//! ## Key Components
//!
//! - [`KeyExtractor`] - Ordered strategy chain with first-success semantics
//! - [`Strategy`] - One key location (meta tag, comment, data attribute, script)
//! - [`EmbedPage`] - Parsed page exposing the lookups strategies need
//! - [`ExtractionKey`] - Non-empty key value
//!
//! ## Example
//!
//! ```rust
//! use embedsrc::extractor::{KeyExtractor, Strategy};
//!
//! let html = r#"<meta name="_gg_fb" content="KEY42">"#;
//! let found = KeyExtractor::default().find(html).unwrap();
//! assert_eq!(found.key.as_str(), "KEY42");
//! assert_eq!(found.strategy, Strategy::MetaTag);
//! ```
//!
//! The engine does no logging; callers report which strategy won.

mod chain;
mod page;
pub(crate) mod strategies;
mod types;

pub use chain::{KeyExtractor, extract_key};
pub use page::EmbedPage;
pub use types::{ExtractionKey, KeyMatch, Strategy};
