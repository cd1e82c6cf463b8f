//! Source resolution pipeline
//!
//! Fetches the embed page, extracts the access key, fetches the source
//! manifest and normalizes it into a [`ResolutionResult`].
//!
//! ```rust,ignore
//! use embedsrc::resolver::{EmbedReference, SourceResolver};
//!
//! let resolver = SourceResolver::from_config(&config)?;
//! let result = resolver
//!     .resolve(&EmbedReference::new(embed_url, referer))
//!     .await;
//! if let Some(error) = &result.error {
//!     eprintln!("resolution failed: {error}");
//! }
//! ```

mod error;
mod pipeline;
mod types;

pub use error::ResolveError;
pub use pipeline::{EmbedTarget, MANIFEST_PATH, SourceResolver};
pub use types::{EmbedReference, ResolutionResult, SourceEntry, TrackEntry};
