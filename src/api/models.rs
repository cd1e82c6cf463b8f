//! API models for the resolution endpoints.
//!
//! - `GET /sources?embed_url=..&referer=..` returns a
//!   [`ResolutionResult`](crate::resolver::ResolutionResult) as JSON. Failed
//!   resolutions still answer 200; the body carries `error`.
//! - `GET /health` returns [`HealthResponse`].
//!
//! ```json
//! {
//!   "sources": [{"file": "https://cdn.example.com/master.m3u8", "type": "hls"}],
//!   "tracks": [{"file": "https://cdn.example.com/en.vtt", "label": "English", "kind": "captions"}],
//!   "encrypted": false
//! }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone)]
pub struct SourcesQuery {
    pub embed_url: String,
    pub referer: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
