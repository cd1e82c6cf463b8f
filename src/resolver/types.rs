use serde::{Deserialize, Deserializer, Serialize};

/// Input of one resolution: the embed page and the page that embeds it
///
/// URLs stay as text here; parsing them is part of the resolution so a
/// malformed URL is reported in the result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EmbedReference {
    pub embed_url: String,
    pub referer: String,
}

impl EmbedReference {
    pub fn new(embed_url: impl Into<String>, referer: impl Into<String>) -> Self {
        Self {
            embed_url: embed_url.into(),
            referer: referer.into(),
        }
    }
}

/// One playable variant
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceEntry {
    pub file: String,
    #[serde(rename = "type")]
    pub media_type: String,
}

/// Subtitle/thumbnail track, passed through as the manifest defines it
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TrackEntry(pub serde_json::Value);

/// Outcome of a resolution
///
/// `sources` and `tracks` are always present. A failed resolution has both
/// empty and carries the reason in `error`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResolutionResult {
    pub sources: Vec<SourceEntry>,
    pub tracks: Vec<TrackEntry>,
    pub encrypted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResolutionResult {
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            sources: Vec::new(),
            tracks: Vec::new(),
            encrypted: false,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// `getSources` response body
///
/// Missing or `null` collections decode as empty. Other fields, including
/// any upstream `encrypted` flag, are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct SourceManifest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sources: Vec<SourceEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tracks: Vec<TrackEntry>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<SourceManifest> for ResolutionResult {
    fn from(manifest: SourceManifest) -> Self {
        Self {
            sources: manifest.sources,
            tracks: manifest.tracks,
            encrypted: false,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_serialization_omits_error() {
        let result = ResolutionResult {
            sources: vec![SourceEntry {
                file: "a.m3u8".to_string(),
                media_type: "hls".to_string(),
            }],
            tracks: vec![],
            encrypted: false,
            error: None,
        };

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "sources": [{"file": "a.m3u8", "type": "hls"}],
                "tracks": [],
                "encrypted": false
            })
        );
    }

    #[test]
    fn test_failed_shape() {
        let result = ResolutionResult::failed("boom");
        assert!(!result.is_success());
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"sources": [], "tracks": [], "encrypted": false, "error": "boom"})
        );
    }

    #[test]
    fn test_manifest_tracks_pass_through() {
        let manifest: SourceManifest = serde_json::from_value(json!({
            "sources": [{"file": "https://cdn/x/master.m3u8", "type": "hls"}],
            "tracks": [
                {"file": "https://cdn/en.vtt", "label": "English", "kind": "captions", "default": true},
                {"file": "https://cdn/thumbs.vtt", "kind": "thumbnails"}
            ],
            "encrypted": true,
            "server": 4
        }))
        .unwrap();

        let result = ResolutionResult::from(manifest);
        assert!(!result.encrypted);
        assert_eq!(result.sources[0].media_type, "hls");
        assert_eq!(result.tracks.len(), 2);
        assert_eq!(result.tracks[0].0["label"], "English");
        assert_eq!(result.tracks[1].0["kind"], "thumbnails");
    }

    #[test]
    fn test_manifest_missing_or_null_collections() {
        let manifest: SourceManifest = serde_json::from_value(json!({})).unwrap();
        assert!(manifest.sources.is_empty());
        assert!(manifest.tracks.is_empty());

        let manifest: SourceManifest =
            serde_json::from_value(json!({"sources": null, "tracks": null})).unwrap();
        assert!(manifest.sources.is_empty());
        assert!(manifest.tracks.is_empty());
    }

    #[test]
    fn test_manifest_wrong_shape_rejected() {
        assert!(serde_json::from_value::<SourceManifest>(json!({"sources": "x"})).is_err());
        assert!(serde_json::from_value::<SourceManifest>(json!([1, 2])).is_err());
    }
}
