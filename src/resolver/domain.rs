//! Internal domain models for metadata resolution.
//!
//! These types are OUR types - they don't change when the catalog or the
//! video provider change their responses. Everything external is converted
//! into these via the adapters in `catalog` and `video`.

use serde::{Deserialize, Serialize};

/// What the video-info collaborator knows about a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawVideoInfo {
    /// Channel / uploader name (e.g. "Artist - Topic")
    pub author: String,
    /// Video title as shown on the platform
    pub title: String,
    /// Thumbnail image URL, when the provider has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// First-ranked search hit from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackCandidate {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album_id: Option<u64>,
    pub album_title: Option<String>,
    /// Medium-size album art
    pub album_cover: Option<String>,
}

/// A genre as reported by the catalog.
///
/// Passed through to the client as-is, so every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Genre {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

/// Album-level details needed for the full record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlbumDetail {
    pub genres: Vec<Genre>,
    pub release_date: Option<String>,
    pub total_tracks: Option<u32>,
}

/// One entry of an album's track list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackListEntry {
    pub title: String,
    pub track_position: u32,
}

/// Fallback record used when the catalog has no match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinimalMetadata {
    pub title: String,
    pub artist: String,
}

/// Enriched record built from a catalog match plus the video thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FullMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub artist: String,
    /// Catalog album art
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    /// Original video thumbnail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    pub genres: Vec<Genre>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

/// Result of a resolution. Serialized without a tag so clients see the
/// bare record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResolvedMetadata {
    Minimal(MinimalMetadata),
    Full(FullMetadata),
}

impl ResolvedMetadata {
    pub fn title(&self) -> &str {
        match self {
            Self::Minimal(m) => &m.title,
            Self::Full(f) => &f.title,
        }
    }

    pub fn artist(&self) -> &str {
        match self {
            Self::Minimal(m) => &m.artist,
            Self::Full(f) => &f.artist,
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full(_))
    }
}

/// Coarse error classification, used by the routing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputMissing,
    UpstreamRateLimited,
    UpstreamUnavailable,
    MalformedUpstreamData,
    Unexpected,
}

/// Errors that can occur while resolving a link
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveError {
    #[error("URL parameter is missing")]
    InputMissing,

    #[error("Video provider refused the request: {0}")]
    UpstreamRateLimited(String),

    #[error("{service} returned {status}")]
    UpstreamUnavailable { service: String, status: String },

    #[error("Malformed upstream data: {0}")]
    MalformedUpstreamData(String),

    #[error("{0}")]
    Unexpected(String),
}

/// Error payload handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResult {
    pub error: String,
    pub message: String,
}

impl ResolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputMissing => ErrorKind::InputMissing,
            Self::UpstreamRateLimited(_) => ErrorKind::UpstreamRateLimited,
            Self::UpstreamUnavailable { .. } => ErrorKind::UpstreamUnavailable,
            Self::MalformedUpstreamData(_) => ErrorKind::MalformedUpstreamData,
            Self::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    /// HTTP status the routing layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::InputMissing => 400,
            ErrorKind::UpstreamRateLimited => 429,
            _ => 500,
        }
    }

    pub fn to_error_result(&self) -> ErrorResult {
        let error = match self.kind() {
            ErrorKind::InputMissing => "URL parameter is missing",
            ErrorKind::UpstreamRateLimited => "Video provider rate limit exceeded",
            _ => "Unable to retrieve video metadata",
        };
        ErrorResult {
            error: error.to_string(),
            message: self.to_string(),
        }
    }

    pub(crate) fn unavailable(service: &str, status: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            service: service.to_string(),
            status: status.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_serializes_to_bare_record() {
        let meta = ResolvedMetadata::Minimal(MinimalMetadata {
            title: "Y".to_string(),
            artist: "X".to_string(),
        });
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Y", "artist": "X"}));
    }

    #[test]
    fn test_full_omits_absent_fields() {
        let meta = ResolvedMetadata::Full(FullMetadata {
            id: Some(7),
            title: "Song".to_string(),
            artist: "Artist".to_string(),
            cover: None,
            cover_element: Some("https://img/thumb.jpg".to_string()),
            album: Some("Record".to_string()),
            genres: vec![Genre {
                name: Some("Pop".to_string()),
                ..Default::default()
            }],
            track_no: None,
            release_date: None,
        });
        let json = serde_json::to_value(&meta).unwrap();

        assert_eq!(json["cover_element"], "https://img/thumb.jpg");
        assert_eq!(json["genres"], serde_json::json!([{"name": "Pop"}]));
        assert!(json.get("track_no").is_none());
        assert!(json.get("cover").is_none());
        assert!(meta.is_full());
    }

    #[test]
    fn test_full_without_thumbnail_omits_cover_element() {
        let meta = ResolvedMetadata::Full(FullMetadata {
            id: None,
            title: "Song".to_string(),
            artist: "Artist".to_string(),
            cover: None,
            cover_element: None,
            album: None,
            genres: Vec::new(),
            track_no: None,
            release_date: None,
        });
        let json = serde_json::to_value(&meta).unwrap();

        assert!(json.get("cover_element").is_none());
        assert_eq!(json["genres"], serde_json::json!([]));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ResolveError::InputMissing.status_code(), 400);
        assert_eq!(
            ResolveError::UpstreamRateLimited("HTTP 429".into()).status_code(),
            429
        );
        assert_eq!(ResolveError::unavailable("catalog", "HTTP 503").status_code(), 500);
        assert_eq!(ResolveError::MalformedUpstreamData("x".into()).status_code(), 500);
        assert_eq!(ResolveError::Unexpected("boom".into()).status_code(), 500);
    }

    #[test]
    fn test_error_result_carries_message() {
        let err = ResolveError::unavailable("catalog search", "HTTP 502 Bad Gateway");
        let result = err.to_error_result();
        assert_eq!(result.error, "Unable to retrieve video metadata");
        assert!(result.message.contains("HTTP 502"));
        assert!(result.message.contains("catalog search"));
    }
}
