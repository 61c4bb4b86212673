//! Deezer API Data Transfer Objects
//!
//! These types match what the Deezer public API returns.
//! DO NOT use these types outside the catalog module - convert to domain types.
//!
//! API Reference: https://developers.deezer.com/api
//!
//! Every field is optional: the API drops fields freely and we'd rather
//! omit a value from the output than fail the whole lookup. Payload fields
//! go through [`lenient`], so a value of the wrong type is read as absent
//! instead of rejecting the body.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a field, treating null or a wrongly typed value as `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Deserialize an array, keeping only the elements that parse.
///
/// Anything other than an array reads as `None`.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

/// Error object. Deezer answers HTTP 200 with this instead of a payload
/// when a request is rejected (quota, bad parameters, unknown id).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub error_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub code: Option<i64>,
}

/// `GET /search`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "lenient_list")]
    pub data: Option<Vec<SearchTrack>>,
    #[serde(default, deserialize_with = "lenient")]
    pub total: Option<u64>,
    pub error: Option<ApiError>,
}

/// A track hit in search results
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchTrack {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub artist: Option<ArtistRef>,
    #[serde(default, deserialize_with = "lenient")]
    pub album: Option<AlbumRef>,
}

/// Artist summary embedded in a track
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistRef {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

/// Album summary embedded in a track
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlbumRef {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub cover_medium: Option<String>,
}

/// `GET /album/<id>`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AlbumResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub genres: Option<GenreList>,
    /// YYYY-MM-DD
    #[serde(default, deserialize_with = "lenient")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub nb_tracks: Option<u32>,
    pub error: Option<ApiError>,
}

/// Wrapper around the album's genre array
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenreList {
    #[serde(default, deserialize_with = "lenient_list")]
    pub data: Option<Vec<Genre>>,
}

/// Genre entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Genre {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub picture: Option<String>,
}

/// `GET /album/<id>/tracks`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TrackListResponse {
    #[serde(default, deserialize_with = "lenient_list")]
    pub data: Option<Vec<AlbumTrack>>,
    #[serde(default, deserialize_with = "lenient")]
    pub total: Option<u64>,
    pub error: Option<ApiError>,
}

/// Track entry in an album listing
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlbumTrack {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub track_position: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub disk_number: Option<u32>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
