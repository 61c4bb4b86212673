//! Adapter layer: Convert catalog DTOs to domain models
//!
//! This is the ONLY place where catalog DTO types are converted to domain
//! types. Missing fields become `None` here; deciding whether a `None` is
//! fatal is up to the matcher.

use super::dto;
use crate::resolver::domain::{AlbumDetail, Genre, ResolveError, TrackCandidate, TrackListEntry};

/// Convert a search response into ranked candidates (catalog order).
pub fn to_candidates(response: dto::SearchResponse) -> Result<Vec<TrackCandidate>, ResolveError> {
    check_error("catalog search", response.error)?;

    Ok(response
        .data
        .unwrap_or_default()
        .into_iter()
        .map(to_candidate)
        .collect())
}

fn to_candidate(track: dto::SearchTrack) -> TrackCandidate {
    let (album_id, album_title, album_cover) = match track.album {
        Some(album) => (album.id, album.title, album.cover_medium),
        None => (None, None, None),
    };

    TrackCandidate {
        id: track.id,
        title: track.title,
        artist: track.artist.and_then(|a| a.name),
        album_id,
        album_title,
        album_cover,
    }
}

/// Convert an album response into album details.
pub fn to_album_detail(response: dto::AlbumResponse) -> Result<AlbumDetail, ResolveError> {
    check_error("catalog album", response.error)?;

    let genres = response
        .genres
        .and_then(|list| list.data)
        .map(|data| data.into_iter().map(to_genre).collect())
        .unwrap_or_default();

    Ok(AlbumDetail {
        genres,
        release_date: response.release_date,
        total_tracks: response.nb_tracks,
    })
}

fn to_genre(genre: dto::Genre) -> Genre {
    Genre {
        id: genre.id,
        name: genre.name,
        picture: genre.picture,
    }
}

/// Convert an album track listing into entries.
///
/// Entries without a title or position can never match, so they are skipped.
pub fn to_track_list(response: dto::TrackListResponse) -> Result<Vec<TrackListEntry>, ResolveError> {
    check_error("catalog album tracks", response.error)?;

    Ok(response
        .data
        .unwrap_or_default()
        .into_iter()
        .filter_map(|track| {
            Some(TrackListEntry {
                title: track.title?,
                track_position: track.track_position?,
            })
        })
        .collect())
}

/// An error body means the catalog refused the request.
fn check_error(service: &str, error: Option<dto::ApiError>) -> Result<(), ResolveError> {
    match error {
        None => Ok(()),
        Some(err) => {
            let status = format!(
                "error {}: {}",
                err.code.map(|c| c.to_string()).unwrap_or_else(|| "?".to_string()),
                err.message.unwrap_or_else(|| "no message".to_string())
            );
            Err(ResolveError::unavailable(service, status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_with_all_fields() {
        let response: dto::SearchResponse = serde_json::from_value(serde_json::json!({
            "data": [{
                "id": 1,
                "title": "Song",
                "artist": {"name": "Artist"},
                "album": {"id": 10, "title": "Record", "cover_medium": "https://cdn/c.jpg"}
            }]
        }))
        .unwrap();

        let candidates = to_candidates(response).unwrap();

        assert_eq!(
            candidates[0],
            TrackCandidate {
                id: Some(1),
                title: Some("Song".to_string()),
                artist: Some("Artist".to_string()),
                album_id: Some(10),
                album_title: Some("Record".to_string()),
                album_cover: Some("https://cdn/c.jpg".to_string()),
            }
        );
    }

    #[test]
    fn test_candidate_without_album_or_artist() {
        let response: dto::SearchResponse =
            serde_json::from_value(serde_json::json!({"data": [{"title": "Song"}]})).unwrap();

        let candidates = to_candidates(response).unwrap();

        assert_eq!(candidates[0].title.as_deref(), Some("Song"));
        assert!(candidates[0].artist.is_none());
        assert!(candidates[0].album_id.is_none());
    }

    #[test]
    fn test_missing_data_is_empty() {
        let candidates = to_candidates(dto::SearchResponse::default()).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_error_body_is_unavailable() {
        let response: dto::SearchResponse = serde_json::from_value(serde_json::json!({
            "error": {"type": "Exception", "message": "Quota limit exceeded", "code": 4}
        }))
        .unwrap();

        let err = to_candidates(response).unwrap_err();

        assert!(matches!(err, ResolveError::UpstreamUnavailable { .. }));
        assert!(err.to_string().contains("Quota limit exceeded"));
    }

    #[test]
    fn test_album_detail() {
        let response: dto::AlbumResponse = serde_json::from_value(serde_json::json!({
            "genres": {"data": [{"name": "Pop"}]},
            "release_date": "2020-01-31",
            "nb_tracks": 3
        }))
        .unwrap();

        let detail = to_album_detail(response).unwrap();

        assert_eq!(detail.total_tracks, Some(3));
        assert_eq!(detail.release_date.as_deref(), Some("2020-01-31"));
        assert_eq!(detail.genres[0].name.as_deref(), Some("Pop"));
        assert!(detail.genres[0].id.is_none());
    }

    #[test]
    fn test_wrongly_typed_album_fields_are_omitted() {
        let response: dto::AlbumResponse = serde_json::from_value(serde_json::json!({
            "genres": {"data": null},
            "release_date": 20200131,
            "nb_tracks": "3"
        }))
        .unwrap();

        let detail = to_album_detail(response).unwrap();

        assert!(detail.genres.is_empty());
        assert!(detail.release_date.is_none());
        assert!(detail.total_tracks.is_none());
    }

    #[test]
    fn test_track_list_skips_incomplete_entries() {
        let response: dto::TrackListResponse = serde_json::from_value(serde_json::json!({
            "data": [
                {"title": "A", "track_position": 1},
                {"title": "B"},
                {"track_position": 3},
                {"title": "D", "track_position": 4}
            ]
        }))
        .unwrap();

        let list = to_track_list(response).unwrap();

        let titles: Vec<_> = list.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "D"]);
    }
}
