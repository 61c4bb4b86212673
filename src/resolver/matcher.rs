//! Catalog matching: turn a normalized (artist, title) pair into either the
//! minimal fallback record or a full record from the first catalog hit.

use super::domain::{FullMetadata, MinimalMetadata, ResolveError, TrackListEntry};
use super::traits::CatalogApi;

/// Album title reported when the album is named after the track.
pub const SINGLE_ALBUM: &str = "Single";

/// Outcome of a catalog match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogMatch {
    /// Nothing in the catalog; echo back the normalized input.
    Minimal(MinimalMetadata),
    /// First hit, enriched with its album. `track_no` is still unset; the
    /// track list is handed over so the caller can locate it.
    Full {
        metadata: FullMetadata,
        track_list: Vec<TrackListEntry>,
        total_tracks: Option<u32>,
    },
}

/// Query the catalog for `artist`/`title` and build the matching record.
///
/// `cover_element` is the video thumbnail, carried into the full record
/// when the provider reported one.
pub async fn match_track<C>(
    catalog: &C,
    artist: &str,
    title: &str,
    cover_element: Option<&str>,
) -> Result<CatalogMatch, ResolveError>
where
    C: CatalogApi + ?Sized,
{
    let candidates = catalog.search(artist, title).await?;

    let Some(hit) = candidates.into_iter().next() else {
        tracing::info!("No catalog match for {:?} by {:?}", title, artist);
        return Ok(CatalogMatch::Minimal(MinimalMetadata {
            title: title.to_string(),
            artist: artist.to_string(),
        }));
    };

    let album_id = hit
        .album_id
        .ok_or_else(|| ResolveError::MalformedUpstreamData("search hit has no album id".into()))?;
    let hit_title = hit
        .title
        .ok_or_else(|| ResolveError::MalformedUpstreamData("search hit has no title".into()))?;
    let hit_artist = hit
        .artist
        .ok_or_else(|| ResolveError::MalformedUpstreamData("search hit has no artist".into()))?;

    tracing::info!("Catalog match {:?} by {:?} (album {})", hit_title, hit_artist, album_id);

    // Both lookups are keyed by the same album; either failing fails the match
    let (album, track_list) =
        tokio::try_join!(catalog.album(album_id), catalog.album_tracks(album_id))?;

    let album_title = hit
        .album_title
        .map(|album_title| album_label(album_title, title));

    let metadata = FullMetadata {
        id: hit.id,
        title: hit_title,
        artist: hit_artist,
        cover: hit.album_cover,
        cover_element: cover_element.map(str::to_string),
        album: album_title,
        genres: album.genres,
        track_no: None,
        release_date: album.release_date,
    };

    Ok(CatalogMatch::Full {
        metadata,
        track_list,
        total_tracks: album.total_tracks,
    })
}

/// Albums named exactly like the searched title are reported as singles.
fn album_label(album_title: String, normalized_title: &str) -> String {
    if album_title == normalized_title {
        SINGLE_ALBUM.to_string()
    } else {
        album_title
    }
}
