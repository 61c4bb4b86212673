//! Resolver service - orchestrates metadata resolution for a video link
//!
//! This is the high-level API:
//! 1. Fetch author/title/thumbnail for the link
//! 2. Normalize the artist and title
//! 3. Match against the music catalog
//! 4. Locate the track number in the matched album

use crate::config::Config;
use crate::resolver::{
    catalog::CatalogClient,
    domain::{ResolveError, ResolvedMetadata},
    matcher::{self, CatalogMatch},
    normalize, tracks,
    traits::{CatalogApi, VideoInfoApi},
    video::VideoInfoClient,
};

/// Resolves video links to catalog metadata.
///
/// Holds no per-request state; share it behind an `Arc` to serve
/// concurrent requests.
pub struct MetadataResolver<V = VideoInfoClient, C = CatalogClient> {
    video: V,
    catalog: C,
}

impl MetadataResolver {
    /// Create a resolver backed by the real HTTP clients
    pub fn new(config: &Config) -> Result<Self, ResolveError> {
        Ok(Self {
            video: VideoInfoClient::new(&config.video, &config.http)?,
            catalog: CatalogClient::new(&config.catalog, &config.http)?,
        })
    }
}

impl<V: VideoInfoApi, C: CatalogApi> MetadataResolver<V, C> {
    /// Create a resolver from arbitrary clients (used with mocks in tests)
    pub fn with_clients(video: V, catalog: C) -> Self {
        Self { video, catalog }
    }

    /// Resolve a video link to catalog metadata.
    ///
    /// Falls back to the minimal record when the catalog has no match.
    /// Any upstream failure fails the whole resolution.
    pub async fn resolve(&self, link: &str) -> Result<ResolvedMetadata, ResolveError> {
        let link = link.trim();
        if link.is_empty() {
            return Err(ResolveError::InputMissing);
        }

        let info = self.video.video_info(link).await?;
        tracing::info!("Resolving {:?} by {:?}", info.title, info.author);

        let artist = normalize::normalize_artist(&info.author);
        let title = normalize::normalize_title(&info.title, &artist);
        tracing::debug!("Normalized to {:?} by {:?}", title, artist);

        let resolved = match matcher::match_track(
            &self.catalog,
            &artist,
            &title,
            info.thumbnail_url.as_deref(),
        )
        .await?
        {
            CatalogMatch::Minimal(minimal) => ResolvedMetadata::Minimal(minimal),
            CatalogMatch::Full {
                mut metadata,
                track_list,
                total_tracks,
            } => {
                // Without a reported total, the listing length is the best we have
                let total = total_tracks.unwrap_or(track_list.len() as u32);
                metadata.track_no = tracks::locate_track(&track_list, &metadata.title, total);
                if metadata.track_no.is_none() {
                    tracing::debug!("{:?} not found in album track list", metadata.title);
                }
                ResolvedMetadata::Full(metadata)
            }
        };

        Ok(resolved)
    }
}
