//! Trait definitions for external API clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! substitute the mocks below.

use async_trait::async_trait;

use super::domain::{AlbumDetail, RawVideoInfo, ResolveError, TrackCandidate, TrackListEntry};

/// Music catalog lookups.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Search by artist and title; results in catalog ranking order.
    async fn search(&self, artist: &str, title: &str)
    -> Result<Vec<TrackCandidate>, ResolveError>;

    /// Album genres, release date and track count.
    async fn album(&self, album_id: u64) -> Result<AlbumDetail, ResolveError>;

    /// Album track listing.
    async fn album_tracks(&self, album_id: u64) -> Result<Vec<TrackListEntry>, ResolveError>;
}

/// Link to author/title/thumbnail lookup.
#[async_trait]
pub trait VideoInfoApi: Send + Sync {
    async fn video_info(&self, link: &str) -> Result<RawVideoInfo, ResolveError>;
}

// Implement traits for real clients

#[async_trait]
impl CatalogApi for super::catalog::CatalogClient {
    async fn search(
        &self,
        artist: &str,
        title: &str,
    ) -> Result<Vec<TrackCandidate>, ResolveError> {
        self.search(artist, title).await
    }

    async fn album(&self, album_id: u64) -> Result<AlbumDetail, ResolveError> {
        self.album(album_id).await
    }

    async fn album_tracks(&self, album_id: u64) -> Result<Vec<TrackListEntry>, ResolveError> {
        self.album_tracks(album_id).await
    }
}

#[async_trait]
impl VideoInfoApi for super::video::VideoInfoClient {
    async fn video_info(&self, link: &str) -> Result<RawVideoInfo, ResolveError> {
        self.video_info(link).await
    }
}
