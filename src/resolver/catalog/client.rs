//! Deezer HTTP client
//!
//! Handles the three catalog calls the resolver needs: track search,
//! album detail and album track listing. No API key is required.
//! See: https://developers.deezer.com/api

use super::{adapter, dto};
use crate::config::{CatalogConfig, HttpConfig};
use crate::resolver::domain::{AlbumDetail, ResolveError, TrackCandidate, TrackListEntry};
use crate::resolver::http;

/// Music catalog API client
pub struct CatalogClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new client from config
    pub fn new(catalog: &CatalogConfig, http_config: &HttpConfig) -> Result<Self, ResolveError> {
        Ok(Self {
            http_client: http::build_client(http_config)?,
            base_url: catalog.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Search for a track by artist and title. Results keep catalog ranking.
    pub async fn search(
        &self,
        artist: &str,
        title: &str,
    ) -> Result<Vec<TrackCandidate>, ResolveError> {
        let url = self.search_url(artist, title);
        let response: dto::SearchResponse = self.get_json(&url, "catalog search").await?;
        adapter::to_candidates(response)
    }

    /// Fetch genres, release date and track count for an album
    pub async fn album(&self, album_id: u64) -> Result<AlbumDetail, ResolveError> {
        let url = format!("{}/album/{}", self.base_url, album_id);
        let response: dto::AlbumResponse = self.get_json(&url, "catalog album").await?;
        adapter::to_album_detail(response)
    }

    /// Fetch the album's track listing
    pub async fn album_tracks(&self, album_id: u64) -> Result<Vec<TrackListEntry>, ResolveError> {
        let url = format!("{}/album/{}/tracks", self.base_url, album_id);
        let response: dto::TrackListResponse =
            self.get_json(&url, "catalog album tracks").await?;
        adapter::to_track_list(response)
    }

    fn search_url(&self, artist: &str, title: &str) -> String {
        format!(
            "{}/search?q={}",
            self.base_url,
            urlencoding::encode(&search_query(artist, title))
        )
    }

    /// Send a GET and parse the JSON body. Non-success statuses fail fast.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        service: &str,
    ) -> Result<T, ResolveError> {
        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ResolveError::Unexpected(format!("{} request failed: {}", service, e)))?;

        check_status(response.status(), service)?;
        http::read_json(response, service).await
    }
}

/// Any non-success status means the catalog is unavailable. No retry.
fn check_status(status: reqwest::StatusCode, service: &str) -> Result<(), ResolveError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ResolveError::unavailable(service, http::describe_status(status)))
    }
}

/// Advanced-search query: `artist:"<artist>" track:"<title>"`
pub fn search_query(artist: &str, title: &str) -> String {
    format!("artist:\"{}\" track:\"{}\"", artist, title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CatalogClient::new(&CatalogConfig::default(), &HttpConfig::default()).unwrap();
        assert_eq!(client.base_url, "https://api.deezer.com");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let catalog = CatalogConfig {
            base_url: "http://localhost:8080/".to_string(),
        };
        let client = CatalogClient::new(&catalog, &HttpConfig::default()).unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_non_success_status_is_unavailable() {
        use reqwest::StatusCode;

        for status in [StatusCode::TOO_MANY_REQUESTS, StatusCode::SERVICE_UNAVAILABLE] {
            let err = check_status(status, "catalog search").unwrap_err();
            assert!(matches!(err, ResolveError::UpstreamUnavailable { .. }));
            assert_eq!(err.status_code(), 500);
        }

        let err = check_status(StatusCode::SERVICE_UNAVAILABLE, "catalog album").unwrap_err();
        assert!(err.to_string().contains("catalog album"));
        assert!(err.to_string().contains("HTTP 503"));
    }

    #[test]
    fn test_success_status_passes() {
        assert!(check_status(reqwest::StatusCode::OK, "catalog search").is_ok());
    }

    #[test]
    fn test_search_query_format() {
        assert_eq!(search_query("Artist", "Song"), r#"artist:"Artist" track:"Song""#);
    }

    #[test]
    fn test_search_url_is_encoded() {
        let client = CatalogClient::with_base_url("http://localhost:8080");
        assert_eq!(
            client.search_url("AC/DC", "Back in Black"),
            "http://localhost:8080/search?q=artist%3A%22AC%2FDC%22%20track%3A%22Back%20in%20Black%22"
        );
    }
}
