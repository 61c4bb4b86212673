//! Video-info client
//!
//! Resolves a video link to author, title and thumbnail through the
//! provider's oEmbed endpoint. Any HTTP error from the provider is reported
//! as a rate limit, which is how the provider signals throttling.

use super::{VideoInfoCache, adapter, dto};
use crate::config::{HttpConfig, VideoConfig};
use crate::resolver::domain::{RawVideoInfo, ResolveError};
use crate::resolver::http;

/// Video-info provider client
pub struct VideoInfoClient {
    http_client: reqwest::Client,
    oembed_url: String,
    cache: Option<VideoInfoCache>,
}

impl VideoInfoClient {
    /// Create a new client from config. The cache directory is created here.
    pub fn new(video: &VideoConfig, http_config: &HttpConfig) -> Result<Self, ResolveError> {
        let cache = video
            .use_cache
            .then(|| VideoInfoCache::new(video.resolved_cache_dir()));

        Ok(Self {
            http_client: http::build_client(http_config)?,
            oembed_url: video.oembed_url.clone(),
            cache,
        })
    }

    /// Create a client for testing with custom endpoint and no cache
    #[cfg(test)]
    pub fn with_base_url(oembed_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            oembed_url: oembed_url.into(),
            cache: None,
        }
    }

    pub fn cache(&self) -> Option<&VideoInfoCache> {
        self.cache.as_ref()
    }

    /// Look up a link, consulting the cache first
    pub async fn video_info(&self, link: &str) -> Result<RawVideoInfo, ResolveError> {
        if let Some(cached) = self.cache.as_ref().and_then(|c| c.get(link)) {
            tracing::debug!("Video info cache hit for {}", link);
            return Ok(cached);
        }

        let info = adapter::to_video_info(self.send_request(link).await?)?;

        if let Some(cache) = &self.cache
            && let Err(e) = cache.put(link, &info)
        {
            tracing::warn!("Failed to cache video info for {}: {}", link, e);
        }

        Ok(info)
    }

    async fn send_request(&self, link: &str) -> Result<dto::OEmbedResponse, ResolveError> {
        let url = self.request_url(link);
        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ResolveError::Unexpected(format!("video info request failed: {}", e)))?;

        check_status(response.status())?;
        http::read_json(response, "video info").await
    }

    fn request_url(&self, link: &str) -> String {
        format!(
            "{}?url={}&format=json",
            self.oembed_url,
            urlencoding::encode(link.trim())
        )
    }
}

/// Every provider error is reported as a rate limit.
fn check_status(status: reqwest::StatusCode) -> Result<(), ResolveError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ResolveError::UpstreamRateLimited(http::describe_status(status)))
    }
}
