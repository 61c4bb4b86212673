//! Adapter layer: oEmbed DTO to [`RawVideoInfo`].

use super::dto;
use crate::resolver::domain::{RawVideoInfo, ResolveError};

/// Author and title are required; the thumbnail may be missing.
pub fn to_video_info(response: dto::OEmbedResponse) -> Result<RawVideoInfo, ResolveError> {
    let author = response
        .author_name
        .ok_or_else(|| ResolveError::MalformedUpstreamData("video info has no author".into()))?;
    let title = response
        .title
        .ok_or_else(|| ResolveError::MalformedUpstreamData("video info has no title".into()))?;

    if response.thumbnail_url.is_none() {
        tracing::warn!("Video info for {:?} has no thumbnail", title);
    }

    Ok(RawVideoInfo {
        author,
        title,
        thumbnail_url: response.thumbnail_url,
    })
}
