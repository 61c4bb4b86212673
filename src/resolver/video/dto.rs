//! oEmbed response shape for the video provider.
//!
//! Reference: https://oembed.com/#section2.3

use serde::{Deserialize, Serialize};

/// `GET <oembed>?url=<link>&format=json`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OEmbedResponse {
    pub title: Option<String>,
    pub author_name: Option<String>,
    pub author_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub thumbnail_width: Option<u32>,
    pub thumbnail_height: Option<u32>,
    pub provider_name: Option<String>,
}

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_video_oembed() {
        let json = r#"{
            "title": "Song (Official Video)",
            "author_name": "Artist - Topic",
            "author_url": "https://www.youtube.com/@artist",
            "type": "video",
            "height": 113,
            "width": 200,
            "version": "1.0",
            "provider_name": "YouTube",
            "provider_url": "https://www.youtube.com/",
            "thumbnail_height": 360,
            "thumbnail_width": 480,
            "thumbnail_url": "https://i.ytimg.com/vi/abc/hqdefault.jpg",
            "html": "<iframe></iframe>"
        }"#;

        let response: OEmbedResponse = serde_json::from_str(json).expect("Should parse oEmbed");
        assert_eq!(response.title.as_deref(), Some("Song (Official Video)"));
        assert_eq!(response.author_name.as_deref(), Some("Artist - Topic"));
        assert_eq!(response.thumbnail_width, Some(480));
    }

    #[test]
    fn test_parse_sparse_oembed() {
        let response: OEmbedResponse = serde_json::from_str(r#"{"title": "x"}"#).unwrap();
        assert!(response.author_name.is_none());
        assert!(response.thumbnail_url.is_none());
    }
}
