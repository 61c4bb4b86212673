//! Video-info collaborator
//!
//! Author, title and thumbnail for a video link, fetched over oEmbed and
//! cached on disk in a configured directory.

pub mod dto;
mod adapter;
mod cache;
mod client;

pub use cache::VideoInfoCache;
pub use client::VideoInfoClient;
