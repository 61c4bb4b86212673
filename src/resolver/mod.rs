//! Metadata resolution - turns a video link into music catalog metadata.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`catalog/dto.rs`, `video/dto.rs`) - Exact API response shapes
//! - **Adapters** - Convert DTOs to domain models
//! - **Clients** - HTTP clients for the catalog and the video provider
//! - **Normalize / Tracks** - Pure title cleanup and track number lookup
//! - **Matcher** - Catalog search and minimal/full decision
//! - **Service** - High-level orchestration of the whole flow
//!
//! # Usage
//!
//! ```ignore
//! use tunelift::{config, resolver::MetadataResolver};
//!
//! let resolver = MetadataResolver::new(&config::load())?;
//! let metadata = resolver.resolve("https://www.youtube.com/watch?v=...").await?;
//! println!("{} - {}", metadata.artist(), metadata.title());
//! ```

pub mod catalog;
pub mod domain;
mod http;
pub mod matcher;
pub mod normalize;
pub mod service;
pub mod tracks;
pub mod traits;
pub mod video;

pub use domain::{ErrorKind, ErrorResult, ResolveError, ResolvedMetadata};
pub use service::MetadataResolver;
