//! Video-info disk cache.
//!
//! Caches provider lookups to avoid repeated requests for the same link.
//! Entries are JSON files named by the SHA-256 of the link.

use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};

use crate::resolver::domain::RawVideoInfo;

/// Video-info disk cache.
pub struct VideoInfoCache {
    cache_dir: PathBuf,
}

impl VideoInfoCache {
    /// Create a new cache in the specified directory.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        let cache_dir = cache_dir.into();
        if let Err(e) = fs::create_dir_all(&cache_dir) {
            tracing::warn!("Could not create cache directory {:?}: {}", cache_dir, e);
        }
        Self { cache_dir }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.cache_dir
    }

    /// Get cached info for a link. Unreadable entries count as misses.
    pub fn get(&self, link: &str) -> Option<RawVideoInfo> {
        let path = self.cache_path(link);
        let data = fs::read(&path).ok()?;

        match serde_json::from_slice(&data) {
            Ok(info) => Some(info),
            Err(e) => {
                tracing::warn!("Ignoring corrupt cache entry {:?}: {}", path, e);
                None
            }
        }
    }

    /// Store info for a link.
    pub fn put(&self, link: &str, info: &RawVideoInfo) -> Result<PathBuf, std::io::Error> {
        let path = self.cache_path(link);
        let data = serde_json::to_vec(info)?;
        fs::write(&path, data)?;
        Ok(path)
    }

    /// Check if a link is cached.
    pub fn contains(&self, link: &str) -> bool {
        self.cache_path(link).exists()
    }

    /// Clear all cached entries.
    pub fn clear(&self) -> Result<(), std::io::Error> {
        if self.cache_dir.exists() {
            for entry in fs::read_dir(&self.cache_dir)? {
                let entry = entry?;
                if entry.file_type()?.is_file() {
                    fs::remove_file(entry.path())?;
                }
            }
        }
        Ok(())
    }

    /// Get the total size of the cache in bytes.
    pub fn size_bytes(&self) -> u64 {
        fs::read_dir(&self.cache_dir)
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .filter_map(|e| e.metadata().ok())
                    .map(|m| m.len())
                    .sum()
            })
            .unwrap_or(0)
    }

    fn cache_path(&self, link: &str) -> PathBuf {
        let key = Sha256::digest(link.trim().as_bytes());
        self.cache_dir.join(format!("{:x}.json", key))
    }
}
