//! Config file and cache housekeeping commands.

use std::path::Path;

use crate::config::{self, Config};
use crate::error::ResultExt;
use crate::resolver::video::VideoInfoCache;

/// Write the default config to `path` (or the default location)
pub fn cmd_init_config(path: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let target = match path {
        Some(p) => p.to_path_buf(),
        None => config::config_path().ok_or(config::ConfigError::NoConfigDir)?,
    };

    if target.exists() && !force {
        eprintln!("Config already exists at {:?} (use --force to overwrite)", target);
        std::process::exit(1);
    }

    config::save_to(&Config::default(), &target).with_context("Failed to write config")?;
    println!("✓ Wrote default config to {:?}", target);
    Ok(())
}

/// Empty the video-info cache directory
pub fn cmd_clear_cache(config: &Config) -> anyhow::Result<()> {
    let cache = VideoInfoCache::new(config.video.resolved_cache_dir());
    let size = cache.size_bytes();

    cache.clear().with_context("Failed to clear video cache")?;

    println!("✓ Cleared {} bytes from {:?}", size, cache.dir());
    Ok(())
}
