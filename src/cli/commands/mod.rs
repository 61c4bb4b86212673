//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `resolve`: Link resolution and offline title normalization
//! - `maintenance`: Config file and cache housekeeping

mod maintenance;
mod resolve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::config::{self, Config};

pub use maintenance::{cmd_clear_cache, cmd_init_config};
pub use resolve::{cmd_normalize, cmd_resolve};

/// Tunelift CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "TUNELIFT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a video link to catalog metadata (prints JSON)
    Resolve {
        /// Video link
        link: String,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Normalize a video title without any network access
    Normalize {
        /// Raw video title
        title: String,
        /// Channel / author name (e.g. "Artist - Topic")
        #[arg(short, long, default_value = "")]
        artist: String,
    },
    /// Write a config file with default settings
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Remove all cached video-info lookups
    ClearCache,
}

impl Cli {
    /// Load the config from `--config` or the default location.
    pub fn load_config(&self) -> Config {
        match &self.config {
            Some(path) => config::load_from(path),
            None => config::load(),
        }
    }
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Resolve { link, pretty } => {
            let rt = Runtime::new()?;
            cmd_resolve(&rt, &cli.load_config(), link, *pretty)
        }
        Commands::Normalize { title, artist } => cmd_normalize(title, artist),
        Commands::InitConfig { force } => cmd_init_config(cli.config.as_deref(), *force),
        Commands::ClearCache => cmd_clear_cache(&cli.load_config()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::parse_from(["tunelift", "resolve", "https://youtu.be/abc", "--pretty"]);
        assert!(matches!(
            cli.command,
            Commands::Resolve { ref link, pretty: true } if link == "https://youtu.be/abc"
        ));
    }

    #[test]
    fn test_parse_normalize_with_global_config() {
        let cli = Cli::parse_from([
            "tunelift",
            "normalize",
            "Song (Official Video)",
            "--artist",
            "Artist - Topic",
            "--config",
            "/tmp/tunelift.toml",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/tunelift.toml")));
        assert!(matches!(cli.command, Commands::Normalize { ref artist, .. } if artist == "Artist - Topic"));
    }
}
