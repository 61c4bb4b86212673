//! Tunelift - resolve a video link to music catalog metadata.
//!
//! Takes a video link, cleans up its title, and matches it against a music
//! catalog to produce album, cover, genre and track number information.

pub mod cli;
pub mod config;
pub mod error;
pub mod resolver;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so stdout stays clean JSON
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("tunelift=info".parse()?))
        .init();

    cli::run_command(&args)
}
