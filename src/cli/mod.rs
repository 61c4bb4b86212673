//! Command-line interface for tunelift.
//!
//! This module provides CLI commands for resolving links, normalizing
//! titles and maintaining the local config and cache.

mod commands;

pub use commands::{Cli, Commands, run_command};
