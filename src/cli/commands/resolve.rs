//! Link resolution and title normalization commands.

use tokio::runtime::Runtime;

use crate::config::Config;
use crate::error::ResultExt;
use crate::resolver::{MetadataResolver, normalize};

/// Resolve a link and print the metadata as JSON
///
/// On failure the error payload is printed to stderr together with the
/// HTTP status the service would answer with.
pub fn cmd_resolve(rt: &Runtime, config: &Config, link: &str, pretty: bool) -> anyhow::Result<()> {
    let resolver = MetadataResolver::new(config).with_context("Failed to set up HTTP clients")?;

    match rt.block_on(resolver.resolve(link)) {
        Ok(metadata) => {
            tracing::info!(
                "Resolved {:?} by {:?} ({} record)",
                metadata.title(),
                metadata.artist(),
                if metadata.is_full() { "full" } else { "minimal" }
            );
            let json = if pretty {
                serde_json::to_string_pretty(&metadata)?
            } else {
                serde_json::to_string(&metadata)?
            };
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Resolution failed: {}", e);
            eprintln!("{}", serde_json::to_string_pretty(&e.to_error_result())?);
            eprintln!("status: {}", e.status_code());
            std::process::exit(1);
        }
    }
}

/// Print each normalization stage for a title
pub fn cmd_normalize(title: &str, artist: &str) -> anyhow::Result<()> {
    let artist = normalize::normalize_artist(artist);
    let filters = normalize::FilterSet::for_artist(&artist);
    let stripped = filters.apply(title);

    println!("Artist:   {:?}", artist);
    println!("Filters:  {:?}", filters.tokens());
    println!("Stripped: {:?}", stripped);
    println!("Title:    {:?}", normalize::normalize_title(title, &artist));
    Ok(())
}
