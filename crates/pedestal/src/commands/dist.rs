//! Library release artifact command.

use std::path::Path;

use anyhow::Result;
use pedestal_site::build_dist;

use crate::config;

/// Run the dist command.
pub async fn run(config_path: &Path) -> Result<()> {
    let file = config::load(config_path)?;
    let config = file.site_config(None, false);

    tracing::info!(
        "Building release artifacts for {} v{}...",
        config.library.name,
        config.library.version
    );

    let dist_dir = build_dist(&config)?;

    tracing::info!("Output: {}", dist_dir.display());

    Ok(())
}
