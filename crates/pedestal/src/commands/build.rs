//! Site build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use pedestal_records::Catalog;
use pedestal_site::SiteBuilder;

use crate::config;

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, local: bool) -> Result<()> {
    tracing::info!("Building site...");

    let file = config::load(config_path)?;
    let catalog = Catalog::load(&file.docs_data(), &file.examples_dir())?;
    let site = file.site_config(output, local);

    let stats = SiteBuilder::new(site).build(&catalog).await?;

    tracing::info!(
        "Built {} pages with {} examples in {}ms",
        stats.pages,
        catalog.examples().len(),
        stats.duration_ms
    );
    tracing::info!("Output: {}", stats.output_dir.display());

    Ok(())
}
