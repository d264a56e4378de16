//! One complete update pass: resolve every version, then rewrite the manifest

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::BotConfig;
use crate::manifest::Manifest;
use crate::version::orchestrator::{Orchestrator, ProviderDeps};

/// Paths for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub config_path: PathBuf,
    pub manifest_path: PathBuf,
}

/// Resolve all configured versions and write them into the manifest.
///
/// The manifest is only read and written after every provider succeeded.
pub async fn run(options: &RunOptions, deps: &ProviderDeps) -> Result<()> {
    let config = BotConfig::load(&options.config_path).context("error loading config")?;

    let versions = Orchestrator::from_config(&config, deps)
        .run()
        .await
        .context("error resolving versions")?;

    let mut manifest = Manifest::load(&options.manifest_path).context("error loading manifest")?;
    let written = manifest.merge(&versions);
    manifest
        .save(&options.manifest_path)
        .context("error updating manifest")?;

    info!(
        "Updated {} keys in {}",
        written,
        options.manifest_path.display()
    );
    Ok(())
}
