//! Fixed-order, fail-fast driver over all configured providers
//!
//! Order: source forge groups (file order), version manager, vendor feed,
//! package cache. Later providers overwrite earlier labels.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::BotConfig;
use crate::version::command::CommandRunner;
use crate::version::error::OrchestratorError;
use crate::version::provider::VersionProvider;
use crate::version::providers::{
    LatestReleaseProvider, PackageCacheProvider, ReleaseListProvider, VendorFeedProvider,
    VersionManagerProvider,
};
use crate::version::registry::ReleaseRegistry;
use crate::version::types::VersionMap;

/// Capabilities injected into providers
#[derive(Clone)]
pub struct ProviderDeps {
    pub registry: Arc<dyn ReleaseRegistry>,
    pub runner: Arc<dyn CommandRunner>,
    pub http: reqwest::Client,
}

pub struct Orchestrator {
    providers: Vec<Arc<dyn VersionProvider>>,
}

impl Orchestrator {
    /// Create an orchestrator that runs `providers` in the given order
    pub fn new(providers: Vec<Arc<dyn VersionProvider>>) -> Self {
        Self { providers }
    }

    /// Build the provider sequence described by `config`
    pub fn from_config(config: &BotConfig, deps: &ProviderDeps) -> Self {
        let mut providers: Vec<Arc<dyn VersionProvider>> = Vec::new();

        for (label, group) in &config.github {
            if group.versions.is_empty() {
                providers.push(Arc::new(LatestReleaseProvider::new(
                    &group.owner,
                    &group.repo,
                    group.reference.clone(),
                    deps.registry.clone(),
                )));
            } else {
                providers.push(Arc::new(ReleaseListProvider::new(
                    label,
                    &group.owner,
                    &group.repo,
                    group.versions.clone(),
                    deps.registry.clone(),
                )));
            }
        }

        providers.push(Arc::new(VersionManagerProvider::new(
            &config.python,
            deps.runner.clone(),
        )));

        providers.push(Arc::new(VendorFeedProvider::new(
            deps.http.clone(),
            &config.go,
        )));

        if !config.apt.is_empty() {
            providers.push(Arc::new(PackageCacheProvider::new(
                config.apt.clone(),
                deps.runner.clone(),
            )));
        }

        Self::new(providers)
    }

    pub fn providers(&self) -> &[Arc<dyn VersionProvider>] {
        &self.providers
    }

    /// Run every provider in order, stopping at the first failure
    pub async fn run(&self) -> Result<VersionMap, OrchestratorError> {
        let mut versions = VersionMap::new();

        for provider in &self.providers {
            let name = provider.describe();
            debug!("Resolving {} ({})", name, provider.kind().as_str());

            let resolved = provider
                .resolve()
                .await
                .map_err(|source| OrchestratorError {
                    provider: name.clone(),
                    source,
                })?;

            for entry in resolved {
                if let Some(previous) = versions.get(&entry.label) {
                    debug!(
                        "{} overrides {}={} with {}",
                        name, entry.label, previous, entry.version
                    );
                }
                versions.insert(entry);
            }
        }

        info!(
            "Resolved {} versions from {} providers",
            versions.len(),
            self.providers.len()
        );
        Ok(versions)
    }
}
