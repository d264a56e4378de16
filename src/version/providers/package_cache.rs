//! System package cache (apt) provider
//!
//! `apt-cache policy <pkg>` prints a block like:
//!
//! ```text
//! docker-ce:
//!   Installed: (none)
//!   Candidate: 5:24.0.7-1~ubuntu.22.04~jammy
//!   Version table:
//!      5:24.0.7-1~ubuntu.22.04~jammy 500
//!         500 https://download.docker.com/linux/ubuntu jammy/stable amd64 Packages
//! ```
//!
//! The first token after the `Version table:` header is the newest version.

use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;
use regex::Regex;
use tracing::{debug, info};

use crate::config::PRIVILEGE_COMMAND;
use crate::version::command::{CommandRunner, Invocation};
use crate::version::error::ResolveError;
use crate::version::provider::{ProviderKind, VersionProvider};
use crate::version::types::ResolvedVersion;

/// `Version table:` header, whitespace, then the rest of the next non-blank line
static VERSION_TABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Version table:\s+([^\n]+)").expect("version table regex"));

/// Extracts the newest version from `apt-cache policy` output.
///
/// Returns `None` when there is no non-blank line after the header.
pub fn extract_policy_version(output: &str) -> Option<String> {
    let line = VERSION_TABLE_RE.captures(output)?.get(1)?.as_str();
    line.split_whitespace().next().map(str::to_string)
}

pub struct PackageCacheProvider {
    packages: Vec<String>,
    runner: Arc<dyn CommandRunner>,
}

impl PackageCacheProvider {
    pub fn new(packages: Vec<String>, runner: Arc<dyn CommandRunner>) -> Self {
        Self { packages, runner }
    }

    async fn refresh_index(&self) -> Result<(), ResolveError> {
        let invocation = Invocation::new(PRIVILEGE_COMMAND, ["apt-get", "update"]);
        self.runner
            .run(&invocation)
            .await?
            .into_success(&invocation)?;
        debug!("Package index refreshed");
        Ok(())
    }

    async fn policy_version(&self, package: &str) -> Result<String, ResolveError> {
        let invocation = Invocation::new(PRIVILEGE_COMMAND, ["apt-cache", "policy", package]);
        let output = self
            .runner
            .run(&invocation)
            .await?
            .into_success(&invocation)?;

        extract_policy_version(&output.combined())
            .ok_or_else(|| ResolveError::command(&invocation, "no version table in output"))
    }
}

#[async_trait::async_trait]
impl VersionProvider for PackageCacheProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::PackageCache
    }

    fn describe(&self) -> String {
        format!("apt packages [{}]", self.packages.join(", "))
    }

    async fn resolve(&self) -> Result<Vec<ResolvedVersion>, ResolveError> {
        self.refresh_index().await?;

        let mut versions: IndexMap<String, String> = IndexMap::new();
        for package in &self.packages {
            let version = self.policy_version(package).await?;
            info!("apt {}: {}", package, version);
            versions.insert(package.clone(), version);
        }

        if versions.len() != self.packages.len() {
            return Err(ResolveError::IncompleteGroupResolution {
                group: "apt".to_string(),
                requested: self.packages.len(),
                resolved: versions.len(),
                missing: Vec::new(),
            });
        }

        Ok(versions
            .into_iter()
            .map(|(label, version)| ResolvedVersion::new(label, version))
            .collect())
    }
}
