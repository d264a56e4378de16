//! Resolves a repository's latest release, falling back to tag refs
//!
//! Repositories without published releases can still be tracked through a
//! reference token: `ref: "4"` lists `tags/4*` and takes the most recent.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::NON_SEMVER_VENDOR;
use crate::version::error::ResolveError;
use crate::version::normalize::{normalize_tag, trim_zero_patch};
use crate::version::provider::{ProviderKind, VersionProvider};
use crate::version::registry::ReleaseRegistry;
use crate::version::types::ResolvedVersion;

pub struct LatestReleaseProvider {
    owner: String,
    repo: String,
    reference: Option<String>,
    registry: Arc<dyn ReleaseRegistry>,
}

impl LatestReleaseProvider {
    pub fn new(
        owner: &str,
        repo: &str,
        reference: Option<String>,
        registry: Arc<dyn ReleaseRegistry>,
    ) -> Self {
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            reference: reference.filter(|r| !r.is_empty()),
            registry,
        }
    }

    /// Most recent tag among refs matching `tags/<reference>*`
    async fn resolve_from_ref(&self, reference: &str) -> Result<String, ResolveError> {
        let prefix = format!("tags/{}", reference);
        let refs = self
            .registry
            .matching_tag_refs(&self.owner, &self.repo, &prefix)
            .await?;

        // Refs come back oldest first.
        let latest = refs
            .last()
            .ok_or_else(|| ResolveError::NoVersionFound(prefix.clone()))?;
        normalize_tag(ref_tag_name(latest))
    }
}

/// Strips the `refs/tags/` prefix from a full ref name
pub fn ref_tag_name(full_ref: &str) -> &str {
    full_ref.strip_prefix("refs/tags/").unwrap_or(full_ref)
}

/// Applies owner-specific adjustments to a normalized version
pub fn adjust_for_vendor(owner: &str, version: String) -> String {
    if owner == NON_SEMVER_VENDOR {
        return trim_zero_patch(&version).to_string();
    }
    version
}

#[async_trait::async_trait]
impl VersionProvider for LatestReleaseProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::LatestRelease
    }

    fn describe(&self) -> String {
        format!("github latest release {}/{}", self.owner, self.repo)
    }

    async fn resolve(&self) -> Result<Vec<ResolvedVersion>, ResolveError> {
        let version = match self.registry.latest_release_tag(&self.owner, &self.repo).await {
            Ok(tag) => adjust_for_vendor(&self.owner, normalize_tag(&tag)?),
            Err(e) => {
                let Some(reference) = &self.reference else {
                    return Err(e);
                };
                warn!(
                    "Latest release unavailable for {}/{} ({}); trying tags/{}",
                    self.owner, self.repo, e, reference
                );
                self.resolve_from_ref(reference).await?
            }
        };

        info!("{}/{}: {}", self.owner, self.repo, version);
        Ok(vec![ResolvedVersion::new(&self.repo, version)])
    }
}
