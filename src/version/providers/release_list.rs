//! Picks labeled versions out of a repository's release list
//!
//! Each label carries a substring constraint (`node.lts: v20`). The first
//! release in upstream order whose tag contains the substring wins.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::version::error::ResolveError;
use crate::version::normalize::normalize_tag;
use crate::version::provider::{ProviderKind, VersionProvider};
use crate::version::registry::ReleaseRegistry;
use crate::version::types::ResolvedVersion;

pub struct ReleaseListProvider {
    group: String,
    owner: String,
    repo: String,
    constraints: IndexMap<String, String>,
    registry: Arc<dyn ReleaseRegistry>,
}

impl ReleaseListProvider {
    pub fn new(
        group: &str,
        owner: &str,
        repo: &str,
        constraints: IndexMap<String, String>,
        registry: Arc<dyn ReleaseRegistry>,
    ) -> Self {
        Self {
            group: group.to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            constraints,
            registry,
        }
    }
}

/// Returns the first tag containing `needle`, in the order given
pub fn find_first_containing<'a>(tags: &'a [String], needle: &str) -> Option<&'a str> {
    tags.iter().map(String::as_str).find(|tag| tag.contains(needle))
}

#[async_trait::async_trait]
impl VersionProvider for ReleaseListProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::ReleaseList
    }

    fn describe(&self) -> String {
        format!("github group {} ({}/{})", self.group, self.owner, self.repo)
    }

    async fn resolve(&self) -> Result<Vec<ResolvedVersion>, ResolveError> {
        let tags = self
            .registry
            .list_release_tags(&self.owner, &self.repo)
            .await?;
        debug!(
            "{}/{}: {} releases on first page",
            self.owner,
            self.repo,
            tags.len()
        );

        let mut resolved = Vec::with_capacity(self.constraints.len());
        let mut missing = Vec::new();

        for (label, needle) in &self.constraints {
            match find_first_containing(&tags, needle) {
                Some(tag) => resolved.push(ResolvedVersion::new(label, normalize_tag(tag)?)),
                None => missing.push(label.clone()),
            }
        }

        if !missing.is_empty() {
            return Err(ResolveError::IncompleteGroupResolution {
                group: self.group.clone(),
                requested: self.constraints.len(),
                resolved: resolved.len(),
                missing,
            });
        }

        Ok(resolved)
    }
}
