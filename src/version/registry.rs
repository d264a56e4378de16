//! Registry trait for fetching release information from a source forge

#[cfg(test)]
use mockall::automock;

use crate::version::error::ResolveError;

/// Trait for fetching release tags and tag refs from a source forge host
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseRegistry: Send + Sync {
    /// Fetches the tag names of one page of releases
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tags in upstream order (newest first)
    /// * `Err(ResolveError)` - If the request fails or returns a non-success status
    async fn list_release_tags(&self, owner: &str, repo: &str) -> Result<Vec<String>, ResolveError>;

    /// Fetches the tag name of the release marked as latest
    async fn latest_release_tag(&self, owner: &str, repo: &str) -> Result<String, ResolveError>;

    /// Lists refs whose name starts with `prefix` (e.g. "tags/v21")
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Full ref names (`refs/tags/...`) in chronological order
    async fn matching_tag_refs(
        &self,
        owner: &str,
        repo: &str,
        prefix: &str,
    ) -> Result<Vec<String>, ResolveError>;
}
