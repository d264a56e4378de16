//! GitHub REST API registry implementation

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::version::error::ResolveError;
use crate::version::registry::ReleaseRegistry;

/// Response item from the releases endpoints
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
}

/// Response item from the matching-refs endpoint
#[derive(Debug, Deserialize)]
struct GitRef {
    #[serde(rename = "ref")]
    name: String,
}

/// Registry implementation for the GitHub REST API
pub struct GitHubRegistry {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubRegistry {
    /// Creates a new GitHubRegistry against `base_url`.
    ///
    /// An empty token is treated as unauthenticated.
    pub fn new(client: reqwest::Client, base_url: &str, token: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ResolveError> {
        debug!("GET {}", url);

        let mut request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ResolveError::unavailable(url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(ResolveError::unavailable(
                url,
                format!("Unexpected status: {}", status),
            ));
        }

        response.json::<T>().await.map_err(|e| {
            warn!("Failed to parse GitHub response from {}: {}", url, e);
            ResolveError::unavailable(url, e)
        })
    }
}

#[async_trait::async_trait]
impl ReleaseRegistry for GitHubRegistry {
    async fn list_release_tags(&self, owner: &str, repo: &str) -> Result<Vec<String>, ResolveError> {
        // Single page only; older releases are not visible here.
        let url = format!("{}/repos/{}/{}/releases", self.base_url, owner, repo);
        let releases: Vec<Release> = self.get_json(&url).await?;

        Ok(releases.into_iter().map(|r| r.tag_name).collect())
    }

    async fn latest_release_tag(&self, owner: &str, repo: &str) -> Result<String, ResolveError> {
        let url = format!("{}/repos/{}/{}/releases/latest", self.base_url, owner, repo);
        let release: Release = self.get_json(&url).await?;

        Ok(release.tag_name)
    }

    async fn matching_tag_refs(
        &self,
        owner: &str,
        repo: &str,
        prefix: &str,
    ) -> Result<Vec<String>, ResolveError> {
        let url = format!(
            "{}/repos/{}/{}/git/matching-refs/{}",
            self.base_url, owner, repo, prefix
        );
        let refs: Vec<GitRef> = self.get_json(&url).await?;

        Ok(refs.into_iter().map(|r| r.name).collect())
    }
}
