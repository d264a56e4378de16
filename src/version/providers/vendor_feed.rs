//! Runtime vendor JSON release feed provider
//!
//! The feed (e.g. `https://go.dev/dl/?mode=json`) is a JSON array of release
//! descriptors sorted newest first:
//!
//! ```json
//! [{"version": "go1.21.5", "stable": true, "files": [...]}, ...]
//! ```

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::VENDOR_FEED_LABEL;
use crate::version::error::ResolveError;
use crate::version::normalize::normalize_tag;
use crate::version::provider::{ProviderKind, VersionProvider};
use crate::version::types::ResolvedVersion;

pub struct VendorFeedProvider {
    client: reqwest::Client,
    url: String,
}

impl VendorFeedProvider {
    pub fn new(client: reqwest::Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }

    /// Entries are kept untyped; only the first one's `version` is read.
    async fn fetch_releases(&self) -> Result<Vec<Value>, ResolveError> {
        debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ResolveError::unavailable(&self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Vendor feed returned status {}: {}", status, self.url);
            return Err(ResolveError::unavailable(
                &self.url,
                format!("Unexpected status: {}", status),
            ));
        }

        response.json().await.map_err(|e| {
            warn!("Failed to parse vendor feed response: {}", e);
            ResolveError::unavailable(&self.url, e)
        })
    }
}

#[async_trait::async_trait]
impl VersionProvider for VendorFeedProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::VendorFeed
    }

    fn describe(&self) -> String {
        format!("vendor feed {}", self.url)
    }

    async fn resolve(&self) -> Result<Vec<ResolvedVersion>, ResolveError> {
        let releases = self.fetch_releases().await?;
        let newest = releases
            .first()
            .ok_or_else(|| ResolveError::NoVersionFound(format!("empty feed at {}", self.url)))?;

        let raw = newest
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(|| ResolveError::NoVersionFound(newest.to_string()))?;

        let version = normalize_tag(raw)?;
        info!("{}: {}", VENDOR_FEED_LABEL, version);
        Ok(vec![ResolvedVersion::new(VENDOR_FEED_LABEL, version)])
    }
}
