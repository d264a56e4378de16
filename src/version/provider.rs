//! Provider trait for resolving labeled versions from one upstream source

#[cfg(test)]
use mockall::automock;

use crate::version::error::ResolveError;
use crate::version::types::ResolvedVersion;

/// Category of upstream source a provider talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Versions picked from a repository's release list
    ReleaseList,
    /// A repository's latest release, with tag-ref fallback
    LatestRelease,
    /// System package cache (apt)
    PackageCache,
    /// Language version manager (pyenv)
    VersionManager,
    /// Runtime vendor JSON release feed
    VendorFeed,
}

impl ProviderKind {
    /// Returns the string representation of the provider kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::ReleaseList => "release_list",
            ProviderKind::LatestRelease => "latest_release",
            ProviderKind::PackageCache => "package_cache",
            ProviderKind::VersionManager => "version_manager",
            ProviderKind::VendorFeed => "vendor_feed",
        }
    }
}

/// Trait for resolving one or more labeled versions
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionProvider: Send + Sync {
    /// Returns the source category this provider handles
    fn kind(&self) -> ProviderKind;

    /// Human readable identity used in logs and error context
    fn describe(&self) -> String;

    /// Resolves every label this provider is responsible for.
    ///
    /// Either all labels resolve or an error is returned; never a partial list.
    async fn resolve(&self) -> Result<Vec<ResolvedVersion>, ResolveError>;
}
