use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// Upstream constants
// =============================================================================

/// Default base URL for the GitHub REST API
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Environment variable holding the GitHub API token
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// User agent sent with every HTTP request
pub const USER_AGENT: &str = "image-bot";

/// Owner whose release downloads drop a zero patch version (`7.6` not `7.6.0`)
pub const NON_SEMVER_VENDOR: &str = "gradle";

/// Label the vendor feed version is stored under
pub const VENDOR_FEED_LABEL: &str = "go";

/// Prefix of version manager labels (`python` + `3`)
pub const VERSION_MANAGER_LABEL_PREFIX: &str = "python";

/// Default version manager constraint
pub const DEFAULT_PYTHON_CONSTRAINT: &str = "3";

/// Program used to run package cache commands with elevated privileges
pub const PRIVILEGE_COMMAND: &str = "sudo";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Top-level configuration document
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BotConfig {
    /// Vendor release feed URL
    pub go: String,
    /// Version manager constraint
    #[serde(default = "default_python")]
    pub python: String,
    /// Source forge groups keyed by group label, in file order
    #[serde(default)]
    pub github: IndexMap<String, GitHubGroup>,
    /// Package cache names
    #[serde(default)]
    pub apt: Vec<String>,
}

/// One source forge repository and the labels it should resolve
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GitHubGroup {
    pub owner: String,
    pub repo: String,
    /// Tag prefix used when the repository has no latest release
    #[serde(default, rename = "ref")]
    pub reference: Option<String>,
    /// Label -> substring the release tag must contain
    #[serde(default)]
    pub versions: IndexMap<String, String>,
}

fn default_python() -> String {
    DEFAULT_PYTHON_CONSTRAINT.to_string()
}

impl BotConfig {
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }
}
