//! Registry implementations for fetching release information

pub mod github;

pub use github::GitHubRegistry;

use crate::config::USER_AGENT;

/// Builds the HTTP client shared by the registry and the vendor feed
pub fn build_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().user_agent(USER_AGENT).build()
}
