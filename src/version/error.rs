use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Provider unavailable at {endpoint}: {reason}")]
    ProviderUnavailable { endpoint: String, reason: String },

    #[error("No version found in {0:?}")]
    NoVersionFound(String),

    #[error(
        "Incomplete resolution for {group}: resolved {resolved} of {requested} (missing: {})",
        missing.join(", ")
    )]
    IncompleteGroupResolution {
        group: String,
        requested: usize,
        resolved: usize,
        missing: Vec<String>,
    },

    #[error("Command `{command}` failed: {reason}")]
    ExternalCommandFailure { command: String, reason: String },
}

impl ResolveError {
    /// Wraps a transport or decoding failure for `endpoint`.
    pub fn unavailable(endpoint: &str, reason: impl ToString) -> Self {
        ResolveError::ProviderUnavailable {
            endpoint: endpoint.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn command(command: impl ToString, reason: impl ToString) -> Self {
        ResolveError::ExternalCommandFailure {
            command: command.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// A provider failure annotated with which provider produced it.
#[derive(Debug, Error)]
#[error("{provider}: {source}")]
pub struct OrchestratorError {
    pub provider: String,
    #[source]
    pub source: ResolveError,
}
