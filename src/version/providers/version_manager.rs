//! Language version manager (pyenv) provider

use std::sync::Arc;

use tracing::info;

use crate::config::VERSION_MANAGER_LABEL_PREFIX;
use crate::version::command::{CommandRunner, Invocation};
use crate::version::error::ResolveError;
use crate::version::provider::{ProviderKind, VersionProvider};
use crate::version::types::ResolvedVersion;

/// Asks `pyenv` for the newest known release matching a constraint ("3", "3.11").
///
/// Output is kept raw, trailing newline included; the manifest merge trims it.
pub struct VersionManagerProvider {
    constraint: String,
    runner: Arc<dyn CommandRunner>,
}

impl VersionManagerProvider {
    pub fn new(constraint: &str, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            constraint: constraint.to_string(),
            runner,
        }
    }

    /// Label for this constraint, e.g. "3" -> "python3"
    pub fn label(&self) -> String {
        format!("{}{}", VERSION_MANAGER_LABEL_PREFIX, self.constraint)
    }

    fn invocation(&self) -> Invocation {
        Invocation::new("pyenv", ["latest", "--known", self.constraint.as_str()])
    }
}

#[async_trait::async_trait]
impl VersionProvider for VersionManagerProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::VersionManager
    }

    fn describe(&self) -> String {
        format!("pyenv {}", self.constraint)
    }

    async fn resolve(&self) -> Result<Vec<ResolvedVersion>, ResolveError> {
        let invocation = self.invocation();
        let output = self
            .runner
            .run(&invocation)
            .await?
            .into_success(&invocation)?;

        if output.stdout.trim().is_empty() {
            return Err(ResolveError::command(&invocation, "empty output"));
        }

        info!("{}: {}", self.label(), output.stdout.trim_end());
        Ok(vec![ResolvedVersion::new(self.label(), output.stdout)])
    }
}
