//! Port interfaces for the application layer

use async_trait::async_trait;
use std::path::Path;

use crate::application::ApplicationError;
use crate::generation::Artifact;

/// Writes rendered sources to the output destination
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Write one artifact, creating parent directories as needed
    async fn write_artifact(&self, artifact: &Artifact) -> Result<(), ApplicationError>;

    /// Write every artifact in order, stopping at the first failure
    async fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<(), ApplicationError> {
        for artifact in artifacts {
            self.write_artifact(artifact).await?;
        }
        Ok(())
    }

    /// Ensure a directory exists
    async fn ensure_directory(&self, path: &Path) -> Result<(), ApplicationError>;
}
