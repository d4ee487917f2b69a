//! Filesystem-based output service implementation

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

use crate::application::{ApplicationError, OutputService};
use crate::generation::Artifact;

/// Writes artifacts to the local filesystem, replacing existing files
#[derive(Debug, Default)]
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn write_artifact(&self, artifact: &Artifact) -> Result<(), ApplicationError> {
        if let Some(parent) = artifact.path.parent() {
            self.ensure_directory(parent).await?;
        }

        fs::write(&artifact.path, artifact.content.as_bytes())
            .await
            .map_err(|e| {
                ApplicationError::OutputError(format!(
                    "Failed to write file {}: {e}",
                    artifact.path.display()
                ))
            })?;

        tracing::debug!(path = %artifact.path.display(), bytes = artifact.content.len(), "Wrote file");
        Ok(())
    }

    async fn ensure_directory(&self, path: &Path) -> Result<(), ApplicationError> {
        if path.as_os_str().is_empty() {
            return Ok(());
        }
        fs::create_dir_all(path).await.map_err(|e| {
            ApplicationError::OutputError(format!(
                "Failed to create directory {}: {e}",
                path.display()
            ))
        })
    }
}
