//! Client generation through the `swagger-codegen` command line tool

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;

use crate::generation::{ClientGenerationRequest, ClientGenerator, GenerationError};
use crate::infrastructure::shell::CommandExecutor;

/// Command used when none is configured
pub const DEFAULT_CODEGEN_COMMAND: &str = "swagger-codegen";

const IGNORE_FILE_NAME: &str = ".swagger-codegen-ignore";
const IGNORE_FILE: &str = include_str!("../../../templates/swagger-codegen-ignore");

/// Generates a Java Retrofit client with `swagger-codegen`
pub struct SwaggerCodegenClientGenerator {
    command: String,
    executor: Arc<dyn CommandExecutor>,
}

impl SwaggerCodegenClientGenerator {
    pub fn new(command: impl Into<String>, executor: Arc<dyn CommandExecutor>) -> Self {
        Self {
            command: command.into(),
            executor,
        }
    }
}

/// Arguments for one `generate` run
pub fn codegen_arguments(request: &ClientGenerationRequest<'_>) -> Vec<String> {
    let package = request.package;
    vec![
        "generate".to_string(),
        "-i".to_string(),
        request.source.to_string(),
        "-l".to_string(),
        "java".to_string(),
        "--library".to_string(),
        "retrofit".to_string(),
        "-o".to_string(),
        request.output_dir.display().to_string(),
        "--group-id".to_string(),
        request.group.to_string(),
        "--artifact-id".to_string(),
        request.artifact.to_string(),
        "--api-package".to_string(),
        format!("{package}.swagger.api"),
        "--invoker-package".to_string(),
        format!("{package}.swagger"),
        "--model-package".to_string(),
        format!("{package}.swagger.model"),
        "--additional-properties".to_string(),
        "dateLibrary=java8".to_string(),
    ]
}

#[async_trait]
impl ClientGenerator for SwaggerCodegenClientGenerator {
    async fn generate(&self, request: &ClientGenerationRequest<'_>) -> Result<(), GenerationError> {
        fs::create_dir_all(request.output_dir).await?;

        let ignore_path = request.output_dir.join(IGNORE_FILE_NAME);
        fs::write(&ignore_path, IGNORE_FILE).await?;
        tracing::debug!(path = %ignore_path.display(), "Wrote codegen ignore file");

        let args = codegen_arguments(request);
        tracing::info!(command = %self.command, source = %request.source, "Generating Swagger client");

        // `-o` may be relative, so run from the current directory
        let result = self
            .executor
            .execute(&self.command, &args, Path::new("."))
            .await?;

        if !result.is_success() {
            return Err(GenerationError::ExternalCommand(format!(
                "'{}' exited with code {}: {}",
                self.command,
                result.exit_code,
                result.stderr.trim()
            )));
        }

        Ok(())
    }
}
