//! Data Transfer Objects for application layer

use std::path::PathBuf;

use crate::application::ValidationError;
use crate::generation::{GenerationError, RetryPolicy};
use crate::generation::rules::validate_package_name;

/// Default output directory for generated sources
pub const DEFAULT_OUTPUT_DIR: &str = "./example";

/// Request to scaffold a service from a Swagger document
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    /// Maven group id, also the leading part of the package
    pub group: String,
    /// Maven artifact id, also the trailing part of the package
    pub artifact: String,
    /// URL or file path of the Swagger document
    pub url: String,
    pub output_dir: PathBuf,
    /// Write action sources to disk instead of only reporting them
    pub write_actions: bool,
    /// Run the external client generator before scaffolding
    pub generate_client: bool,
    pub retry: RetryPolicy,
}

impl ScaffoldRequest {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            url: url.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            write_actions: false,
            generate_client: false,
            retry: RetryPolicy::unbounded(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_coordinate("group", &self.group)?;
        validate_coordinate("artifact", &self.artifact)?;

        if self.url.trim().is_empty() {
            return Err(ValidationError::MissingField("url".to_string()));
        }

        if self.retry.max_attempts == Some(0) {
            return Err(ValidationError::InvalidConfiguration(
                "max attempts must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Base package, `<group>.<artifact>`
    pub fn package_name(&self) -> String {
        format!("{}.{}", self.group, self.artifact)
    }

    pub fn types_package(&self) -> String {
        format!("{}.types", self.package_name())
    }

    pub fn actions_package(&self) -> String {
        format!("{}.actions", self.package_name())
    }

    /// Maven-style Java source root under the output directory
    pub fn source_root(&self) -> PathBuf {
        self.output_dir.join("src").join("main").join("java")
    }
}

fn validate_coordinate(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field.to_string()));
    }
    validate_package_name(value).map_err(|e| ValidationError::InvalidCoordinate {
        field: field.to_string(),
        reason: match e {
            GenerationError::ValidationError(message) => message,
            other => other.to_string(),
        },
    })
}

/// Summary of a scaffold run
#[derive(Debug, Clone, Default)]
pub struct ScaffoldResponse {
    pub output_path: PathBuf,
    /// Files written to disk, in write order
    pub written: Vec<PathBuf>,
    pub types_created: usize,
    pub actions_created: usize,
    pub acknowledged: usize,
    pub skipped_members: usize,
    pub client_generated: bool,
}
