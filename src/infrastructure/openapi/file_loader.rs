//! File-based Swagger document loader
//!
//! This loader handles only file I/O. The actual parsing is done by the SwaggerParser.

use async_trait::async_trait;
use tokio::fs;

use super::decode_document;
use super::parser::SwaggerParser;
use crate::generation::{GenerationError, OpenApiLoader, ServiceDefinition};

/// Loads Swagger documents from local files
#[derive(Debug, Default)]
pub struct FileOpenApiLoader;

impl FileOpenApiLoader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OpenApiLoader for FileOpenApiLoader {
    async fn load(&self, source: &str) -> Result<ServiceDefinition, GenerationError> {
        let content = fs::read_to_string(source).await.map_err(|e| {
            GenerationError::LoadError(format!("Failed to read Swagger document {source}: {e}"))
        })?;

        let document = decode_document(&content, source, "")?;
        SwaggerParser::new(document).parse()
    }
}
