//! Port interfaces for the generation domain

use async_trait::async_trait;
use std::path::Path;

use crate::generation::{
    ClassificationPrompt, GenerationError, GenerationEvent, GeneratedType, ServiceDefinition,
};

/// Loads Swagger service definitions
#[async_trait]
pub trait OpenApiLoader: Send + Sync {
    /// Load a definition from a URL or a file path
    async fn load(&self, source: &str) -> Result<ServiceDefinition, GenerationError>;
}

/// Supplies classification answers, typically from an operator
#[async_trait]
pub trait DecisionProvider: Send {
    /// Ask one classification question.
    ///
    /// Returns `Ok(None)` when no more answers will come.
    async fn ask(
        &mut self,
        prompt: &ClassificationPrompt,
    ) -> Result<Option<String>, GenerationError>;
}

/// Renders a declaration into target-language source
pub trait SourceRenderer: Send + Sync {
    fn render(&self, declaration: &GeneratedType) -> Result<String, GenerationError>;

    /// Extension of the files produced by this renderer, without the dot
    fn file_extension(&self) -> &'static str;
}

/// Receives progress events
pub trait EventSink: Send + Sync {
    fn emit(&self, event: GenerationEvent);
}

/// Parameters for delegating full client generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientGenerationRequest<'a> {
    pub source: &'a str,
    pub output_dir: &'a Path,
    pub group: &'a str,
    pub artifact: &'a str,
    pub package: &'a str,
}

/// Generates a complete API client with an external generator
#[async_trait]
pub trait ClientGenerator: Send + Sync {
    async fn generate(&self, request: &ClientGenerationRequest<'_>) -> Result<(), GenerationError>;
}
