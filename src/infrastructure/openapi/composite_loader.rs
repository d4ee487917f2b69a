//! Composite loader that picks a loading strategy from the source

use crate::generation::{GenerationError, OpenApiLoader, ServiceDefinition};
use async_trait::async_trait;
use url::Url;

/// Dispatches URLs to the HTTP loader and everything else to the file loader
pub struct CompositeOpenApiLoader {
    http: Box<dyn OpenApiLoader>,
    file: Box<dyn OpenApiLoader>,
}

impl CompositeOpenApiLoader {
    pub fn new() -> Result<Self, GenerationError> {
        Ok(Self {
            http: Box::new(super::HttpOpenApiLoader::new()?),
            file: Box::new(super::FileOpenApiLoader::new()),
        })
    }
}

#[async_trait]
impl OpenApiLoader for CompositeOpenApiLoader {
    async fn load(&self, source: &str) -> Result<ServiceDefinition, GenerationError> {
        if is_http_url(source) {
            tracing::debug!(%source, "Loading Swagger document over HTTP");
            self.http.load(source).await
        } else {
            tracing::debug!(%source, "Loading Swagger document from file");
            self.file.load(source).await
        }
    }
}

/// True for absolute `http`/`https` URLs; anything else is treated as a path
pub fn is_http_url(source: &str) -> bool {
    Url::parse(source).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}
