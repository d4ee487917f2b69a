//! HTTP-based Swagger document loader

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::composite_loader::is_http_url;
use super::decode_document;
use super::parser::SwaggerParser;
use crate::generation::{GenerationError, OpenApiLoader, ServiceDefinition};

/// Loads Swagger documents from HTTP/HTTPS URLs
pub struct HttpOpenApiLoader {
    client: Client,
}

impl HttpOpenApiLoader {
    pub fn new() -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| GenerationError::LoadError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl OpenApiLoader for HttpOpenApiLoader {
    async fn load(&self, source: &str) -> Result<ServiceDefinition, GenerationError> {
        if !is_http_url(source) {
            return Err(GenerationError::LoadError(format!(
                "HttpOpenApiLoader only handles HTTP(S) URLs, got: {source}"
            )));
        }

        let response = self.client.get(source).send().await.map_err(|e| {
            GenerationError::LoadError(format!(
                "Failed to fetch Swagger document from {source}: {e}"
            ))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::LoadError(format!(
                "HTTP {status} when fetching {source}"
            )));
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let content = response.text().await.map_err(|e| {
            GenerationError::LoadError(format!("Failed to read response body: {e}"))
        })?;

        tracing::debug!(%source, %content_type, bytes = content.len(), "Fetched Swagger document");

        let document = decode_document(&content, source, &content_type)?;
        SwaggerParser::new(document).parse()
    }
}
