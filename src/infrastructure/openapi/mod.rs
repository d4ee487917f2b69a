//! Swagger document loading implementations

pub mod composite_loader;
pub mod file_loader;
pub mod http_loader;
pub mod parser;

pub use composite_loader::CompositeOpenApiLoader;
pub use file_loader::FileOpenApiLoader;
pub use http_loader::HttpOpenApiLoader;
pub use parser::SwaggerParser;

use serde_json::Value as JsonValue;

use crate::generation::GenerationError;

/// Decode document text as JSON or YAML.
///
/// The content type and source extension pick the format when they name
/// one; otherwise JSON is tried first with YAML as the fallback.
pub(crate) fn decode_document(
    content: &str,
    source: &str,
    content_type: &str,
) -> Result<JsonValue, GenerationError> {
    if content_type.contains("json") || source.ends_with(".json") {
        serde_json::from_str(content).map_err(GenerationError::SerializationError)
    } else if content_type.contains("yaml")
        || source.ends_with(".yaml")
        || source.ends_with(".yml")
    {
        serde_yaml::from_str(content)
            .map_err(|e| GenerationError::LoadError(format!("Invalid YAML in {source}: {e}")))
    } else {
        serde_json::from_str(content)
            .or_else(|_| serde_yaml::from_str(content))
            .map_err(|e| {
                GenerationError::LoadError(format!(
                    "Document at {source} is neither JSON nor YAML: {e}"
                ))
            })
    }
}
