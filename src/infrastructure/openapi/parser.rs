//! Swagger v2 document parser
//!
//! Converts the raw JSON value of a Swagger document into the
//! [`ServiceDefinition`] domain model. Only the parts the generator reads are
//! kept: definitions with their properties, and operations with their
//! parameters.

use indexmap::IndexMap;
use serde_json::{Map, Value as JsonValue};

use crate::generation::{
    GenerationError, HttpMethod, Operation, Parameter, ParameterKind, ParameterLocation,
    PropertySchema, SchemaObject, ServiceDefinition,
};

/// Swagger document parser
pub struct SwaggerParser {
    /// The raw JSON value of the document
    pub json: JsonValue,
}

impl SwaggerParser {
    /// Create a new parser from JSON content
    pub fn new(json: JsonValue) -> Self {
        Self { json }
    }

    /// Parse the document into the domain model
    pub fn parse(&self) -> Result<ServiceDefinition, GenerationError> {
        let version = self
            .json
            .get("swagger")
            .or_else(|| self.json.get("openapi"))
            .and_then(JsonValue::as_str)
            .map(String::from);

        let title = self
            .json
            .get("info")
            .and_then(|info| info.get("title"))
            .and_then(JsonValue::as_str)
            .map(String::from);

        let definitions = self.parse_definitions()?;
        let paths = self.parse_paths()?;

        tracing::debug!(
            definitions = definitions.len(),
            paths = paths.len(),
            "Parsed Swagger document"
        );

        Ok(ServiceDefinition {
            version,
            title,
            definitions,
            paths,
        })
    }

    /// `definitions` is optional; a document without it simply has no types
    fn parse_definitions(&self) -> Result<IndexMap<String, SchemaObject>, GenerationError> {
        let Some(definitions) = self.json.get("definitions") else {
            return Ok(IndexMap::new());
        };

        let definitions = definitions.as_object().ok_or_else(|| {
            GenerationError::ValidationError("'definitions' must be an object".to_string())
        })?;

        definitions
            .iter()
            .map(|(name, schema)| {
                self.parse_schema(name, schema)
                    .map(|schema| (name.clone(), schema))
            })
            .collect()
    }

    fn parse_schema(&self, name: &str, schema: &JsonValue) -> Result<SchemaObject, GenerationError> {
        let schema = schema.as_object().ok_or_else(|| {
            GenerationError::ValidationError(format!("Definition '{name}' must be an object"))
        })?;

        let properties = match schema.get("properties") {
            None => IndexMap::new(),
            Some(properties) => properties
                .as_object()
                .ok_or_else(|| {
                    GenerationError::ValidationError(format!(
                        "Properties of definition '{name}' must be an object"
                    ))
                })?
                .iter()
                .map(|(property, value)| (property.clone(), parse_property(name, property, value)))
                .collect::<IndexMap<_, _>>(),
        };

        Ok(SchemaObject {
            schema_type: schema
                .get("type")
                .and_then(JsonValue::as_str)
                .map(String::from),
            reference: schema
                .get("$ref")
                .and_then(JsonValue::as_str)
                .map(String::from),
            properties,
        })
    }

    fn parse_paths(
        &self,
    ) -> Result<IndexMap<String, IndexMap<HttpMethod, Operation>>, GenerationError> {
        let paths = self
            .json
            .get("paths")
            .and_then(JsonValue::as_object)
            .ok_or_else(|| {
                GenerationError::ValidationError("Missing 'paths' object".to_string())
            })?;

        let mut parsed = IndexMap::with_capacity(paths.len());
        for (path, path_item) in paths {
            let path_item = path_item.as_object().ok_or_else(|| {
                GenerationError::ValidationError(format!("Path item '{path}' must be an object"))
            })?;

            // Path items may also hold `parameters`, `$ref` and `x-` keys
            let mut methods = IndexMap::new();
            for (key, method_item) in path_item {
                let Ok(method) = key.parse::<HttpMethod>() else {
                    continue;
                };
                let method_item = method_item.as_object().ok_or_else(|| {
                    GenerationError::ValidationError(format!(
                        "Operation {} {path} must be an object",
                        method.as_str().to_uppercase()
                    ))
                })?;
                methods.insert(method, self.build_operation(path, method, method_item)?);
            }

            parsed.insert(path.clone(), methods);
        }

        Ok(parsed)
    }

    /// Build an Operation from path, method, and method item
    fn build_operation(
        &self,
        path: &str,
        method: HttpMethod,
        method_item: &Map<String, JsonValue>,
    ) -> Result<Operation, GenerationError> {
        let operation_id = method_item
            .get("operationId")
            .and_then(JsonValue::as_str)
            .ok_or_else(|| {
                GenerationError::ValidationError(format!(
                    "Operation {} {path} is missing 'operationId'",
                    method.as_str().to_uppercase()
                ))
            })?
            .to_string();

        let summary = method_item
            .get("summary")
            .and_then(JsonValue::as_str)
            .unwrap_or_default()
            .to_string();

        let parameters = match method_item.get("parameters") {
            None => Vec::new(),
            Some(parameters) => parameters
                .as_array()
                .ok_or_else(|| {
                    GenerationError::ValidationError(format!(
                        "Parameters of operation '{operation_id}' must be an array"
                    ))
                })?
                .iter()
                .map(|parameter| parse_parameter(&operation_id, parameter))
                .collect::<Result<Vec<_>, _>>()?,
        };

        Ok(Operation {
            id: operation_id,
            path: path.to_string(),
            method,
            summary,
            parameters,
        })
    }
}

/// `type` first, then `$ref`; any other shape is kept as unsupported so the
/// walker can skip it
fn parse_property(owner: &str, name: &str, value: &JsonValue) -> PropertySchema {
    if let Some(schema_type) = value.get("type").and_then(JsonValue::as_str) {
        return PropertySchema::Scalar {
            schema_type: schema_type.to_string(),
            format: value
                .get("format")
                .and_then(JsonValue::as_str)
                .map(String::from),
        };
    }

    if let Some(reference) = value.get("$ref").and_then(JsonValue::as_str) {
        return PropertySchema::Reference(reference.to_string());
    }

    tracing::debug!(definition = %owner, property = %name, "Property has no 'type' or '$ref'");
    PropertySchema::Unsupported
}

fn parse_parameter(operation_id: &str, parameter: &JsonValue) -> Result<Parameter, GenerationError> {
    if let Some(reference) = parameter.get("$ref").and_then(JsonValue::as_str) {
        return Ok(Parameter {
            name: String::new(),
            location: None,
            required: false,
            kind: ParameterKind::Reference(reference.to_string()),
        });
    }

    let name = parameter
        .get("name")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| {
            GenerationError::ValidationError(format!(
                "Parameter of operation '{operation_id}' is missing 'name'"
            ))
        })?
        .to_string();

    let location = parameter
        .get("in")
        .and_then(JsonValue::as_str)
        .map(str::parse::<ParameterLocation>)
        .transpose()?;

    let required = parameter
        .get("required")
        .and_then(JsonValue::as_bool)
        .unwrap_or(false);

    let kind = match parameter.get("type").and_then(JsonValue::as_str) {
        Some(schema_type) => ParameterKind::Scalar {
            schema_type: schema_type.to_string(),
        },
        None => ParameterKind::Schema,
    };

    Ok(Parameter {
        name,
        location,
        required,
        kind,
    })
}
