//! Core types for the generation domain
//!
//! The Swagger document model consumed by the walker and the classifier, and
//! the rendered [`Artifact`] handed to the output layer.

use indexmap::IndexMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::generation::GenerationError;

/// A parsed Swagger v2 service definition.
///
/// Every map keeps the order the keys had in the source document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceDefinition {
    /// Value of the `swagger` (or `openapi`) version field, if present
    pub version: Option<String>,
    /// `info.title`, if present
    pub title: Option<String>,
    /// Schema definitions keyed by definition name
    pub definitions: IndexMap<String, SchemaObject>,
    /// Operations keyed by path, then by HTTP method
    pub paths: IndexMap<String, IndexMap<HttpMethod, Operation>>,
}

impl ServiceDefinition {
    /// Iterate every operation in document order (path first, then method)
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.paths.values().flat_map(|methods| methods.values())
    }

    /// Number of operations across all paths
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(IndexMap::len).sum()
    }
}

/// A schema object from the `definitions` section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaObject {
    /// Declared `type`, absent for composed or referencing schemas
    pub schema_type: Option<String>,
    /// `$ref` target when the definition is an alias of another schema
    pub reference: Option<String>,
    /// Declared properties in document order
    pub properties: IndexMap<String, PropertySchema>,
}

impl SchemaObject {
    pub fn is_object(&self) -> bool {
        self.schema_type.as_deref() == Some("object")
    }
}

/// A single property of a schema object.
///
/// `type` wins over `$ref` when both are present. Anything carrying neither,
/// such as an `allOf` wrapper, is [`PropertySchema::Unsupported`].
#[derive(Debug, Clone, PartialEq)]
pub enum PropertySchema {
    Scalar {
        schema_type: String,
        format: Option<String>,
    },
    Reference(String),
    Unsupported,
}

/// HTTP methods that may appear in a Swagger path item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
}

impl HttpMethod {
    pub fn all() -> &'static [HttpMethod] {
        &[
            HttpMethod::Get,
            HttpMethod::Put,
            HttpMethod::Post,
            HttpMethod::Delete,
            HttpMethod::Options,
            HttpMethod::Head,
            HttpMethod::Patch,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::all()
            .iter()
            .copied()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| GenerationError::ValidationError(format!("Unknown HTTP method: {s}")))
    }
}

/// An operation found under a path and method
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// `operationId`, used as the identifier of everything generated from it
    pub id: String,
    /// The path the operation was declared under (e.g. `/pets/{id}`)
    pub path: String,
    pub method: HttpMethod,
    /// `summary`, empty when the document has none
    pub summary: String,
    pub parameters: Vec<Parameter>,
}

/// Operation parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Parameter name, empty for `$ref` parameters
    pub name: String,
    pub location: Option<ParameterLocation>,
    pub required: bool,
    pub kind: ParameterKind,
}

/// Shape of a parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterKind {
    /// Primitive `type` such as `string` or `integer`
    Scalar { schema_type: String },
    /// A `schema` object, as used by `in: body` parameters
    Schema,
    /// A `$ref` to a shared parameter definition
    Reference(String),
}

/// Parameter location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Body,
    FormData,
}

impl FromStr for ParameterLocation {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "path" => Ok(ParameterLocation::Path),
            "query" => Ok(ParameterLocation::Query),
            "header" => Ok(ParameterLocation::Header),
            "body" => Ok(ParameterLocation::Body),
            "formData" => Ok(ParameterLocation::FormData),
            other => Err(GenerationError::ValidationError(format!(
                "Invalid parameter location: {other}"
            ))),
        }
    }
}

/// Generated artifact
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}
