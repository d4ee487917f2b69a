//! Language-neutral declarations produced by the walker and the emitter
//!
//! These records describe *what* is generated (names, tags, metadata); the
//! renderer decides how they look in the target language.

use std::fmt;

/// Semantic data kind tag understood by the target SDK
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Number,
    String,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Number => "Number",
            ContentType::String => "String",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage kind of a generated field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Number,
    String,
}

/// Modifiers carried by generated types and members
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Public,
    Private,
    Static,
    Final,
}

impl Modifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Private => "private",
            Modifier::Static => "static",
            Modifier::Final => "final",
        }
    }
}

/// Structured metadata attached to a generated field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAnnotation {
    /// Property of a data type
    TypeProperty {
        content_type: ContentType,
        name: String,
    },
    /// Input of an action, labelled for display
    ActionInput {
        content_type: ContentType,
        label: String,
        required: bool,
    },
}

impl FieldAnnotation {
    pub fn content_type(&self) -> ContentType {
        match self {
            FieldAnnotation::TypeProperty { content_type, .. }
            | FieldAnnotation::ActionInput { content_type, .. } => *content_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedField {
    pub name: String,
    pub kind: FieldKind,
    pub modifiers: Vec<Modifier>,
    pub annotation: FieldAnnotation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAccessor {
    pub name: String,
    /// Field whose value the accessor returns
    pub field: String,
    pub returns: FieldKind,
    pub modifiers: Vec<Modifier>,
}

/// Metadata identifying an action to the target SDK
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionMetadata {
    pub name: String,
    pub summary: String,
    pub uri: String,
}

/// A type declaration. Built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedType {
    pub name: String,
    /// Package the type lives in; `None` for nested types
    pub package: Option<String>,
    pub modifiers: Vec<Modifier>,
    pub metadata: Option<ActionMetadata>,
    pub fields: Vec<GeneratedField>,
    pub accessors: Vec<GeneratedAccessor>,
    pub nested: Vec<GeneratedType>,
}

impl GeneratedType {
    pub fn field(&self, name: &str) -> Option<&GeneratedField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn nested_type(&self, name: &str) -> Option<&GeneratedType> {
        self.nested.iter().find(|nested| nested.name == name)
    }

    /// Fully qualified name, e.g. `com.example.petstore.types.Pet`
    pub fn qualified_name(&self) -> String {
        match &self.package {
            Some(package) => format!("{package}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

/// Why a schema member produced no declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// `$ref` properties and parameters are not supported yet
    Reference(String),
    /// Scalar types other than `integer` and `string` are not supported yet
    UnsupportedScalar(String),
    /// Body (`schema`) parameters are not supported yet
    NonScalarParameter,
    /// Properties with neither a string `type` nor a `$ref`
    UnsupportedSchema,
    /// Only `type: object` definitions become types
    NotAnObject(Option<String>),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Reference(target) => write!(f, "reference to {target} is not supported"),
            SkipReason::UnsupportedScalar(schema_type) => {
                write!(f, "scalar type '{schema_type}' is not supported")
            }
            SkipReason::NonScalarParameter => f.write_str("non-scalar parameter is not supported"),
            SkipReason::UnsupportedSchema => f.write_str("schema without 'type' or '$ref' is not supported"),
            SkipReason::NotAnObject(Some(schema_type)) => {
                write!(f, "definition of type '{schema_type}' is not an object")
            }
            SkipReason::NotAnObject(None) => f.write_str("definition has no declared type"),
        }
    }
}

/// Result of mapping one schema member to a declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission<T> {
    Emitted(T),
    Skipped(SkipReason),
}

/// A member that was skipped, with the declaration that owned it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedMember {
    pub owner: String,
    pub member: String,
    pub reason: SkipReason,
}

/// The declaration emitted for an operation classified as an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDeclaration {
    pub declaration: GeneratedType,
    /// Output values of the action. Nothing populates these yet.
    pub output_fields: Vec<GeneratedField>,
    pub skipped: Vec<SkippedMember>,
}
