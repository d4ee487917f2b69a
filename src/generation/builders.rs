//! Field, accessor and metadata builders
//!
//! Pure mappings from schema members to declarations. Nothing here touches
//! the document as a whole.

use crate::generation::utils::{accessor_name, readable_label};
use crate::generation::{
    ActionMetadata, ContentType, Emission, FieldAnnotation, FieldKind, GeneratedAccessor,
    GeneratedField, Modifier, Operation, ParameterKind, PropertySchema, SkipReason,
};

/// Maps a schema property to a type field.
///
/// `integer` becomes a number field and `string` a string field; any other
/// scalar, every `$ref` and every unsupported schema is skipped.
pub fn property_field(name: &str, property: &PropertySchema) -> Emission<GeneratedField> {
    match property {
        PropertySchema::Scalar { schema_type, .. } => match schema_type.as_str() {
            "integer" => Emission::Emitted(integer_property_field(name)),
            "string" => Emission::Emitted(string_property_field(name)),
            other => Emission::Skipped(SkipReason::UnsupportedScalar(other.to_string())),
        },
        PropertySchema::Reference(target) => Emission::Skipped(SkipReason::Reference(target.clone())),
        PropertySchema::Unsupported => Emission::Skipped(SkipReason::UnsupportedSchema),
    }
}

pub fn integer_property_field(name: &str) -> GeneratedField {
    GeneratedField {
        name: name.to_string(),
        kind: FieldKind::Number,
        modifiers: vec![Modifier::Private],
        annotation: FieldAnnotation::TypeProperty {
            content_type: ContentType::Number,
            name: name.to_string(),
        },
    }
}

pub fn string_property_field(name: &str) -> GeneratedField {
    GeneratedField {
        name: name.to_string(),
        kind: FieldKind::String,
        modifiers: vec![Modifier::Private],
        annotation: FieldAnnotation::TypeProperty {
            content_type: ContentType::String,
            name: name.to_string(),
        },
    }
}

/// Action inputs are always stored as strings, whatever their declared type
pub fn string_input_field(name: &str, required: bool) -> GeneratedField {
    GeneratedField {
        name: name.to_string(),
        kind: FieldKind::String,
        modifiers: vec![Modifier::Private],
        annotation: FieldAnnotation::ActionInput {
            content_type: ContentType::String,
            label: readable_label(name),
            required,
        },
    }
}

pub fn string_getter(field_name: &str) -> GeneratedAccessor {
    GeneratedAccessor {
        name: accessor_name(field_name),
        field: field_name.to_string(),
        returns: FieldKind::String,
        modifiers: vec![Modifier::Public],
    }
}

/// Metadata block for an action.
///
/// `uri` repeats the operation id rather than the request path.
pub fn action_metadata(operation: &Operation) -> ActionMetadata {
    ActionMetadata {
        name: operation.id.clone(),
        summary: operation.summary.clone(),
        uri: operation.id.clone(),
    }
}

/// Input field and getter for a parameter, or why there is none
pub fn parameter_input(
    name: &str,
    required: bool,
    kind: &ParameterKind,
) -> Emission<(GeneratedField, GeneratedAccessor)> {
    match kind {
        ParameterKind::Scalar { .. } => {
            Emission::Emitted((string_input_field(name, required), string_getter(name)))
        }
        ParameterKind::Schema => Emission::Skipped(SkipReason::NonScalarParameter),
        ParameterKind::Reference(target) => Emission::Skipped(SkipReason::Reference(target.clone())),
    }
}
