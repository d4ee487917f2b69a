//! Walks `definitions` and produces one data type per object schema

use crate::generation::builders::property_field;
use crate::generation::rules::validate_java_identifier;
use crate::generation::{
    Emission, GeneratedType, GenerationError, Modifier, ServiceDefinition, SkipReason,
    SkippedMember,
};

/// Types produced from a document's definitions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalkedTypes {
    pub types: Vec<GeneratedType>,
    pub skipped: Vec<SkippedMember>,
}

/// Produces a `public final` type in `types_package` for every definition
/// whose `type` is `object`.
///
/// Definitions of any other type, `$ref` aliases and unsupported properties
/// are reported in [`WalkedTypes::skipped`]. A definition with neither `type`
/// nor `$ref` fails the walk. So does an object definition or emitted
/// property whose name is not a Java identifier, since it would end up in a
/// file name and a declaration.
pub fn walk_definitions(
    definition: &ServiceDefinition,
    types_package: &str,
) -> Result<WalkedTypes, GenerationError> {
    let mut walked = WalkedTypes::default();

    for (name, schema) in &definition.definitions {
        if schema.schema_type.is_none() && schema.reference.is_none() {
            return Err(GenerationError::ValidationError(format!(
                "Definition '{name}' has neither 'type' nor '$ref'"
            )));
        }

        if !schema.is_object() {
            tracing::debug!(definition = %name, "Skipping non-object definition");
            walked.skipped.push(SkippedMember {
                owner: name.clone(),
                member: name.clone(),
                reason: SkipReason::NotAnObject(schema.schema_type.clone()),
            });
            continue;
        }

        validate_java_identifier("type name", name)?;

        let mut fields = Vec::with_capacity(schema.properties.len());
        for (property_name, property) in &schema.properties {
            match property_field(property_name, property) {
                Emission::Emitted(field) => {
                    validate_java_identifier(
                        &format!("field name in definition '{name}'"),
                        &field.name,
                    )?;
                    fields.push(field);
                }
                Emission::Skipped(reason) => {
                    tracing::debug!(
                        definition = %name,
                        property = %property_name,
                        reason = %reason,
                        "Skipping property"
                    );
                    walked.skipped.push(SkippedMember {
                        owner: name.clone(),
                        member: property_name.clone(),
                        reason,
                    });
                }
            }
        }

        walked.types.push(GeneratedType {
            name: name.clone(),
            package: Some(types_package.to_string()),
            modifiers: vec![Modifier::Public, Modifier::Final],
            metadata: None,
            fields,
            accessors: vec![],
            nested: vec![],
        });
    }

    Ok(walked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{ContentType, PropertySchema, SchemaObject};
    use indexmap::IndexMap;

    fn scalar(schema_type: &str) -> PropertySchema {
        PropertySchema::Scalar {
            schema_type: schema_type.to_string(),
            format: None,
        }
    }

    fn object(properties: Vec<(&str, PropertySchema)>) -> SchemaObject {
        SchemaObject {
            schema_type: Some("object".to_string()),
            reference: None,
            properties: properties
                .into_iter()
                .map(|(name, schema)| (name.to_string(), schema))
                .collect::<IndexMap<_, _>>(),
        }
    }

    #[test]
    fn test_one_type_per_object_definition() {
        let mut definition = ServiceDefinition::default();
        definition.definitions.insert(
            "Pet".to_string(),
            object(vec![("id", scalar("integer")), ("name", scalar("string"))]),
        );
        definition.definitions.insert(
            "Owner".to_string(),
            object(vec![("email", scalar("string"))]),
        );

        let walked = walk_definitions(&definition, "com.example.petstore.types").unwrap();

        assert_eq!(walked.types.len(), 2);
        assert!(walked.skipped.is_empty());

        let pet = &walked.types[0];
        assert_eq!(pet.name, "Pet");
        assert_eq!(pet.package.as_deref(), Some("com.example.petstore.types"));
        assert_eq!(pet.modifiers, vec![Modifier::Public, Modifier::Final]);
        assert_eq!(pet.fields.len(), 2);
        assert_eq!(
            pet.field("id").unwrap().annotation.content_type(),
            ContentType::Number
        );
        assert_eq!(
            pet.field("name").unwrap().annotation.content_type(),
            ContentType::String
        );
        assert!(pet.accessors.is_empty());
    }

    #[test]
    fn test_reference_properties_produce_no_field() {
        let mut definition = ServiceDefinition::default();
        definition.definitions.insert(
            "Pet".to_string(),
            object(vec![
                ("id", scalar("integer")),
                (
                    "category",
                    PropertySchema::Reference("#/definitions/Category".to_string()),
                ),
            ]),
        );

        let walked = walk_definitions(&definition, "pkg.types").unwrap();

        assert_eq!(walked.types.len(), 1);
        assert_eq!(walked.types[0].fields.len(), 1);
        assert!(walked.types[0].field("category").is_none());
        assert_eq!(
            walked.skipped,
            vec![SkippedMember {
                owner: "Pet".to_string(),
                member: "category".to_string(),
                reason: SkipReason::Reference("#/definitions/Category".to_string()),
            }]
        );
    }

    #[test]
    fn test_unsupported_properties_are_skipped() {
        let mut definition = ServiceDefinition::default();
        definition.definitions.insert(
            "Pet".to_string(),
            object(vec![
                ("id", scalar("integer")),
                ("category", PropertySchema::Unsupported),
            ]),
        );

        let walked = walk_definitions(&definition, "pkg.types").unwrap();

        assert_eq!(walked.types[0].fields.len(), 1);
        assert_eq!(walked.skipped[0].member, "category");
        assert_eq!(walked.skipped[0].reason, SkipReason::UnsupportedSchema);
    }

    #[test]
    fn test_non_object_definitions_are_skipped() {
        let mut definition = ServiceDefinition::default();
        definition.definitions.insert(
            "Status".to_string(),
            SchemaObject {
                schema_type: Some("string".to_string()),
                ..Default::default()
            },
        );
        definition.definitions.insert(
            "Alias".to_string(),
            SchemaObject {
                reference: Some("#/definitions/Status".to_string()),
                ..Default::default()
            },
        );

        let walked = walk_definitions(&definition, "pkg.types").unwrap();

        assert!(walked.types.is_empty());
        assert_eq!(walked.skipped.len(), 2);
        assert_eq!(
            walked.skipped[1].reason,
            SkipReason::NotAnObject(None)
        );
    }

    #[test]
    fn test_definition_without_type_or_ref_fails() {
        let mut definition = ServiceDefinition::default();
        definition
            .definitions
            .insert("Composed".to_string(), SchemaObject::default());

        let error = walk_definitions(&definition, "pkg.types").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Validation error: Definition 'Composed' has neither 'type' nor '$ref'"
        );
    }

    #[test]
    fn test_fields_keep_property_order() {
        let mut definition = ServiceDefinition::default();
        definition.definitions.insert(
            "Order".to_string(),
            object(vec![
                ("status", scalar("string")),
                ("quantity", scalar("integer")),
                ("complete", scalar("boolean")),
                ("petId", scalar("integer")),
            ]),
        );

        let walked = walk_definitions(&definition, "pkg.types").unwrap();
        let names: Vec<&str> = walked.types[0]
            .fields
            .iter()
            .map(|field| field.name.as_str())
            .collect();

        assert_eq!(names, vec!["status", "quantity", "petId"]);
        assert_eq!(walked.skipped.len(), 1);
    }

    #[test]
    fn test_invalid_definition_names_fail() {
        for name in ["../x", "Pet Store", "class"] {
            let mut definition = ServiceDefinition::default();
            definition
                .definitions
                .insert(name.to_string(), object(vec![("id", scalar("integer"))]));

            match walk_definitions(&definition, "pkg.types") {
                Err(GenerationError::ValidationError(msg)) => {
                    assert!(msg.starts_with(&format!("'{name}' is not a valid type name")))
                }
                other => panic!("Expected ValidationError for {name:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_invalid_field_name_fails() {
        let mut definition = ServiceDefinition::default();
        definition.definitions.insert(
            "Pet".to_string(),
            object(vec![("id", scalar("integer")), ("class", scalar("string"))]),
        );

        let error = walk_definitions(&definition, "pkg.types").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Validation error: 'class' is not a valid field name in definition 'Pet': it is a reserved word"
        );
    }

    #[test]
    fn test_names_of_skipped_members_are_not_checked() {
        let mut definition = ServiceDefinition::default();
        definition.definitions.insert(
            "Pet".to_string(),
            object(vec![
                ("id", scalar("integer")),
                ("default", scalar("boolean")),
            ]),
        );
        definition.definitions.insert(
            "../Status".to_string(),
            SchemaObject {
                schema_type: Some("string".to_string()),
                ..Default::default()
            },
        );

        let walked = walk_definitions(&definition, "pkg.types").unwrap();
        assert_eq!(walked.types.len(), 1);
        assert_eq!(walked.skipped.len(), 2);
    }
}
