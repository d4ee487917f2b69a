//! Builds the action declaration for an operation classified as an action

use crate::generation::builders::{action_metadata, parameter_input};
use crate::generation::rules::validate_java_identifier;
use crate::generation::utils::to_upper_camel_case;
use crate::generation::{
    ActionDeclaration, Emission, GeneratedType, GenerationError, Modifier, Operation,
    SkippedMember,
};

/// Name of the nested type holding an action's inputs
pub const INPUT_TYPE_NAME: &str = "Input";

/// Emits a `public final` action type named after the operation id.
///
/// The type carries the action metadata and a nested `public static Input`
/// type with one string field and one getter per scalar parameter. The type
/// name and every input field name must be Java identifiers.
pub fn emit_action(
    operation: &Operation,
    actions_package: &str,
) -> Result<ActionDeclaration, GenerationError> {
    let name = to_upper_camel_case(&operation.id);
    validate_java_identifier("action name", &name)?;

    let mut fields = Vec::new();
    let mut accessors = Vec::new();
    let mut skipped = Vec::new();

    for parameter in &operation.parameters {
        match parameter_input(&parameter.name, parameter.required, &parameter.kind) {
            Emission::Emitted((field, accessor)) => {
                validate_java_identifier(
                    &format!("input name in operation '{}'", operation.id),
                    &field.name,
                )?;
                fields.push(field);
                accessors.push(accessor);
            }
            Emission::Skipped(reason) => {
                tracing::debug!(
                    operation_id = %operation.id,
                    parameter = %parameter.name,
                    reason = %reason,
                    "Skipping parameter"
                );
                skipped.push(SkippedMember {
                    owner: operation.id.clone(),
                    member: parameter.name.clone(),
                    reason,
                });
            }
        }
    }

    let input = GeneratedType {
        name: INPUT_TYPE_NAME.to_string(),
        package: None,
        modifiers: vec![Modifier::Public, Modifier::Static],
        metadata: None,
        fields,
        accessors,
        nested: vec![],
    };

    let declaration = GeneratedType {
        name,
        package: Some(actions_package.to_string()),
        modifiers: vec![Modifier::Public, Modifier::Final],
        metadata: Some(action_metadata(operation)),
        fields: vec![],
        accessors: vec![],
        nested: vec![input],
    };

    Ok(ActionDeclaration {
        declaration,
        output_fields: vec![],
        skipped,
    })
}
