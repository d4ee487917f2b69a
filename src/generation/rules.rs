//! Business rules for the generation domain

use crate::generation::GenerationError;

const JAVA_RESERVED_WORDS: &[&str] = &[
    "_", "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while",
];

/// Validates a dotted package name such as a Maven group or artifact id.
///
/// Every segment must be a Java identifier that is not a reserved word.
pub fn validate_package_name(name: &str) -> Result<(), GenerationError> {
    if name.is_empty() {
        return Err(GenerationError::ValidationError(
            "Package name cannot be empty".to_string(),
        ));
    }

    for segment in name.split('.') {
        identifier_problem(segment).map_err(|problem| {
            GenerationError::ValidationError(format!(
                "Invalid package name '{name}': segment '{segment}' {problem}"
            ))
        })?;
    }

    Ok(())
}

/// Validates a name taken from the document before it becomes a Java
/// declaration and, for types, a file name.
///
/// `kind` names what the identifier is used for in the error message.
pub fn validate_java_identifier(kind: &str, name: &str) -> Result<(), GenerationError> {
    identifier_problem(name).map_err(|problem| {
        GenerationError::ValidationError(format!("'{name}' is not a valid {kind}: it {problem}"))
    })
}

fn identifier_problem(identifier: &str) -> Result<(), &'static str> {
    let mut chars = identifier.chars();
    let Some(first) = chars.next() else {
        return Err("is empty");
    };

    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return Err("must start with a letter");
    }

    if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
        return Err("must contain only letters, digits and underscores");
    }

    if JAVA_RESERVED_WORDS.contains(&identifier) {
        return Err("is a reserved word");
    }

    Ok(())
}
