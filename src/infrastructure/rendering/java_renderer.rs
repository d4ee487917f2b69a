//! Tera-based Java source renderer

use serde::Serialize;
use std::collections::BTreeSet;
use tera::{Context, Tera};

use crate::generation::sanitizers::{escape_java_string, java_literal_text};
use crate::generation::{
    FieldAnnotation, FieldKind, GeneratedAccessor, GeneratedField, GeneratedType,
    GenerationError, Modifier, SourceRenderer,
};

const FILE_TEMPLATE: &str = "java/file.java.tera";
const CLASS_TEMPLATE: &str = "java/class.java.tera";

const CONTENT_TYPE_IMPORT: &str = "com.manywho.sdk.api.ContentType";
const TYPE_IMPORT: &str = "com.manywho.sdk.services.types.Type";
const ACTION_IMPORT: &str = "com.manywho.sdk.services.actions.Action";

#[derive(Debug, Serialize)]
struct FieldView {
    annotation: String,
    declaration: String,
}

#[derive(Debug, Serialize)]
struct AccessorView {
    signature: String,
    field: String,
}

/// Renders generated declarations as Java compilation units
pub struct JavaSourceRenderer {
    tera: Tera,
}

impl JavaSourceRenderer {
    pub fn new() -> Result<Self, GenerationError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (
                FILE_TEMPLATE,
                include_str!("../../../templates/java/file.java.tera"),
            ),
            (
                CLASS_TEMPLATE,
                include_str!("../../../templates/java/class.java.tera"),
            ),
        ])
        .map_err(|e| GenerationError::RenderError(format!("Failed to load Java templates: {e}")))?;
        // Generated code is not HTML
        tera.autoescape_on(vec![]);

        Ok(Self { tera })
    }

    fn render_class(&self, declaration: &GeneratedType) -> Result<String, GenerationError> {
        let nested = declaration
            .nested
            .iter()
            .map(|nested| self.render_class(nested).map(|body| indent(&body)))
            .collect::<Result<Vec<_>, _>>()?;

        let annotation = declaration.metadata.as_ref().map(|metadata| {
            format!(
                "@Action.Metadata(name = \"{}\", summary = \"{}\", uri = \"{}\")",
                escape_java_string(&metadata.name),
                java_literal_text(&metadata.summary),
                escape_java_string(&metadata.uri)
            )
        });

        let fields: Vec<FieldView> = declaration.fields.iter().map(field_view).collect();
        let accessors: Vec<AccessorView> =
            declaration.accessors.iter().map(accessor_view).collect();

        let mut context = Context::new();
        context.insert("annotation", &annotation);
        context.insert(
            "header",
            &format!(
                "{}class {}",
                modifier_prefix(&declaration.modifiers),
                declaration.name
            ),
        );
        context.insert("fields", &fields);
        context.insert("accessors", &accessors);
        context.insert("nested", &nested);

        let rendered = self.tera.render(CLASS_TEMPLATE, &context).map_err(|e| {
            GenerationError::RenderError(format!(
                "Failed to render class '{}': {e}",
                declaration.name
            ))
        })?;

        Ok(rendered.trim_end().to_string())
    }
}

impl SourceRenderer for JavaSourceRenderer {
    fn render(&self, declaration: &GeneratedType) -> Result<String, GenerationError> {
        let body = self.render_class(declaration)?;

        let mut imports = BTreeSet::new();
        collect_imports(declaration, &mut imports);

        let mut context = Context::new();
        context.insert("package", &declaration.package);
        context.insert("imports", &imports);
        context.insert("body", &body);

        self.tera.render(FILE_TEMPLATE, &context).map_err(|e| {
            GenerationError::RenderError(format!(
                "Failed to render '{}': {e}",
                declaration.qualified_name()
            ))
        })
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }
}

fn java_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Number => "Double",
        FieldKind::String => "String",
    }
}

fn modifier_prefix(modifiers: &[Modifier]) -> String {
    modifiers
        .iter()
        .map(|modifier| format!("{} ", modifier.as_str()))
        .collect()
}

fn field_view(field: &GeneratedField) -> FieldView {
    let annotation = match &field.annotation {
        FieldAnnotation::TypeProperty { content_type, name } => format!(
            "@Type.Property(contentType = ContentType.{content_type}, name = \"{}\")",
            escape_java_string(name)
        ),
        FieldAnnotation::ActionInput {
            content_type,
            label,
            required,
        } => format!(
            "@Action.Input(contentType = ContentType.{content_type}, name = \"{}\", required = {required})",
            escape_java_string(label)
        ),
    };

    FieldView {
        annotation,
        declaration: format!(
            "{}{} {}",
            modifier_prefix(&field.modifiers),
            java_type(field.kind),
            field.name
        ),
    }
}

fn accessor_view(accessor: &GeneratedAccessor) -> AccessorView {
    AccessorView {
        signature: format!(
            "{}{} {}()",
            modifier_prefix(&accessor.modifiers),
            java_type(accessor.returns),
            accessor.name
        ),
        field: accessor.field.clone(),
    }
}

fn collect_imports(declaration: &GeneratedType, imports: &mut BTreeSet<&'static str>) {
    if declaration.metadata.is_some() {
        imports.insert(ACTION_IMPORT);
    }
    for field in &declaration.fields {
        imports.insert(CONTENT_TYPE_IMPORT);
        match field.annotation {
            FieldAnnotation::TypeProperty { .. } => imports.insert(TYPE_IMPORT),
            FieldAnnotation::ActionInput { .. } => imports.insert(ACTION_IMPORT),
        };
    }
    for nested in &declaration.nested {
        collect_imports(nested, imports);
    }
}

fn indent(body: &str) -> String {
    body.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("    {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
