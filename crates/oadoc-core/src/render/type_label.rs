use crate::parse::schema::{Schema, SchemaOrRef, SchemaType};

/// A short human-readable type label for a schema node, used by property
/// tables and the table of contents.
///
/// Callers resolve references before asking for a label; a node still
/// carrying `$ref` labels as the referenced schema's name in a code span,
/// which reads correctly once the text passes through the markdown
/// renderer.
pub fn type_label(schema: &SchemaOrRef) -> String {
    match schema {
        SchemaOrRef::Ref { ref_path } => format!("`{}`", ref_name(ref_path)),
        SchemaOrRef::Schema(inline) => schema_label(inline),
        SchemaOrRef::Opaque(_) => "unknown".to_string(),
    }
}

/// Label a resolved schema node.
pub fn schema_label(schema: &Schema) -> String {
    match schema.primary_type() {
        Some(SchemaType::Array) => match schema.items {
            Some(ref items) => format!("array of {}", type_label(items)),
            None => with_format(SchemaType::Array, schema.format.as_deref()),
        },
        Some(SchemaType::Object) => "object".to_string(),
        Some(ty) => with_format(ty, schema.format.as_deref()),
        None => "unknown".to_string(),
    }
}

fn with_format(ty: SchemaType, format: Option<&str>) -> String {
    match format {
        Some(fmt) => format!("{} ({})", ty.as_str(), fmt),
        None => ty.as_str().to_string(),
    }
}

/// The last pointer segment, i.e. the referenced schema's name.
pub fn ref_name(ref_path: &str) -> &str {
    ref_path.rsplit('/').next().unwrap_or(ref_path)
}
