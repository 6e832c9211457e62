use indexmap::IndexMap;
use log::warn;

use crate::config::DEFAULT_MAX_DEPTH;
use crate::parse::ref_resolve::RefResolver;
use crate::parse::schema::{Schema, SchemaOrRef, SchemaType};

/// One leaf row of a flattened schema: a dot/bracket path, the resolved
/// schema at that path, and whether the property is required at its own
/// nesting level.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedProperty {
    pub path: String,
    pub schema: Schema,
    pub required: bool,
}

/// Expand a schema's `properties` into an ordered list of leaf paths.
///
/// Nested objects and arrays of objects expand in place, depth first, so
/// rows keep the document's declaration order at every level. Object rows
/// themselves are never emitted; only leaves are. Required-ness is read
/// from each level's own `required` list — a required parent does not make
/// its children required.
pub fn flatten_properties(
    resolver: &RefResolver<'_>,
    properties: &IndexMap<String, SchemaOrRef>,
    required: &[String],
    path_prefix: &str,
) -> Vec<FlattenedProperty> {
    flatten_properties_bounded(resolver, properties, required, path_prefix, DEFAULT_MAX_DEPTH)
}

/// As [`flatten_properties`], with an explicit recursion budget
/// (`RenderConfig::max_depth`).
pub fn flatten_properties_bounded(
    resolver: &RefResolver<'_>,
    properties: &IndexMap<String, SchemaOrRef>,
    required: &[String],
    path_prefix: &str,
    max_depth: usize,
) -> Vec<FlattenedProperty> {
    let mut out = Vec::new();
    flatten_at(
        resolver,
        properties,
        required,
        path_prefix,
        0,
        max_depth,
        &mut out,
    );
    out
}

/// Resolve a top-level schema node (e.g. a request or response body) and
/// flatten its properties. Non-object schemas produce no rows.
pub fn flatten_schema(resolver: &RefResolver<'_>, schema: &SchemaOrRef) -> Vec<FlattenedProperty> {
    match resolver.resolve_schema_or_ref(schema) {
        Ok(resolved) => {
            flatten_properties(resolver, &resolved.properties, &resolved.required, "")
        }
        Err(err) => {
            warn!("flatten: top-level schema is opaque: {err}");
            Vec::new()
        }
    }
}

fn flatten_at(
    resolver: &RefResolver<'_>,
    properties: &IndexMap<String, SchemaOrRef>,
    required: &[String],
    path_prefix: &str,
    depth: usize,
    max_depth: usize,
    out: &mut Vec<FlattenedProperty>,
) {
    for (name, node) in properties {
        let path = if path_prefix.is_empty() {
            name.clone()
        } else {
            format!("{path_prefix}.{name}")
        };

        let resolved = match resolver.resolve_schema_or_ref(node) {
            Ok(schema) => schema,
            Err(err) => {
                warn!("flatten: treating {path} as opaque: {err}");
                Schema::default()
            }
        };

        let is_required = required.iter().any(|r| r == name);

        if depth >= max_depth {
            warn!("flatten: depth limit reached at {path}, emitting as leaf");
            out.push(FlattenedProperty {
                path,
                schema: resolved,
                required: is_required,
            });
            continue;
        }

        match resolved.primary_type() {
            Some(SchemaType::Object) if !resolved.properties.is_empty() => {
                flatten_at(
                    resolver,
                    &resolved.properties,
                    &resolved.required,
                    &path,
                    depth + 1,
                    max_depth,
                    out,
                );
            }
            Some(SchemaType::Array) => {
                // An array of objects expands through a single
                // representative element; anything else stays a leaf.
                let item_schema = resolved
                    .items
                    .as_deref()
                    .and_then(|items| resolver.resolve_schema_or_ref(items).ok());
                match item_schema {
                    Some(item)
                        if item.primary_type() == Some(SchemaType::Object)
                            && !item.properties.is_empty() =>
                    {
                        let item_path = format!("{path}[0]");
                        flatten_at(
                            resolver,
                            &item.properties,
                            &item.required,
                            &item_path,
                            depth + 1,
                            max_depth,
                            out,
                        );
                    }
                    _ => out.push(FlattenedProperty {
                        path,
                        schema: resolved,
                        required: is_required,
                    }),
                }
            }
            _ => out.push(FlattenedProperty {
                path,
                schema: resolved,
                required: is_required,
            }),
        }
    }
}
