use std::borrow::Cow;
use std::collections::HashSet;

use serde_json::Value;

use super::document::Document;
use super::schema::{Schema, SchemaOrRef};
use crate::error::ResolveError;

/// Resolves local `$ref` pointers against one document.
///
/// Constructed per rendering pass and holding the root by shared
/// reference, so concurrent passes over different documents cannot observe
/// each other's state. Every failure is recoverable: callers degrade to an
/// opaque schema or a `null` example instead of aborting the render.
#[derive(Debug, Clone, Copy)]
pub struct RefResolver<'a> {
    root: &'a Value,
}

impl<'a> RefResolver<'a> {
    pub fn new(doc: &'a Document) -> Self {
        Self { root: doc.root() }
    }

    /// Walk a `#/a/b/c` pointer to the raw node it addresses.
    ///
    /// Only local pointers resolve; external files and URLs are
    /// `UnsupportedRef`. The walk indexes each segment as a mapping key
    /// and stops the instant a segment is missing or the current node is
    /// not a mapping.
    pub fn lookup(&self, ref_path: &str) -> Result<&'a Value, ResolveError> {
        let Some(pointer) = ref_path.strip_prefix("#/") else {
            return Err(ResolveError::UnsupportedRef(ref_path.to_string()));
        };

        let mut current = self.root;
        for segment in pointer.split('/') {
            let key = unescape_segment(segment);
            current = current
                .as_object()
                .and_then(|obj| obj.get(key.as_ref()))
                .ok_or_else(|| ResolveError::RefTargetNotFound(ref_path.to_string()))?;
        }
        Ok(current)
    }

    /// Resolve a pointer to a schema, following `$ref` → `$ref` chains.
    ///
    /// The pointers on the active chain are tracked so a chain that loops
    /// back on itself fails closed as `CircularRef` instead of recursing
    /// until the stack gives out.
    pub fn resolve(&self, ref_path: &str) -> Result<Schema, ResolveError> {
        let mut visiting: HashSet<String> = HashSet::new();
        let mut current = ref_path.to_string();

        loop {
            if !visiting.insert(current.clone()) {
                return Err(ResolveError::CircularRef(ref_path.to_string()));
            }
            let node = self.lookup(&current)?;
            match node.get("$ref").and_then(Value::as_str) {
                Some(next) => current = next.to_string(),
                None => return Ok(Schema::from_value(node)),
            }
        }
    }

    /// Resolve one level of indirection on a schema node. Inline schemas
    /// clone through; opaque nodes degrade to the absent-typed schema.
    pub fn resolve_schema_or_ref(&self, schema: &SchemaOrRef) -> Result<Schema, ResolveError> {
        match schema {
            SchemaOrRef::Ref { ref_path } => self.resolve(ref_path),
            SchemaOrRef::Schema(inline) => Ok(inline.as_ref().clone()),
            SchemaOrRef::Opaque(_) => Ok(Schema::default()),
        }
    }
}

/// JSON pointer segments escape `/` as `~1` and `~` as `~0`.
fn unescape_segment(segment: &str) -> Cow<'_, str> {
    if segment.contains('~') {
        Cow::Owned(segment.replace("~1", "/").replace("~0", "~"))
    } else {
        Cow::Borrowed(segment)
    }
}
