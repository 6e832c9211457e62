use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ref_resolve::RefResolver;
use crate::error::ParseError;

/// API metadata, typed leniently: a document with a malformed `info` block
/// still renders, the fields just come up empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Info {
    pub title: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
}

/// A tag declared at the document root.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TagDecl {
    pub name: String,
    pub description: Option<String>,
}

/// Which specification flavor the document declares. `Unknown` is not an
/// error; this crate renders, it does not validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    OpenApi3,
    Swagger2,
    Unknown,
}

/// A parsed OpenAPI/Swagger document: the raw, order-preserving root plus
/// leniently typed views of the well-known blocks. Immutable for the
/// duration of a rendering pass; every component borrows it read-only.
#[derive(Debug, Clone)]
pub struct Document {
    raw: Value,
    pub flavor: Flavor,
    pub info: Info,
    pub tags: Vec<TagDecl>,
}

impl Document {
    /// Wrap an already-parsed JSON value. A root that is not an object is
    /// the one fatal condition in the whole pipeline: nothing can be
    /// looked up on it, so the pass aborts here.
    pub fn from_value(raw: Value) -> Result<Document, ParseError> {
        if !raw.is_object() {
            return Err(ParseError::NotAnObject);
        }
        let flavor = detect_flavor(&raw);
        let info = raw
            .get("info")
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default();
        let tags = raw
            .get("tags")
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default();
        Ok(Document {
            raw,
            flavor,
            info,
            tags,
        })
    }

    /// The raw root, for pointer resolution.
    pub fn root(&self) -> &Value {
        &self.raw
    }

    /// A resolver borrowing this document for one rendering pass.
    pub fn resolver(&self) -> RefResolver<'_> {
        RefResolver::new(self)
    }

    /// Path items in document order. Empty when `paths` is missing or not
    /// a mapping; entries whose value is not a mapping are skipped.
    pub fn paths(&self) -> impl Iterator<Item = (&str, &serde_json::Map<String, Value>)> {
        self.raw
            .get("paths")
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|paths| paths.iter())
            .filter_map(|(path, item)| item.as_object().map(|obj| (path.as_str(), obj)))
    }

    /// The document's reusable schema definitions: `components.schemas`
    /// for OpenAPI 3, `definitions` for Swagger 2.
    pub fn schema_definitions(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.raw
            .get("components")
            .and_then(|c| c.get("schemas"))
            .or_else(|| self.raw.get("definitions"))
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|defs| defs.iter())
            .map(|(name, schema)| (name.as_str(), schema))
    }
}

fn detect_flavor(root: &Value) -> Flavor {
    if root.get("openapi").and_then(Value::as_str).is_some() {
        Flavor::OpenApi3
    } else if root.get("swagger").and_then(Value::as_str).is_some() {
        Flavor::Swagger2
    } else {
        Flavor::Unknown
    }
}
