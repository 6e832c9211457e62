use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::schema::SchemaOrRef;

/// A media type entry mapping a content type to its schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaOrRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}

/// A response definition. OpenAPI 3 nests schemas under `content`;
/// Swagger 2 puts a single `schema` directly on the response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, MediaType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaOrRef>,
}

impl Response {
    /// The first schema the response exposes, regardless of document
    /// flavor.
    pub fn primary_schema(&self) -> Option<&SchemaOrRef> {
        if let Some(ref schema) = self.schema {
            return Some(schema);
        }
        self.content.values().find_map(|mt| mt.schema.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primary_schema_prefers_swagger2_inline() {
        let response: Response = serde_json::from_value(json!({
            "description": "ok",
            "schema": {"$ref": "#/definitions/Item"}
        }))
        .unwrap();
        assert!(matches!(
            response.primary_schema(),
            Some(SchemaOrRef::Ref { .. })
        ));
    }

    #[test]
    fn test_primary_schema_walks_content() {
        let response: Response = serde_json::from_value(json!({
            "description": "ok",
            "content": {
                "text/plain": {},
                "application/json": {"schema": {"type": "object"}}
            }
        }))
        .unwrap();
        assert!(matches!(
            response.primary_schema(),
            Some(SchemaOrRef::Schema(_))
        ));
    }

    #[test]
    fn test_primary_schema_absent() {
        let response: Response = serde_json::from_value(json!({"description": "no body"})).unwrap();
        assert!(response.primary_schema().is_none());
    }
}
