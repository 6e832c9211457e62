use indexmap::IndexMap;
use serde_json::Value;

use crate::parse::document::Document;
use crate::parse::operation::{HttpMethod, Operation};

/// Group label for operations that declare no tags.
pub const UNTAGGED_GROUP: &str = "other";

/// One operation with its position in the rendered document.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub path: String,
    pub method: HttpMethod,
    pub operation: Operation,
    /// 1-based position within the endpoint's tag group, assigned in
    /// document traversal order.
    pub ordinal: usize,
    /// Stable identifier linking the table of contents to the endpoint
    /// body: `endpoint-<tag>-<ordinal>`.
    pub anchor_id: String,
}

/// Endpoints sharing a primary tag, in document traversal order.
#[derive(Debug, Clone, PartialEq)]
pub struct TagGroup {
    pub tag: String,
    pub description: Option<String>,
    pub endpoints: Vec<Endpoint>,
}

/// Walk `paths` in document order and group operations by primary tag.
///
/// Groups appear in first-seen order; ordinals and anchors are a pure
/// function of document content and order, so re-running over an
/// unchanged document is bit-identical. Operations whose object fails
/// lenient typing still index with a defaulted view, so the table of
/// contents never silently loses an endpoint.
pub fn index_endpoints(doc: &Document) -> Vec<TagGroup> {
    let mut groups: IndexMap<String, Vec<Endpoint>> = IndexMap::new();

    for (path, item) in doc.paths() {
        for (key, value) in item {
            let Some(method) = HttpMethod::from_key(key) else {
                continue;
            };
            let Some(op_object) = value.as_object() else {
                continue;
            };
            let tag = primary_tag(op_object).unwrap_or_else(|| UNTAGGED_GROUP.to_string());
            let operation: Operation = serde_json::from_value(value.clone()).unwrap_or_default();

            let endpoints = groups.entry(tag.clone()).or_default();
            let ordinal = endpoints.len() + 1;
            endpoints.push(Endpoint {
                path: path.to_string(),
                method,
                operation,
                ordinal,
                anchor_id: format!("endpoint-{tag}-{ordinal}"),
            });
        }
    }

    groups
        .into_iter()
        .map(|(tag, endpoints)| TagGroup {
            description: tag_description(doc, &tag),
            tag,
            endpoints,
        })
        .collect()
}

/// The first entry of the operation's `tags` list, when it is a string.
fn primary_tag(operation: &serde_json::Map<String, Value>) -> Option<String> {
    operation
        .get("tags")
        .and_then(Value::as_array)
        .and_then(|tags| tags.first())
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn tag_description(doc: &Document, tag: &str) -> Option<String> {
    doc.tags
        .iter()
        .find(|decl| decl.name == tag)
        .and_then(|decl| decl.description.clone())
}
