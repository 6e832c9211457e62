pub mod document;
pub mod operation;
pub mod parameter;
pub mod ref_resolve;
pub mod response;
pub mod schema;

use crate::error::ParseError;
use document::Document;

/// Parse a document from YAML. The mapping order of `paths`, method maps,
/// and `properties` survives parsing; everything downstream depends on it.
pub fn from_yaml(input: &str) -> Result<Document, ParseError> {
    let raw: serde_json::Value = serde_yaml_ng::from_str(input)?;
    Document::from_value(raw)
}

/// Parse a document from JSON.
pub fn from_json(input: &str) -> Result<Document, ParseError> {
    let raw: serde_json::Value = serde_json::from_str(input)?;
    Document::from_value(raw)
}
