use serde::{Deserialize, Serialize};

use super::schema::{SchemaOrRef, TypeSet};

/// Where a parameter is carried. The last two locations are Swagger 2
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Query,
    Header,
    Path,
    Cookie,
    #[serde(rename = "formData")]
    FormData,
    Body,
}

/// An operation parameter, typed leniently.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<ParameterLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaOrRef>,

    /// Swagger 2 carries the type keyword inline on the parameter.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub param_type: Option<TypeSet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}

/// A reference, an inline parameter, or a node the typed model cannot
/// absorb.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Parameter(Parameter),
    Opaque(serde_json::Value),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parameter_or_ref_variants() {
        let reference: ParameterOrRef =
            serde_json::from_value(json!({"$ref": "#/components/parameters/PageSize"})).unwrap();
        assert!(matches!(reference, ParameterOrRef::Ref { .. }));

        let inline: ParameterOrRef = serde_json::from_value(json!({
            "name": "limit",
            "in": "query",
            "schema": {"type": "integer"}
        }))
        .unwrap();
        match inline {
            ParameterOrRef::Parameter(p) => {
                assert_eq!(p.name, "limit");
                assert_eq!(p.location, Some(ParameterLocation::Query));
            }
            other => panic!("expected inline parameter, got {other:?}"),
        }

        let malformed: ParameterOrRef = serde_json::from_value(json!({"in": 9})).unwrap();
        assert!(matches!(malformed, ParameterOrRef::Opaque(_)));
    }

    #[test]
    fn test_swagger2_inline_type() {
        let p: Parameter = serde_json::from_value(json!({
            "name": "petId",
            "in": "path",
            "required": true,
            "type": "integer",
            "format": "int64"
        }))
        .unwrap();
        assert!(p.required);
        assert!(p.param_type.is_some());
        assert_eq!(p.format.as_deref(), Some("int64"));
    }
}
