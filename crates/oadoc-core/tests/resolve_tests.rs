use oadoc_core::error::ResolveError;
use oadoc_core::parse;
use oadoc_core::parse::document::Document;
use oadoc_core::parse::schema::{SchemaOrRef, SchemaType};
use oadoc_core::render::{ExampleSynthesizer, type_label};
use serde_json::{Value, json};

const PETSTORE: &str = include_str!("fixtures/petstore.yaml");
const RECURSIVE: &str = include_str!("fixtures/recursive.yaml");
const INVENTORY: &str = include_str!("fixtures/inventory-swagger2.json");

#[test]
fn resolve_component_schema() {
    let doc = parse::from_yaml(PETSTORE).expect("should parse petstore");
    let resolver = doc.resolver();

    let pet = resolver
        .resolve("#/components/schemas/Pet")
        .expect("Pet should resolve");
    assert_eq!(pet.primary_type(), Some(SchemaType::Object));
    assert!(pet.properties.contains_key("name"));
    assert_eq!(pet.required, ["id", "name"]);
}

#[test]
fn resolve_swagger2_definitions() {
    let doc = parse::from_json(INVENTORY).expect("should parse inventory");
    let resolver = doc.resolver();

    let item = resolver
        .resolve("#/definitions/Item")
        .expect("Item should resolve");
    assert_eq!(item.primary_type(), Some(SchemaType::Object));
    assert!(item.properties.contains_key("dimensions"));
}

#[test]
fn missing_target_is_not_found() {
    let doc = parse::from_yaml(PETSTORE).expect("should parse petstore");
    let resolver = doc.resolver();

    let err = resolver
        .resolve("#/components/schemas/DoesNotExist")
        .expect_err("missing schema should not resolve");
    assert!(matches!(err, ResolveError::RefTargetNotFound(_)));

    // A walk that dead-ends on a non-mapping node fails the same way.
    let err = resolver
        .resolve("#/info/title/deeper")
        .expect_err("cannot index into a string");
    assert!(matches!(err, ResolveError::RefTargetNotFound(_)));
}

#[test]
fn external_refs_are_unsupported() {
    let doc = parse::from_yaml(PETSTORE).expect("should parse petstore");
    let resolver = doc.resolver();

    for ref_path in [
        "https://example.com/spec.yaml#/components/schemas/Pet",
        "other.yaml#/components/schemas/Pet",
        "#",
    ] {
        let err = resolver
            .resolve(ref_path)
            .expect_err("non-local pointer should not resolve");
        assert!(matches!(err, ResolveError::UnsupportedRef(_)));
    }
}

#[test]
fn ref_chain_cycle_fails_closed() {
    let doc = parse::from_yaml(RECURSIVE).expect("should parse recursive");
    let resolver = doc.resolver();

    let err = resolver
        .resolve("#/components/schemas/Ping")
        .expect_err("Ping -> Pong -> Ping must not loop");
    assert!(matches!(err, ResolveError::CircularRef(_)));
}

#[test]
fn pointer_escapes_decode() {
    let doc = Document::from_value(json!({
        "definitions": {
            "weird/name": {"type": "string"}
        }
    }))
    .expect("root is an object");
    let resolver = doc.resolver();

    let schema = resolver
        .resolve("#/definitions/weird~1name")
        .expect("escaped pointer should resolve");
    assert_eq!(schema.primary_type(), Some(SchemaType::String));
}

#[test]
fn unresolvable_ref_degrades_without_panicking() {
    let doc = parse::from_yaml(PETSTORE).expect("should parse petstore");
    let node: SchemaOrRef =
        serde_json::from_value(json!({"$ref": "#/components/schemas/DoesNotExist"})).unwrap();

    // The label still names the referenced schema.
    let label = type_label(&node);
    assert!(label.contains("DoesNotExist"));

    // Example synthesis yields null instead of erroring.
    let synthesizer = ExampleSynthesizer::new(doc.resolver());
    assert_eq!(synthesizer.synthesize(&node, None), Value::Null);
}
