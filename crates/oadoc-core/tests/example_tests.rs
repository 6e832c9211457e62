use oadoc_core::parse;
use oadoc_core::parse::document::Document;
use oadoc_core::parse::schema::SchemaOrRef;
use oadoc_core::render::ExampleSynthesizer;
use serde_json::{Value, json};

const PETSTORE: &str = include_str!("fixtures/petstore.yaml");
const RECURSIVE: &str = include_str!("fixtures/recursive.yaml");

fn node(value: serde_json::Value) -> SchemaOrRef {
    serde_json::from_value(value).expect("schema node should deserialize")
}

fn empty_doc() -> Document {
    Document::from_value(json!({})).expect("empty object is a valid root")
}

#[test]
fn literal_example_always_wins() {
    let doc = empty_doc();
    let synthesizer = ExampleSynthesizer::new(doc.resolver());

    let value = synthesizer.synthesize(
        &node(json!({"type": "string", "example": "abc", "format": "email"})),
        Some("email"),
    );
    assert_eq!(value, json!("abc"));

    let value = synthesizer.synthesize(
        &node(json!({"type": "array", "example": [1, 2], "items": {"type": "integer"}})),
        None,
    );
    assert_eq!(value, json!([1, 2]));

    let value = synthesizer.synthesize(
        &node(json!({"type": "object", "example": {"k": true}})),
        None,
    );
    assert_eq!(value, json!({"k": true}));
}

#[test]
fn enum_first_value_wins_over_format() {
    let doc = empty_doc();
    let synthesizer = ExampleSynthesizer::new(doc.resolver());

    let value = synthesizer.synthesize(
        &node(json!({"type": "string", "enum": ["pending", "sold"], "format": "email"})),
        None,
    );
    assert_eq!(value, json!("pending"));
}

#[test]
fn format_generators_produce_the_right_shape() {
    let doc = empty_doc();
    let synthesizer = ExampleSynthesizer::new(doc.resolver());
    let string_for = |format: &str| {
        let value = synthesizer.synthesize(
            &node(json!({"type": "string", "format": format})),
            None,
        );
        value.as_str().expect("should be a string").to_string()
    };

    assert!(string_for("email").contains('@'));
    assert!(string_for("date-time").contains('T'));
    assert_eq!(string_for("uuid").len(), 36);
    assert!(string_for("uri").starts_with("https://"));
    assert_eq!(string_for("ipv4").split('.').count(), 4);
    assert!(string_for("ipv6").contains(':'));
    assert!(string_for("phone").starts_with('+'));
}

#[test]
fn array_size_is_capped_at_five() {
    let doc = empty_doc();
    let synthesizer = ExampleSynthesizer::new(doc.resolver());

    let value = synthesizer.synthesize(
        &node(json!({"type": "array", "items": {"type": "string"}, "minItems": 10})),
        None,
    );
    assert_eq!(value.as_array().expect("should be an array").len(), 5);
}

#[test]
fn array_size_follows_declared_bounds_and_defaults() {
    let doc = empty_doc();
    let synthesizer = ExampleSynthesizer::new(doc.resolver());
    let len_of = |schema: serde_json::Value| {
        synthesizer
            .synthesize(&node(schema), None)
            .as_array()
            .expect("should be an array")
            .len()
    };

    assert_eq!(len_of(json!({"type": "array", "items": {"type": "string"}})), 3);
    assert_eq!(
        len_of(json!({"type": "array", "items": {"type": "string"}, "maxItems": 2})),
        2
    );
    // No items at all: an empty array, not null.
    assert_eq!(len_of(json!({"type": "array"})), 0);
}

#[test]
fn repeated_array_elements_are_identical() {
    let doc = empty_doc();
    let synthesizer = ExampleSynthesizer::new(doc.resolver());

    let value = synthesizer.synthesize(
        &node(json!({
            "type": "array",
            "items": {"type": "string", "format": "uuid"}
        })),
        None,
    );
    let items = value.as_array().expect("should be an array");
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|item| item == &items[0]));
}

#[test]
fn exact_numeric_bounds_synthesize_exactly() {
    let doc = empty_doc();
    let synthesizer = ExampleSynthesizer::new(doc.resolver());
    let schema = node(json!({"type": "integer", "minimum": 5, "maximum": 5}));

    for _ in 0..10 {
        assert_eq!(synthesizer.synthesize(&schema, None), json!(5));
    }
}

#[test]
fn numeric_bounds_are_respected() {
    let doc = empty_doc();
    let synthesizer = ExampleSynthesizer::new(doc.resolver());

    for _ in 0..25 {
        let value = synthesizer.synthesize(
            &node(json!({"type": "integer", "minimum": 2, "maximum": 4})),
            None,
        );
        let value = value.as_i64().expect("should be an integer");
        assert!((2..=4).contains(&value));

        let floor_only = synthesizer.synthesize(
            &node(json!({"type": "integer", "minimum": 1000})),
            None,
        );
        let floor_only = floor_only.as_i64().expect("should be an integer");
        assert!((1000..=1100).contains(&floor_only));

        let unbounded = synthesizer.synthesize(&node(json!({"type": "number"})), None);
        let unbounded = unbounded.as_i64().expect("should be an integer");
        assert!((1..=100).contains(&unbounded));
    }
}

#[test]
fn property_name_heuristics_flow_through_objects() {
    let doc = empty_doc();
    let synthesizer = ExampleSynthesizer::new(doc.resolver());

    let value = synthesizer.synthesize(
        &node(json!({
            "type": "object",
            "properties": {
                "email": {"type": "string"},
                "age": {"type": "integer"},
                "active": {"type": "boolean"}
            }
        })),
        None,
    );
    let object = value.as_object().expect("should be an object");

    let email = object["email"].as_str().expect("email should be a string");
    assert!(email.contains('@'));

    let age = object["age"].as_i64().expect("age should be an integer");
    assert!((18..=80).contains(&age));

    assert!(object["active"].is_boolean());
}

#[test]
fn untyped_and_unknown_schemas_yield_null() {
    let doc = empty_doc();
    let synthesizer = ExampleSynthesizer::new(doc.resolver());

    assert_eq!(synthesizer.synthesize(&node(json!({})), None), Value::Null);
    assert_eq!(
        synthesizer.synthesize(&node(json!({"type": "file"})), None),
        Value::Null
    );
    assert_eq!(
        synthesizer.synthesize(&node(json!({"oneOf": [{"type": "string"}]})), Some("email")),
        Value::Null
    );
}

#[test]
fn referenced_schemas_synthesize_deterministic_parts() {
    let doc = parse::from_yaml(PETSTORE).expect("should parse petstore");
    let synthesizer = ExampleSynthesizer::new(doc.resolver());
    let pet = node(json!({"$ref": "#/components/schemas/Pet"}));

    let value = synthesizer.synthesize(&pet, None);
    let object = value.as_object().expect("Pet example should be an object");

    // Literal example and first enum value are bit-exact.
    assert_eq!(object["name"], json!("Bella"));
    assert_eq!(object["status"], json!("available"));

    // Format- and heuristic-driven parts are shape-checked only.
    assert_eq!(object["id"].as_str().expect("id is a string").len(), 36);
    let owner = object["owner"].as_object().expect("owner is an object");
    assert!(owner["email"].as_str().expect("email").contains('@'));

    // Array of referenced objects repeats one representative element.
    let tags = object["tags"].as_array().expect("tags is an array");
    assert_eq!(tags.len(), 3);
    assert!(tags[0].is_object());
}

#[test]
fn structural_recursion_degrades_to_null_past_the_budget() {
    let doc = parse::from_yaml(RECURSIVE).expect("should parse recursive");
    let synthesizer = ExampleSynthesizer::new(doc.resolver()).with_max_depth(3);
    let tree = node(json!({"$ref": "#/components/schemas/TreeNode"}));

    let value = synthesizer.synthesize(&tree, None);
    let object = value.as_object().expect("TreeNode example is an object");
    assert!(object["value"].is_string());

    let children = object["children"].as_array().expect("children is an array");
    assert_eq!(children.len(), 3);
    let child = children[0].as_object().expect("child is an object");
    assert_eq!(child["value"], Value::Null);
    assert_eq!(child["children"], Value::Null);
}
