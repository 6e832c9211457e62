use log::warn;
use serde_json::Value;

use super::fake;
use crate::config::DEFAULT_MAX_DEPTH;
use crate::parse::ref_resolve::RefResolver;
use crate::parse::schema::{Schema, SchemaOrRef, SchemaType};

/// Largest array the synthesizer fabricates, regardless of declared
/// bounds.
const MAX_ARRAY_EXAMPLE_LEN: u64 = 5;
/// Element count when a schema declares no array bounds at all.
const DEFAULT_ARRAY_EXAMPLE_LEN: u64 = 3;

/// Synthesizes a representative value for schemas that carry no example of
/// their own. Literal `example` values and enumerations always win;
/// everything else comes from format- and property-name-driven synthetic
/// data.
#[derive(Debug, Clone, Copy)]
pub struct ExampleSynthesizer<'a> {
    resolver: RefResolver<'a>,
    max_depth: usize,
}

impl<'a> ExampleSynthesizer<'a> {
    pub fn new(resolver: RefResolver<'a>) -> Self {
        Self {
            resolver,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Override the recursion budget (`RenderConfig::max_depth`).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Produce a representative value for a schema node. `property_name`
    /// feeds the name heuristics when the schema itself gives no hints.
    /// Unknown and unresolvable schemas yield `Value::Null`.
    pub fn synthesize(&self, schema: &SchemaOrRef, property_name: Option<&str>) -> Value {
        self.synthesize_at(schema, property_name, 0)
    }

    fn synthesize_at(
        &self,
        schema: &SchemaOrRef,
        property_name: Option<&str>,
        depth: usize,
    ) -> Value {
        if depth >= self.max_depth {
            warn!("example: depth limit reached, yielding null");
            return Value::Null;
        }
        let resolved = match self.resolver.resolve_schema_or_ref(schema) {
            Ok(resolved) => resolved,
            Err(err) => {
                warn!("example: unresolvable schema yields null: {err}");
                return Value::Null;
            }
        };
        self.for_schema(&resolved, property_name, depth)
    }

    fn for_schema(&self, schema: &Schema, property_name: Option<&str>, depth: usize) -> Value {
        let Some(ty) = schema.primary_type() else {
            return Value::Null;
        };
        if ty == SchemaType::Null {
            return Value::Null;
        }
        if let Some(ref example) = schema.example {
            return example.clone();
        }
        match ty {
            SchemaType::String => string_example(schema, property_name),
            SchemaType::Number | SchemaType::Integer => number_example(schema, property_name),
            SchemaType::Boolean => Value::Bool(fake::boolean()),
            SchemaType::Array => self.array_example(schema, property_name, depth),
            SchemaType::Object => self.object_example(schema, depth),
            SchemaType::Null => Value::Null,
        }
    }

    fn array_example(&self, schema: &Schema, property_name: Option<&str>, depth: usize) -> Value {
        let Some(ref items) = schema.items else {
            return Value::Array(Vec::new());
        };
        // One representative element, repeated. Declared bounds size the
        // array but never past the cap.
        let declared = schema
            .min_items
            .or(schema.max_items)
            .unwrap_or(DEFAULT_ARRAY_EXAMPLE_LEN);
        let len = declared.min(MAX_ARRAY_EXAMPLE_LEN) as usize;
        let item = self.synthesize_at(items, property_name, depth + 1);
        Value::Array(vec![item; len])
    }

    fn object_example(&self, schema: &Schema, depth: usize) -> Value {
        let mut map = serde_json::Map::new();
        for (name, prop) in &schema.properties {
            map.insert(name.clone(), self.synthesize_at(prop, Some(name), depth + 1));
        }
        Value::Object(map)
    }
}

fn string_example(schema: &Schema, property_name: Option<&str>) -> Value {
    if let Some(first) = schema.enum_values.first() {
        return first.clone();
    }
    if let Some(ref format) = schema.format {
        if let Some(value) = format_example(format) {
            return Value::String(value);
        }
    }
    if let Some(name) = property_name {
        if let Some(value) = fake::for_property_name(name) {
            return Value::String(value);
        }
    }
    Value::String(fake::sentence())
}

fn format_example(format: &str) -> Option<String> {
    match format {
        "email" => Some(fake::email()),
        "date" => Some(fake::date()),
        "date-time" => Some(fake::date_time()),
        "uuid" => Some(fake::uuid()),
        "uri" | "url" => Some(fake::url()),
        "ipv4" => Some(fake::ipv4()),
        "ipv6" => Some(fake::ipv6()),
        "phone" => Some(fake::phone()),
        _ => None,
    }
}

fn number_example(schema: &Schema, property_name: Option<&str>) -> Value {
    if let Some(name) = property_name {
        if let Some(value) = numeric_heuristic(name) {
            return value;
        }
    }
    match (schema.minimum, schema.maximum) {
        (Some(min), Some(max)) => Value::from(fake::integer_between(min, max)),
        (Some(min), None) => Value::from(fake::integer_between(min, min + 100.0)),
        _ => Value::from(fake::integer_in(1, 100)),
    }
}

fn numeric_heuristic(name: &str) -> Option<Value> {
    let lower = name.to_lowercase();
    if lower.contains("age") {
        Some(Value::from(fake::integer_in(18, 80)))
    } else if lower.contains("price") || lower.contains("cost") || lower.contains("amount") {
        Some(Value::from(fake::price()))
    } else if lower.contains("rating") || lower.contains("score") {
        Some(Value::from(fake::integer_in(1, 5)))
    } else if lower.contains("count") || lower.contains("total") {
        Some(Value::from(fake::integer_in(0, 100)))
    } else {
        None
    }
}
