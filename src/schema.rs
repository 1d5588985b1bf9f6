//! JSON Schema synthesis from a single example document.
//!
//! One sample in, one schema out. Shape rules:
//! - objects list every key in `required`, in encounter order, nulls included;
//! - arrays are sampled at element 0 only (heterogeneous arrays go undetected);
//! - a null scalar widens to `["null", "string"]` since one sample carries no
//!   better evidence of the non-null type.

use clap::ValueEnum;
use serde_json::{Map, Value, json};

use crate::error::Error;
use crate::kind::ValueKind;
use crate::walk::{Visitor, Walk};

// ————————————————————————————————————————————————————————————————————————————
// DIALECTS
// ————————————————————————————————————————————————————————————————————————————

/// Supported `$schema` dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dialect {
    #[value(name = "2020-12")]
    V2020_12,
    #[value(name = "2019-09")]
    V2019_09,
    #[value(name = "draft-07")]
    Draft07,
    #[value(name = "draft-04")]
    Draft04,
}

impl Dialect {
    // TODO: 2019-09 still points at the draft-07 URI; correct it once emitted
    // schemas no longer need to match the existing tool byte-for-byte.
    pub fn uri(self) -> &'static str {
        match self {
            Dialect::V2020_12 => "https://json-schema.org/draft/2020-12/schema",
            Dialect::V2019_09 => "http://json-schema.org/draft-07/schema",
            Dialect::Draft07 => "http://json-schema.org/draft-07/schema#",
            Dialect::Draft04 => "http://json-schema.org/draft-04/schema#",
        }
    }

    /// Resolve a dialect by name, failing fast on anything unrecognized.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        match name {
            "2020-12" => Ok(Dialect::V2020_12),
            "2019-09" => Ok(Dialect::V2019_09),
            "draft-07" => Ok(Dialect::Draft07),
            "draft-04" => Ok(Dialect::Draft04),
            other => Err(Error::UnknownDialect(other.to_string())),
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// SYNTHESIS
// ————————————————————————————————————————————————————————————————————————————

/// Build a schema for `value`: the dialect's `$schema` URI merged with the
/// node synthesized for the value itself.
pub fn synthesize(value: &Value, dialect: Dialect, include_examples: bool) -> Result<Value, Error> {
    let node = Walk::root().visit(value, &mut SchemaVisitor { include_examples })?;
    let mut root = Map::new();
    root.insert("$schema".to_string(), Value::from(dialect.uri()));
    if let Value::Object(fields) = node {
        for (key, field) in fields {
            root.insert(key, field);
        }
    }
    Ok(Value::Object(root))
}

struct SchemaVisitor {
    include_examples: bool,
}

impl Visitor for SchemaVisitor {
    type Output = Value;

    fn on_scalar(&mut self, _walk: &Walk, kind: ValueKind, value: &Value) -> Result<Value, Error> {
        if kind == ValueKind::Null {
            return Ok(json!({ "type": ["null", "string"] }));
        }
        let mut node = Map::new();
        node.insert("type".to_string(), Value::from(kind.primitive_name()));
        if self.include_examples {
            node.insert("example".to_string(), value.clone());
        }
        Ok(Value::Object(node))
    }

    fn on_array(&mut self, walk: &Walk, items: &[Value]) -> Result<Value, Error> {
        let mut node = Map::new();
        node.insert("type".to_string(), Value::from("array"));
        let items_node = match items.first() {
            Some(first) => walk.descend("items")?.visit(first, self)?,
            // empty array carries no element evidence: "any"
            None => json!({}),
        };
        node.insert("items".to_string(), items_node);
        Ok(Value::Object(node))
    }

    fn on_object(&mut self, walk: &Walk, entries: &Map<String, Value>) -> Result<Value, Error> {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for (key, child) in entries {
            let child_walk = walk.descend(&format!("properties/{key}"))?;
            properties.insert(key.clone(), child_walk.visit(child, self)?);
            required.push(Value::from(key.clone()));
        }
        let mut node = Map::new();
        node.insert("type".to_string(), Value::from("object"));
        node.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            node.insert("required".to_string(), Value::Array(required));
        }
        Ok(Value::Object(node))
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn dialect_table_is_fixed() {
        assert_eq!(Dialect::V2020_12.uri(), "https://json-schema.org/draft/2020-12/schema");
        assert_eq!(Dialect::V2019_09.uri(), "http://json-schema.org/draft-07/schema");
        assert_eq!(Dialect::Draft07.uri(), "http://json-schema.org/draft-07/schema#");
        assert_eq!(Dialect::Draft04.uri(), "http://json-schema.org/draft-04/schema#");
    }

    #[test]
    fn unknown_dialect_name_fails_fast() {
        assert_eq!(Dialect::from_name("draft-04").unwrap(), Dialect::Draft04);
        let err = Dialect::from_name("draft-99").unwrap_err();
        assert!(matches!(err, Error::UnknownDialect(name) if name == "draft-99"));
    }

    #[test]
    fn scalar_types_map_to_their_kind() {
        let schema = synthesize(&json!("hello"), Dialect::Draft07, false).unwrap();
        assert_eq!(schema["type"], json!("string"));
        let schema = synthesize(&json!(true), Dialect::Draft07, false).unwrap();
        assert_eq!(schema["type"], json!("boolean"));
        let schema = synthesize(&json!(3.25), Dialect::Draft07, false).unwrap();
        assert_eq!(schema["type"], json!("number"));
        let schema = synthesize(&json!(3), Dialect::Draft07, false).unwrap();
        assert_eq!(schema["type"], json!("integer"));
    }

    #[test]
    fn top_level_null_widens_to_nullable_string() {
        let schema = synthesize(&json!(null), Dialect::V2020_12, true).unwrap();
        assert_eq!(schema["type"], json!(["null", "string"]));
        // never an example for null
        assert!(schema.get("example").is_none());
    }

    #[test]
    fn object_with_examples_matches_expected_shape() {
        let document = json!({"a": 1, "b": null, "c": [1, 2]});
        let schema = synthesize(&document, Dialect::Draft07, true).unwrap();
        assert_eq!(
            schema,
            json!({
                "$schema": "http://json-schema.org/draft-07/schema#",
                "type": "object",
                "properties": {
                    "a": { "type": "integer", "example": 1 },
                    "b": { "type": ["null", "string"] },
                    "c": { "type": "array", "items": { "type": "integer", "example": 1 } }
                },
                "required": ["a", "b", "c"]
            })
        );
    }

    #[test]
    fn required_lists_every_key_in_encounter_order() {
        let document = json!({"zeta": 1, "alpha": null, "mid": {"k": true}});
        let schema = synthesize(&document, Dialect::V2020_12, false).unwrap();
        assert_eq!(schema["required"], json!(["zeta", "alpha", "mid"]));
        let keys: Vec<&str> =
            schema["properties"].as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn empty_object_omits_required() {
        let schema = synthesize(&json!({}), Dialect::V2020_12, false).unwrap();
        assert_eq!(schema["type"], json!("object"));
        assert_eq!(schema["properties"], json!({}));
        assert!(schema.get("required").is_none());
    }

    #[test]
    fn arrays_sample_only_the_first_element() {
        let schema = synthesize(&json!([1, "two", true]), Dialect::V2020_12, false).unwrap();
        assert_eq!(schema["items"], json!({ "type": "integer" }));
    }

    #[test]
    fn empty_array_items_are_any() {
        let schema = synthesize(&json!([]), Dialect::V2020_12, false).unwrap();
        assert_eq!(schema["items"], json!({}));
    }

    #[test]
    fn nested_structures_recurse() {
        let document = json!({"user": {"tags": ["a", "b"], "meta": null}});
        let schema = synthesize(&document, Dialect::V2020_12, false).unwrap();
        let user = &schema["properties"]["user"];
        assert_eq!(user["type"], json!("object"));
        assert_eq!(user["properties"]["tags"]["items"], json!({ "type": "string" }));
        assert_eq!(user["properties"]["meta"]["type"], json!(["null", "string"]));
        assert_eq!(user["required"], json!(["tags", "meta"]));
    }

    #[test]
    fn depth_guard_trips_on_pathological_nesting() {
        let mut value = json!(1);
        for _ in 0..1001 {
            value = Value::Array(vec![value]);
        }
        let err = synthesize(&value, Dialect::V2020_12, false).unwrap_err();
        assert!(matches!(err, Error::DepthExceeded { .. }));
    }
}
