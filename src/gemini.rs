//! Gemini-dialect re-rendering of schema trees.
//!
//! Gemini's schema flavor differs from the canonical form on three points:
//! nullability is a sibling boolean `nullable` instead of a `["T","null"]`
//! type array, `type` is always a single scalar name, and
//! `additionalProperties` is never sent. Rather than re-deriving types from
//! scratch, the mapping post-processes each node's canonical document and
//! walks the tree only to re-attach `items`/`properties` children.
//!
//! Union (anyOf/oneOf) nodes take a separate path: their members stay in
//! canonical encoding (only the top-level `additionalProperties` key is
//! stripped), and the union's own nullability becomes a sibling
//! `nullable: true` with no synthetic null member.

use serde_json::{Map, Value};

use crate::schema::Schema;

/// Render `schema` as a Gemini-dialect document.
pub fn document(schema: &Schema) -> Value {
    match schema {
        Schema::AnyOf(s) => composite(&s.description, "anyOf", &s.schemas, s.nullable),
        Schema::OneOf(s) => composite(&s.description, "oneOf", &s.schemas, s.nullable),
        // enumerations keep their `enum` list but type down to plain string
        Schema::String(_) | Schema::Enum(_) => remap(schema, "string"),
        Schema::Number(_) => remap(schema, "number"),
        Schema::Boolean(_) => remap(schema, "boolean"),
        Schema::Array(_) => remap(schema, "array"),
        Schema::Object(_) => remap(schema, "object"),
    }
}

/// Leaf/container path: canonical document, re-encoded.
fn remap(schema: &Schema, kind: &'static str) -> Value {
    let Value::Object(mut doc) = schema.to_document() else {
        unreachable!("canonical documents are objects")
    };

    // shift_remove, not remove: with preserve_order the plain remove is a
    // swap_remove and would scramble the key order asserted by consumers
    doc.shift_remove("additionalProperties");
    // scalar type name replaces whatever encoding the canonical form chose;
    // insert on an existing key keeps its position
    doc.insert("type".into(), Value::from(kind));

    match schema {
        Schema::Array(array) => {
            doc.insert("items".into(), document(&array.items));
        }
        Schema::Object(object) => {
            let mut properties = Map::new();
            for property in &object.properties {
                properties.insert(property.name().to_string(), document(property));
            }
            doc.insert("properties".into(), Value::Object(properties));
        }
        _ => {}
    }

    // the dialect drops empty fields instead of sending placeholders
    if doc.get("description").and_then(Value::as_str) == Some("") {
        doc.shift_remove("description");
    }
    if doc.get("required").and_then(Value::as_array).is_some_and(|r| r.is_empty()) {
        doc.shift_remove("required");
    }
    if doc.get("properties").and_then(Value::as_object).is_some_and(|p| p.is_empty()) {
        doc.shift_remove("properties");
    }

    if schema.nullable() {
        doc.insert("nullable".into(), Value::Bool(true));
    }
    Value::Object(doc)
}

/// Union path: members go through the canonical serializer, not the
/// leaf/container re-encoding above.
fn composite(description: &str, key: &str, members: &[Schema], nullable: bool) -> Value {
    let mut doc = Map::new();
    doc.insert("description".into(), Value::from(description));
    doc.insert(
        key.into(),
        Value::Array(members.iter().map(|m| strip_member(m.to_document())).collect()),
    );
    if nullable {
        doc.insert("nullable".into(), Value::Bool(true));
    }
    Value::Object(doc)
}

/// Normalize one union member: drop its top-level `additionalProperties`,
/// keep everything else, including any nested canonical nullability
/// encoding. The bare `{"type":"null"}` member passes through unchanged.
fn strip_member(mut member: Value) -> Value {
    if let Value::Object(doc) = &mut member {
        doc.shift_remove("additionalProperties");
    }
    member
}
