//! Union kinds. AnyOf means "one or more of", OneOf "exactly one of";
//! neither has a `type` of its own, so nullability becomes a synthetic
//! `{"type":"null"}` union member instead of a type-array entry. They also
//! never carry `additionalProperties`; that key belongs to objects alone.

use serde_json::{Map, Value};

use super::Schema;

#[derive(Debug, Clone, PartialEq)]
pub struct AnyOfSchema {
    pub name: String,
    pub description: String,
    pub schemas: Vec<Schema>,
    pub nullable: bool,
}

impl AnyOfSchema {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schemas: Vec<Schema>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schemas,
            nullable: false,
        }
    }

    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn to_document(&self) -> Value {
        composite_document(&self.description, "anyOf", &self.schemas, self.nullable)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OneOfSchema {
    pub name: String,
    pub description: String,
    pub schemas: Vec<Schema>,
    pub nullable: bool,
}

impl OneOfSchema {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schemas: Vec<Schema>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schemas,
            nullable: false,
        }
    }

    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn to_document(&self) -> Value {
        composite_document(&self.description, "oneOf", &self.schemas, self.nullable)
    }
}

/// The synthetic `{"type":"null"}` union member.
pub(crate) fn null_member() -> Value {
    let mut doc = Map::new();
    doc.insert("type".into(), Value::from("null"));
    Value::Object(doc)
}

fn composite_document(description: &str, key: &str, schemas: &[Schema], nullable: bool) -> Value {
    let mut members: Vec<Value> = schemas.iter().map(Schema::to_document).collect();
    if nullable {
        members.push(null_member());
    }
    let mut doc = Map::new();
    doc.insert("description".into(), Value::from(description));
    doc.insert(key.into(), Value::Array(members));
    Value::Object(doc)
}
