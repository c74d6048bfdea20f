//! Homogeneous arrays: one child schema describes every element.

use serde_json::{Map, Value};

use super::{Schema, type_field};

#[derive(Debug, Clone, PartialEq)]
pub struct ArraySchema {
    pub name: String,
    pub description: String,
    /// Element shape; a single child, not a collection.
    pub items: Box<Schema>,
    pub nullable: bool,
}

impl ArraySchema {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        items: impl Into<Schema>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            items: Box::new(items.into()),
            nullable: false,
        }
    }

    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn to_document(&self) -> Value {
        let mut doc = Map::new();
        doc.insert("description".into(), Value::from(self.description.as_str()));
        doc.insert("type".into(), type_field("array", self.nullable));
        doc.insert("items".into(), self.items.to_document());
        Value::Object(doc)
    }
}
