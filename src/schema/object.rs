//! Objects: ordered named properties, a required-field set, and an
//! additional-properties switch.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use super::{Schema, SchemaError, type_field};

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSchema {
    pub name: String,
    pub description: String,
    /// Declaration order is document order.
    pub properties: Vec<Schema>,
    pub required_fields: Vec<String>,
    pub allow_additional_properties: bool,
    pub nullable: bool,
}

impl ObjectSchema {
    /// Rejects malformed shapes eagerly: every property needs a non-empty
    /// name, names must be unique among siblings, and `required_fields` may
    /// only reference declared properties.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        properties: Vec<Schema>,
        required_fields: &[&str],
    ) -> Result<Self, SchemaError> {
        let name = name.into();

        let mut seen = BTreeSet::new();
        for property in &properties {
            let property_name = property.name();
            if property_name.is_empty() {
                return Err(SchemaError::UnnamedProperty { object: name });
            }
            if !seen.insert(property_name.to_string()) {
                return Err(SchemaError::DuplicateProperty {
                    object: name,
                    property: property_name.to_string(),
                });
            }
        }
        for field in required_fields {
            if !seen.contains(*field) {
                return Err(SchemaError::UnknownRequiredField {
                    object: name,
                    field: (*field).to_string(),
                });
            }
        }

        Ok(Self {
            name,
            description: description.into(),
            properties,
            required_fields: required_fields.iter().map(|f| (*f).to_string()).collect(),
            allow_additional_properties: false,
            nullable: false,
        })
    }

    #[must_use]
    pub fn allow_additional_properties(mut self, allow: bool) -> Self {
        self.allow_additional_properties = allow;
        self
    }

    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn to_document(&self) -> Value {
        let mut doc = Map::new();
        doc.insert("description".into(), Value::from(self.description.as_str()));
        doc.insert("type".into(), type_field("object", self.nullable));

        let mut properties = Map::new();
        for property in &self.properties {
            properties.insert(property.name().to_string(), property.to_document());
        }
        doc.insert("properties".into(), Value::Object(properties));

        // always present, even when empty; `additionalProperties` is only
        // ever emitted here, at the object's own top level
        doc.insert(
            "required".into(),
            Value::Array(
                self.required_fields
                    .iter()
                    .map(|f| Value::from(f.as_str()))
                    .collect(),
            ),
        );
        doc.insert(
            "additionalProperties".into(),
            Value::Bool(self.allow_additional_properties),
        );
        Value::Object(doc)
    }
}
