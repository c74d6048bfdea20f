//! String/number/boolean leaves. All three carry the same fields and
//! differ only in the type name they emit.

use serde_json::Value;

use super::leaf_document;

/// Free-form text value.
#[derive(Debug, Clone, PartialEq)]
pub struct StringSchema {
    pub name: String,
    pub description: String,
    pub nullable: bool,
}

impl StringSchema {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            nullable: false,
        }
    }

    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn to_document(&self) -> Value {
        leaf_document(&self.description, "string", self.nullable)
    }
}

/// Numeric value; integers and floats are not distinguished.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberSchema {
    pub name: String,
    pub description: String,
    pub nullable: bool,
}

impl NumberSchema {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            nullable: false,
        }
    }

    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn to_document(&self) -> Value {
        leaf_document(&self.description, "number", self.nullable)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanSchema {
    pub name: String,
    pub description: String,
    pub nullable: bool,
}

impl BooleanSchema {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            nullable: false,
        }
    }

    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn to_document(&self) -> Value {
        leaf_document(&self.description, "boolean", self.nullable)
    }
}
