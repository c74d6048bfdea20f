//! Enumerations over a fixed set of string/number values.
//!
//! The emitted `type` is not fixed: it is derived from the option values.
//! One primitive type name per value kind present, in order of first
//! appearance, with `"null"` appended last when nullable. A single-kind
//! enum therefore gets a bare type string, a mixed one a type array.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::SchemaError;

/// One allowed value: a string or a number, re-emitted verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumOption {
    String(String),
    Number(Number),
}

impl EnumOption {
    /// JSON Schema primitive type name implied by the value's kind.
    fn type_name(&self) -> &'static str {
        match self {
            EnumOption::String(_) => "string",
            EnumOption::Number(_) => "number",
        }
    }

    fn to_value(&self) -> Value {
        match self {
            EnumOption::String(s) => Value::from(s.as_str()),
            EnumOption::Number(n) => Value::Number(n.clone()),
        }
    }
}

impl From<&str> for EnumOption {
    fn from(s: &str) -> Self {
        EnumOption::String(s.to_string())
    }
}

impl From<String> for EnumOption {
    fn from(s: String) -> Self {
        EnumOption::String(s)
    }
}

impl From<i64> for EnumOption {
    fn from(n: i64) -> Self {
        EnumOption::Number(Number::from(n))
    }
}

impl From<f64> for EnumOption {
    /// Panics on non-finite input; enum options are literal JSON values
    /// and JSON has no NaN/infinity.
    fn from(n: f64) -> Self {
        EnumOption::Number(Number::from_f64(n).expect("enum option must be a finite number"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumSchema {
    pub name: String,
    pub description: String,
    pub options: Vec<EnumOption>,
    pub nullable: bool,
}

impl EnumSchema {
    /// Rejects an empty option set: an enumeration over nothing describes
    /// no value at all.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        options: Vec<EnumOption>,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        if options.is_empty() {
            return Err(SchemaError::EmptyEnumOptions { name });
        }
        Ok(Self {
            name,
            description: description.into(),
            options,
            nullable: false,
        })
    }

    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Deduplicated type-name set in first-appearance order, `"null"` last
    /// when nullable; collapses to a bare string when only one name remains.
    fn derived_type(&self) -> Value {
        let mut names: Vec<&'static str> = Vec::new();
        for option in &self.options {
            let name = option.type_name();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        let mut names: Vec<Value> = names.into_iter().map(Value::from).collect();
        if self.nullable {
            names.push(Value::from("null"));
        }
        if names.len() == 1 {
            names.remove(0)
        } else {
            Value::Array(names)
        }
    }

    pub fn to_document(&self) -> Value {
        let mut doc = Map::new();
        doc.insert("description".into(), Value::from(self.description.as_str()));
        doc.insert(
            "enum".into(),
            Value::Array(self.options.iter().map(EnumOption::to_value).collect()),
        );
        doc.insert("type".into(), self.derived_type());
        Value::Object(doc)
    }
}
