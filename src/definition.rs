//! On-disk shape definitions.
//!
//! A definition document is plain JSON describing one schema tree:
//!
//! ```json
//! {
//!   "type": "object",
//!   "description": "a user object",
//!   "properties": {
//!     "name": { "type": "string", "description": "the users name", "nullable": true }
//!   },
//!   "required": ["name"]
//! }
//! ```
//!
//! The definition layer is deliberately loose: one struct with optional
//! per-kind fields, tagged by the `type` string. Deserialization then stays
//! a plain struct walk and parse errors keep their full JSON path (serde's
//! tagged-enum representations buffer content and lose the path). The
//! strict sum type lives in [`crate::schema`]; [`SchemaDef::into_schema`]
//! is the checked boundary between the two.
//!
//! Object `properties` is an ordered map: declaration order in the file is
//! property order in the rendered documents.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::schema::{
    AnyOfSchema, ArraySchema, BooleanSchema, EnumOption, EnumSchema, NumberSchema, ObjectSchema,
    OneOfSchema, Schema, SchemaError, StringSchema,
};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// One node of a definition document. Which optional fields apply depends
/// on `kind`; fields irrelevant to the kind are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaDef {
    /// `string | number | boolean | enum | array | object | any_of | one_of`
    #[serde(rename = "type")]
    pub kind: String,

    /// Optional everywhere: a property is named by its key, the root by the
    /// caller, and an explicit `name` wins over either.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub nullable: bool,

    /// enum only
    #[serde(default)]
    pub options: Option<Vec<EnumOption>>,

    /// array only
    #[serde(default)]
    pub items: Option<Box<SchemaDef>>,

    /// object only; keys name the properties, insertion order preserved
    #[serde(default)]
    pub properties: Option<IndexMap<String, SchemaDef>>,

    /// object only
    #[serde(default)]
    pub required: Vec<String>,

    /// object only
    #[serde(default)]
    pub additional_properties: bool,

    /// any_of / one_of only
    #[serde(default)]
    pub schemas: Option<Vec<SchemaDef>>,
}

/// Rejected definition documents: either the document itself is not a
/// usable definition, or the tree it describes fails schema validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    #[error("unknown schema kind `{kind}` for `{name}`")]
    UnknownKind { kind: String, name: String },

    #[error("{kind} definition `{name}` is missing `{field}`")]
    MissingField {
        kind: String,
        name: String,
        field: &'static str,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

// ————————————————————————————————————————————————————————————————————————————
// PARSING
// ————————————————————————————————————————————————————————————————————————————

/// Deserialize a whole definition document, with JSON-path context in
/// error messages.
pub fn parse(source: &str) -> anyhow::Result<SchemaDef> {
    let de = &mut serde_json::Deserializer::from_str(source);
    serde_path_to_error::deserialize::<_, SchemaDef>(de).map_err(|err| {
        let path = err.path().to_string();
        anyhow::anyhow!("at JSON path {path}: {}", err.into_inner())
    })
}

/// Same, for an already-parsed JSON value (e.g. a pointer-selected subnode).
pub fn parse_value(value: serde_json::Value) -> anyhow::Result<SchemaDef> {
    serde_path_to_error::deserialize::<_, SchemaDef>(value).map_err(|err| {
        let path = err.path().to_string();
        anyhow::anyhow!("at JSON path {path}: {}", err.into_inner())
    })
}

// ————————————————————————————————————————————————————————————————————————————
// CONVERSION
// ————————————————————————————————————————————————————————————————————————————

impl SchemaDef {
    /// Resolve into a validated schema node. `context_name` names the node
    /// when the definition carries no explicit `name` of its own.
    pub fn into_schema(self, context_name: &str) -> Result<Schema, DefinitionError> {
        let name = self.name.unwrap_or_else(|| context_name.to_string());
        match self.kind.as_str() {
            "string" => Ok(StringSchema::new(name, self.description)
                .nullable(self.nullable)
                .into()),
            "number" => Ok(NumberSchema::new(name, self.description)
                .nullable(self.nullable)
                .into()),
            "boolean" => Ok(BooleanSchema::new(name, self.description)
                .nullable(self.nullable)
                .into()),
            "enum" => {
                let options = self.options.ok_or_else(|| DefinitionError::MissingField {
                    kind: "enum".to_string(),
                    name: name.clone(),
                    field: "options",
                })?;
                Ok(EnumSchema::new(name, self.description, options)?
                    .nullable(self.nullable)
                    .into())
            }
            "array" => {
                let items = self.items.ok_or_else(|| DefinitionError::MissingField {
                    kind: "array".to_string(),
                    name: name.clone(),
                    field: "items",
                })?;
                let items = items.into_schema("items")?;
                Ok(ArraySchema::new(name, self.description, items)
                    .nullable(self.nullable)
                    .into())
            }
            "object" => {
                let defs = self.properties.unwrap_or_default();
                let mut properties = Vec::with_capacity(defs.len());
                for (key, child) in defs {
                    properties.push(child.into_schema(&key)?);
                }
                let required: Vec<&str> = self.required.iter().map(String::as_str).collect();
                Ok(
                    ObjectSchema::new(name, self.description, properties, &required)?
                        .allow_additional_properties(self.additional_properties)
                        .nullable(self.nullable)
                        .into(),
                )
            }
            "any_of" => {
                let schemas = member_schemas(self.schemas, "any_of", &name)?;
                Ok(AnyOfSchema::new(name, self.description, schemas)
                    .nullable(self.nullable)
                    .into())
            }
            "one_of" => {
                let schemas = member_schemas(self.schemas, "one_of", &name)?;
                Ok(OneOfSchema::new(name, self.description, schemas)
                    .nullable(self.nullable)
                    .into())
            }
            other => Err(DefinitionError::UnknownKind {
                kind: other.to_string(),
                name,
            }),
        }
    }
}

fn member_schemas(
    defs: Option<Vec<SchemaDef>>,
    kind: &str,
    name: &str,
) -> Result<Vec<Schema>, DefinitionError> {
    let defs = defs.ok_or_else(|| DefinitionError::MissingField {
        kind: kind.to_string(),
        name: name.to_string(),
        field: "schemas",
    })?;
    defs.into_iter()
        .enumerate()
        .map(|(i, def)| def.into_schema(&format!("option{}", i + 1)))
        .collect()
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
    fn parses_and_renders_an_object_definition() {
        let source = r#"{
            "type": "object",
            "description": "a user object",
            "properties": {
                "name": { "type": "string", "description": "the users name", "nullable": true },
                "status": {
                    "type": "enum",
                    "description": "the users status",
                    "options": ["active", "inactive"]
                }
            },
            "required": ["status"]
        }"#;
        let schema = parse(source).unwrap().into_schema("user").unwrap();
        assert_eq!(schema.name(), "user");

        let expected = json!({
            "description": "a user object",
            "type": "object",
            "properties": {
                "name": { "description": "the users name", "type": ["string", "null"] },
                "status": {
                    "description": "the users status",
                    "enum": ["active", "inactive"],
                    "type": "string"
                }
            },
            "required": ["status"],
            "additionalProperties": false
        });
        assert_eq!(
            serde_json::to_string(&schema.to_document()).unwrap(),
            serde_json::to_string(&expected).unwrap()
        );
    }

    #[test]
    fn property_order_follows_the_document() {
        let source = r#"{
            "type": "object",
            "properties": {
                "zulu": { "type": "string" },
                "alpha": { "type": "number" },
                "mike": { "type": "boolean" }
            }
        }"#;
        let schema = parse(source).unwrap().into_schema("root").unwrap();
        let doc = schema.to_document();
        let keys: Vec<&String> = doc["properties"].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["zulu", "alpha", "mike"]);
    }

    #[test]
    fn explicit_name_wins_over_context() {
        let source = r#"{ "type": "string", "name": "title", "description": "a title" }"#;
        let schema = parse(source).unwrap().into_schema("root").unwrap();
        assert_eq!(schema.name(), "title");
    }

    #[test]
    fn numeric_enum_options_survive_verbatim() {
        let source = r#"{
            "type": "enum",
            "description": "sick or fever temp",
            "options": [98.6, 100, "unknown", 105]
        }"#;
        let schema = parse(source).unwrap().into_schema("temp").unwrap();
        let doc = schema.to_document();
        assert_eq!(doc["enum"], json!([98.6, 100, "unknown", 105]));
        assert_eq!(doc["type"], json!(["number", "string"]));
    }

    #[test]
    fn parse_errors_carry_the_json_path() {
        let source = r#"{
            "type": "object",
            "properties": {
                "status": { "type": "enum", "options": "active" }
            }
        }"#;
        let err = parse(source).unwrap_err();
        assert!(err.to_string().contains("properties.status.options"), "{err}");
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = parse(r#"{ "type": "tuple" }"#)
            .unwrap()
            .into_schema("root")
            .unwrap_err();
        assert_eq!(
            err,
            DefinitionError::UnknownKind {
                kind: "tuple".to_string(),
                name: "root".to_string(),
            }
        );
    }

    #[test]
    fn array_definition_requires_items() {
        let err = parse(r#"{ "type": "array", "name": "hobbies" }"#)
            .unwrap()
            .into_schema("root")
            .unwrap_err();
        assert_eq!(
            err,
            DefinitionError::MissingField {
                kind: "array".to_string(),
                name: "hobbies".to_string(),
                field: "items",
            }
        );
    }

    #[test]
    fn constructor_validation_applies_to_definitions() {
        let source = r#"{
            "type": "object",
            "properties": { "name": { "type": "string" } },
            "required": ["name", "age"]
        }"#;
        let err = parse(source).unwrap().into_schema("user").unwrap_err();
        assert_eq!(
            err,
            DefinitionError::Schema(SchemaError::UnknownRequiredField {
                object: "user".to_string(),
                field: "age".to_string(),
            })
        );
    }
}
