//! Schema variant set + canonical serializer.
//!
//! A shape is an immutable tree of schema nodes: string/number/boolean
//! leaves, enumerations, arrays, objects, and the two union kinds
//! (any-of, one-of). Every node renders itself into the canonical (strict
//! JSON Schema) document form via [`Schema::to_document`]; the Gemini
//! re-rendering lives in [`crate::gemini`] and consumes this one.
//!
//! Design notes:
//! - Nullability on leaves/containers folds into `type` as `[T, "null"]`;
//!   unions instead append a synthetic `{"type":"null"}` member, because a
//!   union node has no `type` of its own.
//! - Documents are built on `serde_json::Map` with `preserve_order`, so
//!   insertion order below *is* the output key order.
//! - Trees are strictly top-down owned (boxed children, no sharing), so a
//!   finished tree can be serialized from any number of threads at once.

pub mod array;
pub mod composite;
pub mod enumeration;
pub mod object;
pub mod scalar;

use serde_json::{Map, Value};

pub use array::ArraySchema;
pub use composite::{AnyOfSchema, OneOfSchema};
pub use enumeration::{EnumOption, EnumSchema};
pub use object::ObjectSchema;
pub use scalar::{BooleanSchema, NumberSchema, StringSchema};

// ------------------------------- Errors ----------------------------------- //

/// Rejected tree construction.
///
/// Serialization is total over well-formed trees; the only failure class is
/// a malformed tree, caught eagerly by the fallible constructors instead of
/// producing a malformed document silently.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("object `{object}` has a property with an empty name")]
    UnnamedProperty { object: String },

    #[error("object `{object}` declares property `{property}` more than once")]
    DuplicateProperty { object: String, property: String },

    #[error("object `{object}` requires field `{field}` but declares no such property")]
    UnknownRequiredField { object: String, field: String },

    #[error("enum `{name}` has no options")]
    EmptyEnumOptions { name: String },
}

// ------------------------------- Variants --------------------------------- //

/// One node of a shape tree. Closed set: both serializers match on this
/// exhaustively, so a new variant fails to compile until both handle it.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    String(StringSchema),
    Number(NumberSchema),
    Boolean(BooleanSchema),
    Enum(EnumSchema),
    Array(ArraySchema),
    Object(ObjectSchema),
    AnyOf(AnyOfSchema),
    OneOf(OneOfSchema),
}

impl Schema {
    /// The field/slot name identifying this node among its siblings.
    /// Only ever emitted as an object's property key.
    pub fn name(&self) -> &str {
        match self {
            Schema::String(s) => &s.name,
            Schema::Number(s) => &s.name,
            Schema::Boolean(s) => &s.name,
            Schema::Enum(s) => &s.name,
            Schema::Array(s) => &s.name,
            Schema::Object(s) => &s.name,
            Schema::AnyOf(s) => &s.name,
            Schema::OneOf(s) => &s.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Schema::String(s) => &s.description,
            Schema::Number(s) => &s.description,
            Schema::Boolean(s) => &s.description,
            Schema::Enum(s) => &s.description,
            Schema::Array(s) => &s.description,
            Schema::Object(s) => &s.description,
            Schema::AnyOf(s) => &s.description,
            Schema::OneOf(s) => &s.description,
        }
    }

    pub fn nullable(&self) -> bool {
        match self {
            Schema::String(s) => s.nullable,
            Schema::Number(s) => s.nullable,
            Schema::Boolean(s) => s.nullable,
            Schema::Enum(s) => s.nullable,
            Schema::Array(s) => s.nullable,
            Schema::Object(s) => s.nullable,
            Schema::AnyOf(s) => s.nullable,
            Schema::OneOf(s) => s.nullable,
        }
    }

    /// Canonical (strict JSON Schema) document for this node and,
    /// recursively, its children. Pure and deterministic: the same tree
    /// always yields byte-identical output.
    pub fn to_document(&self) -> Value {
        match self {
            Schema::String(s) => s.to_document(),
            Schema::Number(s) => s.to_document(),
            Schema::Boolean(s) => s.to_document(),
            Schema::Enum(s) => s.to_document(),
            Schema::Array(s) => s.to_document(),
            Schema::Object(s) => s.to_document(),
            Schema::AnyOf(s) => s.to_document(),
            Schema::OneOf(s) => s.to_document(),
        }
    }
}

impl From<StringSchema> for Schema {
    fn from(s: StringSchema) -> Self {
        Schema::String(s)
    }
}
impl From<NumberSchema> for Schema {
    fn from(s: NumberSchema) -> Self {
        Schema::Number(s)
    }
}
impl From<BooleanSchema> for Schema {
    fn from(s: BooleanSchema) -> Self {
        Schema::Boolean(s)
    }
}
impl From<EnumSchema> for Schema {
    fn from(s: EnumSchema) -> Self {
        Schema::Enum(s)
    }
}
impl From<ArraySchema> for Schema {
    fn from(s: ArraySchema) -> Self {
        Schema::Array(s)
    }
}
impl From<ObjectSchema> for Schema {
    fn from(s: ObjectSchema) -> Self {
        Schema::Object(s)
    }
}
impl From<AnyOfSchema> for Schema {
    fn from(s: AnyOfSchema) -> Self {
        Schema::AnyOf(s)
    }
}
impl From<OneOfSchema> for Schema {
    fn from(s: OneOfSchema) -> Self {
        Schema::OneOf(s)
    }
}

// --------------------------- Document helpers ----------------------------- //

/// `type` field value: bare type name, or `[name, "null"]` when nullable.
pub(crate) fn type_field(kind: &str, nullable: bool) -> Value {
    if nullable {
        Value::Array(vec![Value::from(kind), Value::from("null")])
    } else {
        Value::from(kind)
    }
}

/// `{description, type}`: the whole document of a leaf node.
pub(crate) fn leaf_document(description: &str, kind: &str, nullable: bool) -> Value {
    let mut doc = Map::new();
    doc.insert("description".into(), Value::from(description));
    doc.insert("type".into(), type_field(kind, nullable));
    Value::Object(doc)
}

// ------------------------------- Tests ------------------------------------ //
