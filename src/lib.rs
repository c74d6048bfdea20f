//! Schema description model + multi-dialect serialization.
//!
//! Build an immutable tree of shape-describing nodes ([`Schema`]), then
//! render it either as strict JSON Schema (nullability folded into
//! `["T","null"]` type arrays, explicit `required` and
//! `additionalProperties`) or as the Gemini dialect, which wants a scalar
//! `type`, a sibling boolean `nullable`, and no `additionalProperties` at
//! all. Trees can also be loaded from JSON definition documents
//! ([`definition`]), which is what the `json-shape` binary does.

pub mod cli;
pub mod definition;
pub mod gemini;
pub mod schema;

pub use schema::{
    AnyOfSchema, ArraySchema, BooleanSchema, EnumOption, EnumSchema, NumberSchema, ObjectSchema,
    OneOfSchema, Schema, SchemaError, StringSchema,
};
