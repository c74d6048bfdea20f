//! Dev scratch runner: build a representative tree through the public API
//! and eyeball both renderings side by side.

use json_shape::{
    ArraySchema, BooleanSchema, EnumSchema, NumberSchema, ObjectSchema, OneOfSchema, Schema,
    StringSchema, gemini,
};

fn demo_schema() -> Schema {
    let address = ObjectSchema::new(
        "address",
        "the users address",
        vec![
            StringSchema::new("street", "the street part of the address").into(),
            StringSchema::new("city", "the city part of the address").into(),
            NumberSchema::new("zip", "the zip code part of the address").into(),
        ],
        &["street", "city", "zip"],
    )
    .expect("well-formed address schema");

    let contact = OneOfSchema::new(
        "contact",
        "email or phone, exactly one",
        vec![
            StringSchema::new("email", "email address").into(),
            StringSchema::new("phone", "phone number").into(),
        ],
    )
    .nullable(true);

    ObjectSchema::new(
        "user",
        "a user object",
        vec![
            StringSchema::new("name", "the users name").nullable(true).into(),
            EnumSchema::new(
                "status",
                "the users status",
                vec!["active".into(), "inactive".into(), "suspended".into()],
            )
            .expect("non-empty options")
            .into(),
            ArraySchema::new(
                "hobbies",
                "the users hobbies",
                StringSchema::new("hobby", "the users hobby"),
            )
            .into(),
            BooleanSchema::new("is_admin", "is an administrative user").into(),
            address.into(),
            contact.into(),
        ],
        &["name", "status"],
    )
    .expect("well-formed user schema")
    .into()
}

fn main() {
    let schema = demo_schema();

    println!("—— canonical ——");
    println!(
        "{}",
        serde_json::to_string_pretty(&schema.to_document()).unwrap()
    );

    println!("—— gemini ——");
    println!(
        "{}",
        serde_json::to_string_pretty(&gemini::document(&schema)).unwrap()
    );
}
