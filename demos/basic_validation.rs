//! Basic Validation Example
//!
//! This example demonstrates schema construction and validation with conforma.
//!
//! Run with:
//! ```bash
//! cargo run --example basic_validation
//! ```

use conforma::{validate, Schema, Value, Violations};

fn result_str(result: &Result<&Value, Violations>) -> String {
    match result {
        Ok(_) => "valid".to_string(),
        Err(violations) => format!("invalid: {}", violations.messages().join(", ")),
    }
}

// ============================================================================
// Primitive Type Validation
// ============================================================================

fn validate_primitives() {
    println!("1. Primitive Type Validation");
    println!("----------------------------");

    let string_schema = Schema::string();
    let value = Value::String("Hello, World!".to_string());
    let result = validate(&value, &string_schema);
    println!("  String 'Hello, World!': {}", result_str(&result));

    let int_schema = Schema::integer();
    let result = validate(&Value::Int(42), &int_schema);
    println!("  Int 42: {}", result_str(&result));

    // Integers and floats never overlap
    let result = validate(&Value::Float(42.0), &int_schema);
    println!("  Float 42.0 as integer: {}", result_str(&result));

    // Booleans are atoms too
    let atom_schema = Schema::atom();
    let result = validate(&Value::Bool(true), &atom_schema);
    println!("  Bool true as atom: {}", result_str(&result));
    println!();
}

// ============================================================================
// Generic Constraints
// ============================================================================

fn validate_constraints() {
    println!("2. Generic Constraints");
    println!("----------------------");

    let username = Schema::string().not_empty().min(3.0).max(12.0).pattern("^[a-z_]+$");
    for candidate in ["ada_lovelace", "al", "   ", "Ada!"] {
        let value = Value::String(candidate.to_string());
        let result = validate(&value, &username);
        println!("  Username '{}': {}", candidate, result_str(&result));
    }

    let color = Schema::string().member_of(Value::List(vec![
        Value::String("red".to_string()),
        Value::String("green".to_string()),
        Value::String("blue".to_string()),
    ]));
    let value = Value::String("yellow".to_string());
    let result = validate(&value, &color);
    println!("  Color 'yellow': {}", result_str(&result));
    println!();
}

// ============================================================================
// Map Validation
// ============================================================================

fn validate_maps() {
    println!("3. Map Validation");
    println!("-----------------");

    // Note: strict counts every key outside `fields` as an extra, xor keys
    // included, so contact keys stay on a non-strict schema here.
    let user_schema = Schema::map()
        .field("name", Schema::string().not_empty())
        .field("age", Schema::integer().min(0.0).optional())
        .xor_field("email", Schema::string())
        .xor_field("phone", Schema::string());

    let valid = Value::Map(vec![
        ("name".to_string(), Value::String("Ada".to_string())),
        ("email".to_string(), Value::String("ada@example.com".to_string())),
    ]);
    println!("  Complete user: {}", result_str(&validate(&valid, &user_schema)));

    let invalid = Value::Map(vec![
        ("name".to_string(), Value::Int(52)),
        ("nickname".to_string(), Value::String("countess".to_string())),
    ]);
    println!("  Broken user: {}", result_str(&validate(&invalid, &user_schema)));

    let settings_schema = Schema::map()
        .strict()
        .field("theme", Schema::string())
        .field("beta", Schema::boolean().optional());
    let with_extras = Value::Map(vec![
        ("theme".to_string(), Value::String("dark".to_string())),
        ("legacy_flag".to_string(), Value::Bool(true)),
    ]);
    println!(
        "  Strict settings: {}",
        result_str(&validate(&with_extras, &settings_schema))
    );
    println!();
}

// ============================================================================
// Compound Schemas
// ============================================================================

fn validate_compounds() {
    println!("4. Compound Schemas");
    println!("-------------------");

    let tags = Schema::list().of(Schema::string().not_empty());
    let value = Value::List(vec![
        Value::String("alpha".to_string()),
        Value::Int(2),
    ]);
    println!("  Tag list: {}", result_str(&validate(&value, &tags)));

    let pair = Schema::tuple().of(Schema::string()).of(Schema::integer());
    let value = Value::Tuple(vec![Value::String("answer".to_string()), Value::Int(42)]);
    println!("  (string, int) tuple: {}", result_str(&validate(&value, &pair)));

    let id = Schema::choice().of(Schema::integer()).of(Schema::string().not_empty());
    println!("  Choice with int: {}", result_str(&validate(&Value::Int(7), &id)));
    println!("  Choice with bool: {}", result_str(&validate(&Value::Bool(true), &id)));
    println!();
}

fn main() {
    println!("=== conforma: basic validation ===\n");
    validate_primitives();
    validate_constraints();
    validate_maps();
    validate_compounds();
}
