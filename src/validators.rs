//! Core validation engine
//!
//! The driver walks one (value, schema) pair through a fixed evaluator
//! sequence, threading a single accumulator; compound evaluators recurse into
//! nested schemas with the same accumulator. Nothing short-circuits except a
//! missing type tag (terminal for the node) and a tuple arity mismatch
//! (element checks are skipped for a value whose shape cannot line up).

use crate::errors::{Violation, Violations};
use crate::schema::Schema;
use crate::types::{SchemaType, Value};
use regex::Regex;
use std::collections::HashSet;
use tracing::trace;

// ============================================================================
// Public API
// ============================================================================

/// Validate a value against a schema
///
/// On success the original value is returned unchanged (the same borrow that
/// was passed in); on failure the ordered, non-empty violation collection.
/// The walk is pure and reentrant: no shared state, no I/O, no caching.
///
/// # Example
///
/// ```
/// use conforma::{validate, Schema, Value};
///
/// let schema = Schema::map().field("name", Schema::string().not_empty());
/// let value = Value::Map(vec![("name".to_string(), Value::String("ada".to_string()))]);
///
/// assert!(validate(&value, &schema).is_ok());
///
/// let bad = Value::Map(vec![("name".to_string(), Value::Int(52))]);
/// let violations = validate(&bad, &schema).unwrap_err();
/// assert_eq!(violations.messages(), vec!["string_expected_got_integer"]);
/// ```
pub fn validate<'a>(value: &'a Value, schema: &Schema) -> Result<&'a Value, Violations> {
    let mut violations = Violations::new();
    validate_value(value, schema, &mut violations);

    trace!(violations = violations.len(), "validation completed");

    if violations.is_empty() {
        Ok(value)
    } else {
        Err(violations)
    }
}

/// Validate a value against a schema into a caller-supplied accumulator
///
/// This is the recursive core behind [`validate`]; compound schemas call it
/// once per nested (value, schema) pair.
pub fn validate_value(value: &Value, schema: &Schema, out: &mut Violations) {
    let Some(kind) = schema.kind else {
        // No recognized type tag: terminal for this node.
        report(schema, out, Violation::UnknownType);
        return;
    };

    check_nullable(value, schema, out);
    check_not_empty(value, schema, out);
    check_type(value, kind, schema, out);
    check_pattern(value, schema, out);
    check_fixed_value(value, schema, out);
    check_max(value, schema, out);
    check_min(value, schema, out);
    check_fields(value, schema, out);
    check_xor(value, schema, out);
    check_membership(value, schema, out);
    check_of(value, kind, schema, out);
}

// ============================================================================
// Accumulation
// ============================================================================

/// Record a violation raised at this node, honoring the node's `err_msg`
///
/// Only node-local violations pass through here; messages from recursive
/// descent keep the nested node's own rendering.
fn report(schema: &Schema, out: &mut Violations, violation: Violation) {
    match &schema.err_msg {
        Some(msg) => out.push(Violation::Custom(msg.clone())),
        None => out.push(violation),
    }
}

/// First binding of a key in an insertion-ordered map
fn lookup<'a>(pairs: &'a [(String, Value)], name: &str) -> Option<&'a Value> {
    pairs.iter().find(|(k, _)| k == name).map(|(_, v)| v)
}

// ============================================================================
// Generic Constraint Evaluators
// ============================================================================

fn check_nullable(value: &Value, schema: &Schema, out: &mut Violations) {
    if value.is_null() && !schema.nullable {
        report(schema, out, Violation::NotNullable);
    }
}

fn check_not_empty(value: &Value, schema: &Schema, out: &mut Violations) {
    if !schema.not_empty {
        return;
    }
    if let Value::String(s) = value {
        if s.trim().is_empty() {
            report(schema, out, Violation::EmptyString);
        }
    }
}

fn check_type(value: &Value, kind: SchemaType, schema: &Schema, out: &mut Violations) {
    // Null is the nullable evaluator's concern, never the type check's.
    if value.is_null() {
        return;
    }
    match kind {
        SchemaType::Any => {}
        SchemaType::Tuple => check_tuple(value, schema, out),
        SchemaType::Choice => check_choice(value, schema, out),
        _ => {
            if !kind.admits(value) {
                report(
                    schema,
                    out,
                    Violation::TypeMismatch {
                        expected: kind.type_name(),
                        actual: value.type_name(),
                    },
                );
            }
        }
    }
}

fn check_pattern(value: &Value, schema: &Schema, out: &mut Violations) {
    let Some(pattern) = &schema.pattern else {
        return;
    };
    if value.is_null() {
        return;
    }
    let matched = match value {
        Value::String(s) => Regex::new(pattern).map(|re| re.is_match(s)).unwrap_or(false),
        // Bad schema and bad data share one message stream.
        _ => false,
    };
    if !matched {
        report(schema, out, Violation::PatternNotMatched);
    }
}

fn check_fixed_value(value: &Value, schema: &Schema, out: &mut Violations) {
    if let Some(fixed) = &schema.fixed {
        if value != fixed {
            report(schema, out, Violation::FixedValueMismatch);
        }
    }
}

fn check_max(value: &Value, schema: &Schema, out: &mut Violations) {
    let Some(max) = schema.max else {
        return;
    };
    if let Some(m) = magnitude(value) {
        if m > max {
            report(schema, out, Violation::MaxViolation);
        }
    }
}

fn check_min(value: &Value, schema: &Schema, out: &mut Violations) {
    let Some(min) = schema.min else {
        return;
    };
    if let Some(m) = magnitude(value) {
        if m < min {
            report(schema, out, Violation::MinViolation);
        }
    }
}

/// What min/max compare against: the number itself for numerics, the length
/// for sequences, nothing for everything else (including null)
fn magnitude(value: &Value) -> Option<f64> {
    match value {
        Value::Int(n) => Some(*n as f64),
        Value::Float(f) => Some(*f),
        Value::String(s) => Some(s.chars().count() as f64),
        Value::List(items) => Some(items.len() as f64),
        Value::Tuple(items) => Some(items.len() as f64),
        Value::Bytes(bytes) => Some(bytes.len() as f64),
        _ => None,
    }
}

fn check_membership(value: &Value, schema: &Schema, out: &mut Violations) {
    let Some(allowed) = &schema.member_of else {
        return;
    };
    match allowed {
        Value::List(items) => {
            if !items.contains(value) {
                report(schema, out, Violation::NotAMember);
            }
        }
        _ => report(schema, out, Violation::MembershipNotAList),
    }
}

// ============================================================================
// Structural Constraint Evaluators
// ============================================================================

fn check_fields(value: &Value, schema: &Schema, out: &mut Violations) {
    if schema.fields.is_empty() && !schema.strict {
        return;
    }
    // A non-map already failed the type check; nothing structural to do.
    let Value::Map(pairs) = value else {
        return;
    };

    for (name, field_schema) in &schema.fields {
        match lookup(pairs, name) {
            None if field_schema.optional => {}
            None => report(schema, out, Violation::MissingField(name.clone())),
            Some(Value::Null) if field_schema.nullable => {}
            Some(Value::Null) => report(schema, out, Violation::FieldNotNullable(name.clone())),
            Some(field_value) => validate_value(field_value, field_schema, out),
        }
    }

    if schema.strict {
        let declared: HashSet<&str> = schema.fields.iter().map(|(n, _)| n.as_str()).collect();
        let extra: Vec<String> = pairs
            .iter()
            .filter(|(key, _)| !declared.contains(key.as_str()))
            .map(|(key, _)| key.clone())
            .collect();
        if !extra.is_empty() {
            report(schema, out, Violation::UnexpectedExtraKeys(extra));
        }
    }
}

fn check_xor(value: &Value, schema: &Schema, out: &mut Violations) {
    if schema.xor.is_empty() {
        return;
    }
    let Value::Map(pairs) = value else {
        return;
    };

    // Candidates are the group members whose value is present and non-null.
    let present: Vec<(&Value, &Schema)> = schema
        .xor
        .iter()
        .filter_map(|(name, field_schema)| {
            lookup(pairs, name)
                .filter(|v| !v.is_null())
                .map(|v| (v, field_schema))
        })
        .collect();

    match present.as_slice() {
        [] => report(schema, out, Violation::NoXorFieldPresent),
        [(field_value, field_schema)] => validate_value(field_value, field_schema, out),
        _ => report(schema, out, Violation::TooManyXorFields),
    }
}

fn check_tuple(value: &Value, schema: &Schema, out: &mut Violations) {
    let Value::Tuple(items) = value else {
        report(
            schema,
            out,
            Violation::TypeMismatch {
                expected: SchemaType::Tuple.type_name(),
                actual: value.type_name(),
            },
        );
        return;
    };
    if schema.of.is_empty() {
        return;
    }
    // Arity gates the element checks; positions cannot line up otherwise.
    if items.len() != schema.of.len() {
        report(schema, out, Violation::TupleSizeMismatch(schema.of.len()));
        return;
    }
    for (item, item_schema) in items.iter().zip(&schema.of) {
        validate_value(item, item_schema, out);
    }
}

fn check_choice(value: &Value, schema: &Schema, out: &mut Violations) {
    for candidate in &schema.of {
        let mut candidate_violations = Violations::new();
        validate_value(value, candidate, &mut candidate_violations);
        if candidate_violations.is_empty() {
            return;
        }
    }
    // Candidate detail is discarded; the node reports one flat failure.
    report(schema, out, Violation::InvalidChoice);
}

fn check_of(value: &Value, kind: SchemaType, schema: &Schema, out: &mut Violations) {
    if schema.of.is_empty() {
        return;
    }
    match kind {
        SchemaType::List => {
            if let Value::List(items) = value {
                let element_schema = &schema.of[0];
                for item in items {
                    validate_value(item, element_schema, out);
                }
            }
        }
        // Consumed by the tuple/choice logic in the type-check step.
        SchemaType::Tuple | SchemaType::Choice => {}
        _ => report(schema, out, Violation::OfOutsideList),
    }
}
