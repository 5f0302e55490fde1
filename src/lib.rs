//! Conforma
//!
//! Declarative schema validation for dynamically-typed values.
//!
//! A [`Schema`] pairs one type tag with modifier flags (`nullable`,
//! `optional`, `not_empty`, `strict`) and named constraint options (fixed
//! value, membership, pattern, min/max, fields, xor groups, element
//! schemas). [`validate`] walks a [`Value`] against it recursively and
//! returns either the original value unchanged or the ordered collection of
//! violation messages. Data that fails validation is an expected outcome,
//! never a panic.
//!
//! The crate is intended as an embedded validation layer for untyped input
//! (e.g. deserialized payloads) inside a larger application. With the `json`
//! feature, `serde_json::Value` payloads convert straight into [`Value`].
//!
//! # Example
//!
//! ```rust
//! use conforma::{validate, Schema, Value};
//!
//! let schema = Schema::map()
//!     .field("name", Schema::string().not_empty())
//!     .field("age", Schema::integer().min(0.0).optional());
//!
//! let user = Value::Map(vec![
//!     ("name".to_string(), Value::String("ada".to_string())),
//!     ("age".to_string(), Value::Int(36)),
//! ]);
//! assert!(validate(&user, &schema).is_ok());
//!
//! let anonymous = Value::Map(vec![]);
//! let violations = validate(&anonymous, &schema).unwrap_err();
//! assert_eq!(violations.messages(), vec!["missing_field_name"]);
//! ```

// Public modules
pub mod errors;
pub mod schema;
pub mod types;
pub mod validators;

// Re-export commonly used types
pub use errors::{ValidationResult, Violation, Violations};
pub use schema::Schema;
pub use types::{SchemaType, Value};
pub use validators::{validate, validate_value};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
