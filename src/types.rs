//! Core type system for validation
//!
//! This module defines the runtime value universe and the type-tag vocabulary
//! schemas select from.

// ============================================================================
// Value Enum - Runtime values to be validated
// ============================================================================

/// Runtime value that can be validated
///
/// `Null` is the "no value" sentinel. A map key that is not present at all is
/// a different state from a key bound to `Null`; only the fields and xor
/// evaluators can observe the former.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value (i64)
    Int(i64),
    /// Float value (f64)
    Float(f64),
    /// String value
    String(String),
    /// Interned symbol / atom
    Atom(String),
    /// Raw binary buffer
    Bytes(Vec<u8>),
    /// Ordered list of values
    List(Vec<Value>),
    /// Fixed-arity ordered collection
    Tuple(Vec<Value>),
    /// Key/value record; preserves first-seen key order
    Map(Vec<(String, Value)>),
    /// Callable handle, identified by a host-assigned id
    Func(u64),
    /// Process handle, identified by a host-assigned id
    Pid(u64),
    /// Channel handle, identified by a host-assigned id
    Port(u64),
    /// Opaque reference, identified by a host-assigned id
    Ref(u64),
}

impl Value {
    /// Get human-readable type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Atom(_) => "atom",
            Self::Bytes(_) => "binary",
            Self::List(_) => "list",
            Self::Tuple(_) => "tuple",
            Self::Map(_) => "map",
            Self::Func(_) => "function",
            Self::Pid(_) => "pid",
            Self::Port(_) => "port",
            Self::Ref(_) => "reference",
        }
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

// ============================================================================
// SchemaType - Type-tag vocabulary
// ============================================================================

/// Type tag a schema declares for the value under validation
///
/// This is a closed vocabulary: adding a type means extending this enum and
/// its two match arms below, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaType {
    /// Any value passes, including null
    Any,
    /// UTF-8 string
    String,
    /// Exactly integral numeric
    Int,
    /// Exactly floating-point numeric
    Float,
    /// Boolean
    Bool,
    /// Atom/symbol; booleans are atoms and pass too
    Atom,
    /// Key/value record
    Map,
    /// Ordered list
    List,
    /// Fixed-arity tuple
    Tuple,
    /// Union of candidate schemas carried in `of`
    Choice,
    /// Callable handle
    Func,
    /// Raw binary buffer
    Bytes,
    /// Process handle
    Pid,
    /// Channel handle
    Port,
    /// Opaque reference
    Ref,
}

impl SchemaType {
    /// Get the tag name used in `*_expected_got_*` messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::String => "string",
            Self::Int => "integer",
            Self::Float => "float",
            Self::Bool => "boolean",
            Self::Atom => "atom",
            Self::Map => "map",
            Self::List => "list",
            Self::Tuple => "tuple",
            Self::Choice => "choice",
            Self::Func => "function",
            Self::Bytes => "binary",
            Self::Pid => "pid",
            Self::Port => "port",
            Self::Ref => "reference",
        }
    }

    /// Check whether a value belongs to this type category
    ///
    /// Predicates are exact and non-overlapping, with two exceptions: `Atom`
    /// also admits booleans, and `Any`/`Choice` admit everything (choice
    /// candidates are matched by the driver, not here).
    pub fn admits(&self, value: &Value) -> bool {
        match self {
            Self::Any | Self::Choice => true,
            Self::String => matches!(value, Value::String(_)),
            Self::Int => matches!(value, Value::Int(_)),
            Self::Float => matches!(value, Value::Float(_)),
            Self::Bool => matches!(value, Value::Bool(_)),
            Self::Atom => matches!(value, Value::Atom(_) | Value::Bool(_)),
            Self::Map => matches!(value, Value::Map(_)),
            Self::List => matches!(value, Value::List(_)),
            Self::Tuple => matches!(value, Value::Tuple(_)),
            Self::Func => matches!(value, Value::Func(_)),
            Self::Bytes => matches!(value, Value::Bytes(_)),
            Self::Pid => matches!(value, Value::Pid(_)),
            Self::Port => matches!(value, Value::Port(_)),
            Self::Ref => matches!(value, Value::Ref(_)),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

#[cfg(feature = "json")]
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(fields) => {
                Value::Map(fields.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}
