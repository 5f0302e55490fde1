//! Schema value object
//!
//! A schema is one type tag plus modifier flags and named constraint options.
//! "At most one type tag" is structural here: [`Schema::new`] takes exactly
//! one [`SchemaType`], and a schema built without one (`Schema::default()`)
//! fails validation with `unknown_type`.

use crate::types::{SchemaType, Value};

// ============================================================================
// Schema
// ============================================================================

/// Declarative description of an acceptable value shape and its constraints
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Declared type tag; `None` validates to `unknown_type`
    pub kind: Option<SchemaType>,
    /// Accept a null value at this node
    pub nullable: bool,
    /// When used as a map field, the field may be absent
    pub optional: bool,
    /// String must be non-empty after trimming whitespace
    pub not_empty: bool,
    /// Map may not carry keys outside the declared `fields`
    pub strict: bool,
    /// `value` option: datum must be deeply equal to this
    pub fixed: Option<Value>,
    /// `in` option: datum must be a member of this list
    ///
    /// Kept as a raw [`Value`] so a non-list is reported as the
    /// `in_should_be_a_list` authoring error instead of being rejected at
    /// construction time.
    pub member_of: Option<Value>,
    /// `pattern` option: regex the datum string must match
    pub pattern: Option<String>,
    /// Inclusive lower bound (numeric value or sequence length)
    pub min: Option<f64>,
    /// Inclusive upper bound (numeric value or sequence length)
    pub max: Option<f64>,
    /// Declared map fields, in declaration order
    pub fields: Vec<(String, Schema)>,
    /// Mutually exclusive field group: exactly one must be present non-null
    pub xor: Vec<(String, Schema)>,
    /// Element schema(s): one for a list, per-position for a tuple,
    /// candidates for a choice
    pub of: Vec<Schema>,
    /// Override for every message raised at this node
    pub err_msg: Option<String>,
}

impl Schema {
    /// Create a schema for the given type tag
    pub fn new(kind: SchemaType) -> Self {
        Self {
            kind: Some(kind),
            ..Default::default()
        }
    }

    // ========================================================================
    // Per-kind constructors
    // ========================================================================

    /// Schema accepting any value
    pub fn any() -> Self {
        Self::new(SchemaType::Any)
    }

    /// String schema
    pub fn string() -> Self {
        Self::new(SchemaType::String)
    }

    /// Integer schema (exactly integral, floats do not pass)
    pub fn integer() -> Self {
        Self::new(SchemaType::Int)
    }

    /// Float schema (exactly floating-point, integers do not pass)
    pub fn float() -> Self {
        Self::new(SchemaType::Float)
    }

    /// Boolean schema
    pub fn boolean() -> Self {
        Self::new(SchemaType::Bool)
    }

    /// Atom/symbol schema; booleans pass as atoms
    pub fn atom() -> Self {
        Self::new(SchemaType::Atom)
    }

    /// Map/record schema
    pub fn map() -> Self {
        Self::new(SchemaType::Map)
    }

    /// List schema; combine with [`Schema::of`] for element validation
    pub fn list() -> Self {
        Self::new(SchemaType::List)
    }

    /// Tuple schema; one [`Schema::of`] call per position
    pub fn tuple() -> Self {
        Self::new(SchemaType::Tuple)
    }

    /// Choice (union) schema; one [`Schema::of`] call per candidate
    pub fn choice() -> Self {
        Self::new(SchemaType::Choice)
    }

    /// Callable-handle schema
    pub fn func() -> Self {
        Self::new(SchemaType::Func)
    }

    /// Binary-buffer schema
    pub fn bytes() -> Self {
        Self::new(SchemaType::Bytes)
    }

    /// Process-handle schema
    pub fn pid() -> Self {
        Self::new(SchemaType::Pid)
    }

    /// Channel-handle schema
    pub fn port() -> Self {
        Self::new(SchemaType::Port)
    }

    /// Opaque-reference schema
    pub fn reference() -> Self {
        Self::new(SchemaType::Ref)
    }

    // ========================================================================
    // Modifier flags
    // ========================================================================

    /// Accept a null value at this node
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Allow the field to be absent when used inside `fields`
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Reject strings that are empty after trimming whitespace
    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

    /// Reject map keys outside the declared `fields`
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    // ========================================================================
    // Constraint options
    // ========================================================================

    /// Pin the datum to a fixed value (deep equality)
    pub fn value(mut self, fixed: Value) -> Self {
        self.fixed = Some(fixed);
        self
    }

    /// Restrict the datum to members of the given list
    pub fn member_of(mut self, allowed: Value) -> Self {
        self.member_of = Some(allowed);
        self
    }

    /// Require the datum string to match a regex
    ///
    /// The match is an unanchored search; anchor with `^...$` to require the
    /// whole string to match.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Inclusive lower bound: numeric value, or length for sequences
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Inclusive upper bound: numeric value, or length for sequences
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Declare a map field (appends; declaration order is evaluation order)
    pub fn field(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.fields.push((name.into(), schema));
        self
    }

    /// Declare a member of the exclusive-or field group
    pub fn xor_field(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.xor.push((name.into(), schema));
        self
    }

    /// Append an element schema: the single element schema of a list, the
    /// next position of a tuple, or the next candidate of a choice
    pub fn of(mut self, schema: Schema) -> Self {
        self.of.push(schema);
        self
    }

    /// Replace every message raised at this node with a custom string
    pub fn err_msg(mut self, msg: impl Into<String>) -> Self {
        self.err_msg = Some(msg.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_type_tag() {
        let schema = Schema::default();
        assert!(schema.kind.is_none());
        assert!(!schema.nullable);
        assert!(!schema.optional);
        assert!(!schema.not_empty);
        assert!(!schema.strict);
    }

    #[test]
    fn test_constructors_set_single_tag() {
        assert_eq!(Schema::string().kind, Some(SchemaType::String));
        assert_eq!(Schema::integer().kind, Some(SchemaType::Int));
        assert_eq!(Schema::map().kind, Some(SchemaType::Map));
        assert_eq!(Schema::choice().kind, Some(SchemaType::Choice));
    }

    #[test]
    fn test_builder_chaining() {
        let schema = Schema::string()
            .nullable()
            .not_empty()
            .pattern("^[a-z]+$")
            .min(1.0)
            .max(10.0)
            .err_msg("bad_name");

        assert!(schema.nullable);
        assert!(schema.not_empty);
        assert_eq!(schema.pattern.as_deref(), Some("^[a-z]+$"));
        assert_eq!(schema.min, Some(1.0));
        assert_eq!(schema.max, Some(10.0));
        assert_eq!(schema.err_msg.as_deref(), Some("bad_name"));
    }

    #[test]
    fn test_field_declaration_order_is_kept() {
        let schema = Schema::map()
            .field("name", Schema::string())
            .field("age", Schema::integer())
            .field("email", Schema::string().optional());

        let names: Vec<&str> = schema.fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["name", "age", "email"]);
        assert!(schema.fields[2].1.optional);
    }

    #[test]
    fn test_of_appends_per_position() {
        let tuple = Schema::tuple()
            .of(Schema::string())
            .of(Schema::integer())
            .of(Schema::boolean());
        assert_eq!(tuple.of.len(), 3);
    }
}
