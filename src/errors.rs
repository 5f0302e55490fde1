//! Validation violations
//!
//! Violations are represented as structured records (kind plus interpolation
//! parameters) and rendered to their flat string form only at the boundary,
//! so tests and callers can match on kinds without parsing text.

use std::fmt;
use thiserror::Error;

// ============================================================================
// Violation Result
// ============================================================================

/// Result of a validation walk: `Ok` carries the caller's payload,
/// `Err` carries a non-empty, ordered collection of violations
pub type ValidationResult<T> = Result<T, Violations>;

// ============================================================================
// Single Violation
// ============================================================================

/// A single reported mismatch between data and schema
///
/// The `Display` form is the stable wire message. Schema-authoring mistakes
/// detected during evaluation (`MembershipNotAList`, `OfOutsideList`) share
/// this taxonomy with data mismatches; there is one message stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// Schema carries no recognized type tag; terminal for the node
    #[error("unknown_type")]
    UnknownType,

    /// Value is not of the declared type
    #[error("{expected}_expected_got_{actual}")]
    TypeMismatch {
        /// Declared type-tag name
        expected: &'static str,
        /// Concrete runtime type name of the value
        actual: &'static str,
    },

    /// Null value at a node without the `nullable` modifier
    #[error("cannot_be_nullable")]
    NotNullable,

    /// String is empty after trimming whitespace
    #[error("string_cannot_be_empty")]
    EmptyString,

    /// Value differs from the schema's pinned `value`
    #[error("invalid_fixed_value")]
    FixedValueMismatch,

    /// The `in` option itself is not a list (authoring error)
    #[error("in_should_be_a_list")]
    MembershipNotAList,

    /// Value is not a member of the `in` list
    #[error("invalid_possible_value")]
    NotAMember,

    /// Value does not match the schema's `pattern`
    #[error("pattern_not_matched")]
    PatternNotMatched,

    /// Value or length below the inclusive `min` bound
    #[error("min_violation")]
    MinViolation,

    /// Value or length above the inclusive `max` bound
    #[error("max_violation")]
    MaxViolation,

    /// Required map field is absent
    #[error("missing_field_{0}")]
    MissingField(String),

    /// Map field is present but null without the `nullable` modifier
    #[error("field_{0}_not_nullable")]
    FieldNotNullable(String),

    /// Strict map carries keys outside the declared fields,
    /// listed in first-seen map order
    #[error("unexpected_extra_keys_{0:?}")]
    UnexpectedExtraKeys(Vec<String>),

    /// Exclusive-or group has no present non-null field
    // Misspelling is load-bearing: consumers match on the exact string.
    #[error("at_lease_one_field_must_be_present")]
    NoXorFieldPresent,

    /// Exclusive-or group has more than one present non-null field
    #[error("just_one_field_must_be_present")]
    TooManyXorFields,

    /// Tuple arity differs from the number of per-position schemas
    #[error("tuple_size_is_not_{0}")]
    TupleSizeMismatch(usize),

    /// Value satisfies none of the choice candidates
    #[error("invalid_choice")]
    InvalidChoice,

    /// `of` attached to a type that takes no element schemas
    #[error("of_is_valid_only_in_list")]
    OfOutsideList,

    /// Node-level `err_msg` override, emitted verbatim
    #[error("{0}")]
    Custom(String),
}

impl Violation {
    /// Render the stable message string
    pub fn message(&self) -> String {
        self.to_string()
    }
}

// ============================================================================
// Violations Collection
// ============================================================================

/// Ordered collection of violations accumulated during a validation walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Check if there are any violations
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Get the number of violations
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Append a violation
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Append every violation from another collection, preserving order
    pub fn merge(&mut self, other: Violations) {
        self.violations.extend(other.violations);
    }

    /// Get violations as a slice
    pub fn as_slice(&self) -> &[Violation] {
        &self.violations
    }

    /// Iterate over the violations in evaluation order
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Render every violation to its message string, in evaluation order
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(Violation::message).collect()
    }

    /// Convert to Result - Ok if empty, Err carrying self otherwise
    pub fn into_result(self) -> ValidationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation violation(s)", self.violations.len())
    }
}

impl std::error::Error for Violations {}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
