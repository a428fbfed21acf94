//! Field definition for the registry schema tables
//!
//! These structures describe the fields a registry cohort expects, so that
//! scoring and reporting share a single definition of "which fields exist
//! and what shape they have".

use std::fmt;

/// Represents the semantic kind of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-text value
    String,
    /// Integer value
    Integer,
    /// Decimal value
    Decimal,
    /// Date value (naive, no time component)
    Date,
    /// Boolean flag
    Boolean,
    /// Dictionary-coded value
    Category,
    /// Multi-select array of coded values, or a nested line structure
    Array,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::String => write!(f, "String"),
            FieldKind::Integer => write!(f, "Integer"),
            FieldKind::Decimal => write!(f, "Decimal"),
            FieldKind::Date => write!(f, "Date"),
            FieldKind::Boolean => write!(f, "Boolean"),
            FieldKind::Category => write!(f, "Category"),
            FieldKind::Array => write!(f, "Array"),
        }
    }
}

/// A single field in a registry schema table
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    /// Name of the field on the record
    pub name: String,
    /// Human-readable description of the field
    pub description: String,
    /// Semantic kind of the field
    pub kind: FieldKind,
}

impl FieldDefinition {
    /// Create a new field definition
    pub fn new(name: impl Into<String>, description: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
        }
    }

    /// Whether this field counts as filled by length rather than presence
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.kind == FieldKind::Array
    }
}
