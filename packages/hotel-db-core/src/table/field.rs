//! Field definition within a table.

use serde::Serialize;

use crate::value::Value;

/// Storage kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Primary key assigned by the table
    Id,
    Text,
    Integer,
    Bool,
    /// Foreign key into another table
    Reference,
}

impl FieldKind {
    /// Returns true if `value` can be stored in or compared against a field of this kind.
    pub fn accepts(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (FieldKind::Id | FieldKind::Reference, Value::Id(_))
                | (FieldKind::Text, Value::Text(_))
                | (FieldKind::Integer, Value::Int(_))
                | (FieldKind::Bool, Value::Bool(_))
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Id => "id",
            FieldKind::Text => "text",
            FieldKind::Integer => "integer",
            FieldKind::Bool => "bool",
            FieldKind::Reference => "reference",
        }
    }
}

/// Field definition within a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Field name
    pub name: &'static str,
    /// Storage kind
    pub kind: FieldKind,
}

impl Field {
    /// Creates a new field definition.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}
