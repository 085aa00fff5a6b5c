//! Relation between tables for foreign key references.

use serde::Serialize;

/// Relation between tables for foreign key references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Relation {
    /// Field name in source table
    pub from_field: &'static str,
    /// Name of the target table
    pub to_table: &'static str,
    /// Field name in target table
    pub to_field: &'static str,
}

impl Relation {
    /// Foreign key from `from_field` to the `id` of `to_table`.
    pub const fn belongs_to(from_field: &'static str, to_table: &'static str) -> Self {
        Self {
            from_field,
            to_table,
            to_field: "id",
        }
    }
}
