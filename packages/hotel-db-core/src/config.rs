//! Database configuration.

/// Database configuration.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Reject inserts whose foreign keys do not resolve
    pub enforce_references: bool,
    /// Initial table capacity in records
    pub initial_table_capacity: usize,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            enforce_references: true,
            initial_table_capacity: 16,
        }
    }
}

impl DbConfig {
    /// Configuration that stores dangling references instead of rejecting them.
    pub fn unchecked() -> Self {
        Self {
            enforce_references: false,
            ..Default::default()
        }
    }
}
