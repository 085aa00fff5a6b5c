//! Table schema, field definitions, and relation metadata.

mod field;
mod query;
mod record;
mod relation;
#[allow(clippy::module_inception)]
mod table;

pub use field::{Field, FieldKind};
pub use record::Record;
pub use relation::Relation;
pub use table::Table;
