//! Record trait implemented by every stored entity.

use std::fmt::Debug;

use serde::Serialize;

use super::field::Field;
use super::relation::Relation;
use crate::value::Value;

/// A row type stored in a [`Table`](super::Table).
///
/// The schema constants drive field lookups and foreign key validation, so
/// every name in `FIELDS` must be answered by [`Record::get`].
pub trait Record: Clone + Debug + Serialize {
    /// Table name
    const TABLE: &'static str;
    /// Field definitions in declaration order
    const FIELDS: &'static [Field];
    /// Foreign key relations to other tables
    const RELATIONS: &'static [Relation] = &[];

    /// Primary key.
    fn id(&self) -> u64;

    /// Reads a declared field, `None` if the name is not part of the schema.
    fn get(&self, field: &str) -> Option<Value>;
}
