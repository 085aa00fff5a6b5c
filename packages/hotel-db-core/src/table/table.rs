//! Table storage and id management.
//!
//! Each table has:
//! - Records in insertion (and therefore id) order
//! - Record ID sequence generator
//! - Schema and relations taken from the record type

use crate::error::DbError;

use super::field::Field;
use super::record::Record;
use super::relation::Relation;

/// Append-only table of records of one type.
#[derive(Debug, Clone)]
pub struct Table<R> {
    records: Vec<R>,
    /// Next record ID to assign
    next_id: u64,
}

impl<R: Record> Table<R> {
    /// Creates an empty table with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            next_id: 1, // Start IDs at 1
        }
    }

    /// Table name.
    pub fn name(&self) -> &'static str {
        R::TABLE
    }

    /// Field definitions in declaration order.
    pub fn fields(&self) -> &'static [Field] {
        R::FIELDS
    }

    /// Foreign key relations to other tables.
    pub fn relations(&self) -> &'static [Relation] {
        R::RELATIONS
    }

    /// Returns the field definition for the given field name.
    pub fn get_field(&self, field_name: &str) -> Option<&'static Field> {
        R::FIELDS.iter().find(|f| f.name == field_name)
    }

    /// Returns the ID the next inserted record will receive.
    pub fn current_next_id(&self) -> u64 {
        self.next_id
    }

    /// Returns the number of records in the table.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in id order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    /// Looks up a record by primary key.
    ///
    /// Records are appended with strictly increasing ids, so the backing
    /// vector is always sorted by id.
    pub fn get(&self, id: u64) -> Option<&R> {
        self.records
            .binary_search_by_key(&id, |r| r.id())
            .ok()
            .map(|idx| &self.records[idx])
    }

    pub fn contains(&self, id: u64) -> bool {
        self.get(id).is_some()
    }

    /// Looks up a record by primary key, failing if it does not exist.
    pub fn require(&self, id: u64) -> Result<&R, DbError> {
        self.get(id).ok_or_else(|| DbError::RecordNotFound {
            table: R::TABLE.to_string(),
            id,
        })
    }

    /// Appends a record built with the next id.
    ///
    /// The record must carry `current_next_id()`; the sequence advances past it.
    pub(crate) fn push(&mut self, record: R) -> &R {
        debug_assert_eq!(record.id(), self.next_id, "ids must be assigned in sequence");
        self.next_id = record.id() + 1;
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }
}

impl<R: Record> Default for Table<R> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
