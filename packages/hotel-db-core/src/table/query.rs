//! Query-related methods for table operations.

use super::field::Field;
use super::record::Record;
use super::Table;
use crate::error::DbError;
use crate::value::Value;

impl<R: Record> Table<R> {
    /// Resolves a field name against the schema.
    fn resolve_field(&self, field_name: &str) -> Result<&'static Field, DbError> {
        self.get_field(field_name)
            .ok_or_else(|| DbError::FieldNotFound {
                table: R::TABLE.to_string(),
                field: field_name.to_string(),
            })
    }

    /// Resolves a field and checks that `value` fits its kind.
    fn resolve_filter(&self, field_name: &str, value: &Value) -> Result<&'static Field, DbError> {
        let field = self.resolve_field(field_name)?;
        if !field.kind.accepts(value) {
            return Err(DbError::TypeMismatch {
                field: format!("{}.{}", R::TABLE, field.name),
                expected: field.kind.name().to_string(),
                got: value.kind_name().to_string(),
            });
        }
        Ok(field)
    }

    /// Returns the first record (in id order) whose field equals `value`.
    ///
    /// # Returns
    /// `Ok(None)` when nothing matches; errors only for unknown fields or a
    /// value of the wrong kind.
    pub fn find_by(&self, field_name: &str, value: &Value) -> Result<Option<&R>, DbError> {
        let field = self.resolve_filter(field_name, value)?;
        Ok(self
            .iter()
            .find(|r| r.get(field.name).as_ref() == Some(value)))
    }

    /// Returns every record whose field equals `value`, in id order.
    pub fn filter_by(&self, field_name: &str, value: &Value) -> Result<Vec<&R>, DbError> {
        let field = self.resolve_filter(field_name, value)?;
        Ok(self
            .iter()
            .filter(|r| r.get(field.name).as_ref() == Some(value))
            .collect())
    }

    /// Returns all records sorted ascending by the given field.
    ///
    /// The sort is stable: records with equal values keep id order, so repeated
    /// calls on an unchanged table yield the same sequence.
    pub fn ordered_by(&self, field_name: &str) -> Result<Vec<&R>, DbError> {
        let field = self.resolve_field(field_name)?;
        let mut rows: Vec<&R> = self.iter().collect();
        rows.sort_by_cached_key(|r| r.get(field.name));
        Ok(rows)
    }

    /// Counts records matching the predicate.
    pub fn count_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&R) -> bool,
    {
        self.iter().filter(|r| predicate(*r)).count()
    }
}
