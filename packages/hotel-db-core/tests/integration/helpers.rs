//! Shared fixtures for integration tests.

use hotel_db_core::seed::{self, Fixtures};
use hotel_db_core::Database;

/// Returns a freshly seeded database and its fixture handles.
pub fn seeded() -> (Database, Fixtures) {
    let mut db = Database::new();
    let fixtures = seed::seed(&mut db).unwrap();
    (db, fixtures)
}

/// Names of the given users, in the given order.
pub fn names<'a>(users: &[&'a hotel_db_core::User]) -> Vec<&'a str> {
    users.iter().map(|u| u.name.as_str()).collect()
}
