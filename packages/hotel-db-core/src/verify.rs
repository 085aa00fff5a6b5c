//! Self-verification of the seeded booking scenario.
//!
//! Fixtures are looked up by name rather than by seed handles, so any store
//! can be verified. Every check runs; failures are collected into a
//! [`Report`] instead of stopping at the first one.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::database::Database;
use crate::error::DbError;
use crate::models::{Hotel, User};
use crate::seed::{
    FRANCIS, JULIE, MIKE, RITZ, RITZ_RATE, RITZ_ROOMS, WESTIN, WESTIN_RATE, WESTIN_ROOMS,
};

/// A check whose computed value did not match the expected one.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{property}: expected {expected}, got {actual}")]
pub struct AssertionFailure {
    pub property: String,
    pub expected: String,
    pub actual: String,
}

/// Expected/actual pair from a failing check body.
#[derive(Debug)]
struct Mismatch {
    expected: String,
    actual: String,
}

impl From<DbError> for Mismatch {
    fn from(err: DbError) -> Self {
        Mismatch {
            expected: "query to succeed".to_string(),
            actual: err.to_string(),
        }
    }
}

type CheckResult = Result<(), Mismatch>;

/// A named property of the seeded store.
#[derive(Clone, Copy)]
pub struct Check {
    pub name: &'static str,
    run: fn(&Database) -> CheckResult,
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check").field("name", &self.name).finish()
    }
}

const CHECKS: &[Check] = &[
    Check {
        name: "users are Francis, Julie and Mike in name order",
        run: users_in_name_order,
    },
    Check {
        name: "hotels are Ritz and Westin in name order",
        run: hotels_in_name_order,
    },
    Check {
        name: "Westin has 5 rooms",
        run: |db| room_count(db, WESTIN, WESTIN_ROOMS),
    },
    Check {
        name: "every Westin room costs 300",
        run: |db| uniform_rate(db, WESTIN, WESTIN_RATE),
    },
    Check {
        name: "Ritz has 3 rooms",
        run: |db| room_count(db, RITZ, RITZ_ROOMS),
    },
    Check {
        name: "every Ritz room costs 500",
        run: |db| uniform_rate(db, RITZ, RITZ_RATE),
    },
    Check {
        name: "Francis has 2 bookings",
        run: francis_has_two_bookings,
    },
    Check {
        name: "Ritz guests include Francis",
        run: |db| hotel_has_guest(db, RITZ, FRANCIS),
    },
    Check {
        name: "Westin guests include Francis",
        run: |db| hotel_has_guest(db, WESTIN, FRANCIS),
    },
    Check {
        name: "Ritz guests include Julie",
        run: |db| hotel_has_guest(db, RITZ, JULIE),
    },
    Check {
        name: "Mike has 2 bookings at the Westin",
        run: mike_books_westin_twice,
    },
    Check {
        name: "all of Mike's bookings are paid",
        run: mike_has_paid,
    },
    Check {
        name: "Westin has 3 bookings",
        run: |db| booking_count(db, WESTIN, 3),
    },
    Check {
        name: "Ritz has 2 bookings",
        run: |db| booking_count(db, RITZ, 2),
    },
];

/// All checks in the order they run.
pub fn checks() -> &'static [Check] {
    CHECKS
}

/// Result of a single check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<AssertionFailure>,
}

/// Outcome of every check, in run order.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub outcomes: Vec<CheckOutcome>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// True when every check passed.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &AssertionFailure> {
        self.outcomes.iter().filter_map(|o| o.failure.as_ref())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            match &outcome.failure {
                None => writeln!(f, "PASS  {}", outcome.name)?,
                Some(failure) => {
                    writeln!(f, "FAIL  {}", outcome.name)?;
                    writeln!(f, "      expected: {}", failure.expected)?;
                    writeln!(f, "      actual:   {}", failure.actual)?;
                }
            }
        }
        write!(f, "\n{} passed, {} failed", self.passed(), self.failed())
    }
}

/// Runs every check against `db`.
pub fn verify(db: &Database) -> Report {
    let outcomes = CHECKS
        .iter()
        .map(|check| match (check.run)(db) {
            Ok(()) => {
                tracing::debug!("Check passed: {}", check.name);
                CheckOutcome {
                    name: check.name,
                    passed: true,
                    failure: None,
                }
            }
            Err(mismatch) => {
                let failure = AssertionFailure {
                    property: check.name.to_string(),
                    expected: mismatch.expected,
                    actual: mismatch.actual,
                };
                tracing::warn!("Check failed: {}", failure);
                CheckOutcome {
                    name: check.name,
                    passed: false,
                    failure: Some(failure),
                }
            }
        })
        .collect();
    Report { outcomes }
}

fn expect_eq<T: PartialEq + fmt::Debug>(expected: T, actual: T) -> CheckResult {
    if expected == actual {
        Ok(())
    } else {
        Err(Mismatch {
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        })
    }
}

fn user_named<'a>(db: &'a Database, name: &str) -> Result<&'a User, Mismatch> {
    db.find_by_field::<User>("name", name)?
        .ok_or_else(|| Mismatch {
            expected: format!("user named {:?}", name),
            actual: "no such user".to_string(),
        })
}

fn hotel_named<'a>(db: &'a Database, name: &str) -> Result<&'a Hotel, Mismatch> {
    db.find_by_field::<Hotel>("name", name)?
        .ok_or_else(|| Mismatch {
            expected: format!("hotel named {:?}", name),
            actual: "no such hotel".to_string(),
        })
}

fn users_in_name_order(db: &Database) -> CheckResult {
    let names: Vec<&str> = db
        .list_ordered_by::<User>("name")?
        .into_iter()
        .map(|u| u.name.as_str())
        .collect();
    expect_eq(vec![FRANCIS, JULIE, MIKE], names)
}

fn hotels_in_name_order(db: &Database) -> CheckResult {
    let names: Vec<&str> = db
        .list_ordered_by::<Hotel>("name")?
        .into_iter()
        .map(|h| h.name.as_str())
        .collect();
    expect_eq(vec![RITZ, WESTIN], names)
}

fn room_count(db: &Database, hotel: &str, expected: usize) -> CheckResult {
    let hotel = hotel_named(db, hotel)?;
    expect_eq(expected, db.rooms_of_hotel(hotel.id).len())
}

fn uniform_rate(db: &Database, hotel: &str, rate: i64) -> CheckResult {
    let hotel = hotel_named(db, hotel)?;
    let mut rates: Vec<i64> = Vec::new();
    for room in db.rooms_of_hotel(hotel.id) {
        if !rates.contains(&room.rate) {
            rates.push(room.rate);
        }
    }
    expect_eq(vec![rate], rates)
}

fn francis_has_two_bookings(db: &Database) -> CheckResult {
    let francis = user_named(db, FRANCIS)?;
    expect_eq(2, db.bookings_of_user(francis.id).len())
}

fn hotel_has_guest(db: &Database, hotel: &str, guest: &str) -> CheckResult {
    let hotel = hotel_named(db, hotel)?;
    let guest = user_named(db, guest)?;
    let guests = db.guests_of_hotel(hotel.id);
    if guests.iter().any(|g| g.id == guest.id) {
        return Ok(());
    }
    Err(Mismatch {
        expected: format!("guests including {:?}", guest.name),
        actual: format!(
            "{:?}",
            guests.iter().map(|g| g.name.as_str()).collect::<Vec<_>>()
        ),
    })
}

fn mike_books_westin_twice(db: &Database) -> CheckResult {
    let westin = hotel_named(db, WESTIN)?;
    let mike = user_named(db, MIKE)?;
    expect_eq(2, db.bookings_of_hotel_for_guest(westin.id, mike.id).len())
}

fn mike_has_paid(db: &Database) -> CheckResult {
    let mike = user_named(db, MIKE)?;
    let unpaid = db
        .bookings_of_user(mike.id)
        .into_iter()
        .filter(|b| !b.paid)
        .map(|b| b.id)
        .collect::<Vec<_>>();
    expect_eq(Vec::new(), unpaid)
}

fn booking_count(db: &Database, hotel: &str, expected: usize) -> CheckResult {
    let hotel = hotel_named(db, hotel)?;
    expect_eq(expected, db.bookings_of_hotel(hotel.id).len())
}
