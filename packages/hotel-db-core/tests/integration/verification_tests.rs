//! Verification report over seeded and hand-built stores.

use ntest::timeout;

use hotel_db_core::seed::{self, FRANCIS, JULIE, MIKE};
use hotel_db_core::verify::{self, checks};
use hotel_db_core::Database;

use super::helpers::seeded;

#[timeout(1000)]
#[test]
fn test_seeded_store_passes_every_check() {
    let (db, _) = seeded();
    let report = verify::verify(&db);

    assert_eq!(report.outcomes.len(), checks().len());
    assert_eq!(report.outcomes.len(), 14);
    assert!(report.is_success(), "{}", report);
    assert_eq!(report.failed(), 0);
    assert_eq!(report.failures().count(), 0);
}

#[test]
fn test_empty_store_fails_every_check() {
    let db = Database::new();
    let report = verify::verify(&db);

    assert!(!report.is_success());
    assert_eq!(report.passed(), 0);
    assert_eq!(report.failed(), checks().len());

    let first = report.failures().next().unwrap();
    assert_eq!(first.property, checks()[0].name);
    assert_eq!(first.expected, r#"["Francis Slim", "Julie Blook", "Mike Rasta"]"#);
    assert_eq!(first.actual, "[]");
}

#[test]
fn test_all_failures_are_collected() -> anyhow::Result<()> {
    let mut db = Database::new();
    let francis = db.create_user(FRANCIS);
    db.create_user(JULIE);
    let mike = db.create_user(MIKE);

    // Westin one room short, at the wrong rate for one room.
    let westin = db.create_hotel(seed::WESTIN, 5);
    let mut westin_rooms = Vec::new();
    for rate in [300, 300, 300, 250] {
        westin_rooms.push(db.create_room(westin.id, rate)?.id);
    }
    let ritz = db.create_hotel(seed::RITZ, 3);
    let mut ritz_rooms = Vec::new();
    for _ in 0..3 {
        ritz_rooms.push(db.create_room(ritz.id, 500)?.id);
    }

    // Julie never books; one of Mike's bookings is unpaid.
    db.create_booking(francis.id, westin_rooms[1], false)?;
    db.create_booking(francis.id, ritz_rooms[2], false)?;
    db.create_booking(mike.id, westin_rooms[0], true)?;
    db.create_booking(mike.id, westin_rooms[1], false)?;

    let report = verify::verify(&db);
    let failed: Vec<&str> = report
        .failures()
        .map(|f| f.property.as_str())
        .collect();
    assert_eq!(
        failed,
        vec![
            "Westin has 5 rooms",
            "every Westin room costs 300",
            "Ritz guests include Julie",
            "all of Mike's bookings are paid",
            "Ritz has 2 bookings",
        ]
    );
    assert_eq!(report.passed(), 9);

    let rooms = report.failures().next().unwrap();
    assert_eq!(rooms.expected, "5");
    assert_eq!(rooms.actual, "4");
    assert_eq!(rooms.to_string(), "Westin has 5 rooms: expected 5, got 4");

    let rates = report.failures().nth(1).unwrap();
    assert_eq!(rates.actual, "[300, 250]");
    Ok(())
}

#[test]
fn test_missing_fixture_fails_dependent_checks_only() -> anyhow::Result<()> {
    let (seeded_db, _) = seeded();
    let mut db = Database::new();
    // Same scenario without the Ritz.
    for user in seeded_db.users().iter() {
        db.create_user(user.name.clone());
    }
    let westin = db.create_hotel(seed::WESTIN, 5);
    for _ in 0..5 {
        db.create_room(westin.id, 300)?;
    }

    let report = verify::verify(&db);
    let ritz_failure = report
        .failures()
        .find(|f| f.property == "Ritz has 3 rooms")
        .unwrap();
    assert_eq!(ritz_failure.expected, r#"hotel named "Ritz""#);
    assert_eq!(ritz_failure.actual, "no such hotel");

    let users_check = &report.outcomes[0];
    assert!(users_check.passed);
    Ok(())
}

#[test]
fn test_report_rendering() {
    let (db, _) = seeded();
    let report = verify::verify(&db);

    let text = report.to_string();
    assert!(text.starts_with("PASS  users are Francis, Julie and Mike in name order"));
    assert!(text.ends_with("14 passed, 0 failed"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["outcomes"].as_array().unwrap().len(), 14);
    assert_eq!(json["outcomes"][0]["passed"], true);
    assert!(json["outcomes"][0].get("failure").is_none());
}
