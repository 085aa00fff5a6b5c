//! Foreign key enforcement on insert.

use hotel_db_core::{Database, DbConfig, DbError, Hotel, HotelId, Room, RoomId, UserId};

#[test]
fn test_room_with_unknown_hotel_is_rejected() {
    let mut db = Database::new();
    let err = db.create_room(HotelId(7), 300).unwrap_err();
    assert_eq!(
        err,
        DbError::Reference {
            table: "rooms".to_string(),
            field: "hotel_id".to_string(),
            target: "hotels".to_string(),
            id: 7,
        }
    );
    assert!(db.rooms().is_empty());
    // A rejected insert does not consume an id.
    assert_eq!(db.rooms().current_next_id(), 1);
}

#[test]
fn test_booking_with_unknown_guest_is_rejected() {
    let mut db = Database::new();
    let hotel = db.create_hotel("Westin", 1);
    let room = db.create_room(hotel.id, 300).unwrap();

    let err = db.create_booking(UserId(3), room.id, false).unwrap_err();
    assert!(matches!(err, DbError::Reference { ref field, id: 3, .. } if field == "user_id"));
    assert!(db.bookings().is_empty());
}

#[test]
fn test_booking_with_unknown_room_is_rejected() {
    let mut db = Database::new();
    let guest = db.create_user("Julie Blook");

    let err = db.create_booking(guest.id, RoomId(8), true).unwrap_err();
    assert!(matches!(err, DbError::Reference { ref target, id: 8, .. } if target == "rooms"));
    assert_eq!(
        err.to_string(),
        "Reference error: 'bookings.room_id' = 8 has no matching row in 'rooms'"
    );
}

#[test]
fn test_ids_are_sequential_per_table() {
    let mut db = Database::new();
    let a = db.create_user("a");
    let b = db.create_user("b");
    let hotel = db.create_hotel("h", 2);
    let room = db.create_room(hotel.id, 10).unwrap();
    let booking = db.create_booking(b.id, room.id, false).unwrap();

    assert_eq!((a.id, b.id), (UserId(1), UserId(2)));
    assert_eq!(hotel.id, HotelId(1));
    assert_eq!(room.id, RoomId(1));
    assert_eq!(booking.id.get(), 1);
    assert!(!booking.paid);
}

#[test]
fn test_unpaid_booking_default() {
    let mut db = Database::new();
    let guest = db.create_user("Francis Slim");
    let hotel = db.create_hotel("Ritz", 1);
    let room = db.create_room(hotel.id, 500).unwrap();

    let booking = db.create_booking_unpaid(guest.id, room.id).unwrap();
    assert!(!booking.paid);
    assert_eq!(db.booking(booking.id).unwrap(), &booking);

    let err = db.create_booking_unpaid(guest.id, RoomId(2)).unwrap_err();
    assert!(matches!(err, DbError::Reference { id: 2, .. }));
}

#[test]
fn test_config_and_generic_table_access() {
    let strict = Database::new();
    assert!(strict.config().enforce_references);
    assert_eq!(strict.config().initial_table_capacity, 16);

    let mut loose = Database::with_config(DbConfig::unchecked());
    assert!(!loose.config().enforce_references);
    let hotel = loose.create_hotel("Westin", 2);
    loose.create_room(hotel.id, 300).unwrap();

    let rooms = loose.table::<Room>();
    assert_eq!(rooms.name(), "rooms");
    assert_eq!(rooms.record_count(), 1);
    assert_eq!(loose.table::<Hotel>().get(1).map(|h| h.name.as_str()), Some("Westin"));
}

#[test]
fn test_unchecked_references_store_dangling_rows() {
    let mut db = Database::with_config(DbConfig::unchecked());
    let guest = db.create_user("Mike Rasta");
    let hotel = db.create_hotel("Westin", 5);
    let room = db.create_room(hotel.id, 300).unwrap();

    let orphan_room = db.create_room(HotelId(99), 100).unwrap();
    let dangling = db.create_booking(guest.id, RoomId(50), true).unwrap();
    let booking = db.create_booking(guest.id, room.id, true).unwrap();

    assert_eq!(orphan_room.hotel_id, HotelId(99));
    assert_eq!(db.bookings().record_count(), 2);
    assert!(db.room_of_booking(&dangling).is_none());
    assert!(db.hotel_of_booking(&dangling).is_none());

    // Joins only see the booking whose room resolves.
    assert_eq!(db.bookings_of_hotel(hotel.id), vec![&booking]);
    assert_eq!(db.guests_of_hotel(hotel.id).len(), 1);
    assert_eq!(db.bookings_of_user(guest.id).len(), 2);
}

#[test]
fn test_unknown_table_name() {
    let db = Database::new();
    assert_eq!(
        db.record_count("reviews"),
        Err(DbError::TableNotFound {
            table: "reviews".to_string()
        })
    );
    assert_eq!(db.table_names(), vec!["hotels", "rooms", "users", "bookings"]);
}
