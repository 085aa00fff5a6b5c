//! Fixture data for the booking scenario.
//!
//! Every reference is taken from the record returned by the create call that
//! produced it, so the seed does not depend on id assignment order.

use crate::database::Database;
use crate::error::DbError;
use crate::models::{HotelId, Room, RoomId, UserId};
use crate::table::Record;

pub const FRANCIS: &str = "Francis Slim";
pub const JULIE: &str = "Julie Blook";
pub const MIKE: &str = "Mike Rasta";

pub const WESTIN: &str = "Westin";
pub const WESTIN_ROOMS: usize = 5;
pub const WESTIN_RATE: i64 = 300;

pub const RITZ: &str = "Ritz";
pub const RITZ_ROOMS: usize = 3;
pub const RITZ_RATE: i64 = 500;

/// Handles to everything the seed created.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub francis: UserId,
    pub julie: UserId,
    pub mike: UserId,
    pub westin: HotelId,
    pub ritz: HotelId,
    pub westin_rooms: Vec<RoomId>,
    pub ritz_rooms: Vec<RoomId>,
}

/// Populates `db` with the scenario's users, hotels, rooms and bookings.
///
/// Any failed insert aborts seeding; a partially seeded store is not usable
/// for verification.
pub fn seed(db: &mut Database) -> Result<Fixtures, DbError> {
    let francis = db.create_user(FRANCIS).id;
    let julie = db.create_user(JULIE).id;
    let mike = db.create_user(MIKE).id;

    let (westin, westin_rooms) = seed_hotel(db, WESTIN, WESTIN_ROOMS, WESTIN_RATE)?;
    let (ritz, ritz_rooms) = seed_hotel(db, RITZ, RITZ_ROOMS, RITZ_RATE)?;

    db.create_booking_unpaid(julie, room_at(&ritz_rooms, 1)?)?;

    db.create_booking_unpaid(francis, room_at(&westin_rooms, 1)?)?;
    db.create_booking_unpaid(francis, room_at(&ritz_rooms, 2)?)?;

    db.create_booking(mike, room_at(&westin_rooms, 0)?, true)?;
    db.create_booking(mike, room_at(&westin_rooms, 1)?, true)?;

    tracing::info!(
        "Seeded {} users, {} hotels, {} rooms, {} bookings",
        db.users().record_count(),
        db.hotels().record_count(),
        db.rooms().record_count(),
        db.bookings().record_count()
    );

    Ok(Fixtures {
        francis,
        julie,
        mike,
        westin,
        ritz,
        westin_rooms,
        ritz_rooms,
    })
}

/// Returns the `index`-th room created for a hotel.
///
/// Fails with `RecordNotFound` (numbering rooms from 1) if the hotel has fewer rooms.
fn room_at(rooms: &[RoomId], index: usize) -> Result<RoomId, DbError> {
    rooms
        .get(index)
        .copied()
        .ok_or_else(|| DbError::RecordNotFound {
            table: Room::TABLE.to_string(),
            id: index as u64 + 1,
        })
}

/// Creates a hotel declaring `rooms` rooms and that many rooms at `rate`.
fn seed_hotel(
    db: &mut Database,
    name: &str,
    rooms: usize,
    rate: i64,
) -> Result<(HotelId, Vec<RoomId>), DbError> {
    let hotel = db.create_hotel(name, rooms as i64).id;
    let room_ids = (0..rooms)
        .map(|_| db.create_room(hotel, rate).map(|room| room.id))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((hotel, room_ids))
}
