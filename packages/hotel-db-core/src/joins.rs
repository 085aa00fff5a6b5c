//! Relationship queries composed from explicit joins.
//!
//! Hotel -> Room on `rooms.hotel_id`, Room -> Booking on `bookings.room_id`,
//! Booking -> User on `bookings.user_id`. Rows whose keys do not resolve are
//! skipped, which only happens when references are not enforced.

use std::collections::HashSet;

use crate::database::Database;
use crate::models::{Booking, Hotel, HotelId, Room, RoomId, User, UserId};

impl Database {
    /// Rooms belonging to the hotel, in id order.
    pub fn rooms_of_hotel(&self, hotel_id: HotelId) -> Vec<&Room> {
        self.rooms()
            .iter()
            .filter(|room| room.hotel_id == hotel_id)
            .collect()
    }

    /// Bookings of a single room, in id order.
    pub fn bookings_of_room(&self, room_id: RoomId) -> Vec<&Booking> {
        self.bookings()
            .iter()
            .filter(|booking| booking.room_id == room_id)
            .collect()
    }

    /// Bookings whose room belongs to the hotel, in booking id order.
    pub fn bookings_of_hotel(&self, hotel_id: HotelId) -> Vec<&Booking> {
        let room_ids: HashSet<RoomId> = self
            .rooms_of_hotel(hotel_id)
            .into_iter()
            .map(|room| room.id)
            .collect();

        let bookings: Vec<&Booking> = self
            .bookings()
            .iter()
            .filter(|booking| room_ids.contains(&booking.room_id))
            .collect();
        tracing::debug!(
            "Hotel #{} has {} bookings across {} rooms",
            hotel_id,
            bookings.len(),
            room_ids.len()
        );
        bookings
    }

    /// Bookings held by the user, in id order.
    pub fn bookings_of_user(&self, user_id: UserId) -> Vec<&Booking> {
        self.bookings()
            .iter()
            .filter(|booking| booking.user_id == user_id)
            .collect()
    }

    /// Bookings at the hotel held by one guest.
    pub fn bookings_of_hotel_for_guest(&self, hotel_id: HotelId, user_id: UserId) -> Vec<&Booking> {
        self.bookings_of_hotel(hotel_id)
            .into_iter()
            .filter(|booking| booking.user_id == user_id)
            .collect()
    }

    /// Guests of the hotel, one entry per booking.
    ///
    /// A guest with several bookings at the hotel appears once per booking.
    /// Use [`Database::distinct_guests_of_hotel`] for a deduplicated list.
    pub fn guests_of_hotel(&self, hotel_id: HotelId) -> Vec<&User> {
        let guests: Vec<&User> = self
            .bookings_of_hotel(hotel_id)
            .into_iter()
            .filter_map(|booking| self.guest_of_booking(booking))
            .collect();
        tracing::debug!(
            "Guests of hotel #{}: {:?}",
            hotel_id,
            guests.iter().map(|g| g.name.as_str()).collect::<Vec<_>>()
        );
        guests
    }

    /// Guests of the hotel without repeats, in order of first booking.
    pub fn distinct_guests_of_hotel(&self, hotel_id: HotelId) -> Vec<&User> {
        let mut seen = HashSet::new();
        self.guests_of_hotel(hotel_id)
            .into_iter()
            .filter(|guest| seen.insert(guest.id))
            .collect()
    }

    pub fn room_of_booking(&self, booking: &Booking) -> Option<&Room> {
        self.rooms().get(booking.room_id.0)
    }

    pub fn guest_of_booking(&self, booking: &Booking) -> Option<&User> {
        self.users().get(booking.user_id.0)
    }

    /// Hotel owning the booked room.
    pub fn hotel_of_booking(&self, booking: &Booking) -> Option<&Hotel> {
        self.room_of_booking(booking)
            .and_then(|room| self.hotels().get(room.hotel_id.0))
    }
}
