//! Record types stored by the database.

use std::fmt;

use serde::Serialize;

use crate::table::{Field, FieldKind, Record, Relation};
use crate::value::Value;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for Value {
            fn from(id: $name) -> Self {
                Value::Id(id.0)
            }
        }
    };
}

record_id!(
    /// Primary key of a [`Hotel`].
    HotelId
);
record_id!(
    /// Primary key of a [`Room`].
    RoomId
);
record_id!(
    /// Primary key of a [`User`].
    UserId
);
record_id!(
    /// Primary key of a [`Booking`].
    BookingId
);

/// A property containing rentable rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    /// Declared room count; not checked against the rooms table.
    pub number_of_rooms: i64,
}

/// A rentable unit within a hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    pub id: RoomId,
    /// Nightly rate in currency units
    pub rate: i64,
    pub hotel_id: HotelId,
}

/// A person who can hold bookings. Called the guest of a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

/// A reservation of one room by one guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    pub room_id: RoomId,
    pub paid: bool,
}

impl Record for Hotel {
    const TABLE: &'static str = "hotels";
    const FIELDS: &'static [Field] = &[
        Field::new("id", FieldKind::Id),
        Field::new("name", FieldKind::Text),
        Field::new("number_of_rooms", FieldKind::Integer),
    ];

    fn id(&self) -> u64 {
        self.id.0
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_str().into()),
            "number_of_rooms" => Some(self.number_of_rooms.into()),
            _ => None,
        }
    }
}

impl Record for Room {
    const TABLE: &'static str = "rooms";
    const FIELDS: &'static [Field] = &[
        Field::new("id", FieldKind::Id),
        Field::new("rate", FieldKind::Integer),
        Field::new("hotel_id", FieldKind::Reference),
    ];
    const RELATIONS: &'static [Relation] = &[Relation::belongs_to("hotel_id", Hotel::TABLE)];

    fn id(&self) -> u64 {
        self.id.0
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.into()),
            "rate" => Some(self.rate.into()),
            "hotel_id" => Some(self.hotel_id.into()),
            _ => None,
        }
    }
}

impl Record for User {
    const TABLE: &'static str = "users";
    const FIELDS: &'static [Field] = &[
        Field::new("id", FieldKind::Id),
        Field::new("name", FieldKind::Text),
    ];

    fn id(&self) -> u64 {
        self.id.0
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_str().into()),
            _ => None,
        }
    }
}

impl Record for Booking {
    const TABLE: &'static str = "bookings";
    const FIELDS: &'static [Field] = &[
        Field::new("id", FieldKind::Id),
        Field::new("user_id", FieldKind::Reference),
        Field::new("room_id", FieldKind::Reference),
        Field::new("paid", FieldKind::Bool),
    ];
    const RELATIONS: &'static [Relation] = &[
        Relation::belongs_to("user_id", User::TABLE),
        Relation::belongs_to("room_id", Room::TABLE),
    ];

    fn id(&self) -> u64 {
        self.id.0
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.into()),
            "user_id" => Some(self.user_id.into()),
            "room_id" => Some(self.room_id.into()),
            "paid" => Some(self.paid.into()),
            _ => None,
        }
    }
}
