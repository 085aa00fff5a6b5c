//! Database container holding the four entity tables.

use serde_json::Map;

use crate::config::DbConfig;
use crate::error::DbError;
use crate::models::{Booking, BookingId, Hotel, HotelId, Room, RoomId, User, UserId};
use crate::table::{Record, Table};
use crate::value::Value;

/// Record types that live in a [`Database`] table.
pub trait Collection: Record {
    fn table(db: &Database) -> &Table<Self>;
    fn table_mut(db: &mut Database) -> &mut Table<Self>;
}

macro_rules! collection {
    ($record:ty, $field:ident) => {
        impl Collection for $record {
            fn table(db: &Database) -> &Table<Self> {
                &db.$field
            }

            fn table_mut(db: &mut Database) -> &mut Table<Self> {
                &mut db.$field
            }
        }
    };
}

collection!(Hotel, hotels);
collection!(Room, rooms);
collection!(User, users);
collection!(Booking, bookings);

/// Database container holding all tables.
///
/// Passed explicitly to every operation. Inserts take `&mut self`, queries
/// `&self`; there is no interior locking.
#[derive(Debug, Clone)]
pub struct Database {
    config: DbConfig,
    hotels: Table<Hotel>,
    rooms: Table<Room>,
    users: Table<User>,
    bookings: Table<Booking>,
}

impl Database {
    /// Creates a new empty database with default configuration.
    pub fn new() -> Self {
        Self::with_config(DbConfig::default())
    }

    /// Creates a new empty database.
    pub fn with_config(config: DbConfig) -> Self {
        let capacity = config.initial_table_capacity;
        Self {
            config,
            hotels: Table::with_capacity(capacity),
            rooms: Table::with_capacity(capacity),
            users: Table::with_capacity(capacity),
            bookings: Table::with_capacity(capacity),
        }
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    pub fn hotels(&self) -> &Table<Hotel> {
        &self.hotels
    }

    pub fn rooms(&self) -> &Table<Room> {
        &self.rooms
    }

    pub fn users(&self) -> &Table<User> {
        &self.users
    }

    pub fn bookings(&self) -> &Table<Booking> {
        &self.bookings
    }

    /// Returns the table holding records of type `R`.
    pub fn table<R: Collection>(&self) -> &Table<R> {
        R::table(self)
    }

    /// Inserts a new hotel. The declared room count is stored as-is.
    pub fn create_hotel(&mut self, name: impl Into<String>, number_of_rooms: i64) -> Hotel {
        let id = HotelId(self.hotels.current_next_id());
        self.append(Hotel {
            id,
            name: name.into(),
            number_of_rooms,
        })
    }

    /// Inserts a new room belonging to `hotel_id`.
    ///
    /// # Returns
    /// `Err(DbError::Reference)` if the hotel does not exist and references
    /// are enforced.
    pub fn create_room(&mut self, hotel_id: HotelId, rate: i64) -> Result<Room, DbError> {
        let id = RoomId(self.rooms.current_next_id());
        self.insert(Room { id, rate, hotel_id })
    }

    /// Inserts a new user.
    pub fn create_user(&mut self, name: impl Into<String>) -> User {
        let id = UserId(self.users.current_next_id());
        self.append(User {
            id,
            name: name.into(),
        })
    }

    /// Inserts a new booking of `room_id` by `guest_id`.
    ///
    /// # Returns
    /// `Err(DbError::Reference)` if the guest or the room does not exist and
    /// references are enforced.
    pub fn create_booking(
        &mut self,
        guest_id: UserId,
        room_id: RoomId,
        paid: bool,
    ) -> Result<Booking, DbError> {
        let id = BookingId(self.bookings.current_next_id());
        self.insert(Booking {
            id,
            user_id: guest_id,
            room_id,
            paid,
        })
    }

    /// Inserts a new booking with the default unpaid status.
    pub fn create_booking_unpaid(
        &mut self,
        guest_id: UserId,
        room_id: RoomId,
    ) -> Result<Booking, DbError> {
        self.create_booking(guest_id, room_id, false)
    }

    pub fn hotel(&self, id: HotelId) -> Result<&Hotel, DbError> {
        self.hotels.require(id.0)
    }

    pub fn room(&self, id: RoomId) -> Result<&Room, DbError> {
        self.rooms.require(id.0)
    }

    pub fn user(&self, id: UserId) -> Result<&User, DbError> {
        self.users.require(id.0)
    }

    pub fn booking(&self, id: BookingId) -> Result<&Booking, DbError> {
        self.bookings.require(id.0)
    }

    /// Returns the first record of `R` whose `field` equals `value`.
    pub fn find_by_field<R: Collection>(
        &self,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<Option<&R>, DbError> {
        R::table(self).find_by(field, &value.into())
    }

    /// Returns every record of `R` whose `field` equals `value`.
    pub fn filter_by_field<R: Collection>(
        &self,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<Vec<&R>, DbError> {
        R::table(self).filter_by(field, &value.into())
    }

    /// Returns all records of `R` sorted ascending by `field`.
    pub fn list_ordered_by<R: Collection>(&self, field: &str) -> Result<Vec<&R>, DbError> {
        R::table(self).ordered_by(field)
    }

    /// Counts records of `R` matching the predicate.
    pub fn count_where<R: Collection, F>(&self, predicate: F) -> usize
    where
        F: Fn(&R) -> bool,
    {
        R::table(self).count_where(predicate)
    }

    /// Returns the names of all tables.
    pub fn table_names(&self) -> Vec<&'static str> {
        vec![Hotel::TABLE, Room::TABLE, User::TABLE, Booking::TABLE]
    }

    /// Returns the number of records in the named table.
    pub fn record_count(&self, table: &str) -> Result<usize, DbError> {
        match table {
            Hotel::TABLE => Ok(self.hotels.record_count()),
            Room::TABLE => Ok(self.rooms.record_count()),
            User::TABLE => Ok(self.users.record_count()),
            Booking::TABLE => Ok(self.bookings.record_count()),
            _ => Err(DbError::TableNotFound {
                table: table.to_string(),
            }),
        }
    }

    /// Serializes every table into a JSON object keyed by table name.
    pub fn dump(&self) -> Result<serde_json::Value, DbError> {
        let mut tables = Map::new();
        tables.insert(
            Hotel::TABLE.to_string(),
            serde_json::to_value(self.hotels.records())?,
        );
        tables.insert(
            Room::TABLE.to_string(),
            serde_json::to_value(self.rooms.records())?,
        );
        tables.insert(
            User::TABLE.to_string(),
            serde_json::to_value(self.users.records())?,
        );
        tables.insert(
            Booking::TABLE.to_string(),
            serde_json::to_value(self.bookings.records())?,
        );
        Ok(serde_json::Value::Object(tables))
    }

    /// Checks the record's foreign keys, then appends it.
    fn insert<R: Collection>(&mut self, record: R) -> Result<R, DbError> {
        self.check_references(&record)?;
        Ok(self.append(record))
    }

    fn append<R: Collection>(&mut self, record: R) -> R {
        let stored = R::table_mut(self).push(record).clone();
        tracing::debug!("Inserted {} #{}", R::TABLE, stored.id());
        stored
    }

    /// Verifies that every relation declared by `R` resolves.
    ///
    /// With `enforce_references` off, a dangling key is logged and accepted.
    fn check_references<R: Record>(&self, record: &R) -> Result<(), DbError> {
        for relation in R::RELATIONS {
            let value = record
                .get(relation.from_field)
                .ok_or_else(|| DbError::FieldNotFound {
                    table: R::TABLE.to_string(),
                    field: relation.from_field.to_string(),
                })?;

            if self.table_has(relation.to_table, relation.to_field, &value)? {
                continue;
            }

            let id = value.as_id().ok_or_else(|| DbError::TypeMismatch {
                field: format!("{}.{}", R::TABLE, relation.from_field),
                expected: "id".to_string(),
                got: value.kind_name().to_string(),
            })?;
            let err = DbError::Reference {
                table: R::TABLE.to_string(),
                field: relation.from_field.to_string(),
                target: relation.to_table.to_string(),
                id,
            };
            if self.config.enforce_references {
                return Err(err);
            }
            tracing::warn!("Storing dangling reference: {}", err);
        }
        Ok(())
    }

    /// Returns true if the named table holds a record whose `field` equals `value`.
    fn table_has(&self, table: &str, field: &str, value: &Value) -> Result<bool, DbError> {
        let found = match table {
            Hotel::TABLE => self.hotels.find_by(field, value)?.is_some(),
            Room::TABLE => self.rooms.find_by(field, value)?.is_some(),
            User::TABLE => self.users.find_by(field, value)?.is_some(),
            Booking::TABLE => self.bookings.find_by(field, value)?.is_some(),
            _ => {
                return Err(DbError::TableNotFound {
                    table: table.to_string(),
                })
            }
        };
        Ok(found)
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}
