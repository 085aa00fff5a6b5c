//! Core storage engine for the hotel booking store.
//!
//! Provides typed record tables, foreign-key checked inserts, composed
//! relationship queries, fixture seeding and self-verification.

pub mod config;
pub mod database;
pub mod error;
mod joins;
pub mod models;
pub mod seed;
pub mod table;
pub mod value;
pub mod verify;

pub use config::DbConfig;
pub use database::Database;
pub use error::DbError;
pub use models::{Booking, BookingId, Hotel, HotelId, Room, RoomId, User, UserId};
pub use value::Value;
