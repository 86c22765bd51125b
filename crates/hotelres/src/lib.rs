//! `hotelres` - reservation desk for a hotel chain
//!
//! This library provides the room-availability and booking-conflict engine
//! behind the `hotelres` CLI, on top of a local `SQLite` database of hotels,
//! rooms, clients and reservations.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod booking;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod search;
pub mod stay;
pub mod storage;
pub mod validation;

pub use booking::{BookingPolicy, BookingReceipt, BookingRequest};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use model::{Client, NewClient, Reservation, ReservationSummary, Room};
pub use stay::Stay;
pub use storage::{Storage, StorageStats};
