//! Error types for hotelres.
//!
//! This module defines all error types used throughout the hotelres crate,
//! separating storage failures from the business refusals (invalid stays,
//! double bookings, bad client details) that callers are expected to show
//! to the person at the desk.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for hotelres operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// Failed to open or create the database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// Failed to run database migrations.
    #[error("database migration failed: {message}")]
    DatabaseMigration {
        /// Description of what went wrong.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Booking Errors ===
    /// The departure date is not after the arrival date.
    #[error("departure ({departure}) must be after arrival ({arrival})")]
    InvalidStay {
        /// Requested arrival date.
        arrival: NaiveDate,
        /// Requested departure date.
        departure: NaiveDate,
    },

    /// The room already has a reservation overlapping the requested stay.
    #[error(
        "room {room_number} is already booked from {arrival} to {departure} (reservation #{reservation_id})"
    )]
    BookingConflict {
        /// Number of the contested room.
        room_number: i64,
        /// The existing reservation that overlaps.
        reservation_id: i64,
        /// Arrival date of the existing reservation.
        arrival: NaiveDate,
        /// Departure date of the existing reservation.
        departure: NaiveDate,
    },

    /// The stay is longer than the configured booking policy allows.
    #[error("stay of {nights} nights exceeds the maximum of {max} nights")]
    StayTooLong {
        /// Requested number of nights.
        nights: i64,
        /// Maximum allowed by configuration.
        max: u32,
    },

    /// The arrival date lies in the past and the policy forbids it.
    #[error("arrival date {arrival} is in the past")]
    ArrivalInPast {
        /// Requested arrival date.
        arrival: NaiveDate,
    },

    /// No room type with the given name exists.
    #[error("unknown room type '{0}'")]
    UnknownRoomType(String),

    /// A room number matches rooms in several hotels.
    #[error("room number {number} exists in {count} hotels; pick one with --hotel")]
    AmbiguousRoomNumber {
        /// The room number that was looked up.
        number: i64,
        /// How many rooms carry that number.
        count: usize,
    },

    // === Input Errors ===
    /// A record failed field validation.
    #[error("invalid {field}: {message}")]
    Validation {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },

    /// A referenced record does not exist.
    #[error("{entity} {key} not found")]
    NotFound {
        /// Kind of record (client, room, ...).
        entity: &'static str,
        /// How it was looked up.
        key: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for hotelres operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a field validation error.
    #[must_use]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create a not-found error for the given record kind.
    #[must_use]
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// Check if this error is a double-booking refusal.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::BookingConflict { .. })
    }

    /// Check if this error was caused by user input rather than the system.
    ///
    /// Rejected input is reported to the user as-is; everything else is a
    /// failure of the tool or its environment.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidStay { .. }
                | Self::BookingConflict { .. }
                | Self::StayTooLong { .. }
                | Self::ArrivalInPast { .. }
                | Self::UnknownRoomType(_)
                | Self::AmbiguousRoomNumber { .. }
                | Self::Validation { .. }
                | Self::NotFound { .. }
        )
    }
}
