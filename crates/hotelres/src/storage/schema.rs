//! `SQLite` schema definitions for hotelres.
//!
//! This module contains the SQL statements for creating and managing
//! the database schema.

/// SQL statement to create the hotels table.
pub const CREATE_HOTELS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS hotels (
    id INTEGER PRIMARY KEY,
    city TEXT NOT NULL,
    country TEXT NOT NULL,
    postal_code TEXT NOT NULL
)
";

/// SQL statement to create the clients table.
pub const CREATE_CLIENTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS clients (
    id INTEGER PRIMARY KEY,
    full_name TEXT NOT NULL,
    address TEXT NOT NULL,
    city TEXT NOT NULL,
    postal_code TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL
)
";

/// SQL statement to create the services table.
pub const CREATE_SERVICES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS services (
    id INTEGER PRIMARY KEY,
    price REAL NOT NULL CHECK (price >= 0),
    description TEXT NOT NULL
)
";

/// SQL statement to create the room types table.
pub const CREATE_ROOM_TYPES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS room_types (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE COLLATE NOCASE,
    nightly_rate REAL NOT NULL CHECK (nightly_rate >= 0)
)
";

/// SQL statement to create the rooms table.
pub const CREATE_ROOMS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS rooms (
    id INTEGER PRIMARY KEY,
    number INTEGER NOT NULL,
    floor INTEGER NOT NULL,
    balcony INTEGER NOT NULL DEFAULT 0,
    room_type_id INTEGER NOT NULL REFERENCES room_types(id),
    hotel_id INTEGER NOT NULL REFERENCES hotels(id),
    UNIQUE (hotel_id, number)
)
";

/// SQL statement to create the reservations table.
///
/// Dates are `YYYY-MM-DD` text, so string comparison is date comparison.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS reservations (
    id INTEGER PRIMARY KEY,
    arrival TEXT NOT NULL,
    departure TEXT NOT NULL,
    client_id INTEGER NOT NULL REFERENCES clients(id),
    room_id INTEGER NOT NULL REFERENCES rooms(id),
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    CHECK (departure > arrival)
)
";

/// SQL statement to create the evaluations table.
pub const CREATE_EVALUATIONS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS evaluations (
    id INTEGER PRIMARY KEY,
    date TEXT NOT NULL,
    rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
    comment TEXT NOT NULL DEFAULT '',
    client_id INTEGER NOT NULL REFERENCES clients(id)
)
";

/// Index backing the per-room overlap check.
pub const CREATE_RESERVATION_ROOM_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_reservations_room_dates
    ON reservations(room_id, arrival, departure)
";

/// Index backing the availability scan across all rooms.
pub const CREATE_RESERVATION_DATES_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_reservations_dates ON reservations(arrival, departure)
";

/// Index for the client city filter.
pub const CREATE_CLIENT_CITY_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_clients_city ON clients(city)
";

/// SQL statement to create the metadata table for storing key-value pairs.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// All schema creation statements in dependency order.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    CREATE_HOTELS_TABLE,
    CREATE_CLIENTS_TABLE,
    CREATE_SERVICES_TABLE,
    CREATE_ROOM_TYPES_TABLE,
    CREATE_ROOMS_TABLE,
    CREATE_RESERVATIONS_TABLE,
    CREATE_EVALUATIONS_TABLE,
    CREATE_RESERVATION_ROOM_INDEX,
    CREATE_RESERVATION_DATES_INDEX,
    CREATE_CLIENT_CITY_INDEX,
    CREATE_METADATA_TABLE,
];

/// Predicate selecting reservations that overlap a stay.
///
/// Binds `?1` to the new departure and `?2` to the new arrival, the
/// SQL form of [`Stay::overlaps`](crate::stay::Stay::overlaps).
pub const OVERLAPS_STAY: &str = "arrival < ?1 AND departure > ?2";
