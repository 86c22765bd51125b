//! Storage layer for hotelres.
//!
//! This module provides `SQLite`-based persistent storage for hotels, rooms,
//! clients and reservations, including the availability query and the
//! conflict-checked booking insert.

mod clients;
mod inventory;
pub mod migrations;
mod reservations;
mod reviews;
pub mod schema;
mod seed;

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{Connection, Row};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::stay::DATE_FORMAT;

/// Storage engine for the reservation desk.
///
/// Provides persistent storage using `SQLite` with support for:
/// - Client registration and listing
/// - Room availability for a stay, optionally by room type
/// - Reservation insert guarded against double booking
/// - Catalog listings (hotels, room types, rooms, services) and reviews
#[derive(Debug)]
pub struct Storage {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl Storage {
    /// Open or create a storage database at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist.
    /// Initializes the schema if this is a new database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        Self::prepare(&conn)?;

        info!("Database opened at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory storage instance for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        Self::prepare(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    fn prepare(conn: &Connection) -> Result<()> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        migrations::initialize_schema(conn)
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set how long a write waits for another connection's lock.
    ///
    /// # Errors
    ///
    /// Returns an error if `SQLite` rejects the setting.
    pub fn set_busy_timeout(&self, timeout: Duration) -> Result<()> {
        self.conn.busy_timeout(timeout)?;
        debug!(?timeout, "busy timeout set");
        Ok(())
    }

    /// Get database statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn stats(&self) -> Result<StorageStats> {
        let db_size_bytes = if self.path.to_string_lossy() == ":memory:" {
            0
        } else {
            std::fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0)
        };

        Ok(StorageStats {
            hotels: self.count_rows("hotels")?,
            rooms: self.count_rows("rooms")?,
            clients: self.count_rows("clients")?,
            reservations: self.count_rows("reservations")?,
            evaluations: self.count_rows("evaluations")?,
            schema_version: migrations::schema_version(&self.conn)?,
            db_size_bytes,
        })
    }

    fn count_rows(&self, table: &'static str) -> Result<i64> {
        let count = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })?;
        Ok(count)
    }
}

/// Statistics about the storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageStats {
    /// Number of hotels.
    pub hotels: i64,
    /// Number of rooms across all hotels.
    pub rooms: i64,
    /// Number of registered clients.
    pub clients: i64,
    /// Number of reservations, past and future.
    pub reservations: i64,
    /// Number of reviews.
    pub evaluations: i64,
    /// Schema version recorded in the database.
    pub schema_version: i32,
    /// Size of the database file in bytes.
    pub db_size_bytes: u64,
}

/// Read a `YYYY-MM-DD` text column.
fn date_column(row: &Row, idx: usize) -> rusqlite::Result<NaiveDate> {
    let text: String = row.get(idx)?;
    NaiveDate::parse_from_str(&text, DATE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
