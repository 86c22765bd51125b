//! The availability query and the conflict-checked booking insert.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};
use tracing::{debug, info, warn};

use super::inventory::{row_to_room, ROOM_SELECT};
use super::schema::OVERLAPS_STAY;
use super::{date_column, Storage};
use crate::booking::{quote, BookingPolicy, BookingReceipt, BookingRequest};
use crate::error::{Error, Result};
use crate::model::{Reservation, ReservationSummary, Room};
use crate::stay::{format_date, Stay};

/// Reservations joined with their client and room, in [`row_to_summary`]
/// column order.
const SUMMARY_SELECT: &str = r"
SELECT res.id, res.arrival, res.departure, c.id, c.full_name, r.id, r.number
FROM reservations res
JOIN clients c ON c.id = res.client_id
JOIN rooms r ON r.id = res.room_id
";

impl Storage {
    /// Rooms with no reservation overlapping `stay`, ordered by number.
    ///
    /// With `room_type`, only rooms of that type (name matched ignoring case)
    /// are considered. An empty result means the hotel is full for the stay.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRoomType`] for a type name that does not
    /// exist, or an error if the database operation fails.
    pub fn available_rooms(&self, stay: &Stay, room_type: Option<&str>) -> Result<Vec<Room>> {
        let type_id = room_type
            .map(|name| self.room_type_by_name(name))
            .transpose()?
            .map(|t| t.id);

        let mut stmt = self.conn.prepare(&format!(
            r"
            {ROOM_SELECT}
            WHERE r.id NOT IN (SELECT room_id FROM reservations WHERE {OVERLAPS_STAY})
              AND (?3 IS NULL OR r.room_type_id = ?3)
            ORDER BY r.number, h.id
            "
        ))?;

        let rooms = stmt
            .query_map(
                params![
                    format_date(stay.departure()),
                    format_date(stay.arrival()),
                    type_id
                ],
                row_to_room,
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!(%stay, ?room_type, free = rooms.len(), "availability checked");
        Ok(rooms)
    }

    /// The first reservation of `room_id` overlapping `stay`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn conflicting_reservation(&self, room_id: i64, stay: &Stay) -> Result<Option<Reservation>> {
        find_conflict(&self.conn, room_id, stay)
    }

    /// Store a reservation unless it would double-book the room.
    ///
    /// `policy` is applied to the stay first, with `today` as the desk's
    /// current day. The overlap check and the insert then run in one
    /// `IMMEDIATE` transaction: the write lock is taken before the check,
    /// so a concurrent booking of
    /// the same room (from this or another process) either commits first and
    /// is seen by the check, or waits until this one has committed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StayTooLong`] or [`Error::ArrivalInPast`] when the
    /// policy refuses the stay, [`Error::NotFound`] for an unknown client or
    /// room, [`Error::BookingConflict`] if the room is taken for part of the stay,
    /// or an error if the database operation fails.
    pub fn book(
        &mut self,
        request: &BookingRequest,
        policy: &BookingPolicy,
        today: NaiveDate,
    ) -> Result<BookingReceipt> {
        let BookingRequest {
            client_id,
            room_id,
            stay,
        } = *request;

        policy.admit(&stay, today)?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let client_name: String = tx
            .query_row(
                "SELECT full_name FROM clients WHERE id = ?1",
                [client_id],
                |row| row.get(0),
            )
            .optional()?
            .ok_or_else(|| Error::not_found("client", client_id))?;

        let room = tx
            .query_row(&format!("{ROOM_SELECT} WHERE r.id = ?1"), [room_id], row_to_room)
            .optional()?
            .ok_or_else(|| Error::not_found("room", room_id))?;

        if let Some(existing) = find_conflict(&tx, room_id, &stay)? {
            warn!(
                room = room.number,
                %stay,
                existing = existing.id,
                "booking refused: room already taken"
            );
            // Dropping the transaction rolls it back.
            return Err(Error::BookingConflict {
                room_number: room.number,
                reservation_id: existing.id,
                arrival: existing.stay.arrival(),
                departure: existing.stay.departure(),
            });
        }

        tx.execute(
            r"
            INSERT INTO reservations (arrival, departure, client_id, room_id)
            VALUES (?1, ?2, ?3, ?4)
            ",
            params![
                format_date(stay.arrival()),
                format_date(stay.departure()),
                client_id,
                room_id
            ],
        )?;
        let reservation_id = tx.last_insert_rowid();
        tx.commit()?;

        info!(
            reservation = reservation_id,
            room = room.number,
            client = client_id,
            %stay,
            "reservation booked"
        );

        Ok(BookingReceipt {
            reservation_id,
            stay,
            nights: stay.nights(),
            client_id,
            client_name,
            room_id,
            room_number: room.number,
            total_price: quote(room.room_type.nightly_rate, &stay),
            nightly_rate: room.room_type.nightly_rate,
            room_type: room.room_type.name,
        })
    }

    /// Get a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn reservation(&self, id: i64) -> Result<Option<Reservation>> {
        let reservation = self
            .conn
            .query_row(
                "SELECT id, arrival, departure, client_id, room_id FROM reservations WHERE id = ?1",
                [id],
                row_to_reservation,
            )
            .optional()?;
        Ok(reservation)
    }

    /// List reservations with client and room, ordered by arrival date.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn reservations(&self) -> Result<Vec<ReservationSummary>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SUMMARY_SELECT} ORDER BY res.arrival, res.id"))?;

        let reservations = stmt
            .query_map([], row_to_summary)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(reservations)
    }

    /// List reservations sharing at least one night with `window`, ordered
    /// by arrival date.
    ///
    /// Stays ending on the window's first day or starting on its last
    /// (exclusive) day are not included.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn reservations_overlapping(&self, window: &Stay) -> Result<Vec<ReservationSummary>> {
        let mut stmt = self.conn.prepare(&format!(
            "{SUMMARY_SELECT} WHERE {OVERLAPS_STAY} ORDER BY res.arrival, res.id"
        ))?;

        let reservations = stmt
            .query_map(
                params![format_date(window.departure()), format_date(window.arrival())],
                row_to_summary,
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!(%window, count = reservations.len(), "listed reservations in window");
        Ok(reservations)
    }
}

fn find_conflict(conn: &Connection, room_id: i64, stay: &Stay) -> Result<Option<Reservation>> {
    let existing = conn
        .query_row(
            &format!(
                r"
                SELECT id, arrival, departure, client_id, room_id FROM reservations
                WHERE room_id = ?3 AND {OVERLAPS_STAY}
                ORDER BY arrival LIMIT 1
                "
            ),
            params![
                format_date(stay.departure()),
                format_date(stay.arrival()),
                room_id
            ],
            row_to_reservation,
        )
        .optional()?;
    Ok(existing)
}

fn row_to_summary(row: &Row) -> rusqlite::Result<ReservationSummary> {
    Ok(ReservationSummary {
        id: row.get(0)?,
        stay: Stay::from_stored(date_column(row, 1)?, date_column(row, 2)?),
        client_id: row.get(3)?,
        client_name: row.get(4)?,
        room_id: row.get(5)?,
        room_number: row.get(6)?,
    })
}

fn row_to_reservation(row: &Row) -> rusqlite::Result<Reservation> {
    Ok(Reservation {
        id: row.get(0)?,
        stay: Stay::from_stored(date_column(row, 1)?, date_column(row, 2)?),
        client_id: row.get(3)?,
        room_id: row.get(4)?,
    })
}
