//! Records stored by the reservation desk.
//!
//! Each type mirrors one table (or one joined listing) and is what the
//! storage layer hands back to callers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::stay::Stay;

/// A hotel of the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hotel {
    /// Row id.
    pub id: i64,
    /// City the hotel is in.
    pub city: String,
    /// Country the hotel is in.
    pub country: String,
    /// Postal code of the hotel.
    pub postal_code: String,
}

/// A registered guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Client {
    /// Row id.
    pub id: i64,
    /// First and last name.
    pub full_name: String,
    /// Street address.
    pub address: String,
    /// City of residence.
    pub city: String,
    /// Postal code of residence.
    pub postal_code: String,
    /// Contact email.
    pub email: String,
    /// Contact phone, digits only.
    pub phone: String,
}

/// Details for a client that has not been stored yet.
///
/// Checked by [`NewClient::validate`] before insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    /// First and last name.
    pub full_name: String,
    /// Street address.
    pub address: String,
    /// City of residence.
    pub city: String,
    /// Postal code of residence.
    pub postal_code: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
}

/// A category of room with its nightly rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomType {
    /// Row id.
    pub id: i64,
    /// Display name, unique across the chain.
    pub name: String,
    /// Price of one night.
    pub nightly_rate: f64,
}

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    /// Row id.
    pub id: i64,
    /// Door number, unique within a hotel.
    pub number: i64,
    /// Floor the room is on.
    pub floor: i64,
    /// Whether the room has a balcony.
    pub balcony: bool,
    /// The room's category.
    pub room_type: RoomType,
    /// Hotel the room belongs to.
    pub hotel_id: i64,
    /// City of that hotel.
    pub hotel_city: String,
}

/// A stored reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    /// Row id.
    pub id: i64,
    /// Occupied interval.
    #[serde(flatten)]
    pub stay: Stay,
    /// Guest the room is booked for.
    pub client_id: i64,
    /// Booked room.
    pub room_id: i64,
}

/// A reservation joined with its client and room, as listed at the desk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationSummary {
    /// Reservation id.
    pub id: i64,
    /// Occupied interval.
    #[serde(flatten)]
    pub stay: Stay,
    /// Guest id.
    pub client_id: i64,
    /// Guest name.
    pub client_name: String,
    /// Room id.
    pub room_id: i64,
    /// Room door number.
    pub room_number: i64,
}

/// An extra service sold by the chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    /// Row id.
    pub id: i64,
    /// Fixed price.
    pub price: f64,
    /// What the service is.
    pub description: String,
}

/// A review left by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Row id.
    pub id: i64,
    /// Day of the review.
    pub date: NaiveDate,
    /// Score from 1 to 5.
    pub rating: u8,
    /// Free-form text.
    pub comment: String,
    /// Author.
    pub client_id: i64,
    /// Author's name.
    pub client_name: String,
}

/// A review that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvaluation {
    /// Author.
    pub client_id: i64,
    /// Day of the review.
    pub date: NaiveDate,
    /// Score from 1 to 5.
    pub rating: u8,
    /// Free-form text, may be empty.
    pub comment: String,
}
