//! Booking requests, the policy that admits them, and receipts.
//!
//! The conflict check itself runs inside the storage transaction (see
//! [`Storage::book`](crate::storage::Storage::book)); this module holds the
//! checks that need no database.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::config::BookingConfig;
use crate::error::{Error, Result};
use crate::stay::Stay;

/// A request to reserve one room for one client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRequest {
    /// Guest the room is booked for.
    pub client_id: i64,
    /// Room to book.
    pub room_id: i64,
    /// Requested interval.
    pub stay: Stay,
}

impl BookingRequest {
    /// Create a booking request.
    #[must_use]
    pub fn new(client_id: i64, room_id: i64, stay: Stay) -> Self {
        Self {
            client_id,
            room_id,
            stay,
        }
    }
}

/// Limits applied to a stay before it reaches the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingPolicy {
    max_stay_nights: u32,
    allow_past_arrivals: bool,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self::from(&BookingConfig::default())
    }
}

impl From<&BookingConfig> for BookingPolicy {
    fn from(config: &BookingConfig) -> Self {
        Self {
            max_stay_nights: config.max_stay_nights,
            allow_past_arrivals: config.allow_past_arrivals,
        }
    }
}

impl BookingPolicy {
    /// Check a stay against the policy.
    ///
    /// `today` is passed in rather than read from the clock so callers
    /// decide which calendar day the desk is on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StayTooLong`] or [`Error::ArrivalInPast`].
    pub fn admit(&self, stay: &Stay, today: NaiveDate) -> Result<()> {
        let nights = stay.nights();
        if self.max_stay_nights > 0 && nights > i64::from(self.max_stay_nights) {
            return Err(Error::StayTooLong {
                nights,
                max: self.max_stay_nights,
            });
        }

        if !self.allow_past_arrivals && stay.arrival() < today {
            return Err(Error::ArrivalInPast {
                arrival: stay.arrival(),
            });
        }

        debug!(%stay, nights, "stay admitted by booking policy");
        Ok(())
    }
}

/// Price of a stay at a fixed nightly rate.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn quote(nightly_rate: f64, stay: &Stay) -> f64 {
    nightly_rate * stay.nights() as f64
}

/// Confirmation of a stored reservation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingReceipt {
    /// Id of the new reservation.
    pub reservation_id: i64,
    /// Booked interval.
    #[serde(flatten)]
    pub stay: Stay,
    /// Number of nights.
    pub nights: i64,
    /// Guest id.
    pub client_id: i64,
    /// Guest name.
    pub client_name: String,
    /// Room id.
    pub room_id: i64,
    /// Room door number.
    pub room_number: i64,
    /// Room category.
    pub room_type: String,
    /// Nightly rate of that category.
    pub nightly_rate: f64,
    /// `nightly_rate * nights`.
    pub total_price: f64,
}
