//! Half-open date intervals.
//!
//! A [`Stay`] is the `[arrival, departure)` interval a room is occupied for.
//! The guest sleeps the nights starting on `arrival` up to, but not
//! including, `departure`, so a room freed on a given morning can be booked
//! again from that same day.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{Error, Result};

/// Date format used for storage and display.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Years whose `YYYY-MM-DD` text sorts in date order.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// A room occupation interval, `[arrival, departure)`.
///
/// Always at least one night long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Stay {
    arrival: NaiveDate,
    departure: NaiveDate,
}

impl Stay {
    /// Create a stay.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStay`] if `departure` is not strictly after
    /// `arrival`, or a validation error if either date falls outside
    /// [`YEAR_RANGE`].
    pub fn new(arrival: NaiveDate, departure: NaiveDate) -> Result<Self> {
        check_year("arrival", arrival)?;
        check_year("departure", departure)?;
        if departure <= arrival {
            return Err(Error::InvalidStay { arrival, departure });
        }
        Ok(Self { arrival, departure })
    }

    /// Build a stay from two `YYYY-MM-DD` strings.
    ///
    /// # Errors
    ///
    /// Returns a validation error if either date does not parse, or
    /// [`Error::InvalidStay`] if the dates are out of order.
    pub fn parse(arrival: &str, departure: &str) -> Result<Self> {
        Self::new(parse_date("arrival", arrival)?, parse_date("departure", departure)?)
    }

    /// Rebuild a stay from a row the schema has already checked.
    ///
    /// The `reservations` table carries `CHECK (departure > arrival)`, so
    /// rows read back are valid by construction.
    pub(crate) fn from_stored(arrival: NaiveDate, departure: NaiveDate) -> Self {
        debug_assert!(departure > arrival);
        Self { arrival, departure }
    }

    /// First night of the stay.
    #[must_use]
    pub fn arrival(&self) -> NaiveDate {
        self.arrival
    }

    /// Day the room is vacated.
    #[must_use]
    pub fn departure(&self) -> NaiveDate {
        self.departure
    }

    /// Number of nights, always at least 1.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.departure - self.arrival).num_days()
    }

    /// Whether two stays compete for the same nights.
    ///
    /// `a` and `b` overlap iff `a.arrival < b.departure && a.departure > b.arrival`.
    /// The relation is symmetric, and back-to-back stays do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Stay) -> bool {
        self.arrival < other.departure && self.departure > other.arrival
    }

    /// Whether the night starting on `date` belongs to this stay.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.arrival <= date && date < self.departure
    }
}

impl fmt::Display for Stay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.arrival.format(DATE_FORMAT),
            self.departure.format(DATE_FORMAT)
        )
    }
}

/// Parse a `YYYY-MM-DD` date, naming the field on failure.
///
/// # Errors
///
/// Returns [`Error::Validation`] if `value` is not a valid date or its
/// year falls outside [`YEAR_RANGE`].
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        Error::validation(field, format!("'{value}' is not a YYYY-MM-DD date ({e})"))
    })?;
    check_year(field, date)
}

fn check_year(field: &'static str, date: NaiveDate) -> Result<NaiveDate> {
    if YEAR_RANGE.contains(&date.year()) {
        Ok(date)
    } else {
        Err(Error::validation(
            field,
            format!(
                "year {} is outside {:04}..={}",
                date.year(),
                YEAR_RANGE.start(),
                YEAR_RANGE.end()
            ),
        ))
    }
}

/// Format a date the way it is stored.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stay(a: &str, d: &str) -> Stay {
        Stay::parse(a, d).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_and_reversed() {
        let day: NaiveDate = "2025-06-15".parse().unwrap();
        assert!(matches!(
            Stay::new(day, day),
            Err(Error::InvalidStay { .. })
        ));
        assert!(matches!(
            Stay::new(day, day.pred_opt().unwrap()),
            Err(Error::InvalidStay { .. })
        ));
    }

    #[test]
    fn test_parse_bad_date() {
        let err = Stay::parse("2025-13-01", "2025-12-03").unwrap_err();
        assert!(matches!(err, Error::Validation { field: "arrival", .. }));

        let err = Stay::parse("2025-12-01", "tomorrow").unwrap_err();
        assert!(matches!(err, Error::Validation { field: "departure", .. }));
    }

    #[test]
    fn test_years_beyond_four_digits_refused() {
        let last = NaiveDate::from_ymd_opt(9999, 12, 30).unwrap();
        let far = NaiveDate::from_ymd_opt(10_000, 1, 2).unwrap();

        let err = Stay::new(last, far).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "departure", .. }));
        assert!(err.is_rejection());

        let early = NaiveDate::from_ymd_opt(-1, 12, 31).unwrap();
        let err = Stay::new(early, last).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "arrival", .. }));

        assert!(Stay::new(last, last.succ_opt().unwrap()).is_ok());
    }

    #[test]
    fn test_parse_date_refuses_five_digit_year() {
        let err = parse_date("departure", "+10000-01-02").unwrap_err();
        assert!(matches!(err, Error::Validation { field: "departure", .. }));
    }

    #[test]
    fn test_nights() {
        assert_eq!(stay("2025-06-15", "2025-06-18").nights(), 3);
        assert_eq!(stay("2025-12-31", "2026-01-01").nights(), 1);
        assert_eq!(stay("2024-02-28", "2024-03-01").nights(), 2);
    }

    #[test]
    fn test_overlap_cases() {
        let booked = stay("2025-07-01", "2025-07-05");

        // inside, around, straddling either edge
        assert!(booked.overlaps(&stay("2025-07-02", "2025-07-03")));
        assert!(booked.overlaps(&stay("2025-06-20", "2025-07-20")));
        assert!(booked.overlaps(&stay("2025-06-30", "2025-07-02")));
        assert!(booked.overlaps(&stay("2025-07-04", "2025-07-08")));
        assert!(booked.overlaps(&booked));

        // back-to-back on both sides
        assert!(!booked.overlaps(&stay("2025-06-28", "2025-07-01")));
        assert!(!booked.overlaps(&stay("2025-07-05", "2025-07-09")));

        // disjoint
        assert!(!booked.overlaps(&stay("2025-08-01", "2025-08-02")));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let stays = [
            stay("2025-07-01", "2025-07-05"),
            stay("2025-07-05", "2025-07-06"),
            stay("2025-06-30", "2025-07-02"),
            stay("2025-07-02", "2025-07-03"),
            stay("2025-08-01", "2025-08-10"),
        ];
        for a in &stays {
            for b in &stays {
                assert_eq!(a.overlaps(b), b.overlaps(a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_contains_is_half_open() {
        let s = stay("2025-06-15", "2025-06-18");
        assert!(s.contains("2025-06-15".parse().unwrap()));
        assert!(s.contains("2025-06-17".parse().unwrap()));
        assert!(!s.contains("2025-06-18".parse().unwrap()));
        assert!(!s.contains("2025-06-14".parse().unwrap()));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            stay("2025-06-15", "2025-06-18").to_string(),
            "2025-06-15 -> 2025-06-18"
        );
    }

    #[test]
    fn test_serialize_fields() {
        let json = serde_json::to_value(stay("2025-06-15", "2025-06-18")).unwrap();
        assert_eq!(json["arrival"], "2025-06-15");
        assert_eq!(json["departure"], "2025-06-18");
    }

    #[test]
    fn test_format_date_round_trip() {
        let day = parse_date("date", " 2026-02-01 ").unwrap();
        assert_eq!(format_date(day), "2026-02-01");
    }
}
