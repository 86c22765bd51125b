//! Rendering of listings for the terminal.

use serde::Serialize;

use super::OutputFormat;
use crate::error::Result;
use crate::model::{Client, Evaluation, Hotel, ReservationSummary, Room, RoomType, Service};
use crate::stay::{format_date, Stay};

/// A record that can be shown as one row of a listing.
pub trait Tabular {
    /// Column titles, in the order [`Tabular::cells`] returns them.
    const HEADERS: &'static [&'static str];

    /// The row's cells.
    fn cells(&self) -> Vec<String>;
}

/// Render rows in the requested format.
///
/// Plain output is tab-separated without a header. Table output pads each
/// column to its widest cell. JSON output is a pretty-printed array.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render<T: Tabular + Serialize>(rows: &[T], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Plain => Ok(rows
            .iter()
            .map(|row| row.cells().join("\t"))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => {
            let cells: Vec<Vec<String>> = rows.iter().map(Tabular::cells).collect();
            Ok(table(T::HEADERS, &cells))
        }
    }
}

/// Render the rooms free for `stay`.
///
/// Returns the text for stdout, and a notice for stderr when no room is
/// free. JSON output always prints the array, `[]` included, and never
/// carries a notice.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_availability(
    stay: &Stay,
    rooms: &[Room],
    format: OutputFormat,
) -> Result<(String, Option<String>)> {
    if rooms.is_empty() && format != OutputFormat::Json {
        return Ok((String::new(), Some(format!("No rooms available for {stay}"))));
    }
    Ok((render(rooms, format)?, None))
}

fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(line(headers.iter().copied(), &widths));
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        out.push(line(row.iter().map(String::as_str), &widths));
    }
    out.join("\n")
}

fn line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

impl Tabular for ReservationSummary {
    const HEADERS: &'static [&'static str] =
        &["ID", "ARRIVAL", "DEPARTURE", "NIGHTS", "CLIENT", "ROOM"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            format_date(self.stay.arrival()),
            format_date(self.stay.departure()),
            self.stay.nights().to_string(),
            self.client_name.clone(),
            self.room_number.to_string(),
        ]
    }
}

impl Tabular for Client {
    const HEADERS: &'static [&'static str] =
        &["ID", "NAME", "ADDRESS", "CITY", "POSTAL CODE", "EMAIL", "PHONE"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.full_name.clone(),
            self.address.clone(),
            self.city.clone(),
            self.postal_code.clone(),
            self.email.clone(),
            self.phone.clone(),
        ]
    }
}

impl Tabular for Room {
    const HEADERS: &'static [&'static str] =
        &["ROOM", "FLOOR", "BALCONY", "TYPE", "RATE", "HOTEL"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.number.to_string(),
            self.floor.to_string(),
            if self.balcony { "yes" } else { "no" }.to_string(),
            self.room_type.name.clone(),
            money(self.room_type.nightly_rate),
            format!("{} ({})", self.hotel_city, self.hotel_id),
        ]
    }
}

impl Tabular for RoomType {
    const HEADERS: &'static [&'static str] = &["ID", "NAME", "RATE"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            money(self.nightly_rate),
        ]
    }
}

impl Tabular for Hotel {
    const HEADERS: &'static [&'static str] = &["ID", "CITY", "COUNTRY", "POSTAL CODE"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.city.clone(),
            self.country.clone(),
            self.postal_code.clone(),
        ]
    }
}

impl Tabular for Service {
    const HEADERS: &'static [&'static str] = &["ID", "DESCRIPTION", "PRICE"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.description.clone(),
            money(self.price),
        ]
    }
}

impl Tabular for Evaluation {
    const HEADERS: &'static [&'static str] = &["ID", "DATE", "RATING", "CLIENT", "COMMENT"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            format_date(self.date),
            format!("{}/5", self.rating),
            self.client_name.clone(),
            self.comment.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation(id: i64, client_name: &str) -> ReservationSummary {
        ReservationSummary {
            id,
            stay: Stay::parse("2025-07-01", "2025-07-04").unwrap(),
            client_id: 1,
            client_name: client_name.to_string(),
            room_id: 3,
            room_number: 201,
        }
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let rows = vec![reservation(1, "Jean Dupont"), reservation(12, "Lu")];
        let out = render(&rows, OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID  ARRIVAL"));
        assert!(lines[1].starts_with("--  ----------"));
        assert!(lines[2].starts_with("1   2025-07-01  2025-07-04  3       Jean Dupont  201"));
        assert!(lines[3].starts_with("12  2025-07-01"));
    }

    #[test]
    fn test_render_table_empty_has_header() {
        let out = render::<Hotel>(&[], OutputFormat::Table).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.starts_with("ID  CITY"));
    }

    #[test]
    fn test_render_plain_is_tab_separated() {
        let out = render(&[reservation(7, "Marie Leroy")], OutputFormat::Plain).unwrap();
        assert_eq!(out, "7\t2025-07-01\t2025-07-04\t3\tMarie Leroy\t201");
    }

    #[test]
    fn test_render_json_flattens_stay() {
        let out = render(&[reservation(7, "Marie Leroy")], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value[0]["arrival"], "2025-07-01");
        assert_eq!(value[0]["departure"], "2025-07-04");
        assert_eq!(value[0]["client_name"], "Marie Leroy");
    }

    #[test]
    fn test_render_availability_empty() {
        let stay = Stay::parse("2030-05-01", "2030-05-03").unwrap();

        let (out, notice) = render_availability(&stay, &[], OutputFormat::Table).unwrap();
        assert!(out.is_empty());
        assert_eq!(
            notice.as_deref(),
            Some("No rooms available for 2030-05-01 -> 2030-05-03")
        );

        let (out, notice) = render_availability(&stay, &[], OutputFormat::Plain).unwrap();
        assert!(out.is_empty());
        assert!(notice.is_some());

        let (out, notice) = render_availability(&stay, &[], OutputFormat::Json).unwrap();
        assert_eq!(out, "[]");
        assert!(notice.is_none());
    }

    #[test]
    fn test_render_availability_lists_rooms() {
        let stay = Stay::parse("2030-05-01", "2030-05-03").unwrap();
        let room = Room {
            id: 8,
            number: 101,
            floor: 1,
            balcony: false,
            room_type: RoomType {
                id: 1,
                name: "Simple".to_string(),
                nightly_rate: 80.0,
            },
            hotel_id: 1,
            hotel_city: "Paris".to_string(),
        };

        let (out, notice) = render_availability(&stay, &[room], OutputFormat::Plain).unwrap();
        assert_eq!(out, "101\t1\tno\tSimple\t80.00\tParis (1)");
        assert!(notice.is_none());
    }

    #[test]
    fn test_room_cells() {
        let room = Room {
            id: 1,
            number: 101,
            floor: 1,
            balcony: true,
            room_type: RoomType {
                id: 2,
                name: "Double".to_string(),
                nightly_rate: 120.0,
            },
            hotel_id: 1,
            hotel_city: "Paris".to_string(),
        };
        assert_eq!(
            room.cells(),
            vec!["101", "1", "yes", "Double", "120.00", "Paris (1)"]
        );
    }

    #[test]
    fn test_table_counts_chars_not_bytes() {
        let service = Service {
            id: 1,
            price: 15.0,
            description: "Petit-déjeuner".to_string(),
        };
        let out = render(&[service], OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[1].split("  ").nth(1).map(str::len),
            Some("Petit-déjeuner".chars().count())
        );
    }
}
