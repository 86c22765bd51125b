//! Substring search over listed rows.
//!
//! A row matches when any of its displayed columns, rendered as text,
//! contains the search term, ignoring case. Ids and dates are searchable
//! the same way names are.

use crate::model::{Client, ReservationSummary};
use crate::stay::format_date;

/// A row that can be matched against a free-text search term.
pub trait Searchable {
    /// Text of every column shown for this row.
    fn search_fields(&self) -> Vec<String>;

    /// Whether any column contains `term`, ignoring case.
    ///
    /// An empty term matches every row.
    fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Keep the rows matching `term`; `None` keeps everything.
#[must_use]
pub fn filter<T: Searchable>(rows: Vec<T>, term: Option<&str>) -> Vec<T> {
    match term {
        Some(term) => rows.into_iter().filter(|row| row.matches(term)).collect(),
        None => rows,
    }
}

impl Searchable for ReservationSummary {
    fn search_fields(&self) -> Vec<String> {
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

impl Searchable for Client {
    fn search_fields(&self) -> Vec<String> {
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
