//! Client reviews.

use rusqlite::params;
use tracing::info;

use super::{date_column, Storage};
use crate::error::{Error, Result};
use crate::model::{Evaluation, NewEvaluation};
use crate::stay::format_date;

impl Storage {
    /// List reviews, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn evaluations(&self) -> Result<Vec<Evaluation>> {
        let mut stmt = self.conn.prepare(
            r"
            SELECT e.id, e.date, e.rating, e.comment, c.id, c.full_name
            FROM evaluations e
            JOIN clients c ON c.id = e.client_id
            ORDER BY e.date DESC, e.id DESC
            ",
        )?;

        let evaluations = stmt
            .query_map([], |row| {
                Ok(Evaluation {
                    id: row.get(0)?,
                    date: date_column(row, 1)?,
                    rating: row.get(2)?,
                    comment: row.get(3)?,
                    client_id: row.get(4)?,
                    client_name: row.get(5)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(evaluations)
    }

    /// Record a review.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an out-of-range rating,
    /// [`Error::NotFound`] for an unknown client, or an error if the
    /// database operation fails.
    pub fn add_evaluation(&self, review: &NewEvaluation) -> Result<Evaluation> {
        review.validate()?;

        let client = self
            .client(review.client_id)?
            .ok_or_else(|| Error::not_found("client", review.client_id))?;
        let comment = review.comment.trim().to_string();

        self.conn.execute(
            "INSERT INTO evaluations (date, rating, comment, client_id) VALUES (?1, ?2, ?3, ?4)",
            params![format_date(review.date), review.rating, comment, client.id],
        )?;

        let id = self.conn.last_insert_rowid();
        info!("Recorded review {} from client {}", id, client.id);

        Ok(Evaluation {
            id,
            date: review.date,
            rating: review.rating,
            comment,
            client_id: client.id,
            client_name: client.full_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Storage {
        let mut storage = Storage::open_in_memory().unwrap();
        storage.seed_demo_data().unwrap();
        storage
    }

    #[test]
    fn test_evaluations_newest_first() {
        let reviews = seeded().evaluations().unwrap();
        assert_eq!(reviews.len(), 5);
        assert!(reviews.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(reviews[0].client_name, "Emma Giraud");
    }

    #[test]
    fn test_add_evaluation() {
        let storage = seeded();
        let review = storage
            .add_evaluation(&NewEvaluation {
                client_id: 2,
                date: "2026-02-05".parse().unwrap(),
                rating: 4,
                comment: "  Calme et bien placé. ".to_string(),
            })
            .unwrap();

        assert_eq!(review.client_name, "Marie Leroy");
        assert_eq!(review.comment, "Calme et bien placé.");
        assert_eq!(storage.evaluations().unwrap()[0].id, review.id);
    }

    #[test]
    fn test_add_evaluation_rejects_bad_rating() {
        let storage = seeded();
        let err = storage
            .add_evaluation(&NewEvaluation {
                client_id: 2,
                date: "2026-02-05".parse().unwrap(),
                rating: 9,
                comment: String::new(),
            })
            .unwrap_err();
        assert!(matches!(err, Error::Validation { field: "rating", .. }));
    }

    #[test]
    fn test_add_evaluation_unknown_client() {
        let storage = seeded();
        let err = storage
            .add_evaluation(&NewEvaluation {
                client_id: 77,
                date: "2026-02-05".parse().unwrap(),
                rating: 3,
                comment: String::new(),
            })
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { entity: "client", .. }));
    }
}
