//! Demo data set for a fresh desk.

use rusqlite::params;
use tracing::info;

use super::Storage;
use crate::error::Result;

const HOTELS: &[(i64, &str, &str, &str)] = &[
    (1, "Paris", "France", "75001"),
    (2, "Lyon", "France", "69002"),
];

// (id, full_name, address, city, postal_code, email, phone)
const CLIENTS: &[(i64, &str, &str, &str, &str, &str, &str)] = &[
    (1, "Jean Dupont", "12 Rue de Paris", "Paris", "75001", "jean.dupont@email.fr", "0612345678"),
    (2, "Marie Leroy", "5 Avenue Victor Hugo", "Lyon", "69002", "marie.leroy@email.fr", "0623456789"),
    (3, "Paul Moreau", "8 Boulevard Saint-Michel", "Marseille", "13005", "paul.moreau@email.fr", "0634567890"),
    (4, "Lucie Martin", "27 Rue Nationale", "Lille", "59800", "lucie.martin@email.fr", "0645678901"),
    (5, "Emma Giraud", "3 Rue des Fleurs", "Nice", "06000", "emma.giraud@email.fr", "0656789012"),
];

const SERVICES: &[(i64, f64, &str)] = &[
    (1, 15.0, "Petit-déjeuner"),
    (2, 30.0, "Navette aéroport"),
    (3, 0.0, "Wi-Fi gratuit"),
    (4, 50.0, "Spa et bien-être"),
    (5, 20.0, "Parking sécurisé"),
];

const ROOM_TYPES: &[(i64, &str, f64)] = &[(1, "Simple", 80.0), (2, "Double", 120.0)];

// (id, number, floor, balcony, room_type_id, hotel_id)
const ROOMS: &[(i64, i64, i64, bool, i64, i64)] = &[
    (1, 201, 2, false, 1, 1),
    (2, 502, 5, true, 1, 2),
    (3, 305, 3, false, 2, 1),
    (4, 410, 4, false, 2, 2),
    (5, 104, 1, true, 2, 2),
    (6, 202, 2, false, 1, 1),
    (7, 307, 3, true, 1, 2),
    (8, 101, 1, false, 1, 1),
];

// (id, arrival, departure, client_id, room_id)
const RESERVATIONS: &[(i64, &str, &str, i64, i64)] = &[
    (1, "2025-06-15", "2025-06-18", 1, 1),
    (2, "2025-07-01", "2025-07-05", 2, 3),
    (3, "2025-08-10", "2025-08-14", 3, 4),
    (4, "2025-09-05", "2025-09-07", 4, 5),
    (5, "2025-09-20", "2025-09-25", 5, 2),
    (7, "2025-11-12", "2025-11-14", 2, 3),
    (9, "2026-01-15", "2026-01-18", 4, 6),
    (10, "2026-02-01", "2026-02-05", 2, 1),
];

// (id, date, rating, comment, client_id)
const EVALUATIONS: &[(i64, &str, u8, &str, i64)] = &[
    (1, "2025-06-15", 5, "Excellent séjour, personnel très accueillant.", 1),
    (2, "2025-07-01", 4, "Chambre propre, bon rapport qualité/prix.", 2),
    (3, "2025-08-10", 3, "Séjour correct mais bruyant la nuit.", 3),
    (4, "2025-09-05", 5, "Service impeccable, je recommande.", 4),
    (5, "2025-09-20", 4, "Très bon petit-déjeuner, hôtel bien situé.", 5),
];

impl Storage {
    /// Load the demo chain: two hotels, their rooms, a handful of clients,
    /// reservations and reviews.
    ///
    /// Rows are keyed by id and inserted with `INSERT OR IGNORE`, so seeding
    /// an already seeded database changes nothing. Returns the number of
    /// rows actually inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn seed_demo_data(&mut self) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let mut inserted = 0;

        {
            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO hotels (id, city, country, postal_code) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (id, city, country, postal_code) in HOTELS {
                inserted += stmt.execute(params![id, city, country, postal_code])?;
            }

            let mut stmt = tx.prepare(
                r"
                INSERT OR IGNORE INTO clients (id, full_name, address, city, postal_code, email, phone)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                ",
            )?;
            for (id, name, address, city, postal_code, email, phone) in CLIENTS {
                inserted +=
                    stmt.execute(params![id, name, address, city, postal_code, email, phone])?;
            }

            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO services (id, price, description) VALUES (?1, ?2, ?3)",
            )?;
            for (id, price, description) in SERVICES {
                inserted += stmt.execute(params![id, price, description])?;
            }

            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO room_types (id, name, nightly_rate) VALUES (?1, ?2, ?3)",
            )?;
            for (id, name, rate) in ROOM_TYPES {
                inserted += stmt.execute(params![id, name, rate])?;
            }

            let mut stmt = tx.prepare(
                r"
                INSERT OR IGNORE INTO rooms (id, number, floor, balcony, room_type_id, hotel_id)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                ",
            )?;
            for (id, number, floor, balcony, type_id, hotel_id) in ROOMS {
                inserted += stmt.execute(params![id, number, floor, balcony, type_id, hotel_id])?;
            }

            let mut stmt = tx.prepare(
                r"
                INSERT OR IGNORE INTO reservations (id, arrival, departure, client_id, room_id)
                VALUES (?1, ?2, ?3, ?4, ?5)
                ",
            )?;
            for (id, arrival, departure, client_id, room_id) in RESERVATIONS {
                inserted += stmt.execute(params![id, arrival, departure, client_id, room_id])?;
            }

            let mut stmt = tx.prepare(
                r"
                INSERT OR IGNORE INTO evaluations (id, date, rating, comment, client_id)
                VALUES (?1, ?2, ?3, ?4, ?5)
                ",
            )?;
            for (id, date, rating, comment, client_id) in EVALUATIONS {
                inserted += stmt.execute(params![id, date, rating, comment, client_id])?;
            }
        }

        tx.commit()?;
        info!("Seeded {} demo rows", inserted);
        Ok(inserted)
    }
}
