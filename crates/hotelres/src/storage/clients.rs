//! Client registration and lookup.

use rusqlite::{params, OptionalExtension, Row};
use tracing::{debug, info};

use super::Storage;
use crate::error::Result;
use crate::model::{Client, NewClient};

const CLIENT_COLUMNS: &str = "id, full_name, address, city, postal_code, email, phone";

impl Storage {
    /// Register a new client.
    ///
    /// The details are validated and trimmed before insertion.
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad details, or an error if the
    /// database operation fails.
    pub fn insert_client(&self, client: &NewClient) -> Result<Client> {
        client.validate()?;
        let client = client.trimmed();

        self.conn.execute(
            r"
            INSERT INTO clients (full_name, address, city, postal_code, email, phone)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ",
            params![
                client.full_name,
                client.address,
                client.city,
                client.postal_code,
                client.email,
                client.phone,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        info!("Registered client {} ({})", id, client.full_name);

        Ok(Client {
            id,
            full_name: client.full_name,
            address: client.address,
            city: client.city,
            postal_code: client.postal_code,
            email: client.email,
            phone: client.phone,
        })
    }

    /// Get a client by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn client(&self, id: i64) -> Result<Option<Client>> {
        let client = self
            .conn
            .query_row(
                &format!("SELECT {CLIENT_COLUMNS} FROM clients WHERE id = ?1"),
                [id],
                row_to_client,
            )
            .optional()?;
        Ok(client)
    }

    /// List clients ordered by id, optionally only those living in `city`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn clients(&self, city: Option<&str>) -> Result<Vec<Client>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients WHERE ?1 IS NULL OR city = ?1 ORDER BY id"
        ))?;

        let clients = stmt
            .query_map([city], row_to_client)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!(count = clients.len(), ?city, "listed clients");
        Ok(clients)
    }

    /// Distinct cities clients live in, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn client_cities(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT city FROM clients ORDER BY city")?;
        let cities = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(cities)
    }
}

fn row_to_client(row: &Row) -> rusqlite::Result<Client> {
    Ok(Client {
        id: row.get(0)?,
        full_name: row.get(1)?,
        address: row.get(2)?,
        city: row.get(3)?,
        postal_code: row.get(4)?,
        email: row.get(5)?,
        phone: row.get(6)?,
    })
}
