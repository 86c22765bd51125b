//! Hotels, room types, rooms and services.

use rusqlite::{params, OptionalExtension, Row};

use super::Storage;
use crate::error::{Error, Result};
use crate::model::{Hotel, Room, RoomType, Service};

/// Rooms joined with their type and hotel, in [`row_to_room`] column order.
pub(super) const ROOM_SELECT: &str = r"
SELECT r.id, r.number, r.floor, r.balcony, t.id, t.name, t.nightly_rate, h.id, h.city
FROM rooms r
JOIN room_types t ON t.id = r.room_type_id
JOIN hotels h ON h.id = r.hotel_id
";

impl Storage {
    /// List hotels ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn hotels(&self) -> Result<Vec<Hotel>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, city, country, postal_code FROM hotels ORDER BY id")?;
        let hotels = stmt
            .query_map([], |row| {
                Ok(Hotel {
                    id: row.get(0)?,
                    city: row.get(1)?,
                    country: row.get(2)?,
                    postal_code: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(hotels)
    }

    /// List room types ordered by nightly rate.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn room_types(&self) -> Result<Vec<RoomType>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, nightly_rate FROM room_types ORDER BY nightly_rate, id")?;
        let types = stmt
            .query_map([], |row| {
                Ok(RoomType {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    nightly_rate: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(types)
    }

    /// Look up a room type by name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRoomType`] if no type has that name.
    pub fn room_type_by_name(&self, name: &str) -> Result<RoomType> {
        self.conn
            .query_row(
                "SELECT id, name, nightly_rate FROM room_types WHERE name = ?1 COLLATE NOCASE",
                [name.trim()],
                |row| {
                    Ok(RoomType {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        nightly_rate: row.get(2)?,
                    })
                },
            )
            .optional()?
            .ok_or_else(|| Error::UnknownRoomType(name.to_string()))
    }

    /// List every room ordered by number, then hotel.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn rooms(&self) -> Result<Vec<Room>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ROOM_SELECT} ORDER BY r.number, h.id"))?;
        let rooms = stmt
            .query_map([], row_to_room)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rooms)
    }

    /// Get a room by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn room(&self, id: i64) -> Result<Option<Room>> {
        let room = self
            .conn
            .query_row(&format!("{ROOM_SELECT} WHERE r.id = ?1"), [id], row_to_room)
            .optional()?;
        Ok(room)
    }

    /// Find a room by its door number, optionally within one hotel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no room matches, or
    /// [`Error::AmbiguousRoomNumber`] if the number exists in several hotels
    /// and no hotel was given.
    pub fn room_by_number(&self, number: i64, hotel_id: Option<i64>) -> Result<Room> {
        let mut stmt = self.conn.prepare(&format!(
            "{ROOM_SELECT} WHERE r.number = ?1 AND (?2 IS NULL OR r.hotel_id = ?2) ORDER BY h.id"
        ))?;
        let mut rooms = stmt
            .query_map(params![number, hotel_id], row_to_room)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        match rooms.len() {
            0 => Err(match hotel_id {
                Some(hotel) => Error::not_found("room", format!("{number} in hotel {hotel}")),
                None => Error::not_found("room", number),
            }),
            1 => Ok(rooms.remove(0)),
            count => Err(Error::AmbiguousRoomNumber { number, count }),
        }
    }

    /// List extra services ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn services(&self) -> Result<Vec<Service>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, price, description FROM services ORDER BY id")?;
        let services = stmt
            .query_map([], |row| {
                Ok(Service {
                    id: row.get(0)?,
                    price: row.get(1)?,
                    description: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(services)
    }
}

/// Convert a [`ROOM_SELECT`] row to a Room.
pub(super) fn row_to_room(row: &Row) -> rusqlite::Result<Room> {
    Ok(Room {
        id: row.get(0)?,
        number: row.get(1)?,
        floor: row.get(2)?,
        balcony: row.get(3)?,
        room_type: RoomType {
            id: row.get(4)?,
            name: row.get(5)?,
            nightly_rate: row.get(6)?,
        },
        hotel_id: row.get(7)?,
        hotel_city: row.get(8)?,
    })
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
    fn test_hotels() {
        let hotels = seeded().hotels().unwrap();
        assert_eq!(hotels.len(), 2);
        assert_eq!(hotels[0].city, "Paris");
        assert_eq!(hotels[1].postal_code, "69002");
    }

    #[test]
    fn test_room_types_by_rate() {
        let types = seeded().room_types().unwrap();
        let names: Vec<_> = types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Simple", "Double"]);
    }

    #[test]
    fn test_room_type_by_name_ignores_case() {
        let storage = seeded();
        let double = storage.room_type_by_name("double").unwrap();
        assert_eq!(double.name, "Double");
        assert!((double.nightly_rate - 120.0).abs() < f64::EPSILON);

        let err = storage.room_type_by_name("Suite").unwrap_err();
        assert!(matches!(err, Error::UnknownRoomType(ref name) if name == "Suite"));
    }

    #[test]
    fn test_rooms_sorted_with_joins() {
        let rooms = seeded().rooms().unwrap();
        assert_eq!(rooms.len(), 8);
        assert!(rooms.windows(2).all(|w| w[0].number <= w[1].number));

        let first = &rooms[0];
        assert_eq!(first.number, 101);
        assert_eq!(first.room_type.name, "Simple");
        assert_eq!(first.hotel_city, "Paris");
        assert!(!first.balcony);
    }

    #[test]
    fn test_room_by_id() {
        let storage = seeded();
        let room = storage.room(2).unwrap().unwrap();
        assert_eq!(room.number, 502);
        assert!(room.balcony);
        assert!(storage.room(99).unwrap().is_none());
    }

    #[test]
    fn test_room_by_number() {
        let storage = seeded();
        let room = storage.room_by_number(305, None).unwrap();
        assert_eq!(room.id, 3);

        let err = storage.room_by_number(999, None).unwrap_err();
        assert!(matches!(err, Error::NotFound { entity: "room", .. }));

        // 305 is in Paris (hotel 1), not Lyon.
        let err = storage.room_by_number(305, Some(2)).unwrap_err();
        assert!(err.to_string().contains("hotel 2"));
    }

    #[test]
    fn test_room_by_number_ambiguous() {
        let storage = seeded();
        // A second room 201, in Lyon.
        storage
            .conn
            .execute(
                "INSERT INTO rooms (number, floor, balcony, room_type_id, hotel_id) VALUES (201, 2, 0, 1, 2)",
                [],
            )
            .unwrap();

        let err = storage.room_by_number(201, None).unwrap_err();
        assert!(matches!(
            err,
            Error::AmbiguousRoomNumber {
                number: 201,
                count: 2
            }
        ));

        let lyon = storage.room_by_number(201, Some(2)).unwrap();
        assert_eq!(lyon.hotel_city, "Lyon");
    }

    #[test]
    fn test_services() {
        let services = seeded().services().unwrap();
        assert_eq!(services.len(), 5);
        assert_eq!(services[2].description, "Wi-Fi gratuit");
        assert!(services[2].price.abs() < f64::EPSILON);
    }
}
