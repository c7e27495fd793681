//! Booking Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Status;

/// Seating preference for a table booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiningArea {
    Casual,
    Family,
    Executive,
}

impl std::str::FromStr for DiningArea {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "casual" => Ok(DiningArea::Casual),
            "family" => Ok(DiningArea::Family),
            "executive" => Ok(DiningArea::Executive),
            _ => Err(()),
        }
    }
}

/// Bookable time slots, matching the reservation form
pub const TIME_SLOTS: [&str; 8] = [
    "11:00", "12:00", "13:00", "14:00", "18:00", "19:00", "20:00", "21:00",
];

/// Party size bounds
pub const MIN_GUESTS: u8 = 1;
pub const MAX_GUESTS: u8 = 8;

/// Table booking entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    /// One of [`TIME_SLOTS`]
    pub time: String,
    pub guests: u8,
    pub area: DiningArea,
    pub status: Status,
}

/// Booking submission payload
///
/// Fields arrive as free-form text/selection values from the reservation
/// form; parsing and range checks happen in the booking workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub area: String,
}
