//! Pre-Order Model

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Status;

/// Advance food order entity
///
/// `items` maps catalog-item IDs to positive quantities; the map never
/// contains an entry with quantity zero. `total` is fixed at submission
/// time from the static pre-order catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreOrder {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "pickupTime")]
    pub pickup_time: NaiveDateTime,
    pub items: BTreeMap<String, u32>,
    pub total: f64,
    pub status: Status,
}

/// Pre-order submission payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreOrderCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// `datetime-local` form value, e.g. "2030-01-01T18:00"
    #[serde(rename = "pickupTime")]
    pub pickup_time: String,
    /// Raw selection; non-positive quantities are dropped during validation
    #[serde(default)]
    pub items: BTreeMap<String, i32>,
}
