//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu catalog entity, served read-only via `GET /menu`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    /// Asset file name; the front-end maps it to a bundled image
    pub image: String,
    pub category: String,
    pub description: String,
}
