//! Shared types for the Zaviya site service
//!
//! Data models and utilities used by the site server and by API clients:
//! booking and pre-order records, menu items, the status enumeration, and
//! record-ID generation.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
