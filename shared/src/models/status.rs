//! Record Status
//!
//! Shared lifecycle state for bookings and pre-orders. Records are created
//! `pending` and move between states only through the admin review API.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a booking or pre-order
///
/// Lowercase on the wire ("pending", "confirmed", "completed", "cancelled").
/// No transition graph is enforced: the admin surface may set any status
/// from any other status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Confirmed => "confirmed",
            Status::Completed => "completed",
            Status::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
