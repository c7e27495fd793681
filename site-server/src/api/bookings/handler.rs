//! Booking API Handlers

use axum::{Json, extract::State};

use shared::models::{Booking, BookingCreate};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::workflows::booking;

/// POST /api/bookings - 提交餐桌预订
///
/// Returns the stored record so the front-end can show confirmation
/// feedback. Validation failures come back as 400 with the field named.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BookingCreate>,
) -> AppResult<Json<Booking>> {
    let booking = booking::submit(&state.store, payload)?;
    Ok(Json(booking))
}
