//! Admin API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use shared::models::Status;

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::workflows::admin::{self, Overview, RecordKind};

/// GET /api/admin/records - 获取全部预订与订单 (含状态统计)
pub async fn records(State(state): State<ServerState>) -> AppResult<Json<Overview>> {
    let overview = admin::list_all(&state.store)?;
    Ok(Json(overview))
}

/// Status update payload
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: Status,
}

/// PUT /api/admin/bookings/{id}/status - 更新预订状态
///
/// Returns whether a record was updated; an unknown ID yields `false`
/// rather than an error.
pub async fn set_booking_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<bool>> {
    let updated = admin::set_status(&state.store, RecordKind::Booking, id, payload.status)?;
    Ok(Json(updated))
}

/// PUT /api/admin/preorders/{id}/status - 更新订单状态
pub async fn set_preorder_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<bool>> {
    let updated = admin::set_status(&state.store, RecordKind::PreOrder, id, payload.status)?;
    Ok(Json(updated))
}
