//! Pre-Order API Handlers

use axum::{Json, extract::State};

use shared::models::{PreOrder, PreOrderCreate};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::workflows::preorder;

/// POST /api/preorders - 提交预点餐订单
///
/// The total is always recomputed server-side from the static pre-order
/// catalog; a client-supplied total is never trusted.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PreOrderCreate>,
) -> AppResult<Json<PreOrder>> {
    let order = preorder::submit(&state.store, payload)?;
    Ok(Json(order))
}
