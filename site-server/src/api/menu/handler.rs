//! Menu API Handlers

use axum::{Json, extract::State};

use shared::models::MenuItem;

use crate::core::ServerState;
use crate::store;
use crate::utils::AppResult;

/// GET /menu - 获取全部菜单项
///
/// Read-only; the browsing front-end renders whatever comes back and an
/// empty list is a valid response.
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let items: Vec<MenuItem> = state.store.load_all(store::MENU)?;
    Ok(Json(items))
}
