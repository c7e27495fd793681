//! Admin API 模块
//!
//! 后台审核接口。Per the product decision, the admin surface carries no
//! authentication; it is reachable only on the site operator's own
//! deployment.

mod handler;

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/records", get(handler::records))
        .route("/bookings/{id}/status", put(handler::set_booking_status))
        .route("/preorders/{id}/status", put(handler::set_preorder_status))
}
