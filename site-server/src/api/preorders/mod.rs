//! Pre-Order API 模块

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/preorders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", post(handler::create))
}
