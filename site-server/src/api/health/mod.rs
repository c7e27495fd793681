//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 状态、版本与集合大小 |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::store;

/// 健康检查路由 - 公共路由
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    /// 状态 (healthy | degraded)
    status: &'static str,
    /// 版本号
    version: &'static str,
    /// 当前集合大小
    bookings: usize,
    preorders: usize,
    menu_items: usize,
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    // 任何集合读取失败都降级而不是报错
    let counts = (
        state.store.count(store::BOOKINGS),
        state.store.count(store::PREORDERS),
        state.store.count(store::MENU),
    );

    let healthy = counts.0.is_ok() && counts.1.is_ok() && counts.2.is_ok();

    Json(HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        bookings: counts.0.unwrap_or(0),
        preorders: counts.1.unwrap_or(0),
        menu_items: counts.2.unwrap_or(0),
    })
}
