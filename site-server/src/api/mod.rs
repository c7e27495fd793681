//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`menu`] - 菜单读取接口 (公共)
//! - [`bookings`] - 餐桌预订提交
//! - [`preorders`] - 预点餐提交
//! - [`admin`] - 后台审核接口

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

pub mod admin;
pub mod bookings;
pub mod health;
pub mod menu;
pub mod preorders;

// Re-export common types for handlers
pub use crate::utils::AppResult;

/// Assemble the full application router
///
/// The front-end is served from another origin, so CORS is wide open;
/// there is no authenticated surface to protect.
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(menu::router())
        .merge(bookings::router())
        .merge(preorders::router())
        .merge(admin::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
