//! Zaviya Site Server - 餐厅网站后端服务
//!
//! Backend for the Zaviya restaurant website: table bookings, food
//! pre-orders, the menu catalog, and the admin review surface.
//!
//! # 模块结构
//!
//! ```text
//! site-server/src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── store/         # Record Store (redb 命名集合)
//! ├── catalog/       # 静态预订菜单 + 菜单种子数据
//! ├── workflows/     # 预订、预点餐、后台审核业务流程
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误、校验、日志工具
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod store;
pub mod utils;
pub mod workflows;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use store::{RecordStore, StoreError};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
