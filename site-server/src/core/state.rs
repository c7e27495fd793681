use crate::catalog;
use crate::core::Config;
use crate::store::RecordStore;
use crate::utils::{AppError, AppResult};

/// 服务器状态 - 持有所有服务的共享引用
///
/// ServerState 是服务的核心数据结构。Record Store 内部以 `Arc` 共享，
/// 整个结构可廉价 Clone 后注入每个 handler。
///
/// # 组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | RecordStore | 命名集合存储 (bookings / preorders / menu) |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式 Record Store
    pub store: RecordStore,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替；测试场景可直接注入
    /// 自定义 store。
    pub fn new(config: Config, store: RecordStore) -> Self {
        Self { config, store }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保目录存在)
    /// 2. Record Store (work_dir/database/zaviya.redb)
    /// 3. 菜单集合种子数据 (首次启动时写入)
    pub fn initialize(config: &Config) -> AppResult<Self> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::Internal(e.into()))?;

        let db_path = config.database_dir().join("zaviya.redb");
        let store = RecordStore::open(&db_path)?;
        tracing::info!(path = %db_path.display(), "Record store opened");

        let seeded = catalog::ensure_menu_seeded(&store)?;
        if seeded > 0 {
            tracing::info!(count = seeded, "Menu collection seeded");
        }

        Ok(Self::new(config.clone(), store))
    }
}
