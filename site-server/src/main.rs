use site_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 环境变量 (.env 可选)
    dotenv::dotenv().ok();

    // 2. 加载配置
    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    // 3. 日志
    init_logger_with_file(Some(&config.log_level), config.log_dir().to_str());

    tracing::info!("Zaviya site server starting...");

    // 4. 初始化服务器状态 (Record Store + 菜单种子)
    let state = ServerState::initialize(&config)?;

    // 5. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
