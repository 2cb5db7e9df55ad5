//! 服务入口：读取配置、初始化日志、装配路由并启动 HTTP 服务

use tokio::net::TcpListener;
use tracing::info;

use axum_docker_app::app::users::service::UserDirectory;
use axum_docker_app::infrastructure::{config::AppConfig, logger::Logger};
use axum_docker_app::routes::{app, AppState};

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env();
    Logger::init(config.debug);

    info!("启动用户目录服务...");

    let state = AppState::new(UserDirectory::seeded(), config.clone());
    let router = app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|err| panic!("无法绑定到端口 {}: {}", config.port, err));

    info!("🚀 服务器运行在 http://{}", addr);
    info!("🌍 运行环境: {}", config.environment);
    info!("📖 可用端点:");
    info!("   GET  /              - 主页");
    info!("   GET  /health        - 健康检查");
    info!("   GET  /test          - 测试页面");
    info!("   GET  /api/users     - 获取全部用户");
    info!("   GET  /api/users/:id - 按 id 获取用户");
    info!("   POST /api/users     - 创建新用户");
    info!("   GET  /api/stats     - 应用统计信息");

    axum::serve(listener, router).await.expect("服务器启动失败");
}
