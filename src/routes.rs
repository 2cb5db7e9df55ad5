//! 路由装配
//!
//! 把目录服务和配置注入为共享状态，拼出完整路由表。
//! 测试可以用空目录或自定义配置构建同一张表。

use std::sync::Arc;

use axum::{middleware::from_fn, routing::get, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::app::users::service::UserDirectory;
use crate::app::{pages, stats, users};
use crate::core::error;
use crate::core::middleware::request_logging_middleware;
use crate::infrastructure::config::AppConfig;

/// 应用共享状态
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<UserDirectory>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(directory: UserDirectory, config: AppConfig) -> Self {
        Self {
            directory: Arc::new(directory),
            config,
        }
    }
}

/// 构建完整路由表
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::handler::home))
        .route("/health", get(stats::handler::health_check))
        .route("/test", get(pages::handler::test_page))
        .route(
            "/api/users",
            get(users::handler::list_users).post(users::handler::create_user),
        )
        .route("/api/users/:id", get(users::handler::get_user))
        .route("/api/stats", get(stats::handler::get_stats))
        .fallback(error::route_not_found)
        .layer(from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .with_state(state)
}
