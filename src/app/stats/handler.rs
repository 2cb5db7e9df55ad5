//! 运行状态接口处理器

use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::core::response::timestamp;
use crate::routes::AppState;

/// GET /api/stats - 应用统计信息，附带全部接口的自描述清单
pub async fn get_stats(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "total_users": state.directory.count(),
        "server_time": timestamp(),
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.config.environment,
        "endpoints": {
            "GET /": "Home page",
            "GET /health": "Health check",
            "GET /api/users": "List all users",
            "GET /api/users/<id>": "Get user by ID",
            "POST /api/users": "Create new user",
            "GET /api/stats": "Application statistics",
            "GET /test": "Test page"
        }
    }))
}

/// GET /health - 健康检查，供 Docker 和负载均衡探活
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": timestamp(),
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.config.environment,
        "uptime": "running"
    }))
}
