//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// 支持的端点清单，路由级 404 响应中返回给调用方
pub const AVAILABLE_ENDPOINTS: [&str; 7] = [
    "GET /",
    "GET /health",
    "GET /api/users",
    "GET /api/users/<id>",
    "POST /api/users",
    "GET /api/stats",
    "GET /test",
];

/// API 错误类型
#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    /// 请求体缺失或必填字段为空，调用方可自行修正（400）
    InvalidInput(String),
    /// 目录中不存在请求的记录（404）
    NotFound(String),
    /// 方法加路径没有对应的处理器（404，附端点清单）
    RouteNotFound,
    /// 意外故障，原因只写日志，不回传给调用方（500）
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": msg }))).into_response()
            }
            ApiError::RouteNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "Not found",
                    "message": "The requested resource was not found",
                    "available_endpoints": AVAILABLE_ENDPOINTS,
                })),
            )
                .into_response(),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response(),
        }
    }
}

/// 未匹配路由的兜底处理器
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// 把处理器 panic 转成 500 响应，进程不因单个坏请求退出
pub fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("Internal server error: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Internal server error",
            "message": "Something went wrong on the server",
        })),
    )
        .into_response()
}
