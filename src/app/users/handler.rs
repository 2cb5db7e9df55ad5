//! 用户接口处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use tracing::info;

use super::model::{UserCreatedResponse, UserListResponse, UserResponse};
use crate::core::error::ApiError;
use crate::core::response::timestamp;
use crate::routes::AppState;

/// GET /api/users - 返回全部用户
pub async fn list_users(State(state): State<AppState>) -> Json<UserListResponse> {
    info!("GET /api/users - Fetching all users");

    let users = state.directory.list();
    let total = users.len();

    Json(UserListResponse {
        users,
        total,
        timestamp: timestamp(),
    })
}

/// GET /api/users/:id - 按 id 查询用户
///
/// 路径段不是整数时返回路由级 404（带端点清单），
/// 只有整数 id 查不到记录才是目录级的 `NotFound`。
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    info!("GET /api/users/{} - Fetching user", id);

    let id: u64 = id.parse().map_err(|_| ApiError::RouteNotFound)?;
    let user = state.directory.get(id)?;

    Ok(Json(UserResponse {
        user,
        timestamp: timestamp(),
    }))
}

/// POST /api/users - 创建新用户
///
/// 请求体缺失或不是合法 JSON 时提取器得到 `None`，统一报 400。
pub async fn create_user(
    State(state): State<AppState>,
    payload: Option<Json<Value>>,
) -> Result<(StatusCode, Json<UserCreatedResponse>), ApiError> {
    let Some(Json(payload)) = payload else {
        return Err(ApiError::InvalidInput("No JSON data provided".to_string()));
    };

    let user = state.directory.create(&payload)?;
    info!("POST /api/users - Created user: {}", user.name);

    Ok((
        StatusCode::CREATED,
        Json(UserCreatedResponse {
            message: "User created successfully".to_string(),
            user,
            timestamp: timestamp(),
        }),
    ))
}
