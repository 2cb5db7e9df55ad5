//! 用户数据模型

use serde::{Deserialize, Serialize};

/// 用户记录
///
/// `id` 单调递增、全局唯一；`role` 创建时可省略，默认为 `"user"`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// GET /api/users 响应
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
    pub total: usize,
    pub timestamp: String,
}

/// GET /api/users/:id 响应
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
    pub timestamp: String,
}

/// POST /api/users 成功响应
#[derive(Debug, Serialize)]
pub struct UserCreatedResponse {
    pub message: String,
    pub user: User,
    pub timestamp: String,
}
