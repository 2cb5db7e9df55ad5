//! 用户目录业务服务
//!
//! 持有进程内的用户列表，提供查询和创建操作。
//! 目录由一把互斥锁保护，`create` 的"取最大 id 再追加"
//! 在同一个临界区内完成，并发调用不会产生重复 id。

use std::sync::Mutex;

use serde_json::Value;
use tracing::error;

use super::model::User;
use crate::core::error::ApiError;

/// 内存用户目录，保持插入顺序
pub struct UserDirectory {
    users: Mutex<Vec<User>>,
}

impl UserDirectory {
    /// 创建空目录
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }

    /// 创建带三条演示记录的目录（id 1-3）
    pub fn seeded() -> Self {
        Self {
            users: Mutex::new(vec![
                User {
                    id: 1,
                    name: "John Doe".to_string(),
                    email: "john@example.com".to_string(),
                    role: "admin".to_string(),
                },
                User {
                    id: 2,
                    name: "Jane Smith".to_string(),
                    email: "jane@example.com".to_string(),
                    role: "user".to_string(),
                },
                User {
                    id: 3,
                    name: "Bob Johnson".to_string(),
                    email: "bob@example.com".to_string(),
                    role: "user".to_string(),
                },
            ]),
        }
    }

    /// 按插入顺序返回全部用户的快照
    pub fn list(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    /// 按 id 线性查找用户
    pub fn get(&self, id: u64) -> Result<User, ApiError> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }

    /// 创建新用户
    ///
    /// 依次校验 `name`、`email` 两个必填字段，只报告第一个缺失项；
    /// 新 id 取当前最大 id 加一（目录为空时为 1）；
    /// `role` 省略时默认为 `"user"`。追加是最后一步，本身不会失败。
    pub fn create(&self, payload: &Value) -> Result<User, ApiError> {
        let data = payload
            .as_object()
            .ok_or_else(|| ApiError::InvalidInput("No JSON data provided".to_string()))?;

        for field in ["name", "email"] {
            if !data.get(field).is_some_and(is_truthy) {
                return Err(ApiError::InvalidInput(format!(
                    "Missing required field: {}",
                    field
                )));
            }
        }

        // 锁中毒属于意外故障：原因写日志，调用方只看到通用错误
        let mut users = self.users.lock().map_err(|err| {
            error!("Error creating user: {}", err);
            ApiError::Internal
        })?;

        let user = User {
            id: users.iter().map(|u| u.id).max().map_or(1, |max| max + 1),
            name: field_string(&data["name"]),
            email: field_string(&data["email"]),
            role: match data.get("role") {
                Some(value) if !value.is_null() => field_string(value),
                _ => "user".to_string(),
            },
        };

        users.push(user.clone());
        Ok(user)
    }

    /// 当前用户总数
    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

/// 判断字段值是否有效：null、false、0、空串、空集合都算缺失
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// 提取字符串字段，非字符串值按 JSON 文本存储
fn field_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
