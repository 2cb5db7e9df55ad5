//! # 用户目录演示服务
//!
//! 一个用 Axum 构建的最小 REST 服务示例：在内存用户列表上提供
//! 查询和创建接口，配套首页、健康检查和统计端点，
//! 作为容器化部署的教学模板。
//!
//! 模块划分：
//! - `app` - 按资源划分的接口实现（用户、统计、页面）
//! - `core` - 错误处理和中间件
//! - `infrastructure` - 配置和日志
//! - `routes` - 路由装配

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod routes;
