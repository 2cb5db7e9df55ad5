//! 核心模块：错误处理、响应辅助和中间件

pub mod error;
pub mod middleware;
pub mod response;
