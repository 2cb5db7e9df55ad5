//! 应用配置

use std::env;

/// 运行配置，启动时从进程环境读取一次
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP 监听端口
    pub port: u16,
    /// 运行环境名称（development / production）
    pub environment: String,
    /// 是否开启调试日志
    pub debug: bool,
}

impl AppConfig {
    /// 从环境变量构建配置
    ///
    /// - `PORT` - 监听端口，默认 5000
    /// - `APP_ENV` - 环境名称，默认 production；development 时开启调试日志
    pub fn from_env() -> Self {
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "production".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);
        let debug = environment == "development";

        Self {
            port,
            environment,
            debug,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            environment: "production".to_string(),
            debug: false,
        }
    }
}
