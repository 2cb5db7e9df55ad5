//! 核心响应辅助模块

/// 生成响应时间戳（RFC 3339），仅用于观测，不参与业务判断
pub fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}
