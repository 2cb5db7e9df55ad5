//! 页面处理器

use axum::{extract::State, response::Html};

use super::view;
use crate::routes::AppState;

/// GET / - 主页，展示应用信息和 API 文档
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let current_time = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    Html(view::render_home(
        &current_time,
        env!("CARGO_PKG_VERSION"),
        &state.config.environment,
    ))
}

/// GET /test - 带交互表单的测试页
pub async fn test_page() -> Html<&'static str> {
    Html(view::TEST_PAGE)
}
