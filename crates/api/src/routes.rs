use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{
    health::health_check,
    tasks::{create_task_from_text, list_tasks},
};
use crate::registry::TaskRegistry;

/// API应用状态
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<TaskRegistry>,
}

/// 创建API路由
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // 健康检查
        .route("/health", get(health_check))
        // 任务评分API
        .route("/api/tasks", get(list_tasks))
        .route("/api/tasks/from-text", post(create_task_from_text))
        .with_state(state)
}
