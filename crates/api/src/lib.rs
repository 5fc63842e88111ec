//! 文本评分服务
//!
//! 独立于关系型任务存储的评分子系统：接收自由文本的任务描述，
//! 计算紧急度评分，并在进程内注册表中登记新任务。
//!
//! ## API 端点
//!
//! - `POST /api/tasks/from-text` - 提交 `{"text": "..."}`，返回
//!   `{"message": "...", "task_id": "..."}`
//! - `GET /api/tasks` - 返回 `{"total_tasks": N, "tasks": {...}}`
//! - `GET /health` - 健康检查
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/tasks/from-text \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "This is urgent, act now"}'
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod registry;
pub mod routes;
pub mod scoring;

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;

use medgen_config::ApiConfig;
use middleware::{cors_layer, request_logging, trace_layer};
use registry::TaskRegistry;
use routes::{create_routes, AppState};

/// 创建完整的API应用
pub fn create_app(registry: Arc<TaskRegistry>, api_config: &ApiConfig) -> Router {
    let state = AppState { registry };
    let routes = create_routes(state);

    if api_config.cors_enabled {
        routes.layer(
            ServiceBuilder::new()
                .layer(trace_layer())
                .layer(cors_layer())
                .layer(axum::middleware::from_fn(request_logging)),
        )
    } else {
        routes.layer(
            ServiceBuilder::new()
                .layer(trace_layer())
                .layer(axum::middleware::from_fn(request_logging)),
        )
    }
}
