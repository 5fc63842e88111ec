use std::collections::HashMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::registry::ScoredTask;
use crate::routes::AppState;
use crate::scoring;

/// 任务文本评分请求
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct CreateTaskResponse {
    pub message: String,
    pub task_id: String,
}

#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub total_tasks: usize,
    pub tasks: HashMap<Uuid, ScoredTask>,
}

/// 接收任务文本，计算紧急度评分并注册新任务
pub async fn create_task_from_text(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> ApiResult<Json<CreateTaskResponse>> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(ApiError::BadRequest("text 字段不能为空".to_string()));
    }

    let urgency_score = scoring::calculate_urgency_score(text);
    let task_id = state.registry.insert(text.to_string(), urgency_score).await;

    info!("任务已注册: ID {}, 评分 {}", task_id, urgency_score);

    Ok(Json(CreateTaskResponse {
        message: "任务已创建并完成评分".to_string(),
        task_id: task_id.to_string(),
    }))
}

/// 查看注册表中的全部任务
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<TaskListResponse>> {
    let tasks = state.registry.snapshot().await;

    Ok(Json(TaskListResponse {
        total_tasks: tasks.len(),
        tasks,
    }))
}
