use axum::{extract::{Path, Query, State}, routing::{get, put}, Json, Router};

use common::types::Success;
use models::task;
use service::{db::task_service::{self, TaskFilter, TaskInput}, errors::parse_id};

use crate::{errors::ApiError, extract::{ApiJson, CurrentUser}, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list).post(create))
        .route("/api/tasks/:id", put(replace).delete(remove))
}

#[utoipa::path(get, path = "/api/tasks", tag = "tasks", security(("bearer" = [])), params(("status" = Option<String>, Query,), ("assignee" = Option<String>, Query,)), responses((status = 200, description = "Newest first"), (status = 401, description = "Unauthorized")))]
pub async fn list(State(state): State<AppState>, _user: CurrentUser, Query(filter): Query<TaskFilter>) -> Result<Json<Vec<task::Model>>, ApiError> {
    Ok(Json(task_service::list_tasks(&state.db, &filter).await?))
}

#[utoipa::path(post, path = "/api/tasks", tag = "tasks", security(("bearer" = [])), request_body = crate::openapi::TaskDoc, responses((status = 200, description = "Created task")))]
pub async fn create(State(state): State<AppState>, _user: CurrentUser, ApiJson(input): ApiJson<TaskInput>) -> Result<Json<task::Model>, ApiError> {
    Ok(Json(task_service::create_task(&state.db, input).await?))
}

#[utoipa::path(put, path = "/api/tasks/{id}", tag = "tasks", security(("bearer" = [])), params(("id" = String, Path,)), request_body = crate::openapi::TaskDoc, responses((status = 200, description = "Replaced"), (status = 404, description = "Not found")))]
pub async fn replace(State(state): State<AppState>, _user: CurrentUser, Path(id): Path<String>, ApiJson(input): ApiJson<TaskInput>) -> Result<Json<Success>, ApiError> {
    let id = parse_id(&id, "Task")?;
    task_service::replace_task(&state.db, id, input).await?;
    Ok(Json(Success::ok()))
}

#[utoipa::path(delete, path = "/api/tasks/{id}", tag = "tasks", security(("bearer" = [])), params(("id" = String, Path,)), responses((status = 200, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn remove(State(state): State<AppState>, _user: CurrentUser, Path(id): Path<String>) -> Result<Json<Success>, ApiError> {
    let id = parse_id(&id, "Task")?;
    task_service::delete_task(&state.db, id).await?;
    Ok(Json(Success::ok()))
}
