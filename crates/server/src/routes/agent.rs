use axum::{routing::post, Json, Router};

use service::agent::{self, AgentInput, AgentReply};

use crate::{extract::{ApiJson, CurrentUser}, errors::ApiError, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/ai-agent", post(draft))
}

/// Mock natural-language parser; the draft is returned, not stored.
#[utoipa::path(post, path = "/api/ai-agent", tag = "tasks", security(("bearer" = [])), request_body = crate::openapi::AgentRequest, responses((status = 200, description = "Task draft")))]
pub async fn draft(_user: CurrentUser, ApiJson(input): ApiJson<AgentInput>) -> Result<Json<AgentReply>, ApiError> {
    Ok(Json(agent::reply(&input)))
}
