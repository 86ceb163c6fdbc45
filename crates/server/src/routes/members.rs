use axum::{extract::{Path, State}, routing::{get, put}, Json, Router};

use common::types::Success;
use models::member;
use service::{db::member_service::{self, MemberInput}, errors::parse_id};

use crate::{errors::ApiError, extract::{ApiJson, CurrentUser}, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/members", get(list).post(create))
        .route("/api/members/:id", put(replace).delete(remove))
}

#[utoipa::path(get, path = "/api/members", tag = "members", responses((status = 200, description = "Up to 200 members")))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<member::Model>>, ApiError> {
    Ok(Json(member_service::list_members(&state.db).await?))
}

#[utoipa::path(post, path = "/api/members", tag = "members", security(("bearer" = [])), request_body = crate::openapi::MemberDoc, responses((status = 200, description = "Created member")))]
pub async fn create(State(state): State<AppState>, _user: CurrentUser, ApiJson(input): ApiJson<MemberInput>) -> Result<Json<member::Model>, ApiError> {
    Ok(Json(member_service::create_member(&state.db, input).await?))
}

#[utoipa::path(put, path = "/api/members/{id}", tag = "members", security(("bearer" = [])), params(("id" = String, Path,)), request_body = crate::openapi::MemberDoc, responses((status = 200, description = "Replaced"), (status = 404, description = "Not found")))]
pub async fn replace(State(state): State<AppState>, _user: CurrentUser, Path(id): Path<String>, ApiJson(input): ApiJson<MemberInput>) -> Result<Json<Success>, ApiError> {
    let id = parse_id(&id, "Member")?;
    member_service::replace_member(&state.db, id, input).await?;
    Ok(Json(Success::ok()))
}

#[utoipa::path(delete, path = "/api/members/{id}", tag = "members", security(("bearer" = [])), params(("id" = String, Path,)), responses((status = 200, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn remove(State(state): State<AppState>, _user: CurrentUser, Path(id): Path<String>) -> Result<Json<Success>, ApiError> {
    let id = parse_id(&id, "Member")?;
    member_service::delete_member(&state.db, id).await?;
    Ok(Json(Success::ok()))
}
