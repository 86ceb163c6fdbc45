use axum::{extract::{Path, State}, routing::get, Json, Router};

use common::types::Success;
use models::page;
use service::db::page_service::{self, PageInput, PageView};

use crate::{errors::ApiError, extract::{ApiJson, CurrentUser}, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pages", get(list).post(upsert))
        .route("/api/pages/:page_id", get(get_one))
}

#[utoipa::path(get, path = "/api/pages", tag = "pages", responses((status = 200, description = "All pages")))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<page::Model>>, ApiError> {
    Ok(Json(page_service::list_pages(&state.db).await?))
}

/// Unused slots come back as an empty page rather than 404.
#[utoipa::path(get, path = "/api/pages/{page_id}", tag = "pages", params(("page_id" = String, Path, description = "Logical page slot")), responses((status = 200, description = "Stored or empty page")))]
pub async fn get_one(State(state): State<AppState>, Path(page_id): Path<String>) -> Result<Json<PageView>, ApiError> {
    Ok(Json(page_service::get_page(&state.db, &page_id).await?))
}

#[utoipa::path(post, path = "/api/pages", tag = "pages", security(("bearer" = [])), request_body = crate::openapi::PageDoc, responses((status = 200, description = "Saved"), (status = 401, description = "Unauthorized")))]
pub async fn upsert(State(state): State<AppState>, _user: CurrentUser, ApiJson(input): ApiJson<PageInput>) -> Result<Json<Success>, ApiError> {
    page_service::upsert_page(&state.db, input).await?;
    Ok(Json(Success::ok()))
}
