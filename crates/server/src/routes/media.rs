use axum::{extract::{Path, State}, routing::{delete, get}, Json, Router};

use common::types::Success;
use models::media;
use service::{db::media_service::{self, MediaInput}, errors::parse_id};

use crate::{errors::ApiError, extract::{ApiJson, CurrentUser}, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/media", get(list).post(create))
        .route("/api/media/:id", delete(remove))
}

#[utoipa::path(get, path = "/api/media", tag = "media", responses((status = 200, description = "Newest first")))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<media::Model>>, ApiError> {
    Ok(Json(media_service::list_media(&state.db).await?))
}

#[utoipa::path(post, path = "/api/media", tag = "media", security(("bearer" = [])), request_body = crate::openapi::MediaDoc, responses((status = 200, description = "Created media item")))]
pub async fn create(State(state): State<AppState>, _user: CurrentUser, ApiJson(input): ApiJson<MediaInput>) -> Result<Json<media::Model>, ApiError> {
    Ok(Json(media_service::create_media(&state.db, input).await?))
}

#[utoipa::path(delete, path = "/api/media/{id}", tag = "media", security(("bearer" = [])), params(("id" = String, Path,)), responses((status = 200, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn remove(State(state): State<AppState>, _user: CurrentUser, Path(id): Path<String>) -> Result<Json<Success>, ApiError> {
    let id = parse_id(&id, "Media")?;
    media_service::delete_media(&state.db, id).await?;
    Ok(Json(Success::ok()))
}
