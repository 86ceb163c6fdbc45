use axum::{extract::{Path, Query, State}, routing::get, Json, Router};
use serde::Deserialize;

use common::types::Success;
use models::document;
use service::{db::document_service::{self, DocumentInput}, errors::parse_id};

use crate::{errors::ApiError, extract::{ApiJson, CurrentUser}, state::AppState};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DocumentQuery {
    /// documentation | activity | report
    pub doc_type: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/documents", get(list).post(create))
        .route("/api/documents/:key", get(get_by_slug).put(replace).delete(remove))
}

#[utoipa::path(get, path = "/api/documents", tag = "documents", params(DocumentQuery), responses((status = 200, description = "Newest first")))]
pub async fn list(State(state): State<AppState>, Query(q): Query<DocumentQuery>) -> Result<Json<Vec<document::Model>>, ApiError> {
    Ok(Json(document_service::list_documents(&state.db, q.doc_type.as_deref()).await?))
}

#[utoipa::path(get, path = "/api/documents/{slug}", tag = "documents", params(("slug" = String, Path,)), responses((status = 200, description = "Document"), (status = 404, description = "Not found")))]
pub async fn get_by_slug(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Json<document::Model>, ApiError> {
    Ok(Json(document_service::get_document_by_slug(&state.db, &slug).await?))
}

#[utoipa::path(post, path = "/api/documents", tag = "documents", security(("bearer" = [])), request_body = crate::openapi::DocumentDoc, responses((status = 200, description = "Created document")))]
pub async fn create(State(state): State<AppState>, _user: CurrentUser, ApiJson(input): ApiJson<DocumentInput>) -> Result<Json<document::Model>, ApiError> {
    Ok(Json(document_service::create_document(&state.db, input).await?))
}

#[utoipa::path(put, path = "/api/documents/{id}", tag = "documents", security(("bearer" = [])), params(("id" = String, Path,)), request_body = crate::openapi::DocumentDoc, responses((status = 200, description = "Replaced"), (status = 404, description = "Not found")))]
pub async fn replace(State(state): State<AppState>, _user: CurrentUser, Path(id): Path<String>, ApiJson(input): ApiJson<DocumentInput>) -> Result<Json<Success>, ApiError> {
    let id = parse_id(&id, "Document")?;
    document_service::replace_document(&state.db, id, input).await?;
    Ok(Json(Success::ok()))
}

#[utoipa::path(delete, path = "/api/documents/{id}", tag = "documents", security(("bearer" = [])), params(("id" = String, Path,)), responses((status = 200, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn remove(State(state): State<AppState>, _user: CurrentUser, Path(id): Path<String>) -> Result<Json<Success>, ApiError> {
    let id = parse_id(&id, "Document")?;
    document_service::delete_document(&state.db, id).await?;
    Ok(Json(Success::ok()))
}
