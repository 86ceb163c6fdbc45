use axum::{extract::{Path, State}, routing::get, Json, Router};

use common::types::Success;
use models::article;
use service::{db::article_service::{self, ArticleInput}, errors::parse_id};

use crate::{errors::ApiError, extract::{ApiJson, CurrentUser}, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/articles", get(list).post(create))
        // GET takes a slug, PUT and DELETE take an id
        .route("/api/articles/:key", get(get_by_slug).put(replace).delete(remove))
}

#[utoipa::path(get, path = "/api/articles", tag = "articles", responses((status = 200, description = "Newest first")))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<article::Model>>, ApiError> {
    Ok(Json(article_service::list_articles(&state.db).await?))
}

#[utoipa::path(get, path = "/api/articles/{slug}", tag = "articles", params(("slug" = String, Path,)), responses((status = 200, description = "Article"), (status = 404, description = "Not found")))]
pub async fn get_by_slug(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Json<article::Model>, ApiError> {
    Ok(Json(article_service::get_article_by_slug(&state.db, &slug).await?))
}

#[utoipa::path(post, path = "/api/articles", tag = "articles", security(("bearer" = [])), request_body = crate::openapi::ArticleDoc, responses((status = 200, description = "Created article"), (status = 401, description = "Unauthorized")))]
pub async fn create(State(state): State<AppState>, _user: CurrentUser, ApiJson(input): ApiJson<ArticleInput>) -> Result<Json<article::Model>, ApiError> {
    Ok(Json(article_service::create_article(&state.db, input).await?))
}

#[utoipa::path(put, path = "/api/articles/{id}", tag = "articles", security(("bearer" = [])), params(("id" = String, Path,)), request_body = crate::openapi::ArticleDoc, responses((status = 200, description = "Replaced"), (status = 404, description = "Not found")))]
pub async fn replace(State(state): State<AppState>, _user: CurrentUser, Path(id): Path<String>, ApiJson(input): ApiJson<ArticleInput>) -> Result<Json<Success>, ApiError> {
    let id = parse_id(&id, "Article")?;
    article_service::replace_article(&state.db, id, input).await?;
    Ok(Json(Success::ok()))
}

#[utoipa::path(delete, path = "/api/articles/{id}", tag = "articles", security(("bearer" = [])), params(("id" = String, Path,)), responses((status = 200, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn remove(State(state): State<AppState>, _user: CurrentUser, Path(id): Path<String>) -> Result<Json<Success>, ApiError> {
    let id = parse_id(&id, "Article")?;
    article_service::delete_article(&state.db, id).await?;
    Ok(Json(Success::ok()))
}
