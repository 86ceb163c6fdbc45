use axum::{
    body::Body,
    extract::{DefaultBodyLimit, Multipart, Path, Request, State},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use service::storage::StoredFile;

use crate::{errors::ApiError, extract::CurrentUser, state::AppState};

/// Largest accepted upload body.
pub const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/upload", post(upload).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)))
        .route("/api/uploads/:filename", get(download))
}

/// Store the multipart field `file` under a fresh name.
#[utoipa::path(post, path = "/api/upload", tag = "uploads", security(("bearer" = [])), request_body(content = String, content_type = "multipart/form-data", description = "Field `file`"), responses((status = 200, description = "Stored", body = crate::openapi::StoredFileDoc), (status = 400, description = "No file field")))]
pub async fn upload(State(state): State<AppState>, _user: CurrentUser, mut multipart: Multipart) -> Result<Json<StoredFile>, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| ApiError::BadRequest(e.body_text()))? {
        if field.name() != Some("file") {
            continue;
        }
        let original = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(|e| ApiError::BadRequest(e.body_text()))?;
        let stored = state.uploads.save(&original, &bytes).await?;
        return Ok(Json(stored));
    }
    Err(ApiError::BadRequest("multipart field `file` is required".into()))
}

#[utoipa::path(get, path = "/api/uploads/{filename}", tag = "uploads", params(("filename" = String, Path,)), responses((status = 200, description = "File bytes"), (status = 404, description = "File not found")))]
pub async fn download(State(state): State<AppState>, Path(filename): Path<String>, req: Request) -> Result<Response, ApiError> {
    let path = state.uploads.locate(&filename).await?;
    let res = ServeFile::new(path)
        .oneshot(req)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(res.map(Body::new))
}
