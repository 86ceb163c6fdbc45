use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

use service::auth::errors::AuthError;
use service::demo::DemoError;
use service::errors::ServiceError;

/// Every handler failure, rendered as `{"error": <status title>, "detail": <message>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            ApiError::Internal(msg) => {
                error!(error = %msg, "internal error");
                // storage details stay in the log
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        let title = status.canonical_reason().unwrap_or("Error");
        (status, Json(serde_json::json!({"error": title, "detail": detail}))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::Validation(msg) => ApiError::BadRequest(msg),
            ServiceError::Conflict(msg) => ApiError::Conflict(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        if e.is_unauthorized() {
            warn!(code = e.code(), error = %e, "auth rejected");
            return ApiError::Unauthorized(e.to_string());
        }
        match e {
            AuthError::Conflict => ApiError::Conflict(e.to_string()),
            AuthError::Validation(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<DemoError> for ApiError {
    fn from(e: DemoError) -> Self {
        match e {
            DemoError::Unauthorized => ApiError::Unauthorized(e.to_string()),
            DemoError::UnknownResource(_) | DemoError::NotFound { .. } => ApiError::NotFound(e.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(e: ApiError) -> (StatusCode, serde_json::Value) {
        let res = e.into_response();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn renders_title_and_detail() {
        let (status, v) = body_json(ServiceError::not_found("Article").into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(v, serde_json::json!({"error": "Not Found", "detail": "Article not found"}));
    }

    #[tokio::test]
    async fn internal_detail_is_generic() {
        let (status, v) = body_json(ServiceError::Db("connection reset".into()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(v["detail"], "internal server error");
    }

    #[test]
    fn auth_errors_map_to_status() {
        assert_eq!(ApiError::from(AuthError::InvalidSecretCode).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::from(AuthError::UnknownUser).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::from(AuthError::Conflict).status(), StatusCode::CONFLICT);
        assert_eq!(ApiError::from(AuthError::HashError("x".into())).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::from(DemoError::UnknownResource("x".into())).status(), StatusCode::NOT_FOUND);
    }
}
