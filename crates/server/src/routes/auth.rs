use axum::{extract::State, routing::{get, post}, Json, Router};

use service::auth::domain::{AuthUser, LoginInput, SignupInput, TokenResponse};

use crate::{errors::ApiError, extract::{ApiJson, CurrentUser}, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
}

#[utoipa::path(post, path = "/api/auth/signup", tag = "auth", request_body = crate::openapi::SignupRequest, responses((status = 200, description = "Signed up", body = crate::openapi::TokenResponseDoc), (status = 401, description = "Secret code invalid"), (status = 409, description = "Username already exists")))]
pub async fn signup(State(state): State<AppState>, ApiJson(input): ApiJson<SignupInput>) -> Result<Json<TokenResponse>, ApiError> {
    Ok(Json(state.auth.signup(input).await?))
}

#[utoipa::path(post, path = "/api/auth/login", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Logged in", body = crate::openapi::TokenResponseDoc), (status = 401, description = "Unauthorized")))]
pub async fn login(State(state): State<AppState>, ApiJson(input): ApiJson<LoginInput>) -> Result<Json<TokenResponse>, ApiError> {
    Ok(Json(state.auth.login(input).await?))
}

#[utoipa::path(get, path = "/api/auth/me", tag = "auth", security(("bearer" = [])), responses((status = 200, description = "Current user", body = crate::openapi::UserDoc), (status = 401, description = "Unauthorized")))]
pub async fn me(CurrentUser(user): CurrentUser) -> Json<AuthUser> {
    Json(user)
}
