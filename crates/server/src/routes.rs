use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{
        DefaultMakeSpan, DefaultOnBodyChunk, DefaultOnEos, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse,
        HttpMakeClassifier, TraceLayer,
    },
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::{ApiInfo, Health};

use crate::{openapi::ApiDoc, state::AppState};

pub mod agent;
pub mod articles;
pub mod auth;
pub mod documents;
pub mod events;
pub mod media;
pub mod members;
pub mod pages;
pub mod seed;
pub mod tasks;
pub mod uploads;

pub const API_NAME: &str = "Organization Website API";

#[utoipa::path(get, path = "/api/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[utoipa::path(get, path = "/api/", tag = "health", responses((status = 200, description = "Service name and version")))]
pub async fn root() -> Json<ApiInfo> {
    Json(ApiInfo { message: API_NAME, version: env!("CARGO_PKG_VERSION") })
}

/// Request tracing shared by both services: a span per request at INFO,
/// failures (5xx) at ERROR.
pub fn trace_layer() -> TraceLayer<
    HttpMakeClassifier,
    DefaultMakeSpan,
    DefaultOnRequest,
    DefaultOnResponse,
    DefaultOnBodyChunk,
    DefaultOnEos,
    DefaultOnFailure,
> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
        .on_failure(DefaultOnFailure::new().level(Level::ERROR))
}

/// Build the full database-backed application router.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .route("/api/health", get(health))
        .merge(auth::router())
        .merge(pages::router())
        .merge(articles::router())
        .merge(media::router())
        .merge(documents::router())
        .merge(events::router())
        .merge(tasks::router())
        .merge(members::router())
        .merge(uploads::router())
        .merge(seed::router())
        .merge(agent::router())
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(trace_layer())
}
