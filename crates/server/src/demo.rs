//! In-memory demo API: generic `{resource}` routes over [`DemoStore`]
//! and a cosmetic login. Bearer tokens are never checked here.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use common::types::{Health, Success};
use configs::AppConfig;
use service::demo::{DemoCredentials, DemoError, DemoLogin, DemoPatch, DemoRecord, DemoStore, DemoToken};

use crate::{errors::{ApiError, StartupError}, extract::ApiJson, routes::trace_layer, startup::build_cors};

#[derive(Clone)]
pub struct DemoState {
    pub store: Arc<DemoStore>,
    pub credentials: Arc<DemoCredentials>,
}

impl DemoState {
    pub fn new(store: DemoStore, credentials: DemoCredentials) -> Self {
        Self { store: Arc::new(store), credentials: Arc::new(credentials) }
    }
}

pub fn build_demo_router(state: DemoState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/auth/login", post(login))
        .route("/api/:resource", get(list).post(create))
        .route("/api/:resource/:id", put(update).delete(remove))
        .with_state(state)
        .layer(cors)
        .layer(trace_layer())
}

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn login(State(state): State<DemoState>, ApiJson(input): ApiJson<DemoLogin>) -> Result<Json<DemoToken>, ApiError> {
    Ok(Json(state.credentials.login(&input)?))
}

async fn list(State(state): State<DemoState>, Path(resource): Path<String>) -> Result<Json<Vec<DemoRecord>>, ApiError> {
    Ok(Json(state.store.list(&resource).await?))
}

async fn create(State(state): State<DemoState>, Path(resource): Path<String>, ApiJson(patch): ApiJson<DemoPatch>) -> Result<Json<DemoRecord>, ApiError> {
    Ok(Json(state.store.create(&resource, patch).await?))
}

async fn update(State(state): State<DemoState>, Path((resource, id)): Path<(String, String)>, ApiJson(patch): ApiJson<DemoPatch>) -> Result<Json<DemoRecord>, ApiError> {
    let id = parse_record_id(&resource, &id)?;
    Ok(Json(state.store.update(&resource, id, patch).await?))
}

async fn remove(State(state): State<DemoState>, Path((resource, id)): Path<(String, String)>) -> Result<Json<Success>, ApiError> {
    let id = parse_record_id(&resource, &id)?;
    state.store.delete(&resource, id).await?;
    Ok(Json(Success::ok()))
}

// Unknown resource wins over a malformed id; a non-numeric id names no record.
fn parse_record_id(resource: &str, raw: &str) -> Result<u64, DemoError> {
    let kind: service::demo::ResourceKind = resource.parse()?;
    raw.parse().map_err(|_| DemoError::NotFound { resource: kind.as_str(), id: raw.to_string() })
}

/// Public entry for the `demo` binary.
pub async fn run_demo() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = AppConfig::load_for_demo().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let state = DemoState::new(DemoStore::seeded(), DemoCredentials::from(&cfg.demo));
    let app = build_demo_router(state, build_cors(&cfg.cors));

    let addr: std::net::SocketAddr = format!("{}:{}", cfg.demo.host, cfg.demo.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("demo bind address: {e}")))?;
    info!(service = "demo", event = "listening", %addr, "in-memory demo API ready");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
