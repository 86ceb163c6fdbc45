use std::net::SocketAddr;

use axum::{http::HeaderValue, Router};
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{info, warn};

use configs::{AppConfig, CorsConfig};
use service::runtime;

use crate::{errors::StartupError, routes, state::AppState};

/// `*` means any origin; otherwise only the listed origins, with credentials.
pub fn build_cors(cfg: &CorsConfig) -> CorsLayer {
    if cfg.allows_any() {
        return CorsLayer::very_permissive();
    }
    let origins: Vec<HeaderValue> = cfg
        .origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    let addr = format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))?;
    Ok(addr)
}

/// Connect, migrate and assemble the router for `cfg`.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    runtime::ensure_env(&cfg.uploads.dir).await?;

    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    migration::Migrator::up(&db, None).await.map_err(|e| StartupError::Database(e.to_string()))?;
    info!(event = "migrations_applied", "database schema up to date");

    let state = AppState::new(db, &cfg.auth, &cfg.uploads.dir);
    Ok(routes::build_router(state, build_cors(&cfg.cors)))
}

/// Public entry: load configuration, build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;

    let app = build_app(&cfg).await?;
    let addr = bind_addr(&cfg)?;
    info!(service = "server", event = "listening", %addr, upload_dir = %cfg.uploads.dir, "database-backed API ready");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let cfg = AppConfig::default();
        assert_eq!(bind_addr(&cfg).unwrap().port(), 8001);
    }

    #[test]
    fn bad_host_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(bind_addr(&cfg).is_err());
    }
}
