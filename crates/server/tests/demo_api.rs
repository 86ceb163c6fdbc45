use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::Service;

use server::demo::{build_demo_router, DemoState};
use service::demo::{DemoCredentials, DemoStore, DEMO_TOKEN};

fn app() -> Router {
    let creds = DemoCredentials::from(&configs::DemoConfig::default());
    build_demo_router(DemoState::new(DemoStore::new(), creds), tower_http::cors::CorsLayer::very_permissive())
}

async fn call(app: &mut Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let req = Request::builder().method(method).uri(uri).header(header::CONTENT_TYPE, "application/json");
    let req = match body {
        Some(b) => req.body(Body::from(serde_json::to_vec(&b)?))?,
        None => req.body(Body::empty())?,
    };
    let resp = app.call(req).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

#[tokio::test]
async fn create_update_delete_cycle() -> anyhow::Result<()> {
    let mut app = app();

    let (status, list) = call(&mut app, "GET", "/api/articles", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));

    let (status, a) = call(&mut app, "POST", "/api/articles", Some(json!({"title": "A"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(a, json!({"id": 1, "title": "A", "name": null, "slug": null}));
    let (_, b) = call(&mut app, "POST", "/api/articles", Some(json!({"title": "B", "slug": "b"}))).await?;
    assert_eq!(b["id"], 2);

    let (status, upd) = call(&mut app, "PUT", "/api/articles/2", Some(json!({"slug": "bee"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(upd, json!({"id": 2, "title": "B", "name": null, "slug": "bee"}));

    let (status, body) = call(&mut app, "DELETE", "/api/articles/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, c) = call(&mut app, "POST", "/api/articles", Some(json!({"title": "C"}))).await?;
    assert_eq!(c["id"], 3);

    let (_, list) = call(&mut app, "GET", "/api/articles", None).await?;
    let ids: Vec<u64> = list.as_array().into_iter().flatten().filter_map(|r| r["id"].as_u64()).collect();
    assert_eq!(ids, vec![2, 3]);
    Ok(())
}

#[tokio::test]
async fn records_keep_every_field_sent() -> anyhow::Result<()> {
    let mut app = app();
    let (status, t) = call(&mut app, "POST", "/api/tasks", Some(json!({"title": "A", "slug": "a"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(t, json!({"id": 1, "title": "A", "name": null, "slug": "a"}));

    let (_, m) = call(&mut app, "POST", "/api/members", Some(json!({"name": "Rina"}))).await?;
    let (status, m) = call(&mut app, "PUT", &format!("/api/members/{}", m["id"]), Some(json!({"title": "Chair"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(m, json!({"id": 1, "title": "Chair", "name": "Rina", "slug": null}));
    Ok(())
}

#[tokio::test]
async fn missing_records_and_unknown_resources_are_not_found() -> anyhow::Result<()> {
    let mut app = app();
    let (status, _) = call(&mut app, "GET", "/api/widgets", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call(&mut app, "POST", "/api/widgets", Some(json!({"title": "x"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call(&mut app, "PUT", "/api/events/99", Some(json!({"title": "x"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call(&mut app, "DELETE", "/api/events/not-a-number", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn login_checks_the_fixed_triple() -> anyhow::Result<()> {
    let mut app = app();
    let cfg = configs::DemoConfig::default();
    let good = json!({"username": cfg.username, "password": cfg.password, "secretCode": cfg.secret_code});
    let (status, body) = call(&mut app, "POST", "/api/auth/login", Some(good)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["access_token"], DEMO_TOKEN);
    assert_eq!(body["token_type"], "bearer");

    let bad = json!({"username": cfg.username, "password": cfg.password, "secretCode": "wrong"});
    let (status, _) = call(&mut app, "POST", "/api/auth/login", Some(bad)).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn health_is_not_a_resource() -> anyhow::Result<()> {
    let mut app = app();
    let (status, body) = call(&mut app, "GET", "/api/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
    Ok(())
}
