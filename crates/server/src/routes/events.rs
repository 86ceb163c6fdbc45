use axum::{extract::{Path, State}, routing::{get, post}, Json, Router};

use common::types::Success;
use models::{event, registration};
use service::{
    db::{event_service::{self, EventInput}, registration_service::{self, RegistrationInput}},
    errors::parse_id,
};

use crate::{errors::ApiError, extract::{ApiJson, CurrentUser}, state::AppState};

pub const REGISTERED_MESSAGE: &str = "Registration successful!";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(list).post(create))
        // GET takes a slug, everything else an event id
        .route("/api/events/:key", get(get_by_slug).put(replace).delete(remove))
        .route("/api/events/:key/register", post(register))
        .route("/api/events/:key/registrations", get(registrations))
        .route("/api/registrations/export/:event_id", get(export_registrations))
}

#[utoipa::path(get, path = "/api/events", tag = "events", responses((status = 200, description = "Latest date first")))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<event::Model>>, ApiError> {
    Ok(Json(event_service::list_events(&state.db).await?))
}

#[utoipa::path(get, path = "/api/events/{slug}", tag = "events", params(("slug" = String, Path,)), responses((status = 200, description = "Event"), (status = 404, description = "Not found")))]
pub async fn get_by_slug(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Json<event::Model>, ApiError> {
    Ok(Json(event_service::get_event_by_slug(&state.db, &slug).await?))
}

#[utoipa::path(post, path = "/api/events", tag = "events", security(("bearer" = [])), request_body = crate::openapi::EventDoc, responses((status = 200, description = "Created event")))]
pub async fn create(State(state): State<AppState>, _user: CurrentUser, ApiJson(input): ApiJson<EventInput>) -> Result<Json<event::Model>, ApiError> {
    Ok(Json(event_service::create_event(&state.db, input).await?))
}

#[utoipa::path(put, path = "/api/events/{id}", tag = "events", security(("bearer" = [])), params(("id" = String, Path,)), request_body = crate::openapi::EventDoc, responses((status = 200, description = "Replaced"), (status = 404, description = "Not found")))]
pub async fn replace(State(state): State<AppState>, _user: CurrentUser, Path(id): Path<String>, ApiJson(input): ApiJson<EventInput>) -> Result<Json<Success>, ApiError> {
    let id = parse_id(&id, "Event")?;
    event_service::replace_event(&state.db, id, input).await?;
    Ok(Json(Success::ok()))
}

#[utoipa::path(delete, path = "/api/events/{id}", tag = "events", security(("bearer" = [])), params(("id" = String, Path,)), responses((status = 200, description = "Deleted"), (status = 404, description = "Not found")))]
pub async fn remove(State(state): State<AppState>, _user: CurrentUser, Path(id): Path<String>) -> Result<Json<Success>, ApiError> {
    let id = parse_id(&id, "Event")?;
    event_service::delete_event(&state.db, id).await?;
    Ok(Json(Success::ok()))
}

/// Public sign-up for an event.
#[utoipa::path(post, path = "/api/events/{id}/register", tag = "events", params(("id" = String, Path,)), request_body = crate::openapi::RegistrationDoc, responses((status = 200, description = "Registered"), (status = 404, description = "Event not found")))]
pub async fn register(State(state): State<AppState>, Path(id): Path<String>, ApiJson(input): ApiJson<RegistrationInput>) -> Result<Json<Success>, ApiError> {
    let event_id = parse_id(&id, "Event")?;
    registration_service::register(&state.db, event_id, input).await?;
    Ok(Json(Success::with_message(REGISTERED_MESSAGE)))
}

#[utoipa::path(get, path = "/api/events/{id}/registrations", tag = "events", security(("bearer" = [])), params(("id" = String, Path,)), responses((status = 200, description = "Registrations in sign-up order")))]
pub async fn registrations(State(state): State<AppState>, _user: CurrentUser, Path(id): Path<String>) -> Result<Json<Vec<registration::Model>>, ApiError> {
    list_for(&state, &id).await
}

#[utoipa::path(get, path = "/api/registrations/export/{event_id}", tag = "events", security(("bearer" = [])), params(("event_id" = String, Path,)), responses((status = 200, description = "Registrations in sign-up order")))]
pub async fn export_registrations(State(state): State<AppState>, _user: CurrentUser, Path(event_id): Path<String>) -> Result<Json<Vec<registration::Model>>, ApiError> {
    list_for(&state, &event_id).await
}

// Unknown or malformed event ids simply have no registrations.
async fn list_for(state: &AppState, raw_id: &str) -> Result<Json<Vec<registration::Model>>, ApiError> {
    match parse_id(raw_id, "Event") {
        Ok(id) => Ok(Json(registration_service::list_registrations(&state.db, id).await?)),
        Err(_) => Ok(Json(Vec::new())),
    }
}
