use axum::{extract::State, routing::post, Json, Router};

use common::types::Success;
use service::seed;

use crate::{errors::ApiError, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/seed", post(seed_content))
}

/// Reset sample content. Users, tasks and registrations are left alone.
#[utoipa::path(post, path = "/api/seed", tag = "seed", responses((status = 200, description = "Seeded")))]
pub async fn seed_content(State(state): State<AppState>) -> Result<Json<Success>, ApiError> {
    seed::seed_sample_content(&state.db).await?;
    Ok(Json(Success::with_message("Sample data seeded")))
}
