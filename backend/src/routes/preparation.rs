//! Preparation plan API routes

use crate::error::ApiResult;
use crate::services::{PlanResponse, PreparationRequest, PreparationService};
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use tracing::warn;

/// Create preparation routes
pub fn preparation_routes() -> Router<AppState> {
    Router::new().route("/", post(generate_preparation_plan))
}

/// POST /api/v1/preparation - Validate a submission and generate the plan
///
/// The reference date is pinned once per request; every derived date and
/// countdown in the response comes from the same instant.
async fn generate_preparation_plan(
    State(state): State<AppState>,
    Json(req): Json<PreparationRequest>,
) -> ApiResult<Json<PlanResponse>> {
    let today = Utc::now().date_naive();

    let profile = PreparationService::validate_submission(req, today)?;
    let response = PreparationService::build_response(&profile, today);

    // Fire-and-forget save; a failed store never blocks the plan
    let store = state.store.clone();
    tokio::spawn(async move {
        if let Err(e) = store.save(&profile).await {
            warn!("Failed to persist submission: {}", e);
        }
    });

    Ok(Json(response))
}
