//! Life expectancy API routes

use crate::error::ApiResult;
use crate::services::CalculationService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use final_tap_shared::types::{
    CalculateRequest, CalculationResult, ConditionCatalogResponse, ScoreResponse,
};
use tracing::debug;
use validator::Validate;

/// Create calculation routes
pub fn calculate_routes() -> Router<AppState> {
    Router::new()
        .route("/conditions", get(list_conditions))
        .route("/score", post(score_habits))
        .route("/calculate", post(calculate))
}

/// GET /api/v1/conditions - Medical condition checklist with penalties
async fn list_conditions() -> Json<ConditionCatalogResponse> {
    Json(ConditionCatalogResponse::full())
}

/// POST /api/v1/score - Score and remaining time, no advice
async fn score_habits(
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> ApiResult<Json<ScoreResponse>> {
    let Json(req) = payload?;
    req.habits.validate()?;

    let today = req.today.unwrap_or_else(|| Utc::now().date_naive());
    debug!(%today, "Scoring habits");

    Ok(Json(CalculationService::score(&req.habits, today)?))
}

/// POST /api/v1/calculate - Full result including devilish advice
///
/// Advice failures never fail the request; a canned message is served instead.
async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> ApiResult<Json<CalculationResult>> {
    let Json(req) = payload?;
    req.habits.validate()?;

    let today = req.today.unwrap_or_else(|| Utc::now().date_naive());
    let result = CalculationService::calculate(state.advice(), req.habits, today).await?;

    Ok(Json(result))
}
