//! Calculator API routes

use crate::error::ApiResult;
use crate::services::{ExportService, PlannerService};
use crate::state::AppState;
use axum::{
    extract::rejection::JsonRejection,
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use weight_forecast_shared::types::{OptionsResponse, PlanRequest, TdeeRequest, TdeeResponse};
use weight_forecast_shared::PlanReport;

/// Create calculator routes
pub fn planner_routes() -> Router<AppState> {
    Router::new()
        .route("/options", get(get_options))
        .route("/tdee", post(estimate_tdee))
        .route("/plan", post(create_plan))
        .route("/plan/csv", post(export_plan_csv))
}

/// GET /api/v1/options - Activity levels, deficits, ranges and defaults
async fn get_options() -> Json<OptionsResponse> {
    Json(PlannerService::options())
}

/// POST /api/v1/tdee - Estimate total daily energy expenditure
async fn estimate_tdee(
    payload: Result<Json<TdeeRequest>, JsonRejection>,
) -> ApiResult<Json<TdeeResponse>> {
    let Json(req) = payload?;
    Ok(Json(PlannerService::estimate_tdee(&req)?))
}

/// POST /api/v1/plan - Project a weight-loss plan
///
/// Returns the weekly series, the chart description and the summary text.
/// A target at or above the current weight is rejected with 422.
async fn create_plan(
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> ApiResult<Json<PlanReport>> {
    let Json(req) = payload?;
    Ok(Json(PlannerService::create_plan(&req)?))
}

/// POST /api/v1/plan/csv - Export the projected series as CSV
async fn export_plan_csv(
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(req) = payload?;
    let report = PlannerService::create_plan(&req)?;
    let csv = ExportService::plan_series_csv(&report)?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/csv"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=\"weight-forecast.csv\""),
    );

    Ok((headers, csv))
}
