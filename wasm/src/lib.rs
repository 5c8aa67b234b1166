//! Weight Forecast WASM Module
//!
//! Browser bindings over the shared calculation core. Inputs are validated
//! here, the same way the HTTP API validates them, before reaching the core.

use chrono::NaiveDate;
use wasm_bindgen::prelude::*;
use weight_forecast_shared::types::{PlanRequest, ProfileInput};
use weight_forecast_shared::validation::{validate_deficit_percent, validate_weight_kg};
use weight_forecast_shared::{
    build_plan_report, estimate_tdee as core_estimate_tdee, project, validate_plan,
    validate_profile, Projection, WeightLossPlan,
};

/// Estimate TDEE (kcal/day) with the Mifflin-St Jeor equation
#[wasm_bindgen]
pub fn estimate_tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    is_male: bool,
    activity_level: &str,
) -> Result<f64, JsValue> {
    tdee_for(weight_kg, height_cm, age_years, is_male, activity_level).map_err(to_js_error)
}

/// Fractional number of weeks needed to reach the target weight
#[wasm_bindgen]
pub fn project_weeks_needed(
    current_weight_kg: f64,
    target_weight_kg: f64,
    deficit_percent: u32,
    tdee: f64,
) -> Result<f64, JsValue> {
    projection_for(current_weight_kg, target_weight_kg, deficit_percent, tdee)
        .map(|p| p.weeks_needed)
        .map_err(to_js_error)
}

/// Projected weight for each week, starting at week 0
#[wasm_bindgen]
pub fn project_weight_series(
    current_weight_kg: f64,
    target_weight_kg: f64,
    deficit_percent: u32,
    tdee: f64,
) -> Result<Vec<f64>, JsValue> {
    projection_for(current_weight_kg, target_weight_kg, deficit_percent, tdee)
        .map(|p| p.series.weights())
        .map_err(to_js_error)
}

/// Full plan report (series, chart description, summary) as JSON
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn plan_report_json(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    is_male: bool,
    activity_level: &str,
    target_weight_kg: f64,
    deficit_percent: u32,
    start_date: &str,
) -> Result<String, JsValue> {
    let request = PlanRequest {
        profile: profile_input(weight_kg, height_cm, age_years, is_male, activity_level),
        target_weight_kg: Some(target_weight_kg),
        deficit_percent,
        start_date: None,
    };
    report_json_for(&request, start_date).map_err(to_js_error)
}

fn profile_input(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    is_male: bool,
    activity_level: &str,
) -> ProfileInput {
    ProfileInput {
        weight_kg,
        height_cm,
        age_years,
        sex: if is_male { "male" } else { "female" }.to_string(),
        activity_level: activity_level.to_string(),
    }
}

fn tdee_for(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    is_male: bool,
    activity_level: &str,
) -> Result<f64, String> {
    let input = profile_input(weight_kg, height_cm, age_years, is_male, activity_level);
    let (profile, activity) = validate_profile(&input).map_err(|e| e.user_message())?;
    Ok(core_estimate_tdee(&profile, activity))
}

fn projection_for(
    current_weight_kg: f64,
    target_weight_kg: f64,
    deficit_percent: u32,
    tdee: f64,
) -> Result<Projection, String> {
    validate_weight_kg(current_weight_kg)?;
    validate_weight_kg(target_weight_kg)?;
    let deficit = validate_deficit_percent(deficit_percent)?;
    let plan = WeightLossPlan::new(current_weight_kg, target_weight_kg, deficit);
    project(&plan, tdee).map_err(|e| e.to_string())
}

fn report_json_for(request: &PlanRequest, start_date: &str) -> Result<String, String> {
    let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
        .map_err(|e| format!("Invalid start date '{}': {}", start_date, e))?;
    let plan = validate_plan(request).map_err(|e| e.user_message())?;
    let report = build_plan_report(
        &plan.profile,
        plan.activity,
        plan.target_weight_kg,
        plan.deficit,
        start,
    )
    .map_err(|e| e.to_string())?;
    serde_json::to_string(&report).map_err(|e| e.to_string())
}

fn to_js_error(message: String) -> JsValue {
    JsValue::from_str(&message)
}
