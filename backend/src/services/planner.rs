//! Calculator service
//!
//! Validates request scalars, runs the shared calculation core and shapes
//! the results for the API:
//! - Form options and defaults
//! - TDEE estimate with per-deficit intake
//! - Full weight-loss plan report

use crate::error::ApiError;
use chrono::{NaiveDate, Utc};
use tracing::{debug, info};
use weight_forecast_shared::report::deficit_calorie_options;
use weight_forecast_shared::types::{
    ActivityOption, OptionsResponse, PlanRequest, TdeeRequest, TdeeResponse,
};
use weight_forecast_shared::validation::{input_ranges, FormDefaults};
use weight_forecast_shared::{
    build_plan_report, calculate_energy_breakdown, validate_plan, validate_profile,
    ActivityLevel, DeficitLevel, PlanReport,
};

/// Calculator service for business logic
pub struct PlannerService;

impl PlannerService {
    /// Options for building the input form
    pub fn options() -> OptionsResponse {
        OptionsResponse {
            activity_levels: ActivityLevel::ALL.into_iter().map(ActivityOption::from).collect(),
            deficit_options: DeficitLevel::ALL.iter().map(|d| d.percent()).collect(),
            ranges: input_ranges(),
            defaults: FormDefaults::default(),
        }
    }

    /// Estimate TDEE for a profile
    pub fn estimate_tdee(request: &TdeeRequest) -> Result<TdeeResponse, ApiError> {
        let (profile, activity) = validate_profile(request)?;
        let energy = calculate_energy_breakdown(&profile, activity);

        metrics::counter!("weight_forecast_tdee_requests_total").increment(1);
        debug!(bmr = energy.bmr, tdee = energy.tdee, activity = %activity, "Estimated TDEE");

        Ok(TdeeResponse {
            energy,
            activity_level: activity,
            deficit_options: deficit_calorie_options(energy.tdee),
            unit: "kcal".to_string(),
        })
    }

    /// Build a plan report, starting today unless the request says otherwise
    pub fn create_plan(request: &PlanRequest) -> Result<PlanReport, ApiError> {
        let start_date = request
            .start_date
            .unwrap_or_else(|| Utc::now().date_naive());
        Self::create_plan_from(request, start_date)
    }

    /// Build a plan report with an explicit start date
    pub fn create_plan_from(
        request: &PlanRequest,
        start_date: NaiveDate,
    ) -> Result<PlanReport, ApiError> {
        let plan = validate_plan(request).map_err(|e| {
            metrics::counter!("weight_forecast_plans_total", "outcome" => "invalid_input")
                .increment(1);
            e
        })?;

        let report = build_plan_report(
            &plan.profile,
            plan.activity,
            plan.target_weight_kg,
            plan.deficit,
            start_date,
        )
        .map_err(|e| {
            metrics::counter!("weight_forecast_plans_total", "outcome" => "rejected").increment(1);
            info!(error = %e, "Plan rejected");
            e
        })?;

        metrics::counter!("weight_forecast_plans_total", "outcome" => "ok").increment(1);
        debug!(
            tdee = report.energy.tdee,
            weeks_needed = report.weeks_needed,
            points = report.series.len(),
            "Projected plan"
        );

        Ok(report)
    }
}
