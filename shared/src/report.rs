//! Plan report: everything a presentation layer shows for one plan
//!
//! Combines the energy estimate and the projection with the derived display
//! values: recommended daily intake, whole weeks, completion date, a chart
//! description and the summary text. Nothing here renders; adapters decide
//! how to draw the chart and lay out the text.

use crate::energy::{calculate_energy_breakdown, ActivityLevel, BiometricProfile, EnergyBreakdown};
use crate::errors::ProjectionError;
use crate::trajectory::{daily_deficit_kcal, project, DeficitLevel, WeightLossPlan, WeightSeries};
use crate::types::DeficitCalories;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Margin around the plotted weights on the y axis (kg)
pub const CHART_Y_MARGIN_KG: f64 = 10.0;

/// Recommended daily intake under a deficit
pub fn daily_calorie_target(tdee: f64, deficit_percent: f64) -> f64 {
    tdee - daily_deficit_kcal(deficit_percent, tdee)
}

/// Daily intake for every offered deficit level
pub fn deficit_calorie_options(tdee: f64) -> Vec<DeficitCalories> {
    DeficitLevel::ALL
        .iter()
        .map(|level| DeficitCalories {
            deficit_percent: level.percent(),
            daily_calories: daily_calorie_target(tdee, f64::from(level.percent())),
        })
        .collect()
}

/// Target marker on the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAnnotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub show_arrow: bool,
    pub arrowhead: u8,
}

/// Line chart description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub y_axis_range: [f64; 2],
    pub annotation: ChartAnnotation,
}

impl ChartSpec {
    pub fn for_plan(current_weight_kg: f64, target_weight_kg: f64, weeks_needed: f64) -> Self {
        Self {
            title: "Weight Forecast".to_string(),
            x_label: "Weeks".to_string(),
            y_label: "Weight (kg)".to_string(),
            y_axis_range: [
                target_weight_kg - CHART_Y_MARGIN_KG,
                current_weight_kg + CHART_Y_MARGIN_KG,
            ],
            annotation: ChartAnnotation {
                x: weeks_needed,
                y: target_weight_kg,
                // Debug keeps every entered digit and a trailing ".0"
                text: format!("Target weight: {:?} kg", target_weight_kg),
                show_arrow: true,
                arrowhead: 2,
            },
        }
    }
}

/// Text shown under the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub deficit: String,
    pub weeks: String,
    pub daily_calories: String,
    pub narrative: String,
}

impl PlanSummary {
    pub fn lines(&self) -> [&str; 4] {
        [
            self.deficit.as_str(),
            self.weeks.as_str(),
            self.daily_calories.as_str(),
            self.narrative.as_str(),
        ]
    }
}

/// Complete result of a plan calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    pub energy: EnergyBreakdown,
    pub activity_level: ActivityLevel,
    pub current_weight_kg: f64,
    pub target_weight_kg: f64,
    pub deficit_percent: u32,
    /// Fractional weeks to reach the target
    pub weeks_needed: f64,
    /// Whole weeks shown to users (truncated)
    pub weeks_display: u64,
    pub daily_calorie_target: f64,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected_completion_date: Option<NaiveDate>,
    pub series: WeightSeries,
    pub chart: ChartSpec,
    pub summary: PlanSummary,
}

/// Estimate TDEE, project the plan and derive the display values
pub fn build_plan_report(
    profile: &BiometricProfile,
    activity: ActivityLevel,
    target_weight_kg: f64,
    deficit: DeficitLevel,
    start_date: NaiveDate,
) -> Result<PlanReport, ProjectionError> {
    let energy = calculate_energy_breakdown(profile, activity);
    let plan = WeightLossPlan::new(profile.weight_kg, target_weight_kg, deficit);
    let projection = project(&plan, energy.tdee)?;

    let weeks_display = projection.weeks_needed.trunc() as u64;
    let daily_calories = daily_calorie_target(energy.tdee, plan.deficit_percent);
    let projected_days = (projection.weeks_needed * 7.0).round() as u64;
    let projected_completion_date = start_date.checked_add_days(Days::new(projected_days));

    let summary = PlanSummary {
        deficit: format!("Selected caloric deficit: {}%", deficit.percent()),
        weeks: format!("Weeks needed to reach the target weight: {}", weeks_display),
        daily_calories: format!("Recommended daily calories: {:.2}", daily_calories),
        narrative: format!(
            "To reach your target weight of {:.1} kg, you will need a {}% caloric deficit \
             for approximately {} weeks.",
            target_weight_kg,
            deficit.percent(),
            weeks_display
        ),
    };

    Ok(PlanReport {
        energy,
        activity_level: activity,
        current_weight_kg: profile.weight_kg,
        target_weight_kg,
        deficit_percent: deficit.percent(),
        weeks_needed: projection.weeks_needed,
        weeks_display,
        daily_calorie_target: daily_calories,
        start_date,
        projected_completion_date,
        chart: ChartSpec::for_plan(profile.weight_kg, target_weight_kg, projection.weeks_needed),
        series: projection.series,
        summary,
    })
}
