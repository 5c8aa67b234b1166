//! API request and response types

use crate::energy::{ActivityLevel, EnergyBreakdown};
use crate::validation::{FormDefaults, InputRanges};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body metrics and activity as submitted by a form
///
/// `sex` and `activity_level` stay strings here so that unknown values are
/// reported as field validation errors rather than parse failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub sex: String,
    pub activity_level: String,
}

/// TDEE request
pub type TdeeRequest = ProfileInput;

/// Weight-loss plan request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    #[serde(flatten)]
    pub profile: ProfileInput,
    /// Target weight; defaults to the current weight minus 5 kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight_kg: Option<f64>,
    /// One of 10, 15 or 20
    pub deficit_percent: u32,
    /// First day of the plan; defaults to today
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

/// Daily calories for one deficit option
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeficitCalories {
    pub deficit_percent: u32,
    pub daily_calories: f64,
}

/// TDEE response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TdeeResponse {
    #[serde(flatten)]
    pub energy: EnergyBreakdown,
    pub activity_level: ActivityLevel,
    /// Recommended daily intake for each offered deficit
    pub deficit_options: Vec<DeficitCalories>,
    pub unit: String,
}

/// Selectable activity level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityOption {
    pub key: String,
    pub label: String,
    pub description: String,
    pub multiplier: f64,
}

impl From<ActivityLevel> for ActivityOption {
    fn from(level: ActivityLevel) -> Self {
        Self {
            key: level.key().to_string(),
            label: level.label().to_string(),
            description: level.description().to_string(),
            multiplier: level.multiplier(),
        }
    }
}

/// Everything a client needs to build the input form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsResponse {
    pub activity_levels: Vec<ActivityOption>,
    pub deficit_options: Vec<u32>,
    pub ranges: InputRanges,
    pub defaults: FormDefaults,
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}
