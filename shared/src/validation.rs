//! Input validation for the presentation adapters
//!
//! The calculation core never range-checks its inputs. Adapters (HTTP, WASM)
//! call into this module first, then hand the typed values to
//! [`crate::energy`] and [`crate::trajectory`].

use crate::energy::{ActivityLevel, BiologicalSex, BiometricProfile};
use crate::trajectory::DeficitLevel;
use crate::types::{PlanRequest, ProfileInput};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_WEIGHT_KG: f64 = 30.0;
pub const MAX_WEIGHT_KG: f64 = 200.0;
pub const MIN_HEIGHT_CM: f64 = 100.0;
pub const MAX_HEIGHT_CM: f64 = 250.0;
pub const MIN_AGE_YEARS: u32 = 10;
pub const MAX_AGE_YEARS: u32 = 120;

/// Default gap between current and target weight offered by input forms
pub const DEFAULT_TARGET_OFFSET_KG: f64 = 5.0;

/// Validate body weight (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < MIN_WEIGHT_KG {
        return Err(format!("Weight must be at least {} kg", MIN_WEIGHT_KG));
    }
    if weight_kg > MAX_WEIGHT_KG {
        return Err(format!("Weight must be at most {} kg", MAX_WEIGHT_KG));
    }
    Ok(())
}

/// Validate height (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < MIN_HEIGHT_CM {
        return Err(format!("Height must be at least {} cm", MIN_HEIGHT_CM));
    }
    if height_cm > MAX_HEIGHT_CM {
        return Err(format!("Height must be at most {} cm", MAX_HEIGHT_CM));
    }
    Ok(())
}

/// Validate age (whole years)
pub fn validate_age_years(age_years: u32) -> Result<(), String> {
    if age_years < MIN_AGE_YEARS {
        return Err(format!("Age must be at least {} years", MIN_AGE_YEARS));
    }
    if age_years > MAX_AGE_YEARS {
        return Err(format!("Age must be at most {} years", MAX_AGE_YEARS));
    }
    Ok(())
}

/// Validate a caloric deficit percentage against the offered options
pub fn validate_deficit_percent(percent: u32) -> Result<DeficitLevel, String> {
    DeficitLevel::try_from(percent).map_err(|_| {
        let options: Vec<String> = DeficitLevel::ALL
            .iter()
            .map(|level| level.percent().to_string())
            .collect();
        format!("Deficit must be one of: {}", options.join(", "))
    })
}

/// Validate activity level
pub fn validate_activity_level(level: &str) -> Result<ActivityLevel, String> {
    level.parse::<ActivityLevel>().map_err(|_| {
        let keys: Vec<&str> = ActivityLevel::ALL.iter().map(|l| l.key()).collect();
        format!("Invalid activity level. Must be one of: {}", keys.join(", "))
    })
}

/// Validate biological sex
pub fn validate_biological_sex(sex: &str) -> Result<BiologicalSex, String> {
    sex.parse::<BiologicalSex>()
        .map_err(|_| "Invalid biological sex. Must be one of: male, female".to_string())
}

// ============================================================================
// Request Validation
// ============================================================================

/// Validate profile fields and convert them into calculation inputs
pub fn validate_profile(
    input: &ProfileInput,
) -> Result<(BiometricProfile, ActivityLevel), ValidationError> {
    validate_weight_kg(input.weight_kg).map_err(|m| ValidationError::new("weight_kg", &m))?;
    validate_height_cm(input.height_cm).map_err(|m| ValidationError::new("height_cm", &m))?;
    validate_age_years(input.age_years).map_err(|m| ValidationError::new("age_years", &m))?;
    let sex = validate_biological_sex(&input.sex).map_err(|m| ValidationError::new("sex", &m))?;
    let activity = validate_activity_level(&input.activity_level)
        .map_err(|m| ValidationError::new("activity_level", &m))?;

    Ok((
        BiometricProfile {
            weight_kg: input.weight_kg,
            height_cm: input.height_cm,
            age_years: input.age_years,
            sex,
        },
        activity,
    ))
}

/// A fully validated plan request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedPlan {
    pub profile: BiometricProfile,
    pub activity: ActivityLevel,
    pub target_weight_kg: f64,
    pub deficit: DeficitLevel,
}

/// Validate a plan request
///
/// A missing target weight defaults to the current weight minus
/// [`DEFAULT_TARGET_OFFSET_KG`]. Whether the target is below the current
/// weight is left to the projection, which reports it as an invalid plan.
pub fn validate_plan(request: &PlanRequest) -> Result<ValidatedPlan, ValidationError> {
    let (profile, activity) = validate_profile(&request.profile)?;

    let target_weight_kg = request
        .target_weight_kg
        .unwrap_or(profile.weight_kg - DEFAULT_TARGET_OFFSET_KG);
    validate_weight_kg(target_weight_kg)
        .map_err(|m| ValidationError::new("target_weight_kg", &m))?;

    let deficit = validate_deficit_percent(request.deficit_percent)
        .map_err(|m| ValidationError::new("deficit_percent", &m))?;

    Ok(ValidatedPlan {
        profile,
        activity,
        target_weight_kg,
        deficit,
    })
}

// ============================================================================
// Input Ranges and Defaults
// ============================================================================

/// Bounds and step of a numeric input widget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Accepted input ranges, for building input forms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRanges {
    pub weight_kg: InputBounds,
    pub height_cm: InputBounds,
    pub age_years: InputBounds,
    pub target_weight_kg: InputBounds,
}

pub fn input_ranges() -> InputRanges {
    let weight = InputBounds {
        min: MIN_WEIGHT_KG,
        max: MAX_WEIGHT_KG,
        step: 0.1,
    };
    InputRanges {
        weight_kg: weight,
        height_cm: InputBounds {
            min: MIN_HEIGHT_CM,
            max: MAX_HEIGHT_CM,
            step: 1.0,
        },
        age_years: InputBounds {
            min: f64::from(MIN_AGE_YEARS),
            max: f64::from(MAX_AGE_YEARS),
            step: 1.0,
        },
        target_weight_kg: weight,
    }
}

/// Initial form values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDefaults {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub sex: BiologicalSex,
    pub activity_level: ActivityLevel,
    pub target_weight_kg: f64,
    pub deficit_percent: u32,
}

impl Default for FormDefaults {
    fn default() -> Self {
        let weight_kg = 70.0;
        Self {
            weight_kg,
            height_cm: 170.0,
            age_years: 30,
            sex: BiologicalSex::default(),
            activity_level: ActivityLevel::default(),
            target_weight_kg: weight_kg - DEFAULT_TARGET_OFFSET_KG,
            deficit_percent: DeficitLevel::default().percent(),
        }
    }
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight" | "weight_kg" => "Current Weight",
        "height" | "height_cm" => "Height",
        "age" | "age_years" => "Age",
        "sex" => "Sex",
        "activity_level" => "Activity Level",
        "target_weight_kg" => "Target Weight",
        "deficit_percent" => "Caloric Deficit",
        "start_date" => "Start Date",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{display_label}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn profile_input() -> ProfileInput {
        ProfileInput {
            weight_kg: 70.0,
            height_cm: 170.0,
            age_years: 30,
            sex: "male".to_string(),
            activity_level: "sedentary".to_string(),
        }
    }

    fn plan_request(target: Option<f64>, deficit: u32) -> PlanRequest {
        PlanRequest {
            profile: profile_input(),
            target_weight_kg: target,
            deficit_percent: deficit,
            start_date: None,
        }
    }

    #[rstest]
    #[case(30.0, true)]
    #[case(200.0, true)]
    #[case(70.5, true)]
    #[case(29.9, false)]
    #[case(200.1, false)]
    #[case(f64::NAN, false)]
    #[case(f64::INFINITY, false)]
    fn test_validate_weight(#[case] weight: f64, #[case] valid: bool) {
        assert_eq!(validate_weight_kg(weight).is_ok(), valid);
    }

    #[rstest]
    #[case(100.0, true)]
    #[case(250.0, true)]
    #[case(99.0, false)]
    #[case(251.0, false)]
    #[case(f64::NEG_INFINITY, false)]
    fn test_validate_height(#[case] height: f64, #[case] valid: bool) {
        assert_eq!(validate_height_cm(height).is_ok(), valid);
    }

    #[rstest]
    #[case(10, true)]
    #[case(120, true)]
    #[case(9, false)]
    #[case(121, false)]
    fn test_validate_age(#[case] age: u32, #[case] valid: bool) {
        assert_eq!(validate_age_years(age).is_ok(), valid);
    }

    #[test]
    fn test_validate_deficit_percent() {
        assert_eq!(validate_deficit_percent(10), Ok(DeficitLevel::Ten));
        assert_eq!(validate_deficit_percent(20), Ok(DeficitLevel::Twenty));
        assert_eq!(
            validate_deficit_percent(0),
            Err("Deficit must be one of: 10, 15, 20".to_string())
        );
    }

    #[test]
    fn test_validate_profile_success() {
        let (profile, activity) = validate_profile(&profile_input()).unwrap();
        assert_eq!(profile.weight_kg, 70.0);
        assert_eq!(profile.sex, BiologicalSex::Male);
        assert_eq!(activity, ActivityLevel::Sedentary);
    }

    #[test]
    fn test_validate_profile_reports_field() {
        let mut input = profile_input();
        input.height_cm = 90.0;
        let err = validate_profile(&input).unwrap_err();
        assert_eq!(err.field, "height_cm");
        assert_eq!(err.user_message(), "Height: Height must be at least 100 cm");

        let mut input = profile_input();
        input.activity_level = "couch".to_string();
        let err = validate_profile(&input).unwrap_err();
        assert_eq!(err.field, "activity_level");
        assert!(err.message.contains("extremely_active"));
    }

    #[test]
    fn test_validate_plan_defaults_target() {
        let plan = validate_plan(&plan_request(None, 15)).unwrap();
        assert_eq!(plan.target_weight_kg, 65.0);
        assert_eq!(plan.deficit, DeficitLevel::Fifteen);
    }

    #[test]
    fn test_validate_plan_rejects_bad_fields() {
        let err = validate_plan(&plan_request(Some(25.0), 10)).unwrap_err();
        assert_eq!(err.field, "target_weight_kg");
        assert_eq!(err.display_label, "Target Weight");

        let err = validate_plan(&plan_request(Some(65.0), 12)).unwrap_err();
        assert_eq!(err.field, "deficit_percent");
    }

    #[test]
    fn test_validate_plan_leaves_direction_to_projection() {
        // Target above current passes validation; the projection rejects it
        let plan = validate_plan(&plan_request(Some(80.0), 10)).unwrap();
        assert_eq!(plan.target_weight_kg, 80.0);
    }

    #[test]
    fn test_form_defaults_are_valid() {
        let defaults = FormDefaults::default();
        assert!(validate_weight_kg(defaults.weight_kg).is_ok());
        assert!(validate_weight_kg(defaults.target_weight_kg).is_ok());
        assert!(validate_height_cm(defaults.height_cm).is_ok());
        assert!(validate_age_years(defaults.age_years).is_ok());
        assert!(validate_deficit_percent(defaults.deficit_percent).is_ok());
    }

    #[test]
    fn test_input_ranges_match_validators() {
        let ranges = input_ranges();
        assert!(validate_weight_kg(ranges.weight_kg.min).is_ok());
        assert!(validate_weight_kg(ranges.weight_kg.max).is_ok());
        assert!(validate_height_cm(ranges.height_cm.min).is_ok());
        assert!(validate_height_cm(ranges.height_cm.max).is_ok());
        assert!(validate_age_years(ranges.age_years.max as u32).is_ok());
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(get_field_display_label("weight_kg"), "Current Weight");
        assert_eq!(get_field_display_label("deficit_percent"), "Caloric Deficit");
        assert_eq!(get_field_display_label("unknown_field"), "unknown_field");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_weight_range(weight in 30.0f64..=200.0) {
            prop_assert!(validate_weight_kg(weight).is_ok());
        }

        #[test]
        fn prop_invalid_weight_below_min(weight in 0.0f64..30.0) {
            prop_assert!(validate_weight_kg(weight).is_err());
        }

        #[test]
        fn prop_valid_height_range(height in 100.0f64..=250.0) {
            prop_assert!(validate_height_cm(height).is_ok());
        }

        #[test]
        fn prop_invalid_height_above_max(height in 250.1f64..500.0) {
            prop_assert!(validate_height_cm(height).is_err(),
                "Height {} should be invalid (above maximum)", height);
        }
    }
}
