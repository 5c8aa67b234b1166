//! Weight Forecast Shared Library
//!
//! This crate contains the pure calculation core (energy expenditure and
//! weight trajectory), input validation, and the types shared by the
//! backend and WASM adapters.

pub mod energy;
pub mod errors;
pub mod report;
pub mod trajectory;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use energy::{
    calculate_bmr_mifflin, calculate_energy_breakdown, estimate_tdee, ActivityLevel,
    BiologicalSex, BiometricProfile, EnergyBreakdown,
};
pub use errors::*;
pub use report::{build_plan_report, daily_calorie_target, ChartSpec, PlanReport, PlanSummary};
pub use trajectory::{
    project, DeficitLevel, Projection, WeekPoint, WeightLossPlan, WeightSeries,
    KCAL_PER_KG_BODY_FAT,
};
pub use validation::{validate_plan, validate_profile, ValidatedPlan, ValidationError};
