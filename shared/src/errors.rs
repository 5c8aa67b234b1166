//! Error types for the Weight Forecast calculations

use thiserror::Error;

/// Errors raised by the weight trajectory projection
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ProjectionError {
    /// The weekly caloric deficit resolved to zero (or a non-finite value),
    /// so no finite week count exists.
    #[error("Degenerate input: weekly caloric deficit is {weekly_deficit} kcal")]
    DegenerateInput { weekly_deficit: f64 },

    /// The target weight is not strictly below the current weight.
    #[error("Invalid plan: target weight {target_kg} kg must be below current weight {current_kg} kg")]
    InvalidPlan { current_kg: f64, target_kg: f64 },
}

/// Errors raised while parsing adapter input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown activity level: {0}")]
    ActivityLevel(String),

    #[error("Unknown biological sex: {0}")]
    BiologicalSex(String),

    #[error("Unsupported caloric deficit: {0}%")]
    Deficit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_error_messages() {
        let err = ProjectionError::DegenerateInput { weekly_deficit: 0.0 };
        assert_eq!(
            err.to_string(),
            "Degenerate input: weekly caloric deficit is 0 kcal"
        );

        let err = ProjectionError::InvalidPlan {
            current_kg: 70.0,
            target_kg: 75.0,
        };
        assert!(err.to_string().contains("75 kg must be below current weight 70 kg"));
    }
}
