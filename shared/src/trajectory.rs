//! Weight-loss trajectory projection
//!
//! Converts a caloric deficit into the number of weeks needed to reach a
//! target weight, and builds a week-indexed series of projected weights.
//!
//! The series is a straight line from the current weight to the target
//! weight. It does not model metabolic adaptation or the deceleration of
//! real weight loss.

use crate::errors::{ParseError, ProjectionError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Approximate energy content of one kilogram of body fat (kcal)
pub const KCAL_PER_KG_BODY_FAT: f64 = 7700.0;

pub const DAYS_PER_WEEK: f64 = 7.0;

/// Upper bound on the projected horizon. A week count beyond this means the
/// deficit is too small to be meaningful and would allocate an unbounded series.
pub const MAX_PROJECTION_WEEKS: f64 = 100_000.0;

// ============================================================================
// Plan Types
// ============================================================================

/// Caloric deficit options offered to users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum DeficitLevel {
    #[default]
    Ten,
    Fifteen,
    Twenty,
}

impl DeficitLevel {
    pub const ALL: [DeficitLevel; 3] = [DeficitLevel::Ten, DeficitLevel::Fifteen, DeficitLevel::Twenty];

    /// Deficit as a whole percentage of TDEE
    pub fn percent(&self) -> u32 {
        match self {
            DeficitLevel::Ten => 10,
            DeficitLevel::Fifteen => 15,
            DeficitLevel::Twenty => 20,
        }
    }
}

impl From<DeficitLevel> for u32 {
    fn from(level: DeficitLevel) -> Self {
        level.percent()
    }
}

impl TryFrom<u32> for DeficitLevel {
    type Error = ParseError;

    fn try_from(percent: u32) -> Result<Self, Self::Error> {
        DeficitLevel::ALL
            .into_iter()
            .find(|level| level.percent() == percent)
            .ok_or_else(|| ParseError::Deficit(percent.to_string()))
    }
}

impl FromStr for DeficitLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('%');
        trimmed
            .parse::<u32>()
            .map_err(|_| ParseError::Deficit(s.to_string()))
            .and_then(DeficitLevel::try_from)
    }
}

impl fmt::Display for DeficitLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// Inputs of a weight-loss projection
///
/// `deficit_percent` is kept as a raw number so that degenerate values reach
/// [`project`] and surface as errors instead of being unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightLossPlan {
    pub current_weight_kg: f64,
    pub target_weight_kg: f64,
    pub deficit_percent: f64,
}

impl WeightLossPlan {
    /// Build a plan from one of the offered deficit levels
    pub fn new(current_weight_kg: f64, target_weight_kg: f64, deficit: DeficitLevel) -> Self {
        Self {
            current_weight_kg,
            target_weight_kg,
            deficit_percent: f64::from(deficit.percent()),
        }
    }

    /// Weight to lose in kg (negative when the target is above the current weight)
    pub fn weight_to_lose_kg(&self) -> f64 {
        self.current_weight_kg - self.target_weight_kg
    }
}

// ============================================================================
// Series Types
// ============================================================================

/// A single projected weight at a given week
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekPoint {
    pub week: u32,
    pub weight_kg: f64,
}

/// Week-indexed projected weights, starting at week 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightSeries {
    points: Vec<WeekPoint>,
}

impl WeightSeries {
    pub fn points(&self) -> &[WeekPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&WeekPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&WeekPoint> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeekPoint> {
        self.points.iter()
    }

    /// Projected weights in week order
    pub fn weights(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.weight_kg).collect()
    }
}

impl<'a> IntoIterator for &'a WeightSeries {
    type Item = &'a WeekPoint;
    type IntoIter = std::slice::Iter<'a, WeekPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Result of a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub series: WeightSeries,
    /// Fractional number of weeks needed to reach the target
    pub weeks_needed: f64,
    /// Caloric deficit per day (kcal)
    pub daily_deficit_kcal: f64,
    /// Caloric deficit per week (kcal)
    pub weekly_deficit_kcal: f64,
    /// Total calories to lose (kcal)
    pub total_kcal_to_lose: f64,
}

// ============================================================================
// Projection
// ============================================================================

/// Daily caloric deficit for a percentage of TDEE
pub fn daily_deficit_kcal(deficit_percent: f64, tdee: f64) -> f64 {
    (deficit_percent / 100.0) * tdee
}

/// Project the weekly weight trajectory for a plan
///
/// weeks_needed = (current - target) × 7700 / (deficit% × TDEE × 7)
///
/// The series holds `floor(weeks_needed) + 1` points for weeks
/// `0..=floor(weeks_needed)`, linearly spaced from the current weight to
/// exactly the target weight.
pub fn project(plan: &WeightLossPlan, tdee: f64) -> Result<Projection, ProjectionError> {
    let daily_deficit = daily_deficit_kcal(plan.deficit_percent, tdee);
    let weekly_deficit = daily_deficit * DAYS_PER_WEEK;

    if !weekly_deficit.is_finite() || weekly_deficit <= 0.0 {
        return Err(ProjectionError::DegenerateInput { weekly_deficit });
    }

    // Negated comparison so NaN weights are rejected too
    if !(plan.current_weight_kg > plan.target_weight_kg) {
        return Err(ProjectionError::InvalidPlan {
            current_kg: plan.current_weight_kg,
            target_kg: plan.target_weight_kg,
        });
    }

    let total_kcal = plan.weight_to_lose_kg() * KCAL_PER_KG_BODY_FAT;
    let weeks_needed = total_kcal / weekly_deficit;

    if !weeks_needed.is_finite() || weeks_needed > MAX_PROJECTION_WEEKS {
        return Err(ProjectionError::DegenerateInput { weekly_deficit });
    }

    let point_count = weeks_needed.floor() as usize + 1;
    let points = linspace(plan.current_weight_kg, plan.target_weight_kg, point_count)
        .into_iter()
        .zip(0u32..)
        .map(|(weight_kg, week)| WeekPoint { week, weight_kg })
        .collect();

    Ok(Projection {
        series: WeightSeries { points },
        weeks_needed,
        daily_deficit_kcal: daily_deficit,
        weekly_deficit_kcal: weekly_deficit,
        total_kcal_to_lose: total_kcal,
    })
}

/// `count` evenly spaced values from `start` to `stop` inclusive.
/// A single value is `start`; the last of several is exactly `stop`.
fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            values[count - 1] = stop;
            values
        }
    }
}
