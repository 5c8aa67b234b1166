//! Plan export service
//!
//! Writes the projected weight series as CSV for spreadsheets.

use crate::error::ApiError;
use serde::Serialize;
use weight_forecast_shared::PlanReport;

/// One CSV row of the projected series
#[derive(Debug, Clone, Serialize)]
struct SeriesRow {
    week: u32,
    weight_kg: f64,
}

/// Export service for plan data
pub struct ExportService;

impl ExportService {
    /// Export the weekly series as `week,weight_kg` CSV
    pub fn plan_series_csv(report: &PlanReport) -> Result<String, ApiError> {
        let rows: Vec<SeriesRow> = report
            .series
            .iter()
            .map(|p| SeriesRow {
                week: p.week,
                weight_kg: (p.weight_kg * 100.0).round() / 100.0,
            })
            .collect();

        Self::to_csv(&rows)
    }

    /// Convert data to CSV string
    fn to_csv<T: Serialize>(data: &[T]) -> Result<String, ApiError> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in data {
            wtr.serialize(record)
                .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV serialization error: {}", e)))?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV flush error: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV encoding error: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use weight_forecast_shared::{build_plan_report, ActivityLevel, BiologicalSex, BiometricProfile, DeficitLevel};

    #[test]
    fn test_plan_series_csv() {
        let profile = BiometricProfile {
            weight_kg: 70.0,
            height_cm: 170.0,
            age_years: 30,
            sex: BiologicalSex::Male,
        };
        let report = build_plan_report(
            &profile,
            ActivityLevel::Sedentary,
            65.0,
            DeficitLevel::Fifteen,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        )
        .unwrap();

        let csv = ExportService::plan_series_csv(&report).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "week,weight_kg");
        assert_eq!(lines.len(), report.series.len() + 1);
        assert!(lines[1].starts_with("0,70"));
        assert!(lines[lines.len() - 1].starts_with("18,65"));
    }
}
