//! Revenue projection for a single contract scenario.

use serde::Serialize;

use super::errors::SimulationError;
use super::scenario::{ProjectionHorizon, ScenarioInput};

/// Months in a year, used for annualized figures.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Revenue for one month of the projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenue {
    /// Month number, starting at 1.
    pub month: u32,
    pub base: f64,
    pub bonus: f64,
    pub total: f64,
    /// Running total through this month.
    pub cumulative: f64,
}

/// Result of projecting a scenario over its horizon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub adjusted_volume: f64,
    pub adjusted_rate: f64,
    pub monthly_base: f64,
    pub monthly_bonus: f64,
    pub monthly_total: f64,
    pub horizon: ProjectionHorizon,
    /// One row per month; base, bonus and total are the same every month.
    pub months: Vec<MonthlyRevenue>,
}

impl ProjectionResult {
    /// Total revenue for each month of the horizon.
    pub fn monthly_series(&self) -> Vec<f64> {
        self.months.iter().map(|m| m.total).collect()
    }

    /// Running total of revenue for each month of the horizon.
    pub fn cumulative_series(&self) -> Vec<f64> {
        self.months.iter().map(|m| m.cumulative).collect()
    }

    /// Revenue accumulated over the whole horizon.
    pub fn horizon_total(&self) -> f64 {
        self.months.last().map(|m| m.cumulative).unwrap_or(0.0)
    }
}

/// Headline figures shown next to a projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationMetrics {
    pub monthly_revenue: f64,
    /// Percent change versus the unadjusted volume × base rate, without bonus.
    pub change_vs_baseline_pct: f64,
    pub annual_projection: f64,
    pub revenue_per_patient: f64,
}

/// Computes revenue projections from scenario parameters.
///
/// Revenue is modelled as constant per month; there is no month-over-month
/// growth.
pub struct RevenueProjector;

impl RevenueProjector {
    /// Projects a scenario over its horizon.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidInput` if any field is out of range.
    pub fn project(scenario: &ScenarioInput) -> Result<ProjectionResult, SimulationError> {
        scenario.validate()?;

        let adjusted_volume =
            f64::from(scenario.monthly_patients) * (1.0 + f64::from(scenario.volume_change_pct) / 100.0);
        let adjusted_rate = scenario.base_rate * (1.0 + f64::from(scenario.rate_change_pct) / 100.0);
        let monthly_base = adjusted_volume * adjusted_rate;
        let monthly_bonus = monthly_base * (f64::from(scenario.quality_bonus_pct) / 100.0);
        let monthly_total = monthly_base + monthly_bonus;

        // Last entry is exactly horizon x monthly_total.
        let months = (1..=scenario.horizon.months())
            .map(|month| MonthlyRevenue {
                month,
                base: monthly_base,
                bonus: monthly_bonus,
                total: monthly_total,
                cumulative: monthly_total * f64::from(month),
            })
            .collect();

        Ok(ProjectionResult {
            adjusted_volume,
            adjusted_rate,
            monthly_base,
            monthly_bonus,
            monthly_total,
            horizon: scenario.horizon,
            months,
        })
    }

    /// Derives the headline metrics for a projection of `scenario`.
    pub fn metrics(scenario: &ScenarioInput, projection: &ProjectionResult) -> SimulationMetrics {
        let baseline = f64::from(scenario.monthly_patients) * scenario.base_rate;
        let change_vs_baseline_pct = if baseline > 0.0 {
            (projection.monthly_total / baseline - 1.0) * 100.0
        } else {
            0.0
        };
        let revenue_per_patient = if projection.adjusted_volume > 0.0 {
            projection.monthly_total / projection.adjusted_volume
        } else {
            0.0
        };

        SimulationMetrics {
            monthly_revenue: projection.monthly_total,
            change_vs_baseline_pct,
            annual_projection: projection.monthly_total * MONTHS_PER_YEAR,
            revenue_per_patient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn project_reference_scenario() {
        let scenario = ScenarioInput {
            monthly_patients: 800,
            base_rate: 125.0,
            quality_bonus_pct: 5,
            volume_change_pct: 0,
            rate_change_pct: 0,
            ..Default::default()
        };

        let result = RevenueProjector::project(&scenario).unwrap();
        assert_eq!(result.monthly_base, 100_000.0);
        assert_eq!(result.monthly_bonus, 5_000.0);
        assert_eq!(result.monthly_total, 105_000.0);
    }

    #[test]
    fn project_applies_volume_and_rate_changes() {
        let scenario = ScenarioInput {
            monthly_patients: 1000,
            base_rate: 100.0,
            quality_bonus_pct: 0,
            volume_change_pct: 50,
            rate_change_pct: -10,
            ..Default::default()
        };

        let result = RevenueProjector::project(&scenario).unwrap();
        assert!(approx_eq(result.adjusted_volume, 1500.0));
        assert!(approx_eq(result.adjusted_rate, 90.0));
        assert!(approx_eq(result.monthly_total, 135_000.0));
        assert_eq!(result.monthly_bonus, 0.0);
    }

    #[test]
    fn series_has_one_row_per_month() {
        for horizon in ProjectionHorizon::ALL {
            let scenario = ScenarioInput {
                horizon,
                ..Default::default()
            };
            let result = RevenueProjector::project(&scenario).unwrap();
            assert_eq!(result.months.len() as u32, horizon.months());
            assert_eq!(result.months.first().unwrap().month, 1);
            assert_eq!(result.months.last().unwrap().month, horizon.months());
        }
    }

    #[test]
    fn monthly_series_is_constant() {
        let result = RevenueProjector::project(&ScenarioInput::default()).unwrap();
        assert!(result
            .monthly_series()
            .iter()
            .all(|total| *total == result.monthly_total));
    }

    #[test]
    fn cumulative_series_is_running_sum() {
        let result = RevenueProjector::project(&ScenarioInput::default()).unwrap();
        let cumulative = result.cumulative_series();
        assert_eq!(cumulative[0], 105_000.0);
        assert_eq!(cumulative[1], 210_000.0);
        assert_eq!(result.horizon_total(), 1_260_000.0);
    }

    #[test]
    fn project_rejects_invalid_input() {
        let scenario = ScenarioInput {
            rate_change_pct: 30,
            ..Default::default()
        };
        let err = RevenueProjector::project(&scenario).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InvalidInput(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn metrics_for_reference_scenario() {
        let scenario = ScenarioInput::default();
        let result = RevenueProjector::project(&scenario).unwrap();
        let metrics = RevenueProjector::metrics(&scenario, &result);

        assert_eq!(metrics.monthly_revenue, 105_000.0);
        assert!(approx_eq(metrics.change_vs_baseline_pct, 5.0));
        assert_eq!(metrics.annual_projection, 1_260_000.0);
        assert!(approx_eq(metrics.revenue_per_patient, 131.25));
    }

    #[test]
    fn metrics_change_reflects_adjustments() {
        let scenario = ScenarioInput {
            quality_bonus_pct: 0,
            volume_change_pct: -50,
            ..Default::default()
        };
        let result = RevenueProjector::project(&scenario).unwrap();
        let metrics = RevenueProjector::metrics(&scenario, &result);
        assert!(approx_eq(metrics.change_vs_baseline_pct, -50.0));
        assert!(approx_eq(metrics.revenue_per_patient, 125.0));
    }

    #[test]
    fn projection_serializes_camel_case() {
        let result = RevenueProjector::project(&ScenarioInput::default()).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["monthlyTotal"], 105_000.0);
        assert_eq!(json["horizon"], 12);
        assert_eq!(json["months"][0]["cumulative"], 105_000.0);
    }

    fn valid_scenario() -> impl Strategy<Value = ScenarioInput> {
        (
            100u32..=5000,
            50.0f64..=500.0,
            0i32..=20,
            -50i32..=100,
            -25i32..=25,
            prop::sample::select(ProjectionHorizon::ALL.to_vec()),
        )
            .prop_map(
                |(monthly_patients, base_rate, quality_bonus_pct, volume_change_pct, rate_change_pct, horizon)| {
                    ScenarioInput {
                        monthly_patients,
                        base_rate,
                        quality_bonus_pct,
                        volume_change_pct,
                        rate_change_pct,
                        horizon,
                        ..Default::default()
                    }
                },
            )
    }

    #[test]
    fn cumulative_ends_exactly_at_horizon_total() {
        let scenario = ScenarioInput {
            monthly_patients: 100,
            base_rate: 50.0,
            quality_bonus_pct: 3,
            volume_change_pct: -7,
            horizon: ProjectionHorizon::ThirtySix,
            ..Default::default()
        };
        let result = RevenueProjector::project(&scenario).unwrap();

        assert_eq!(result.horizon_total(), 36.0 * result.monthly_total);
        assert_eq!(result.months[11].cumulative, 12.0 * result.monthly_total);
    }

    proptest! {
        #[test]
        fn monthly_total_is_never_negative(scenario in valid_scenario()) {
            let result = RevenueProjector::project(&scenario).unwrap();
            prop_assert!(result.adjusted_volume >= 0.0);
            prop_assert!(result.adjusted_rate >= 0.0);
            prop_assert!(result.monthly_total >= 0.0);
        }

        #[test]
        fn cumulative_is_monotone_and_ends_at_horizon_total(scenario in valid_scenario()) {
            let result = RevenueProjector::project(&scenario).unwrap();
            let cumulative = result.cumulative_series();

            prop_assert!(cumulative.windows(2).all(|pair| pair[0] <= pair[1]));

            let expected = f64::from(scenario.horizon.months()) * result.monthly_total;
            let last = *cumulative.last().unwrap();
            prop_assert_eq!(last, expected);
            prop_assert_eq!(result.horizon_total(), expected);
        }

        #[test]
        fn projection_is_deterministic(scenario in valid_scenario()) {
            let first = RevenueProjector::project(&scenario).unwrap();
            let second = RevenueProjector::project(&scenario).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
