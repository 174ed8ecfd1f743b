//! RunSimulationHandler - Query handler for the revenue impact simulator.
//!
//! Projects the scenario, derives its headline metrics and builds the
//! current/optimistic/conservative comparison in one pass.

use serde::Serialize;

use crate::domain::revenue::{
    ProjectionResult, RevenueProjector, ScenarioComparison, ScenarioInput, SimulationError,
    SimulationMetrics,
};

/// Query to run one revenue simulation.
#[derive(Debug, Clone)]
pub struct RunSimulationQuery {
    pub scenario: ScenarioInput,
}

/// Result of a successful simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSimulationResult {
    pub scenario: ScenarioInput,
    pub projection: ProjectionResult,
    pub metrics: SimulationMetrics,
    pub comparison: ScenarioComparison,
}

/// Handler for revenue simulations.
///
/// Stateless: every call is a pure function of the query.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSimulationHandler;

impl RunSimulationHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: RunSimulationQuery) -> Result<RunSimulationResult, SimulationError> {
        let scenario = query.scenario;
        let projection = RevenueProjector::project(&scenario)?;
        let metrics = RevenueProjector::metrics(&scenario, &projection);
        let comparison = RevenueProjector::compare_scenarios(&scenario)?;

        tracing::debug!(
            contract_type = %scenario.contract_type,
            horizon_months = scenario.horizon.months(),
            monthly_total = projection.monthly_total,
            "Revenue simulation complete"
        );

        Ok(RunSimulationResult {
            scenario,
            projection,
            metrics,
            comparison,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::revenue::{ProjectionHorizon, ScenarioKind};

    #[test]
    fn test_simulation_returns_all_sections() {
        let handler = RunSimulationHandler::new();
        let query = RunSimulationQuery {
            scenario: ScenarioInput {
                horizon: ProjectionHorizon::TwentyFour,
                ..Default::default()
            },
        };

        let result = handler.handle(query).unwrap();
        assert_eq!(result.projection.months.len(), 24);
        assert_eq!(result.metrics.monthly_revenue, 105_000.0);
        assert_eq!(result.comparison.rows.len(), 3);
        assert_eq!(
            result.comparison.row(ScenarioKind::Current).unwrap().monthly_revenue,
            result.projection.monthly_total
        );
    }

    #[test]
    fn test_simulation_rejects_invalid_scenario() {
        let handler = RunSimulationHandler::new();
        let query = RunSimulationQuery {
            scenario: ScenarioInput {
                base_rate: 20.0,
                ..Default::default()
            },
        };

        let result = handler.handle(query);
        assert!(matches!(result, Err(SimulationError::InvalidInput(_))));
    }
}
