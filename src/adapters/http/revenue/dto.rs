//! HTTP DTOs for the revenue simulator.

use serde::Deserialize;

use crate::domain::foundation::ValidationError;
use crate::domain::revenue::{ContractType, ProjectionHorizon, ScenarioInput};

/// Simulation request body. Omitted fields take the simulator defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    pub contract_type: Option<ContractType>,
    pub monthly_patients: Option<u32>,
    pub base_rate: Option<f64>,
    pub quality_bonus_pct: Option<i32>,
    pub volume_change_pct: Option<i32>,
    pub rate_change_pct: Option<i32>,
    pub horizon_months: Option<u32>,
}

impl TryFrom<SimulationRequest> for ScenarioInput {
    type Error = ValidationError;

    fn try_from(req: SimulationRequest) -> Result<Self, Self::Error> {
        let defaults = ScenarioInput::default();
        let horizon = match req.horizon_months {
            Some(months) => ProjectionHorizon::try_from(months)?,
            None => defaults.horizon,
        };

        Ok(ScenarioInput {
            contract_type: req.contract_type.unwrap_or(defaults.contract_type),
            monthly_patients: req.monthly_patients.unwrap_or(defaults.monthly_patients),
            base_rate: req.base_rate.unwrap_or(defaults.base_rate),
            quality_bonus_pct: req.quality_bonus_pct.unwrap_or(defaults.quality_bonus_pct),
            volume_change_pct: req.volume_change_pct.unwrap_or(defaults.volume_change_pct),
            rate_change_pct: req.rate_change_pct.unwrap_or(defaults.rate_change_pct),
            horizon,
        })
    }
}
