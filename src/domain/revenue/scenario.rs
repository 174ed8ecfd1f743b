//! Scenario inputs for the revenue impact simulator.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Accepted monthly patient volume.
pub const MONTHLY_PATIENTS_RANGE: (u32, u32) = (100, 5000);

/// Accepted base payment rate in dollars.
pub const BASE_RATE_RANGE: (f64, f64) = (50.0, 500.0);

/// Accepted quality bonus percentage.
pub const QUALITY_BONUS_RANGE: (i32, i32) = (0, 20);

/// Accepted volume change percentage.
pub const VOLUME_CHANGE_RANGE: (i32, i32) = (-50, 100);

/// Accepted rate change percentage.
pub const RATE_CHANGE_RANGE: (i32, i32) = (-25, 25);

/// Payment model of the contract being modelled.
///
/// Informational only: the projection arithmetic is the same for every type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    #[default]
    FeeForService,
    Capitation,
    SharedRisk,
    BundledPayment,
}

impl ContractType {
    /// Returns the display label for this contract type.
    pub fn label(&self) -> &'static str {
        match self {
            ContractType::FeeForService => "Fee-for-Service",
            ContractType::Capitation => "Capitation",
            ContractType::SharedRisk => "Shared Risk",
            ContractType::BundledPayment => "Bundled Payment",
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Number of months a projection covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum ProjectionHorizon {
    Six,
    #[default]
    Twelve,
    TwentyFour,
    ThirtySix,
}

impl ProjectionHorizon {
    /// All selectable horizons, shortest first.
    pub const ALL: [ProjectionHorizon; 4] = [
        ProjectionHorizon::Six,
        ProjectionHorizon::Twelve,
        ProjectionHorizon::TwentyFour,
        ProjectionHorizon::ThirtySix,
    ];

    /// Returns the horizon length in months.
    pub fn months(&self) -> u32 {
        match self {
            ProjectionHorizon::Six => 6,
            ProjectionHorizon::Twelve => 12,
            ProjectionHorizon::TwentyFour => 24,
            ProjectionHorizon::ThirtySix => 36,
        }
    }
}

impl TryFrom<u32> for ProjectionHorizon {
    type Error = ValidationError;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|horizon| horizon.months() == months)
            .ok_or_else(|| {
                let allowed: Vec<u32> = Self::ALL.iter().map(|h| h.months()).collect();
                ValidationError::not_allowed("horizonMonths", &allowed, months)
            })
    }
}

impl From<ProjectionHorizon> for u32 {
    fn from(horizon: ProjectionHorizon) -> Self {
        horizon.months()
    }
}

/// Parameters of one revenue scenario.
///
/// Percentages are whole numbers (`5` means 5%). Use [`ScenarioInput::validate`]
/// before computing with a value built from untrusted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInput {
    pub contract_type: ContractType,
    pub monthly_patients: u32,
    pub base_rate: f64,
    pub quality_bonus_pct: i32,
    pub volume_change_pct: i32,
    pub rate_change_pct: i32,
    pub horizon: ProjectionHorizon,
}

impl Default for ScenarioInput {
    fn default() -> Self {
        Self {
            contract_type: ContractType::default(),
            monthly_patients: 800,
            base_rate: 125.0,
            quality_bonus_pct: 5,
            volume_change_pct: 0,
            rate_change_pct: 0,
            horizon: ProjectionHorizon::default(),
        }
    }
}

impl ScenarioInput {
    /// Returns a copy with the volume and rate changes replaced.
    pub fn with_changes(&self, volume_change_pct: i32, rate_change_pct: i32) -> Self {
        Self {
            volume_change_pct,
            rate_change_pct,
            ..self.clone()
        }
    }

    /// Checks every field against its accepted range.
    ///
    /// Out-of-range values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let (min, max) = MONTHLY_PATIENTS_RANGE;
        if !(min..=max).contains(&self.monthly_patients) {
            return Err(ValidationError::out_of_range(
                "monthlyPatients",
                min,
                max,
                self.monthly_patients,
            ));
        }

        let (min, max) = BASE_RATE_RANGE;
        if !self.base_rate.is_finite() {
            return Err(ValidationError::invalid_format(
                "baseRate",
                "must be a finite number",
            ));
        }
        if !(min..=max).contains(&self.base_rate) {
            return Err(ValidationError::out_of_range("baseRate", min, max, self.base_rate));
        }

        check_pct("qualityBonusPct", self.quality_bonus_pct, QUALITY_BONUS_RANGE)?;
        check_pct("volumeChangePct", self.volume_change_pct, VOLUME_CHANGE_RANGE)?;
        check_pct("rateChangePct", self.rate_change_pct, RATE_CHANGE_RANGE)?;
        Ok(())
    }
}

fn check_pct(field: &str, value: i32, (min, max): (i32, i32)) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(field, min, max, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_is_valid() {
        assert!(ScenarioInput::default().validate().is_ok());
    }

    #[test]
    fn default_matches_simulator_starting_values() {
        let scenario = ScenarioInput::default();
        assert_eq!(scenario.monthly_patients, 800);
        assert_eq!(scenario.base_rate, 125.0);
        assert_eq!(scenario.quality_bonus_pct, 5);
        assert_eq!(scenario.horizon, ProjectionHorizon::Twelve);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let scenario = ScenarioInput {
            monthly_patients: 5000,
            base_rate: 50.0,
            quality_bonus_pct: 20,
            volume_change_pct: -50,
            rate_change_pct: 25,
            ..Default::default()
        };
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn rejects_low_patient_volume() {
        let scenario = ScenarioInput {
            monthly_patients: 99,
            ..Default::default()
        };
        let err = scenario.validate().unwrap_err();
        assert_eq!(err.field(), "monthlyPatients");
    }

    #[test]
    fn rejects_base_rate_above_range() {
        let scenario = ScenarioInput {
            base_rate: 500.01,
            ..Default::default()
        };
        assert_eq!(scenario.validate().unwrap_err().field(), "baseRate");
    }

    #[test]
    fn rejects_non_finite_base_rate() {
        let scenario = ScenarioInput {
            base_rate: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            scenario.validate(),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn rejects_each_percentage_out_of_range() {
        let cases = [
            (
                ScenarioInput { quality_bonus_pct: 21, ..Default::default() },
                "qualityBonusPct",
            ),
            (
                ScenarioInput { quality_bonus_pct: -1, ..Default::default() },
                "qualityBonusPct",
            ),
            (
                ScenarioInput { volume_change_pct: -51, ..Default::default() },
                "volumeChangePct",
            ),
            (
                ScenarioInput { volume_change_pct: 101, ..Default::default() },
                "volumeChangePct",
            ),
            (
                ScenarioInput { rate_change_pct: 26, ..Default::default() },
                "rateChangePct",
            ),
        ];

        for (scenario, field) in cases {
            assert_eq!(scenario.validate().unwrap_err().field(), field);
        }
    }

    #[test]
    fn horizon_accepts_only_fixed_lengths() {
        assert_eq!(ProjectionHorizon::try_from(6).unwrap(), ProjectionHorizon::Six);
        assert_eq!(ProjectionHorizon::try_from(36).unwrap(), ProjectionHorizon::ThirtySix);
        assert!(ProjectionHorizon::try_from(7).is_err());
        assert!(ProjectionHorizon::try_from(0).is_err());
    }

    #[test]
    fn horizon_serializes_as_months() {
        let json = serde_json::to_string(&ProjectionHorizon::TwentyFour).unwrap();
        assert_eq!(json, "24");

        let parsed: ProjectionHorizon = serde_json::from_str("12").unwrap();
        assert_eq!(parsed, ProjectionHorizon::Twelve);
        assert!(serde_json::from_str::<ProjectionHorizon>("18").is_err());
    }

    #[test]
    fn with_changes_keeps_other_fields() {
        let scenario = ScenarioInput {
            monthly_patients: 1200,
            volume_change_pct: 30,
            ..Default::default()
        };
        let preset = scenario.with_changes(10, 5);
        assert_eq!(preset.monthly_patients, 1200);
        assert_eq!(preset.volume_change_pct, 10);
        assert_eq!(preset.rate_change_pct, 5);
        assert_eq!(preset.quality_bonus_pct, scenario.quality_bonus_pct);
    }

    #[test]
    fn contract_type_labels() {
        assert_eq!(ContractType::FeeForService.label(), "Fee-for-Service");
        assert_eq!(ContractType::BundledPayment.to_string(), "Bundled Payment");
    }
}
