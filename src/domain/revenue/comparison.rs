//! Side-by-side comparison of the caller's scenario with fixed presets.

use serde::Serialize;

use super::errors::SimulationError;
use super::projector::{RevenueProjector, MONTHS_PER_YEAR};
use super::scenario::ScenarioInput;

/// Which row of the comparison a figure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    /// The caller's own volume and rate changes.
    Current,
    Optimistic,
    Conservative,
}

impl ScenarioKind {
    /// Returns the display label for this row.
    pub fn label(&self) -> &'static str {
        match self {
            ScenarioKind::Current => "Current",
            ScenarioKind::Optimistic => "Optimistic (+10% vol, +5% rate)",
            ScenarioKind::Conservative => "Conservative (-5% vol, -2% rate)",
        }
    }

    /// Fixed `(volume_change_pct, rate_change_pct)` for preset rows.
    ///
    /// Presets replace the caller's changes; they are not added to them.
    pub fn preset_changes(&self) -> Option<(i32, i32)> {
        match self {
            ScenarioKind::Current => None,
            ScenarioKind::Optimistic => Some((10, 5)),
            ScenarioKind::Conservative => Some((-5, -2)),
        }
    }
}

/// One row of the scenario comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRow {
    pub kind: ScenarioKind,
    pub label: String,
    pub volume_change_pct: i32,
    pub rate_change_pct: i32,
    pub monthly_revenue: f64,
    pub annual_impact: f64,
}

/// Current, optimistic and conservative rows, in that order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    pub rows: Vec<ScenarioRow>,
}

impl ScenarioComparison {
    /// Returns the row for `kind`.
    pub fn row(&self, kind: ScenarioKind) -> Option<&ScenarioRow> {
        self.rows.iter().find(|row| row.kind == kind)
    }
}

impl RevenueProjector {
    /// Builds the comparison table for `scenario`.
    ///
    /// Every row goes through [`RevenueProjector::project`], so presets share
    /// the patient volume, base rate and quality bonus of `scenario`.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidInput` if `scenario` is out of range.
    pub fn compare_scenarios(
        scenario: &ScenarioInput,
    ) -> Result<ScenarioComparison, SimulationError> {
        let rows = [
            ScenarioKind::Current,
            ScenarioKind::Optimistic,
            ScenarioKind::Conservative,
        ]
        .into_iter()
        .map(|kind| {
            let variant = match kind.preset_changes() {
                Some((volume, rate)) => scenario.with_changes(volume, rate),
                None => scenario.clone(),
            };
            let projection = RevenueProjector::project(&variant)?;
            Ok(ScenarioRow {
                kind,
                label: kind.label().to_string(),
                volume_change_pct: variant.volume_change_pct,
                rate_change_pct: variant.rate_change_pct,
                monthly_revenue: projection.monthly_total,
                annual_impact: projection.monthly_total * MONTHS_PER_YEAR,
            })
        })
        .collect::<Result<Vec<_>, SimulationError>>()?;

        Ok(ScenarioComparison { rows })
    }
}
