//! Revenue Module - Revenue impact simulation.
//!
//! Pure, stateless computation of monthly and cumulative revenue for a
//! contract scenario, plus the current/optimistic/conservative comparison.
//!
//! # Components
//!
//! - `ScenarioInput` - validated simulator parameters
//! - `RevenueProjector` - projection, headline metrics and scenario comparison

mod comparison;
mod errors;
mod projector;
mod scenario;

pub use comparison::{ScenarioComparison, ScenarioKind, ScenarioRow};
pub use errors::SimulationError;
pub use projector::{
    MonthlyRevenue, ProjectionResult, RevenueProjector, SimulationMetrics, MONTHS_PER_YEAR,
};
pub use scenario::{
    ContractType, ProjectionHorizon, ScenarioInput, BASE_RATE_RANGE, MONTHLY_PATIENTS_RANGE,
    QUALITY_BONUS_RANGE, RATE_CHANGE_RANGE, VOLUME_CHANGE_RANGE,
};
