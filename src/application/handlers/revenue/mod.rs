//! Revenue simulation handlers.

mod run_simulation;

pub use run_simulation::{RunSimulationHandler, RunSimulationQuery, RunSimulationResult};
