//! Revenue simulation errors.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors raised while projecting a revenue scenario.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("Invalid scenario input: {0}")]
    InvalidInput(#[from] ValidationError),
}
