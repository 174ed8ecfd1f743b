//! Lifecycle query errors.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Conditions raised by lifecycle queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifecycleError {
    /// The filters matched no contracts. Display-only, never fatal.
    #[error("No contracts match the selected filters")]
    EmptyContractSet,

    #[error("Invalid lifecycle query: {0}")]
    InvalidInput(#[from] ValidationError),
}
