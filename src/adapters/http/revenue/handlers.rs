//! HTTP handlers for the revenue simulator.

use axum::extract::rejection::JsonRejection;
use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{RunSimulationHandler, RunSimulationQuery};
use crate::domain::foundation::ValidationError;
use crate::domain::revenue::{ScenarioInput, SimulationError};

use super::super::error::ErrorResponse;
use super::dto::SimulationRequest;

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Revenue API error that implements IntoResponse.
#[derive(Debug)]
pub enum RevenueApiError {
    MalformedBody(String),
    InvalidInput(ValidationError),
}

impl IntoResponse for RevenueApiError {
    fn into_response(self) -> axum::response::Response {
        let error = match self {
            RevenueApiError::MalformedBody(msg) => ErrorResponse::malformed(msg),
            RevenueApiError::InvalidInput(err) => {
                tracing::warn!(field = err.field(), error = %err, "Simulation input rejected");
                ErrorResponse::validation(&err)
            }
        };
        (StatusCode::BAD_REQUEST, Json(error)).into_response()
    }
}

impl From<ValidationError> for RevenueApiError {
    fn from(err: ValidationError) -> Self {
        RevenueApiError::InvalidInput(err)
    }
}

impl From<SimulationError> for RevenueApiError {
    fn from(err: SimulationError) -> Self {
        match err {
            SimulationError::InvalidInput(inner) => RevenueApiError::InvalidInput(inner),
        }
    }
}

impl From<JsonRejection> for RevenueApiError {
    fn from(rejection: JsonRejection) -> Self {
        RevenueApiError::MalformedBody(rejection.body_text())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/revenue/simulations
pub async fn run_simulation(
    body: Result<Json<SimulationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, RevenueApiError> {
    let Json(request) = body?;
    let scenario = ScenarioInput::try_from(request)?;

    let result = RunSimulationHandler::new().handle(RunSimulationQuery { scenario })?;
    Ok((StatusCode::OK, Json(result)))
}
