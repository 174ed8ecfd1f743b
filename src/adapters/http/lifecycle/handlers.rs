//! HTTP handlers for contract lifecycle endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    GetActionItemsHandler, GetActionItemsQuery, GetLifecycleSummaryHandler,
    GetLifecycleSummaryQuery, GetPortfolioHandler, GetRenewalCalendarHandler,
    GetRenewalCalendarQuery, ListContractsHandler, ListContractsQuery,
};
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::lifecycle::LifecycleError;
use crate::ports::{ContractReadError, ContractReader};

use super::super::error::ErrorResponse;
use super::dto::{AsOfParams, ContractListParams};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Lifecycle API error that implements IntoResponse.
#[derive(Debug)]
pub enum LifecycleApiError {
    MalformedQuery(String),
    InvalidInput(ValidationError),
    Unavailable(String),
}

impl IntoResponse for LifecycleApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            LifecycleApiError::MalformedQuery(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::malformed(msg))
            }
            LifecycleApiError::InvalidInput(err) => {
                tracing::warn!(field = err.field(), error = %err, "Lifecycle query rejected");
                (StatusCode::BAD_REQUEST, ErrorResponse::validation(&err))
            }
            LifecycleApiError::Unavailable(msg) => {
                tracing::error!(error = %msg, "Contract table unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(ErrorCode::ContractsUnavailable, "Contracts are unavailable"),
                )
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<LifecycleError> for LifecycleApiError {
    fn from(err: LifecycleError) -> Self {
        match err {
            LifecycleError::InvalidInput(inner) => LifecycleApiError::InvalidInput(inner),
            // The list handler turns an empty selection into a notice.
            LifecycleError::EmptyContractSet => {
                LifecycleApiError::MalformedQuery(LifecycleError::EmptyContractSet.to_string())
            }
        }
    }
}

impl From<ContractReadError> for LifecycleApiError {
    fn from(err: ContractReadError) -> Self {
        match err {
            ContractReadError::Unavailable(msg) => LifecycleApiError::Unavailable(msg),
        }
    }
}

impl From<QueryRejection> for LifecycleApiError {
    fn from(rejection: QueryRejection) -> Self {
        LifecycleApiError::MalformedQuery(rejection.body_text())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing lifecycle dependencies.
#[derive(Clone)]
pub struct LifecycleAppState {
    pub contract_reader: Arc<dyn ContractReader>,
}

impl LifecycleAppState {
    pub fn new(contract_reader: Arc<dyn ContractReader>) -> Self {
        Self { contract_reader }
    }

    pub fn summary_handler(&self) -> GetLifecycleSummaryHandler {
        GetLifecycleSummaryHandler::new(self.contract_reader.clone())
    }

    pub fn list_contracts_handler(&self) -> ListContractsHandler {
        ListContractsHandler::new(self.contract_reader.clone())
    }

    pub fn renewal_calendar_handler(&self) -> GetRenewalCalendarHandler {
        GetRenewalCalendarHandler::new(self.contract_reader.clone())
    }

    pub fn action_items_handler(&self) -> GetActionItemsHandler {
        GetActionItemsHandler::new(self.contract_reader.clone())
    }

    pub fn portfolio_handler(&self) -> GetPortfolioHandler {
        GetPortfolioHandler::new(self.contract_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/contracts
pub async fn list_contracts(
    State(state): State<LifecycleAppState>,
    params: Result<Query<ContractListParams>, QueryRejection>,
) -> Result<impl IntoResponse, LifecycleApiError> {
    let Query(params) = params?;
    let query = ListContractsQuery {
        filter: params.filter()?,
        as_of: params.as_of()?,
    };

    let result = state.list_contracts_handler().handle(query).await?;
    Ok((StatusCode::OK, Json(result)))
}

/// GET /api/contracts/summary
pub async fn get_summary(
    State(state): State<LifecycleAppState>,
    params: Result<Query<AsOfParams>, QueryRejection>,
) -> Result<impl IntoResponse, LifecycleApiError> {
    let Query(params) = params?;
    let query = GetLifecycleSummaryQuery {
        as_of: params.as_of()?,
    };

    let result = state.summary_handler().handle(query).await?;
    Ok((StatusCode::OK, Json(result)))
}

/// GET /api/contracts/renewals
pub async fn get_renewal_calendar(
    State(state): State<LifecycleAppState>,
    params: Result<Query<AsOfParams>, QueryRejection>,
) -> Result<impl IntoResponse, LifecycleApiError> {
    let Query(params) = params?;
    let query = GetRenewalCalendarQuery {
        as_of: params.as_of()?,
    };

    let result = state.renewal_calendar_handler().handle(query).await?;
    Ok((StatusCode::OK, Json(result)))
}

/// GET /api/contracts/action-items
pub async fn get_action_items(
    State(state): State<LifecycleAppState>,
    params: Result<Query<AsOfParams>, QueryRejection>,
) -> Result<impl IntoResponse, LifecycleApiError> {
    let Query(params) = params?;
    let query = GetActionItemsQuery {
        as_of: params.as_of()?,
    };

    let result = state.action_items_handler().handle(query).await?;
    Ok((StatusCode::OK, Json(result)))
}

/// GET /api/contracts/portfolio
pub async fn get_portfolio(
    State(state): State<LifecycleAppState>,
) -> Result<impl IntoResponse, LifecycleApiError> {
    let result = state.portfolio_handler().handle().await?;
    Ok((StatusCode::OK, Json(result)))
}
